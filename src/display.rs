//! Presentation lookups shared by every view that shows a property.

use crate::models::{GAME_ROOM, INDOOR_POOL, OUTDOOR_POOL};

/// Image shown when a property has no dedicated picture
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&q=80";

const PROPERTY_IMAGES: &[(&str, &str)] = &[
    ("Quinta das Regadas", "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&q=80"),
    ("Casa da Abuela", "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&q=80"),
    ("Quinta do Raposinho", "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80"),
    ("Celorico Cottage", "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&q=80"),
    ("Casa do Cão Praia", "https://images.unsplash.com/photo-1499793983690-e29da59ef1c2?auto=format&fit=crop&q=80"),
    ("Cabanas", "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?auto=format&fit=crop&q=80"),
    ("Douro Natura", "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&q=80"),
    ("Casa de Plácios", "https://images.unsplash.com/photo-1500076656116-558758c991c1?auto=format&fit=crop&q=80"),
    ("Quinta da Moagem", "https://images.unsplash.com/photo-1449158743715-0a90ebb6d2d8?auto=format&fit=crop&q=80"),
    ("Uma Aldeia?", "https://images.unsplash.com/photo-1533587851505-d119e13fa0d7?auto=format&fit=crop&q=80"),
    ("Casa Paz", "https://images.unsplash.com/photo-1464288550599-43d5a73451b8?auto=format&fit=crop&q=80"),
    ("Quinta São Roque", "https://images.unsplash.com/photo-1504615755583-2916b52192a3?auto=format&fit=crop&q=80"),
    ("Casa Rectoral", "https://images.unsplash.com/photo-1506126279646-a697353d3166?auto=format&fit=crop&q=80"),
    ("Casa Assade", "https://images.unsplash.com/photo-1523217582562-09d0def993a6?auto=format&fit=crop&q=80"),
    ("Casa da Fonte", "https://images.unsplash.com/photo-1462530260150-162092dbf011?auto=format&fit=crop&q=80"),
    ("Casas da Azenha", "https://images.unsplash.com/photo-1518241353330-0f7941c2d9b5?auto=format&fit=crop&q=80"),
];

/// Picture for a property, looked up by display name
pub fn image_for(name: &str) -> &'static str {
    PROPERTY_IMAGES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGE)
}

/// Human label for an amenity key. Unknown keys are shown as-is.
pub fn feature_label(key: &str) -> &str {
    match key {
        OUTDOOR_POOL => "Outdoor Pool",
        INDOOR_POOL => "Indoor Pool",
        GAME_ROOM => "Game Room",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_lookup_falls_back() {
        assert!(image_for("Casa Paz").contains("photo-1464288550599"));
        assert_eq!(image_for("Somewhere New"), DEFAULT_IMAGE);
        assert_eq!(image_for("casa paz"), DEFAULT_IMAGE);
    }

    #[test]
    fn test_feature_labels() {
        assert_eq!(feature_label(OUTDOOR_POOL), "Outdoor Pool");
        assert_eq!(feature_label(GAME_ROOM), "Game Room");
        assert_eq!(feature_label("sauna"), "sauna");
    }
}
