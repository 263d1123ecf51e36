use crate::models::Property;

/// Derive the routing slug for a property name.
///
/// Lowercases the input and collapses every run of whitespace into a single
/// hyphen. Leading and trailing whitespace is dropped. Nothing else is
/// normalized: punctuation and accented characters pass through unchanged.
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

/// Slug for a stored property, derived from its `url` field
pub fn property_slug(property: &Property) -> String {
    slugify(&property.url)
}

/// Detail view path, `/property/<slug>`
pub fn property_path(property: &Property) -> String {
    format!("/property/{}", property_slug(property))
}

/// Reverse lookup used by the detail view. `None` is a "not found".
pub fn find_by_slug<'a>(properties: &'a [Property], slug: &str) -> Option<&'a Property> {
    properties.iter().find(|property| property_slug(property) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn property(url: &str) -> Property {
        Property {
            name: url.to_string(),
            url: url.to_string(),
            price: 100.0,
            price_per_person: 20.0,
            rooms: 1,
            features: BTreeMap::new(),
            votes: BTreeMap::new(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Quinta das Regadas"), "quinta-das-regadas");
        assert_eq!(slugify(" A   B "), "a-b");
        assert_eq!(slugify("Cabanas"), "cabanas");
        assert_eq!(slugify("Casa do Cão Praia"), "casa-do-cão-praia");
        assert_eq!(slugify("Uma Aldeia?"), "uma-aldeia?");
        assert_eq!(slugify("a\t\n b"), "a-b");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in ["Quinta das Regadas", " A   B ", "", "   ", "Casa\tRectoral", "ÀB C"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_find_by_slug_uses_same_derivation() {
        let properties = vec![property("Casa da Fonte"), property("Quinta São Roque")];

        let found = find_by_slug(&properties, "quinta-são-roque").unwrap();
        assert_eq!(found.name, "Quinta São Roque");
        assert_eq!(property_path(found), "/property/quinta-são-roque");

        assert!(find_by_slug(&properties, "casa-paz").is_none());
    }
}
