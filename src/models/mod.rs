use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Feature key for an outdoor pool
pub const OUTDOOR_POOL: &str = "outdoorPool";
/// Feature key for an indoor pool
pub const INDOOR_POOL: &str = "indoorPool";
/// Feature key for a game room
pub const GAME_ROOM: &str = "gameRoom";

/// Amenity keys used by catalogs exported from the web app
const LEGACY_FEATURE_KEYS: [(&str, &str); 3] = [
    ("piscinaExterior", OUTDOOR_POOL),
    ("piscinaInterior", INDOOR_POOL),
    ("salaoJogos", GAME_ROOM),
];

/// Voters taking part in the trip
pub const VOTERS: [&str; 3] = ["renato", "carlos", "cristovao"];

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    /// Source for the routing slug, see [`crate::slug::slugify`]
    pub url: String,
    pub price: f64,
    pub price_per_person: f64,
    pub rooms: u32,
    #[serde(default, deserialize_with = "deserialize_features")]
    pub features: BTreeMap<String, bool>,
    /// Voter name to free-text vote. Empty string means no vote.
    #[serde(default)]
    pub votes: BTreeMap<String, String>,
}

/// Read the amenity map, renaming legacy keys to their current names
fn deserialize_features<'de, D>(deserializer: D) -> Result<BTreeMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, enabled)| {
            let key = LEGACY_FEATURE_KEYS
                .iter()
                .find(|(legacy, _)| *legacy == key)
                .map(|(_, current)| current.to_string())
                .unwrap_or(key);
            (key, enabled)
        })
        .collect())
}

impl Property {
    /// Whether the amenity is present. Unknown keys count as absent.
    pub fn has_feature(&self, key: &str) -> bool {
        self.features.get(key).copied().unwrap_or(false)
    }

    /// Any amenity flagged at all
    pub fn has_any_feature(&self) -> bool {
        self.features.values().any(|&on| on)
    }

    /// Number of voters that cast a non-empty vote
    pub fn vote_count(&self) -> usize {
        self.votes.values().filter(|vote| !vote.is_empty()).count()
    }

    pub fn has_votes(&self) -> bool {
        self.votes.values().any(|vote| !vote.is_empty())
    }

    /// Votes that were actually cast, in voter order
    pub fn cast_votes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.votes
            .iter()
            .filter(|(_, vote)| !vote.is_empty())
            .map(|(voter, vote)| (voter.as_str(), vote.as_str()))
    }
}
