use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::filters::engine::CatalogBounds;

/// Inclusive price interval. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Range that accepts every price
    pub fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    /// Plain interval test. An inverted range contains nothing.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }
}

/// Which price the range filter is applied to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTarget {
    #[default]
    Total,
    PerPerson,
}

/// Filter on whether anyone voted for a property
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VoteFilter {
    #[default]
    Any,
    HasVotes,
    NoVotes,
}

impl FromStr for VoteFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "has" | "has-votes" | "true" => Ok(Self::HasVotes),
            "none" | "no-votes" | "false" => Ok(Self::NoVotes),
            other => Err(format!("unknown vote filter '{other}' (expected any, has or none)")),
        }
    }
}

/// Sort order applied after filtering.
///
/// The single-direction names used by older catalogs (`price`,
/// `pricePerPerson`, `rooms`, `votes`) are accepted as aliases. Any other
/// unrecognized name becomes [`SortKey::Unsorted`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[serde(alias = "price")]
    PriceAsc,
    PriceDesc,
    #[serde(alias = "pricePerPerson")]
    PricePerPersonAsc,
    PricePerPersonDesc,
    #[serde(alias = "rooms")]
    RoomsDesc,
    RoomsAsc,
    #[serde(alias = "votes")]
    VotesDesc,
    VotesAsc,
    #[default]
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::PricePerPersonAsc,
        SortKey::PricePerPersonDesc,
        SortKey::RoomsDesc,
        SortKey::RoomsAsc,
        SortKey::VotesDesc,
        SortKey::VotesAsc,
        SortKey::Unsorted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::PricePerPersonAsc => "price-per-person-asc",
            SortKey::PricePerPersonDesc => "price-per-person-desc",
            SortKey::RoomsDesc => "rooms-desc",
            SortKey::RoomsAsc => "rooms-asc",
            SortKey::VotesDesc => "votes-desc",
            SortKey::VotesAsc => "votes-asc",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Parse a sort name coming from user input. Never fails: unknown names
    /// leave the filtered order untouched.
    pub fn parse_lenient(name: &str) -> Self {
        let key = match name {
            "price" => Some(SortKey::PriceAsc),
            "pricePerPerson" => Some(SortKey::PricePerPersonAsc),
            "rooms" => Some(SortKey::RoomsDesc),
            "votes" => Some(SortKey::VotesDesc),
            other => Self::ALL.into_iter().find(|key| key.as_str() == other),
        };

        key.unwrap_or_else(|| {
            warn!("Unknown sort key '{}', keeping filtered order", name);
            SortKey::Unsorted
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Everything the engine needs to filter and order a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub price_target: PriceTarget,
    pub min_rooms: u32,
    /// Amenities that must be present. Amenities not listed are not checked.
    pub required_features: BTreeSet<String>,
    pub vote_filter: VoteFilter,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    /// Starting criteria of the browse view: full total-price range of the
    /// catalog, cheapest first.
    pub fn for_catalog(bounds: &CatalogBounds) -> Self {
        Self {
            price_range: PriceRange::new(0.0, bounds.max_price),
            sort_key: SortKey::PriceAsc,
            ..Self::default()
        }
    }

    pub fn require_feature(mut self, key: impl Into<String>) -> Self {
        self.required_features.insert(key.into());
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}
