use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filters::types::{FilterCriteria, PriceTarget, SortKey, VoteFilter};
use crate::models::Property;

/// Filter and order a catalog.
///
/// Pure: the input is never touched and the result is a fresh `Vec`. Ties in
/// the sort keep their input order.
pub fn apply(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    apply_refs(properties, criteria).into_iter().cloned().collect()
}

/// Same as [`apply`] without cloning the retained properties
pub fn apply_refs<'a>(properties: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    let mut retained: Vec<&Property> = properties
        .iter()
        .filter(|property| matches(property, criteria))
        .collect();

    // sort_by is stable
    retained.sort_by(|a, b| compare(a, b, criteria.sort_key));

    debug!(
        "Kept {} of {} properties (sort: {})",
        retained.len(),
        properties.len(),
        criteria.sort_key
    );

    retained
}

/// Whether a single property passes every filter in `criteria`
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    let target = match criteria.price_target {
        PriceTarget::Total => property.price,
        PriceTarget::PerPerson => property.price_per_person,
    };

    criteria.price_range.contains(target)
        && property.rooms >= criteria.min_rooms
        && criteria
            .required_features
            .iter()
            .all(|key| property.has_feature(key))
        && match criteria.vote_filter {
            VoteFilter::Any => true,
            VoteFilter::HasVotes => property.has_votes(),
            VoteFilter::NoVotes => !property.has_votes(),
        }
}

fn compare(a: &Property, b: &Property, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::PricePerPersonAsc => a.price_per_person.total_cmp(&b.price_per_person),
        SortKey::PricePerPersonDesc => b.price_per_person.total_cmp(&a.price_per_person),
        SortKey::RoomsDesc => b.rooms.cmp(&a.rooms),
        SortKey::RoomsAsc => a.rooms.cmp(&b.rooms),
        SortKey::VotesDesc => b.vote_count().cmp(&a.vote_count()),
        SortKey::VotesAsc => a.vote_count().cmp(&b.vote_count()),
        SortKey::Unsorted => Ordering::Equal,
    }
}

/// Upper bounds of a catalog, used to size the price and room controls
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBounds {
    pub max_price: f64,
    pub max_price_per_person: f64,
    pub max_rooms: u32,
}

impl CatalogBounds {
    /// All zero for an empty catalog
    pub fn of(properties: &[Property]) -> Self {
        properties.iter().fold(Self::default(), |bounds, property| Self {
            max_price: bounds.max_price.max(property.price),
            max_price_per_person: bounds.max_price_per_person.max(property.price_per_person),
            max_rooms: bounds.max_rooms.max(property.rooms),
        })
    }
}
