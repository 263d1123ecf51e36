//! Catalog-level behaviour of the filter engine, slug routing and the edit
//! form working together.

use std::collections::BTreeMap;

use getaway_scout::edit::EditForm;
use getaway_scout::models::{GAME_ROOM, INDOOR_POOL, OUTDOOR_POOL};
use getaway_scout::store::seed::seed_properties;
use getaway_scout::{
    apply, find_by_slug, property_path, slugify, CatalogBounds, FilterCriteria, PriceRange,
    PriceTarget, Property, SortKey, VoteFilter,
};

fn property(name: &str, price: f64, rooms: u32, votes: &[(&str, &str)]) -> Property {
    Property {
        name: name.to_string(),
        url: name.to_string(),
        price,
        price_per_person: price / 6.0,
        rooms,
        features: BTreeMap::new(),
        votes: votes
            .iter()
            .map(|(voter, vote)| (voter.to_string(), vote.to_string()))
            .collect(),
    }
}

fn names(properties: &[Property]) -> Vec<&str> {
    properties.iter().map(|p| p.name.as_str()).collect()
}

/// Every criteria combination worth checking against the seed catalog
fn criteria_grid() -> Vec<FilterCriteria> {
    let mut grid = Vec::new();
    for sort_key in SortKey::ALL {
        for vote_filter in [VoteFilter::Any, VoteFilter::HasVotes, VoteFilter::NoVotes] {
            for min_rooms in [0, 3, 5] {
                grid.push(FilterCriteria {
                    min_rooms,
                    vote_filter,
                    sort_key,
                    ..FilterCriteria::default()
                });
            }
        }
        grid.push(
            FilterCriteria {
                price_range: PriceRange::new(150.0, 250.0),
                price_target: PriceTarget::PerPerson,
                ..FilterCriteria::default()
            }
            .require_feature(OUTDOOR_POOL)
            .with_sort(sort_key),
        );
    }
    grid
}

#[test]
fn two_property_scenario() {
    let properties = vec![
        property("A", 100.0, 2, &[("x", "yes"), ("y", "")]),
        property("B", 50.0, 0, &[("x", ""), ("y", "")]),
    ];

    let rooms = FilterCriteria {
        min_rooms: 1,
        ..FilterCriteria::default()
    }
    .with_sort(SortKey::PriceAsc);
    assert_eq!(names(&apply(&properties, &rooms)), vec!["A"]);

    let no_votes = FilterCriteria {
        vote_filter: VoteFilter::NoVotes,
        ..FilterCriteria::default()
    };
    assert_eq!(names(&apply(&properties, &no_votes)), vec!["B"]);
}

#[test]
fn result_is_a_subsequence_with_stable_ties() {
    let properties = seed_properties();

    for criteria in criteria_grid() {
        let result = apply(&properties, &criteria);

        // every result element comes from the input
        for kept in &result {
            assert!(properties.contains(kept), "{criteria:?}");
        }

        // equal keys keep input order
        let position = |p: &Property| properties.iter().position(|q| q == p).unwrap();
        for pair in result.windows(2) {
            let key = |p: &Property| match criteria.sort_key {
                SortKey::PriceAsc | SortKey::PriceDesc => p.price.to_bits() as u128,
                SortKey::PricePerPersonAsc | SortKey::PricePerPersonDesc => {
                    p.price_per_person.to_bits() as u128
                }
                SortKey::RoomsAsc | SortKey::RoomsDesc => p.rooms as u128,
                SortKey::VotesAsc | SortKey::VotesDesc => p.vote_count() as u128,
                SortKey::Unsorted => 0,
            };
            if key(&pair[0]) == key(&pair[1]) {
                assert!(position(&pair[0]) < position(&pair[1]), "{criteria:?}");
            }
        }
    }
}

#[test]
fn default_criteria_is_identity() {
    let properties = seed_properties();
    assert_eq!(apply(&properties, &FilterCriteria::default()), properties);
}

#[test]
fn feature_filter_is_idempotent() {
    let properties = seed_properties();

    for feature in [OUTDOOR_POOL, INDOOR_POOL, GAME_ROOM] {
        let criteria = FilterCriteria::default().require_feature(feature);
        let once = apply(&properties, &criteria);
        assert!(!once.is_empty());
        assert!(once.iter().all(|p| p.has_feature(feature)));
        assert_eq!(apply(&once, &criteria), once);
    }
}

#[test]
fn price_ascending_is_ordered() {
    let properties = seed_properties();
    let result = apply(&properties, &FilterCriteria::default().with_sort(SortKey::PriceAsc));

    assert_eq!(result.len(), properties.len());
    for pair in result.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
}

#[test]
fn votes_descending_is_ordered() {
    let properties = seed_properties();
    let result = apply(&properties, &FilterCriteria::default().with_sort(SortKey::VotesDesc));

    assert_eq!(result[0].name, "Douro Natura");
    for pair in result.windows(2) {
        assert!(pair[0].vote_count() >= pair[1].vote_count());
    }
}

#[test]
fn browse_view_defaults_show_whole_catalog() {
    let properties = seed_properties();
    let criteria = FilterCriteria::for_catalog(&CatalogBounds::of(&properties));

    let result = apply(&properties, &criteria);
    assert_eq!(result.len(), properties.len());
    assert_eq!(result[0].name, "Celorico Cottage");
}

#[test]
fn every_listed_property_resolves_by_its_path() {
    let properties = seed_properties();

    for listed in apply(&properties, &FilterCriteria::default()) {
        let path = property_path(&listed);
        let slug = path.trim_start_matches("/property/");
        assert_eq!(find_by_slug(&properties, slug), Some(&listed));
    }

    assert_eq!(slugify("Quinta das Regadas"), "quinta-das-regadas");
    assert!(find_by_slug(&properties, "quinta-das-regadas").is_some());
    assert!(find_by_slug(&properties, "nowhere").is_none());
}

#[test]
fn edited_property_flows_back_through_the_engine() {
    let mut properties = seed_properties();
    let casa = find_by_slug(&properties, "casa-da-abuela").unwrap().clone();
    assert!(!casa.has_votes());

    let mut form = EditForm::open(&casa);
    form.set_vote("carlos", "👍");
    let edited = form.submit().unwrap();

    // callers own what happens to the edit; here we swap it into a local copy
    let index = properties.iter().position(|p| p.name == casa.name).unwrap();
    properties[index] = edited;

    let voted = FilterCriteria {
        vote_filter: VoteFilter::HasVotes,
        ..FilterCriteria::default()
    };
    assert!(names(&apply(&properties, &voted)).contains(&"Casa da Abuela"));
    assert!(!names(&apply(&seed_properties(), &voted)).contains(&"Casa da Abuela"));
}
