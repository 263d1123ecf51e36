use crate::models::{Property, GAME_ROOM, INDOOR_POOL, OUTDOOR_POOL, VOTERS};
use crate::store::traits::PropertyStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::info;

/// Built-in catalog shipped with the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedStore;

impl SeedStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PropertyStore for SeedStore {
    async fn load(&self) -> Result<Vec<Property>> {
        let properties = seed_properties();
        info!("📋 Loaded {} properties from the built-in catalog", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Seed"
    }
}

fn listing(
    name: &str,
    price: f64,
    price_per_person: f64,
    rooms: u32,
    (outdoor_pool, indoor_pool, game_room): (bool, bool, bool),
    votes: [&str; 3],
) -> Property {
    let features = BTreeMap::from([
        (OUTDOOR_POOL.to_string(), outdoor_pool),
        (INDOOR_POOL.to_string(), indoor_pool),
        (GAME_ROOM.to_string(), game_room),
    ]);
    let votes = VOTERS
        .iter()
        .zip(votes)
        .map(|(voter, vote)| (voter.to_string(), vote.to_string()))
        .collect();

    Property {
        name: name.to_string(),
        url: name.to_string(),
        price,
        price_per_person,
        rooms,
        features,
        votes,
    }
}

/// The shortlist the group started from
pub fn seed_properties() -> Vec<Property> {
    vec![
        listing("Quinta das Regadas", 1890.0, 315.0, 5, (true, false, true), ["👍", "", "👍"]),
        listing("Casa da Abuela", 1150.0, 192.0, 3, (false, false, false), ["", "", ""]),
        listing("Quinta do Raposinho", 2400.0, 400.0, 6, (true, true, true), ["", "👍", ""]),
        listing("Celorico Cottage", 780.0, 130.0, 2, (false, false, false), ["", "", ""]),
        listing("Casa do Cão Praia", 1320.0, 220.0, 4, (true, false, false), ["👍", "", ""]),
        listing("Cabanas", 960.0, 160.0, 0, (false, false, false), ["", "", ""]),
        listing("Douro Natura", 1680.0, 280.0, 4, (true, false, true), ["👍", "👍", "👍"]),
        listing("Casa de Plácios", 1440.0, 240.0, 4, (false, true, false), ["", "", "👍"]),
        listing("Quinta da Moagem", 2100.0, 350.0, 5, (true, false, true), ["", "", ""]),
        listing("Casa Paz", 900.0, 150.0, 3, (true, false, false), ["", "👍", ""]),
    ]
}
