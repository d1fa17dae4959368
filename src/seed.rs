use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::{
    config::Config,
    models::{apartment::Apartment, renter::Renter, room::Room},
};

/// Seed file layout. Rooms and renters accept the loose input forms, e.g.
/// `{"type": "bedroom", "length": "10", "width": 12}`.
#[derive(Debug, Deserialize)]
struct Seed {
    name: Option<String>,
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    renters: Vec<Renter>,
}

pub fn parse_seed(raw: &str, default_name: &str) -> Result<Apartment> {
    let seed: Seed = serde_json::from_str(raw).context("invalid apartment seed")?;

    let mut apartment = Apartment::new(seed.name.unwrap_or_else(|| default_name.to_string()));
    apartment.rooms = seed.rooms;
    apartment.renters = seed.renters;
    Ok(apartment)
}

/// Builds the starting apartment from `seed_path`, or an empty one named
/// after `apartment_name`.
pub fn initial_apartment(config: &Config) -> Result<Apartment> {
    match &config.seed_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed {path}"))?;
            let apartment = parse_seed(&raw, &config.apartment_name)?;
            info!(
                "Seeded {} with {} rooms and {} renters",
                apartment.name,
                apartment.rooms.len(),
                apartment.renters.len()
            );
            Ok(apartment)
        }
        None => Ok(Apartment::new(config.apartment_name.clone())),
    }
}
