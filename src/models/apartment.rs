use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{error::ModelError, renter::Renter, room::Room};

const ID_BYTES: usize = 12;

/// Document identifier assigned by the store on first save: 24 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApartmentId(String);

impl ApartmentId {
    pub fn generate() -> ApartmentId {
        let bytes: [u8; ID_BYTES] = rand::thread_rng().gen();
        ApartmentId(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApartmentId {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let valid = raw.len() == ID_BYTES * 2
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));

        if valid {
            Ok(ApartmentId(raw.to_string()))
        } else {
            Err(ModelError::InvalidApartmentId(raw.to_string()))
        }
    }
}

impl TryFrom<String> for ApartmentId {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ApartmentId> for String {
    fn from(id: ApartmentId) -> Self {
        id.0
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ApartmentId>,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub renters: Vec<Renter>,
}

impl Apartment {
    pub fn new(name: impl Into<String>) -> Apartment {
        Apartment {
            id: None,
            name: name.into(),
            rooms: Vec::new(),
            renters: Vec::new(),
        }
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn add_renter(&mut self, renter: Renter) {
        self.renters.push(renter);
    }

    pub fn area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    pub fn cost(&self) -> f64 {
        self.rooms.iter().map(Room::cost).sum()
    }

    pub fn bedrooms(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_bedroom()).count()
    }

    /// One renter per bedroom: available while a bedroom is unoccupied.
    pub fn is_available(&self) -> bool {
        self.bedrooms() > self.renters.len()
    }

    pub fn vacancies(&self) -> usize {
        self.bedrooms().saturating_sub(self.renters.len())
    }

    pub fn evicted_count(&self) -> usize {
        self.renters.iter().filter(|renter| renter.is_evicted()).count()
    }
}
