pub mod config;
pub mod db;
pub mod logger;
pub mod models;
pub mod rent;
pub mod seed;

pub use db::{ApartmentStore, MemoryApartmentStore, PgApartmentStore};
pub use models::{
    apartment::{Apartment, ApartmentId},
    error::ModelError,
    renter::{Renter, RenterInput},
    room::{Room, RoomInput, RoomKind, RATE},
};
pub use rent::{RentCollection, RentCollector};
