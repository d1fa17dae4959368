pub mod apartment;
pub mod memory;
pub mod schema;

use anyhow::{Context, Result};
use diesel::{Connection, PgConnection};

use crate::models::apartment::{Apartment, ApartmentId};

pub use apartment::PgApartmentStore;
pub use memory::MemoryApartmentStore;

/// Document store for apartments. Implementations persist a serialized
/// snapshot of the apartment and never hold on to the live value.
pub trait ApartmentStore {
    /// Upserts the apartment, assigning a fresh id on first save. The id is
    /// written back onto `apartment` and returned.
    fn save(&mut self, apartment: &mut Apartment) -> Result<ApartmentId>;

    fn load(&mut self, id: &ApartmentId) -> Result<Option<Apartment>>;

    /// Returns whether a document was removed.
    fn delete(&mut self, id: &ApartmentId) -> Result<bool>;

    fn list(&mut self) -> Result<Vec<ApartmentId>>;
}

pub fn establish_connection(database_url: &str) -> Result<PgConnection> {
    PgConnection::establish(database_url)
        .with_context(|| format!("Error connecting to {}", database_url))
}

pub(crate) fn assign_id(apartment: &mut Apartment) -> ApartmentId {
    apartment
        .id
        .get_or_insert_with(ApartmentId::generate)
        .clone()
}
