use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::{assign_id, ApartmentStore};
use crate::models::apartment::{Apartment, ApartmentId};

/// Keeps serialized apartment documents in memory. Used when no database is
/// configured and in tests.
#[derive(Debug, Default)]
pub struct MemoryApartmentStore {
    documents: BTreeMap<ApartmentId, String>,
}

impl MemoryApartmentStore {
    pub fn new() -> MemoryApartmentStore {
        MemoryApartmentStore::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ApartmentStore for MemoryApartmentStore {
    fn save(&mut self, apartment: &mut Apartment) -> Result<ApartmentId> {
        let apartment_id = assign_id(apartment);
        let document = serde_json::to_string(&*apartment)
            .with_context(|| format!("Failed to serialize apartment {}", apartment_id))?;
        self.documents.insert(apartment_id.clone(), document);

        Ok(apartment_id)
    }

    fn load(&mut self, id: &ApartmentId) -> Result<Option<Apartment>> {
        self.documents
            .get(id)
            .map(|document| {
                serde_json::from_str::<Apartment>(document)
                    .with_context(|| format!("Malformed apartment document {}", id))
            })
            .transpose()
    }

    fn delete(&mut self, id: &ApartmentId) -> Result<bool> {
        Ok(self.documents.remove(id).is_some())
    }

    fn list(&mut self) -> Result<Vec<ApartmentId>> {
        Ok(self.documents.keys().cloned().collect())
    }
}
