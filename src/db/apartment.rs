use anyhow::{Context, Result};
use diesel::prelude::*;
use log::info;

use super::{assign_id, establish_connection, schema::apartments, ApartmentStore};
use crate::models::apartment::{Apartment, ApartmentId};

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = apartments)]
struct ApartmentRow {
    id: String,
    name: String,
    document: serde_json::Value,
}

/// Stores each apartment as a JSONB document keyed by its id.
pub struct PgApartmentStore {
    connection: PgConnection,
}

impl PgApartmentStore {
    pub fn connect(database_url: &str) -> Result<PgApartmentStore> {
        Ok(PgApartmentStore {
            connection: establish_connection(database_url)?,
        })
    }
}

impl ApartmentStore for PgApartmentStore {
    fn save(&mut self, apartment: &mut Apartment) -> Result<ApartmentId> {
        let apartment_id = assign_id(apartment);
        let row = ApartmentRow {
            id: apartment_id.to_string(),
            name: apartment.name.clone(),
            document: serde_json::to_value(&*apartment)
                .with_context(|| format!("Failed to serialize apartment {}", apartment_id))?,
        };

        let n = diesel::insert_into(apartments::table)
            .values(&row)
            .on_conflict(apartments::id)
            .do_update()
            .set(&row)
            .execute(&mut self.connection)?;
        info!("Upserted {:?} rows into apartments table", n);

        Ok(apartment_id)
    }

    fn load(&mut self, id: &ApartmentId) -> Result<Option<Apartment>> {
        let document = apartments::table
            .filter(apartments::id.eq(id.as_str()))
            .select(apartments::document)
            .first::<serde_json::Value>(&mut self.connection)
            .optional()?;

        document
            .map(|document| -> Result<Apartment> {
                let mut apartment: Apartment = serde_json::from_value(document)
                    .with_context(|| format!("Malformed apartment document {}", id))?;
                apartment.id = Some(id.clone());
                Ok(apartment)
            })
            .transpose()
    }

    fn delete(&mut self, id: &ApartmentId) -> Result<bool> {
        let n = diesel::delete(apartments::table.filter(apartments::id.eq(id.as_str())))
            .execute(&mut self.connection)?;
        info!("Deleted {:?} rows in apartments with ID: {}", n, id);

        Ok(n > 0)
    }

    fn list(&mut self) -> Result<Vec<ApartmentId>> {
        let ids: Vec<String> = apartments::table
            .select(apartments::id)
            .order(apartments::created_at.asc())
            .load(&mut self.connection)?;

        ids.into_iter()
            .map(|raw| raw.parse::<ApartmentId>().map_err(anyhow::Error::from))
            .collect()
    }
}
