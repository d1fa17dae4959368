use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::models::{apartment::Apartment, renter::Renter};

/// Outcome of one rent collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct RentCollection {
    pub total_rent: f64,
    pub share: f64,
    pub collected: f64,
    pub paid: usize,
    pub evicted: usize,
    pub collected_at: DateTime<Utc>,
}

impl Apartment {
    /// Splits the apartment's cost equally across current renters. Renters who
    /// cannot cover their share pay nothing and are flagged as evicted; they
    /// stay in the apartment until `purge_evicted` runs.
    ///
    /// Returns `None` without touching any renter when the apartment is empty.
    pub fn collect_rent(&mut self) -> Option<RentCollection> {
        if self.renters.is_empty() {
            debug!("No renters in {}, nothing to collect", self.name);
            return None;
        }

        let total_rent = self.cost();
        let share = total_rent / self.renters.len() as f64;

        let mut collection = RentCollection {
            total_rent,
            share,
            collected: 0.0,
            paid: 0,
            evicted: 0,
            collected_at: Utc::now(),
        };

        for renter in self.renters.iter_mut() {
            if renter.charge(share) {
                collection.collected += share;
                collection.paid += 1;
            } else {
                warn!(
                    "{} cannot pay share {:.2} with cash {:.2} in {}",
                    renter.name(),
                    share,
                    renter.cash(),
                    self.name
                );
                collection.evicted += 1;
            }
        }

        Some(collection)
    }

    /// Removes evicted renters, keeping the order of the rest, and hands the
    /// removed renters back to the caller.
    pub fn purge_evicted(&mut self) -> Vec<Renter> {
        let (evicted, remaining): (Vec<Renter>, Vec<Renter>) = std::mem::take(&mut self.renters)
            .into_iter()
            .partition(|renter| renter.is_evicted());

        self.renters = remaining;
        evicted
    }
}
