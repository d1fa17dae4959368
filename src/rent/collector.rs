use crate::{config::Config, db::ApartmentStore, models::apartment::Apartment};
use anyhow::Result;
use log::{error, info, warn};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tokio::sync::broadcast::Receiver;

pub struct RentCollector;

impl RentCollector {
    /// Collects rent on the configured cadence until shutdown or until
    /// `collection_rounds` rounds have run. The apartment is saved after
    /// every round; a failed save is logged and the next round still runs.
    pub async fn run(
        config: &Arc<Config>,
        store: &mut dyn ApartmentStore,
        apartment: &mut Apartment,
        shutdown: Arc<AtomicBool>,
        mut shutdown_rx: Receiver<()>,
    ) -> Result<u32> {
        let interval = Duration::from_secs(config.collection_interval_seconds);
        let mut round: u32 = 0;

        while !shutdown.load(Ordering::Acquire) {
            round += 1;
            info!(
                "Starting rent collection round {} for {}",
                round, apartment.name
            );
            let start = Instant::now();

            collect_round(config, apartment);

            match store.save(apartment) {
                Ok(id) => info!("Saved apartment {} ({})", apartment.name, id),
                Err(e) => error!("Failed to save apartment {}: {:?}", apartment.name, e),
            }

            info!(
                "Finished round {} in {:?}: area {:.2}, rent {:.2}, bedrooms {}, renters {}, available {}",
                round,
                start.elapsed(),
                apartment.area(),
                apartment.cost(),
                apartment.bedrooms(),
                apartment.renters.len(),
                apartment.is_available()
            );

            if config.collection_rounds.is_some_and(|limit| round >= limit) {
                break;
            }

            tokio::select! {
               _ = tokio::time::sleep(interval) => {}
               _ = shutdown_rx.recv() => {
                   break
               }
            }
        }

        Ok(round)
    }
}

fn collect_round(config: &Config, apartment: &mut Apartment) {
    match apartment.collect_rent() {
        Some(collection) => info!(
            "Collected {:.2} of {:.2} from {} renters (share {:.2}), {} flagged for eviction",
            collection.collected,
            collection.total_rent,
            collection.paid,
            collection.share,
            collection.evicted
        ),
        None => warn!("No renters in {}, skipping collection", apartment.name),
    }

    if config.purge_after_collection {
        for renter in apartment.purge_evicted() {
            info!(
                "Evicted {} from {} with {:.2} cash left",
                renter.name(),
                apartment.name,
                renter.cash()
            );
        }
    }
}
