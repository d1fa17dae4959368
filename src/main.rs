use std::{
    env,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::{anyhow, Result};
use log::{info, warn};
use tenancy::{
    config::{self, Config},
    logger::setup_logger,
    seed, ApartmentId, ApartmentStore, MemoryApartmentStore, PgApartmentStore, RentCollector,
};
use tokio::sync::broadcast;

const APARTMENT_ID_ENV: &str = "APARTMENT_ID";

#[tokio::main]
async fn main() -> Result<()> {
    let config: Arc<Config> = Arc::new(config::read_config()?);

    // Initialize logger
    setup_logger(&config)?;

    let mut store: Box<dyn ApartmentStore> = match &config.database_url {
        Some(url) => Box::new(PgApartmentStore::connect(url)?),
        None => {
            warn!("No database_url configured, apartments are kept in memory");
            Box::new(MemoryApartmentStore::new())
        }
    };

    let mut apartment = match env::var(APARTMENT_ID_ENV) {
        Ok(raw) => {
            let id: ApartmentId = raw.parse()?;
            store
                .load(&id)?
                .ok_or_else(|| anyhow!("Apartment {} not found", id))?
        }
        Err(_) => seed::initial_apartment(&config)?,
    };
    let id = store.save(&mut apartment)?;
    info!("Collecting rent for {} ({})", apartment.name, id);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    let shutdown_flag = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            shutdown_flag.store(true, Ordering::Release);
            let _ = shutdown_tx.send(());
        }
    });

    let rounds =
        RentCollector::run(&config, store.as_mut(), &mut apartment, shutdown, shutdown_rx).await?;
    info!("Rent collector stopped after {} rounds", rounds);

    Ok(())
}
