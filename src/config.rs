use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub apartment_name: String,
    pub database_url: Option<String>,
    pub collection_interval_seconds: u64,
    pub collection_rounds: Option<u32>,
    #[serde(default)]
    pub purge_after_collection: bool,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub seed_path: Option<String>,
}

pub fn create_test_config() -> Config {
    Config {
        apartment_name: "A1".to_string(),
        database_url: None,
        collection_interval_seconds: 0,
        collection_rounds: Some(1),
        purge_after_collection: false,
        log_level: None,
        log_file: None,
        seed_path: None,
    }
}

/// Reads the TOML config pointed to by `CONFIG_PATH`. `DATABASE_URL` fills in
/// `database_url` when the file leaves it out.
pub fn read_config() -> Result<Config> {
    dotenv().ok();

    let config_path =
        env::var(CONFIG_PATH_ENV).with_context(|| format!("{CONFIG_PATH_ENV} .env not set"))?;
    let mut config = parse_config(
        &std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config {config_path}"))?,
    )?;

    if config.database_url.is_none() {
        config.database_url = env::var(DATABASE_URL_ENV).ok();
    }

    Ok(config)
}

/// A zero interval is only accepted together with a round limit.
pub fn parse_config(raw: &str) -> Result<Config> {
    let config: Config = toml::from_str(raw).context("failed to parse config")?;

    if config.collection_interval_seconds == 0 && config.collection_rounds.is_none() {
        bail!("collection_interval_seconds must be positive when collection_rounds is not set");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = parse_config(
            r#"
            apartment_name = "A1"
            collection_interval_seconds = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.apartment_name, "A1");
        assert_eq!(config.collection_interval_seconds, 30);
        assert_eq!(config.collection_rounds, None);
        assert!(!config.purge_after_collection);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn zero_interval_needs_round_limit() {
        assert!(parse_config(
            r#"
            apartment_name = "A1"
            collection_interval_seconds = 0
            "#,
        )
        .is_err());

        let config = parse_config(
            r#"
            apartment_name = "A1"
            collection_interval_seconds = 0
            collection_rounds = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.collection_rounds, Some(3));
    }

    #[test]
    fn rejects_missing_interval() {
        assert!(parse_config(r#"apartment_name = "A1""#).is_err());
    }
}
