use std::time::SystemTime;

use anyhow::{anyhow, Result};
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::Config;

pub fn setup_logger(config: &Config) -> Result<()> {
    let level = match config.log_level.as_deref() {
        Some(raw) => raw
            .parse::<LevelFilter>()
            .map_err(|e| anyhow!("invalid log level {raw}: {e}"))?,
        None => LevelFilter::Info,
    };

    let stdout = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("tokio", LevelFilter::Warn)
        .chain(stdout);

    if let Some(path) = &config.log_file {
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => level.as_str().red(),
        Level::Warn => level.as_str().yellow(),
        Level::Info => level.as_str().green(),
        Level::Debug => level.as_str().blue(),
        Level::Trace => level.as_str().dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_text_is_kept() {
        colored::control::set_override(false);
        assert_eq!(colored_level(Level::Warn).to_string(), "WARN");
        assert_eq!(colored_level(Level::Info).to_string(), "INFO");
    }
}
