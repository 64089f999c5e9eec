//! Console logging for the demo.

use std::str::FromStr;

use anyhow::Result;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

// ISO 8601 timestamp, colour-coded level, module target.
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Environment variable holding the global level (`error` … `trace`).
pub const LOG_LEVEL_VAR: &str = "EPI_LOG";

/// Install a stdout logger.  The level comes from `EPI_LOG` (default
/// `info`); `debug` adds one line per group tick, `trace` one per evaluated
/// recipient.
pub fn init() -> Result<()> {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Info);

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
