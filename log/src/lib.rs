use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

pub fn init(display_level: &bool, level_filter: &str) -> Result<()> {
    let level_filter = LevelFilter::from_str(level_filter)
        .map_err(|err| anyhow!("Unknown log level filter '{level_filter}': {err}"))?;

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => trace!("{prefix} {msg}"),
        None => trace!("🐾 {msg}"),
    }
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => debug!("{prefix} {msg}"),
        None => debug!("🐞 {msg}"),
    };
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => info!("{prefix} {msg}"),
        None => info!("📢 {msg}"),
    };
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => warn!("{prefix} {msg}"),
        None => warn!("⚠️ {msg}"),
    };
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let show_backtrace = std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1");
    match (show_backtrace, prefix) {
        (true, Some(prefix)) => error!("{prefix} {msg}\n{:?}", Backtrace::new()),
        (true, None) => error!("🚨 {msg}\n{:?}", Backtrace::new()),
        (false, Some(prefix)) => error!("{prefix} {msg}"),
        (false, None) => error!("🚨 {msg}"),
    };
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    match prefix {
        Some(prefix) => panic!("{prefix} {msg}"),
        None => panic!("☠️ {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_rejects_unknown_level_filter() {
        let err = init(&true, "loudest").unwrap_err();
        assert!(err.to_string().contains("loudest"));
    }

    #[test]
    #[should_panic(expected = "[Tutoring] db unreachable")]
    fn panic_keeps_prefix() {
        panic(Some("[Tutoring]"), "db unreachable");
    }
}
