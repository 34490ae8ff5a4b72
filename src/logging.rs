//! Diagnostic logging for the `tpick` binary.
//!
//! The menu owns the terminal while it runs, so log records never go to
//! stdout or stderr. When a log file is configured, records from the `log`
//! facade used by the library crates are bridged into a `tracing-subscriber`
//! fmt layer that appends to that file. Without a file, logging stays off.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive.
pub const FILTER_ENV: &str = "TPICK_LOG";

/// Filter used when `TPICK_LOG` is unset.
pub fn default_level(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the file logger. Does nothing when `log_file` is `None`.
pub fn initialize(log_file: Option<&Path>, verbosity: u8) -> Result<()> {
	let Some(path) = log_file else {
		return Ok(());
	};

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let env_filter = EnvFilter::try_from_env(FILTER_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

	let fmt = tracing_subscriber::fmt::layer()
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.with_filter(env_filter);

	tracing_subscriber::registry()
		.with(fmt)
		.try_init()
		.context("failed to install logger")?;

	log::debug!("logging to {}", path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_default_level() {
		assert_eq!(default_level(0), "warn");
		assert_eq!(default_level(1), "info");
		assert_eq!(default_level(2), "debug");
		assert_eq!(default_level(7), "trace");
	}

	#[test]
	fn no_log_file_is_a_no_op() {
		initialize(None, 3).expect("no-op");
	}
}
