use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use tpick::app_dirs;
use tpick_core::Action;

use crate::cli::CliArgs;

/// Build a [`Config`] from the default file locations, explicit `-c` files
/// and `TPICK__*` environment variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			log::debug!("consulting config file {}", path.display());
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	let mut environment = Environment::with_prefix("tpick")
		.prefix_separator("__")
		.separator("__")
		.try_parsing(true)
		.list_separator(",");
	for action in Action::ALL {
		environment = environment
			.with_list_parse_key(&format!("keys.{}", action.name()))
			.with_list_parse_key(&format!("search_keys.{}", action.name()));
	}
	builder = builder.add_source(environment);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration files, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".tpick.toml"));
		files.push(current_dir.join("tpick.toml"));
	}

	files
}
