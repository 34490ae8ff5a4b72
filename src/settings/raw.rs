use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, ensure};
use ratatui::style::Color;
use serde::Deserialize;
use tpick::sources::{Split, WalkOptions};
use tpick_core::{DEFAULT_PAGE_SIZE, Keymap};

use super::resolved::{ItemSource, ResolvedConfig};
use super::util::default_title_for;
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	input: InputSection,
	walk: WalkSection,
	ui: UiSection,
	/// Navigation bindings, `action = ["key", ...]`.
	keys: BTreeMap<String, Vec<String>>,
	/// Bindings owned by search contexts.
	search_keys: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct InputSection {
	file: Option<PathBuf>,
	dirs: Option<PathBuf>,
	words: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WalkSection {
	include_hidden: Option<bool>,
	follow_symlinks: Option<bool>,
	max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	page_size: Option<usize>,
	accent: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the file and environment values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.file.clone() {
			self.input.file = Some(file);
			self.input.dirs = None;
		}
		if let Some(root) = cli.dirs.clone() {
			self.input.dirs = Some(root);
			self.input.file = None;
		}
		if cli.words {
			self.input.words = Some(true);
		}

		if let Some(value) = cli.hidden {
			self.walk.include_hidden = Some(value);
		}
		if let Some(value) = cli.follow_symlinks {
			self.walk.follow_symlinks = Some(value);
		}
		if let Some(value) = cli.max_depth {
			self.walk.max_depth = Some(value);
		}

		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(value) = cli.page_size {
			self.ui.page_size = Some(value);
		}
		if let Some(accent) = cli.accent.clone() {
			self.ui.accent = Some(accent);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let source = match (self.input.file, self.input.dirs) {
			(Some(file), _) => ItemSource::File(file),
			(None, Some(root)) => ItemSource::Dirs(canonical_dir(&root)?),
			(None, None) => ItemSource::Stdin,
		};

		let split = if self.input.words.unwrap_or(false) {
			Split::Words
		} else {
			Split::Lines
		};

		let walk = WalkOptions {
			include_hidden: self.walk.include_hidden.unwrap_or(false),
			follow_symlinks: self.walk.follow_symlinks.unwrap_or(false),
			max_depth: self.walk.max_depth,
		};

		let page_size = self.ui.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
		ensure!(page_size > 0, "page size must be at least 1");

		let accent = self
			.ui
			.accent
			.as_deref()
			.map(|name| {
				Color::from_str(name.trim()).map_err(|_| anyhow!("unknown accent colour {name:?}"))
			})
			.transpose()?;

		let keymap = Keymap::navigation()
			.with_overrides(&self.keys)
			.context("invalid [keys] binding")?;
		let search_keymap = Keymap::search()
			.with_overrides(&self.search_keys)
			.context("invalid [search_keys] binding")?;

		let title = self.ui.title.unwrap_or_else(|| title_for(&source));

		Ok(ResolvedConfig {
			source,
			split,
			walk,
			title,
			page_size,
			accent,
			keymap,
			search_keymap,
		})
	}
}

fn canonical_dir(root: &Path) -> Result<PathBuf> {
	let root = if root.is_relative() {
		env::current_dir()
			.context("failed to resolve current directory for root")?
			.join(root)
	} else {
		root.to_path_buf()
	};
	let root = fs::canonicalize(&root)
		.with_context(|| format!("failed to canonicalize directory root {}", root.display()))?;
	let metadata = fs::metadata(&root)
		.with_context(|| format!("failed to inspect directory root {}", root.display()))?;
	ensure!(metadata.is_dir(), "{} is not a directory", root.display());
	Ok(root)
}

fn title_for(source: &ItemSource) -> String {
	match source {
		ItemSource::Stdin => String::new(),
		ItemSource::File(path) if path == Path::new("-") => String::new(),
		ItemSource::File(path) => path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.display().to_string()),
		ItemSource::Dirs(root) => default_title_for(root),
	}
}
