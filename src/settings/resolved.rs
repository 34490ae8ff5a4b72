use std::io::{self, Write};
use std::path::PathBuf;

use ratatui::style::Color;
use tpick::sources::{Split, WalkOptions};
use tpick_core::{Action, Keymap};

/// Where the menu's items are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
	/// Piped standard input.
	Stdin,
	/// A file, or stdin when the path is `-`.
	File(PathBuf),
	/// Directories below a root.
	Dirs(PathBuf),
}

/// Application-ready configuration derived from CLI flags, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub source: ItemSource,
	pub split: Split,
	pub walk: WalkOptions,
	pub title: String,
	pub page_size: usize,
	pub accent: Option<Color>,
	pub keymap: Keymap,
	pub search_keymap: Keymap,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "Effective configuration:")?;
		match &self.source {
			ItemSource::Stdin => writeln!(out, "  Items: stdin")?,
			ItemSource::File(path) => writeln!(out, "  Items: file {}", path.display())?,
			ItemSource::Dirs(root) => writeln!(out, "  Items: directories below {}", root.display())?,
		}
		if let ItemSource::Dirs(_) = self.source {
			writeln!(out, "  Include hidden: {}", bool_to_word(self.walk.include_hidden))?;
			writeln!(out, "  Follow symlinks: {}", bool_to_word(self.walk.follow_symlinks))?;
			match self.walk.max_depth {
				Some(depth) => writeln!(out, "  Max depth: {depth}")?,
				None => writeln!(out, "  Max depth: unlimited")?,
			}
		} else {
			let split = match self.split {
				Split::Lines => "lines",
				Split::Words => "words",
			};
			writeln!(out, "  Split: {split}")?;
		}
		writeln!(out, "  Title: {}", self.title)?;
		writeln!(out, "  Page size: {}", self.page_size)?;
		match self.accent {
			Some(color) => writeln!(out, "  Accent: {color}")?,
			None => writeln!(out, "  Accent: (none)")?,
		}
		write_bindings(out, "Keys", &self.keymap)?;
		write_bindings(out, "Search keys", &self.search_keymap)
	}
}

fn write_bindings(out: &mut impl Write, label: &str, keymap: &Keymap) -> io::Result<()> {
	writeln!(out, "  {label}:")?;
	for action in Action::ALL {
		let mut keys: Vec<String> = keymap.keys_for(action).iter().map(|key| key.to_string()).collect();
		if keys.is_empty() {
			continue;
		}
		keys.sort();
		writeln!(out, "    {action}: {}", keys.join(", "))?;
	}
	Ok(())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
