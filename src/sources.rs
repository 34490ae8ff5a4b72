//! Where menu items come from: text input or a directory walk.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use ignore::WalkBuilder;

/// How text input is cut into items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Split {
	/// One item per line. Blank lines are skipped.
	#[default]
	Lines,
	/// One item per whitespace-separated word.
	Words,
}

/// Cut `text` into items.
pub fn parse_items(text: &str, split: Split) -> Vec<String> {
	match split {
		Split::Lines => text
			.lines()
			.map(|line| line.trim_end_matches('\r'))
			.filter(|line| !line.trim().is_empty())
			.map(str::to_string)
			.collect(),
		Split::Words => text.split_whitespace().map(str::to_string).collect(),
	}
}

/// Read all of `reader` and cut it into items. Invalid UTF-8 is replaced.
pub fn read_items(mut reader: impl Read, split: Split) -> Result<Vec<String>> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	Ok(parse_items(&String::from_utf8_lossy(&bytes), split))
}

/// Read items from a file, or from stdin when `path` is `-`.
pub fn read_path(path: &Path, split: Split) -> Result<Vec<String>> {
	if path == Path::new("-") {
		return read_items(io::stdin().lock(), split).context("failed to read items from stdin");
	}
	let file =
		File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
	read_items(file, split).with_context(|| format!("failed to read {}", path.display()))
}

/// Directory traversal settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
	pub include_hidden: bool,
	pub follow_symlinks: bool,
	pub max_depth: Option<usize>,
}

/// List the directories below `root` as paths relative to it, sorted by
/// name within each directory. Ignore files are honoured and the root
/// itself is left out.
pub fn list_dirs(root: &Path, options: &WalkOptions) -> Result<Vec<String>> {
	let metadata =
		root.metadata().with_context(|| format!("failed to inspect {}", root.display()))?;
	anyhow::ensure!(metadata.is_dir(), "{} is not a directory", root.display());

	let walker = WalkBuilder::new(root)
		.hidden(!options.include_hidden)
		.follow_links(options.follow_symlinks)
		.max_depth(options.max_depth)
		.git_ignore(true)
		.git_global(true)
		.git_exclude(true)
		.ignore(true)
		.parents(true)
		.sort_by_file_name(|a, b| a.cmp(b))
		.build();

	let mut dirs = Vec::new();
	for entry in walker {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				log::warn!("skipping unreadable entry: {err}");
				continue;
			}
		};
		if entry.depth() == 0 {
			continue;
		}
		let Some(file_type) = entry.file_type() else {
			continue;
		};
		if !file_type.is_dir() {
			continue;
		}
		let path = entry.path();
		let relative = path.strip_prefix(root).unwrap_or(path);
		dirs.push(relative.to_string_lossy().replace('\\', "/"));
	}

	log::debug!("found {} directories below {}", dirs.len(), root.display());
	Ok(dirs)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn lines_drop_blanks_and_carriage_returns() {
		let items = parse_items("alpha\r\n\r\n  \nbeta gamma\n", Split::Lines);
		assert_eq!(items, vec!["alpha", "beta gamma"]);
	}

	#[test]
	fn words_split_on_any_whitespace() {
		let items = parse_items("abacus binary\n\tcipher\n", Split::Words);
		assert_eq!(items, vec!["abacus", "binary", "cipher"]);
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let items = read_items(&b"ok\n\xffbad\n"[..], Split::Lines).unwrap();
		assert_eq!(items, vec!["ok", "\u{fffd}bad"]);
	}

	#[test]
	fn files_are_read_line_by_line() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("items.txt");
		fs::write(&path, "one\ntwo\n\nthree").unwrap();
		assert_eq!(read_path(&path, Split::Lines).unwrap(), vec!["one", "two", "three"]);
	}

	#[test]
	fn missing_file_names_the_path() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.txt");
		let err = read_path(&path, Split::Lines).unwrap_err();
		assert!(err.to_string().contains("absent.txt"));
	}

	fn tree() -> tempfile::TempDir {
		let dir = tempdir().unwrap();
		for sub in ["src/bin", "docs", ".cache/x", "skipped"] {
			fs::create_dir_all(dir.path().join(sub)).unwrap();
		}
		fs::write(dir.path().join("src/main.rs"), "").unwrap();
		fs::write(dir.path().join(".ignore"), "skipped/\n").unwrap();
		dir
	}

	#[test]
	fn walk_lists_relative_directories() {
		let dir = tree();
		let dirs = list_dirs(dir.path(), &WalkOptions::default()).unwrap();
		assert_eq!(dirs, vec!["docs", "src", "src/bin"]);
	}

	#[test]
	fn walk_can_include_hidden_directories() {
		let dir = tree();
		let options = WalkOptions {
			include_hidden: true,
			..WalkOptions::default()
		};
		let dirs = list_dirs(dir.path(), &options).unwrap();
		assert!(dirs.contains(&".cache".to_string()));
		assert!(dirs.contains(&".cache/x".to_string()));
		assert!(!dirs.contains(&"skipped".to_string()));
	}

	#[test]
	fn walk_respects_max_depth() {
		let dir = tree();
		let options = WalkOptions {
			max_depth: Some(1),
			..WalkOptions::default()
		};
		let dirs = list_dirs(dir.path(), &options).unwrap();
		assert_eq!(dirs, vec!["docs", "src"]);
	}

	#[test]
	fn walk_rejects_a_file_root() {
		let dir = tree();
		assert!(list_dirs(&dir.path().join("src/main.rs"), &WalkOptions::default()).is_err());
	}
}
