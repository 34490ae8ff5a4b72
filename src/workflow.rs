use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
use tpick::sources::{self, Split, WalkOptions};
use tpick_core::{Keymap, Outcome};
use tpick_tui::{MenuOptions, MenuStyle};

use crate::settings::{ItemSource, ResolvedConfig};

/// Loads the items and runs the menu over them.
pub(crate) struct PickWorkflow {
	items: Vec<String>,
	options: MenuOptions,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			source,
			split,
			walk,
			title,
			page_size,
			accent,
			keymap,
			search_keymap,
		} = config;

		let items = load_items(&source, split, &walk)?;
		log::info!("loaded {} items from {source:?}", items.len());

		let options = MenuOptionsFactory::default()
			.with_title(title)
			.with_page_size(page_size)
			.with_accent(accent)
			.with_keymaps(keymap, search_keymap)
			.finish();

		Ok(Self { items, options })
	}

	pub(crate) fn run(self) -> Result<Outcome> {
		tpick_tui::pick(self.items, self.options)
	}
}

fn load_items(source: &ItemSource, split: Split, walk: &WalkOptions) -> Result<Vec<String>> {
	match source {
		ItemSource::File(path) => sources::read_path(path, split),
		ItemSource::Dirs(root) => sources::list_dirs(root, walk),
		ItemSource::Stdin => {
			let stdin = io::stdin();
			if stdin.is_terminal() {
				bail!("no items: pass FILE or --dirs, or pipe items on stdin");
			}
			sources::read_items(stdin.lock(), split)
		}
	}
}

/// Translates resolved settings into [`MenuOptions`].
#[derive(Default)]
struct MenuOptionsFactory {
	options: MenuOptions,
}

impl MenuOptionsFactory {
	fn with_title(mut self, title: String) -> Self {
		self.options = self.options.with_title(title);
		self
	}

	fn with_page_size(mut self, page_size: usize) -> Self {
		self.options = self.options.with_page_size(page_size);
		self
	}

	fn with_accent(mut self, accent: Option<ratatui::style::Color>) -> Self {
		if let Some(color) = accent {
			self.options = self.options.with_style(MenuStyle::default().with_accent(color));
		}
		self
	}

	fn with_keymaps(mut self, keymap: Keymap, search_keymap: Keymap) -> Self {
		self.options = self.options.with_keymap(keymap).with_search_keymap(search_keymap);
		self
	}

	fn finish(self) -> MenuOptions {
		self.options
	}
}
