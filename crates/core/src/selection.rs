use crate::{Keymap, MenuError};

/// Rows moved by a page step unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The list a menu frame is showing and where its cursor sits.
///
/// `selected` is always a valid index while the list is non-empty and is
/// held at zero once it empties.
#[derive(Debug, Clone)]
pub struct SelectionState {
	items: Vec<String>,
	selected: usize,
	title: String,
	keymap: Keymap,
	page_size: usize,
}

impl SelectionState {
	#[must_use]
	pub fn new(items: Vec<String>, title: impl Into<String>, keymap: Keymap) -> Self {
		Self {
			items,
			selected: 0,
			title: title.into(),
			keymap,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}

	/// Set how far page up/down move. Zero is treated as one.
	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	/// Start the cursor at `index`, clamped to the list.
	#[must_use]
	pub fn with_selected(mut self, index: usize) -> Self {
		self.selected = index;
		self.clamp_selection();
		self
	}

	#[must_use]
	pub fn items(&self) -> &[String] {
		&self.items
	}

	#[must_use]
	pub fn selected(&self) -> usize {
		self.selected
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	#[must_use]
	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn move_up(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	pub fn move_down(&mut self) {
		self.selected = (self.selected + 1).min(self.last_index());
	}

	pub fn page_up(&mut self) {
		self.selected = self.selected.saturating_sub(self.page_size);
	}

	pub fn page_down(&mut self) {
		self.selected = self.selected.saturating_add(self.page_size).min(self.last_index());
	}

	pub fn jump_first(&mut self) -> Result<(), MenuError> {
		if self.items.is_empty() {
			return Err(MenuError::EmptyList);
		}
		self.selected = 0;
		Ok(())
	}

	pub fn jump_last(&mut self) -> Result<(), MenuError> {
		if self.items.is_empty() {
			return Err(MenuError::EmptyList);
		}
		self.selected = self.last_index();
		Ok(())
	}

	/// Remove the item under the cursor, returning it. Does nothing on an
	/// empty list.
	pub fn delete_selected(&mut self) -> Option<String> {
		if self.items.is_empty() {
			return None;
		}
		let removed = self.items.remove(self.selected);
		self.clamp_selection();
		Some(removed)
	}

	pub fn current_item(&self) -> Result<&str, MenuError> {
		self.items
			.get(self.selected)
			.map(String::as_str)
			.ok_or(MenuError::EmptyList)
	}

	/// Swap in a new list and cursor position.
	pub fn replace(&mut self, items: Vec<String>, selected: usize) {
		self.items = items;
		self.selected = selected;
		self.clamp_selection();
	}

	fn last_index(&self) -> usize {
		self.items.len().saturating_sub(1)
	}

	fn clamp_selection(&mut self) {
		self.selected = self.selected.min(self.last_index());
	}
}
