use crate::rank::{Ranked, rank};
use crate::{Keymap, SelectionState};

/// A transient child frame that filters its parent's items by a query.
///
/// The items are captured when the context opens; later changes to the
/// parent are not seen. With an empty query the capture is shown as-is, in
/// its original order and with the parent's cursor position.
#[derive(Debug, Clone)]
pub struct SearchContext {
	query: String,
	snapshot: Vec<String>,
	origin: usize,
	state: SelectionState,
}

impl SearchContext {
	/// Open a search over what `parent` is currently showing.
	#[must_use]
	pub fn new(parent: &SelectionState, keymap: Keymap) -> Self {
		let snapshot = parent.items().to_vec();
		let origin = parent.selected();
		let state = SelectionState::new(snapshot.clone(), title_for(""), keymap)
			.with_page_size(parent.page_size())
			.with_selected(origin);
		Self {
			query: String::new(),
			snapshot,
			origin,
			state,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn state(&self) -> &SelectionState {
		&self.state
	}

	pub fn state_mut(&mut self) -> &mut SelectionState {
		&mut self.state
	}

	/// Extend the query and re-rank.
	pub fn push(&mut self, ch: char) {
		self.query.push(ch);
		self.rerank();
	}

	/// Drop the last query character and re-rank. Returns `false` when the
	/// query was already empty.
	pub fn pop(&mut self) -> bool {
		if self.query.pop().is_none() {
			return false;
		}
		self.rerank();
		true
	}

	/// Remove the highlighted result from this search only.
	pub fn delete_selected(&mut self) -> Option<String> {
		let removed = self.state.delete_selected()?;
		if let Some(position) = self.snapshot.iter().position(|item| *item == removed) {
			self.snapshot.remove(position);
		}
		Some(removed)
	}

	fn rerank(&mut self) {
		self.state.set_title(title_for(&self.query));
		if self.query.is_empty() {
			self.state.replace(self.snapshot.clone(), self.origin);
			return;
		}
		let Ranked { items, selected } = rank(&self.query, &self.snapshot);
		self.state.replace(items, selected);
	}
}

fn title_for(query: &str) -> String {
	format!("/{query}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parent() -> SelectionState {
		let items = ["abacus", "binary", "cipher", "bin"]
			.into_iter()
			.map(String::from)
			.collect();
		SelectionState::new(items, "words", Keymap::navigation()).with_selected(2)
	}

	#[test]
	fn opens_on_the_parent_view() {
		let parent = parent();
		let search = SearchContext::new(&parent, Keymap::search());
		assert_eq!(search.state().items(), parent.items());
		assert_eq!(search.state().selected(), 2);
		assert_eq!(search.state().title(), "/");
	}

	#[test]
	fn typing_then_erasing_restores_the_original_order() {
		let parent = parent();
		let mut search = SearchContext::new(&parent, Keymap::search());
		for ch in "bin".chars() {
			search.push(ch);
		}
		assert_eq!(search.state().title(), "/bin");
		assert_ne!(search.state().items(), parent.items());

		assert!(search.pop());
		assert!(search.pop());
		assert!(search.pop());
		assert!(!search.pop());
		assert_eq!(search.state().items(), parent.items());
		assert_eq!(search.state().selected(), parent.selected());
		assert_eq!(search.query(), "");
	}

	#[test]
	fn deletions_survive_re_ranking() {
		let parent = parent();
		let mut search = SearchContext::new(&parent, Keymap::search());
		search.push('b');
		let removed = search.delete_selected().expect("non-empty");
		search.push('i');
		assert!(!search.state().items().contains(&removed));
		assert_eq!(search.state().len(), 3);
		assert_eq!(parent.len(), 4);
	}
}
