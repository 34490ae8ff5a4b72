//! The menu state machine: one key in, one transition out.

use std::iter;

use crate::{Action, Key, Keymap, MenuError, SearchContext, SelectionState};

/// Which kind of frame is receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Navigating,
	Searching,
}

/// Result of a finished menu session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
	/// The chosen item, or `None` when the user backed out.
	pub selection: Option<String>,
	/// Query of the innermost search when the session ended.
	pub query: String,
}

impl Outcome {
	#[must_use]
	pub fn accepted(&self) -> bool {
		self.selection.is_some()
	}
}

/// What the caller should do after a key has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
	Continue,
	Done(Outcome),
}

/// Owns the root selection and the stack of search contexts opened on top
/// of it.
///
/// Each context's parent is the entry below it on the stack (the root for
/// the first one). Keys a context does not bind are resolved through its
/// parents, and the action found is applied to the innermost frame.
#[derive(Debug, Clone)]
pub struct Navigator {
	root: SelectionState,
	searches: Vec<SearchContext>,
	search_keymap: Keymap,
}

impl Navigator {
	/// Start navigating `root`. An empty list is refused.
	pub fn new(root: SelectionState) -> Result<Self, MenuError> {
		if root.is_empty() {
			return Err(MenuError::EmptyList);
		}
		Ok(Self {
			root,
			searches: Vec::new(),
			search_keymap: Keymap::search(),
		})
	}

	/// Replace the bindings given to newly opened search contexts.
	#[must_use]
	pub fn with_search_keymap(mut self, keymap: Keymap) -> Self {
		self.search_keymap = keymap;
		self
	}

	#[must_use]
	pub fn mode(&self) -> Mode {
		if self.searches.is_empty() {
			Mode::Navigating
		} else {
			Mode::Searching
		}
	}

	/// Number of search contexts stacked on the root.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.searches.len()
	}

	#[must_use]
	pub fn root(&self) -> &SelectionState {
		&self.root
	}

	/// The innermost search, if one is open.
	#[must_use]
	pub fn search(&self) -> Option<&SearchContext> {
		self.searches.last()
	}

	/// The frame currently on screen.
	#[must_use]
	pub fn active(&self) -> &SelectionState {
		match self.searches.last() {
			Some(search) => search.state(),
			None => &self.root,
		}
	}

	fn active_mut(&mut self) -> &mut SelectionState {
		match self.searches.last_mut() {
			Some(search) => search.state_mut(),
			None => &mut self.root,
		}
	}

	/// Feed one key through the active frame.
	pub fn handle(&mut self, key: Key) -> Transition {
		if let Some(search) = self.searches.last_mut() {
			if let Some(ch) = key.printable() {
				search.push(ch);
				log::trace!("query is now {:?}", search.query());
				return Transition::Continue;
			}
		}

		match self.resolve(key) {
			Some(action) => {
				log::trace!("{key:?} -> {action}");
				self.apply(action)
			}
			None => {
				log::trace!("{key:?} is unbound");
				Transition::Continue
			}
		}
	}

	/// Look `key` up in the active keymap, then in each parent's.
	fn resolve(&self, key: Key) -> Option<Action> {
		self.searches
			.iter()
			.rev()
			.map(|search| search.state().keymap())
			.chain(iter::once(self.root.keymap()))
			.find_map(|keymap| keymap.get(key))
	}

	fn apply(&mut self, action: Action) -> Transition {
		match action {
			Action::MoveUp => self.active_mut().move_up(),
			Action::MoveDown => self.active_mut().move_down(),
			Action::PageUp => self.active_mut().page_up(),
			Action::PageDown => self.active_mut().page_down(),
			Action::JumpFirst => {
				if let Err(err) = self.active_mut().jump_first() {
					log::debug!("ignoring jump: {err}");
				}
			}
			Action::JumpLast => {
				if let Err(err) = self.active_mut().jump_last() {
					log::debug!("ignoring jump: {err}");
				}
			}
			Action::Delete => {
				let removed = match self.searches.last_mut() {
					Some(search) => search.delete_selected(),
					None => self.root.delete_selected(),
				};
				log::debug!("deleted {removed:?}");
			}
			Action::Select => {
				let selection = self.active().current_item().ok().map(str::to_string);
				return Transition::Done(Outcome {
					selection,
					query: self.query(),
				});
			}
			Action::Quit => {
				return Transition::Done(Outcome {
					selection: None,
					query: self.query(),
				});
			}
			Action::Search => {
				let search = SearchContext::new(self.active(), self.search_keymap.clone());
				self.searches.push(search);
				log::debug!("entered search (depth {})", self.searches.len());
			}
			Action::EraseQuery => {
				let erased = self.searches.last_mut().map(SearchContext::pop);
				if erased == Some(false) {
					self.leave_search();
				}
			}
			Action::LeaveSearch => self.leave_search(),
		}
		Transition::Continue
	}

	fn leave_search(&mut self) {
		if self.searches.pop().is_some() {
			log::debug!("left search (depth {})", self.searches.len());
		}
	}

	fn query(&self) -> String {
		self.searches
			.last()
			.map(|search| search.query().to_string())
			.unwrap_or_default()
	}
}
