//! Input codes, menu actions, and the tables binding one to the other.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::MenuError;

/// A single input event as seen by the menu, independent of the terminal
/// library that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	Up,
	Down,
	Left,
	Right,
	PageUp,
	PageDown,
	Home,
	End,
	Enter,
	Backspace,
	Delete,
	Tab,
	Esc,
	Char(char),
	/// A character typed with the control modifier held.
	Ctrl(char),
	/// Cancellation from the user or a failed read; treated like the quit key.
	Interrupt,
	/// The surface changed size and needs a redraw.
	Resize,
	Unknown,
}

impl Key {
	/// The character a search query would accept from this key, if any.
	///
	/// Only codes strictly between 31 and 127 count, so control characters
	/// and anything outside ASCII fall through to the keymap.
	#[must_use]
	pub fn printable(self) -> Option<char> {
		match self {
			Key::Char(ch) if (32..127).contains(&u32::from(ch)) => Some(ch),
			_ => None,
		}
	}
}

impl FromStr for Key {
	type Err = MenuError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		let mut chars = trimmed.chars();
		if let (Some(ch), None) = (chars.next(), chars.next()) {
			return Ok(Key::Char(ch));
		}

		let lowered = trimmed.to_ascii_lowercase();
		let key = match lowered.as_str() {
			"up" => Key::Up,
			"down" => Key::Down,
			"left" => Key::Left,
			"right" => Key::Right,
			"pageup" | "page-up" | "pgup" => Key::PageUp,
			"pagedown" | "page-down" | "pgdn" => Key::PageDown,
			"home" => Key::Home,
			"end" => Key::End,
			"enter" | "return" => Key::Enter,
			"backspace" | "bs" => Key::Backspace,
			"delete" | "del" => Key::Delete,
			"tab" => Key::Tab,
			"esc" | "escape" => Key::Esc,
			"space" => Key::Char(' '),
			"interrupt" | "ctrl-c" => Key::Interrupt,
			other => match other.strip_prefix("ctrl-").map(str::chars) {
				Some(mut rest) => match (rest.next(), rest.next()) {
					(Some(ch), None) => Key::Ctrl(ch),
					_ => return Err(MenuError::UnknownKey(trimmed.to_string())),
				},
				None => return Err(MenuError::UnknownKey(trimmed.to_string())),
			},
		};
		Ok(key)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Up => f.write_str("up"),
			Key::Down => f.write_str("down"),
			Key::Left => f.write_str("left"),
			Key::Right => f.write_str("right"),
			Key::PageUp => f.write_str("pageup"),
			Key::PageDown => f.write_str("pagedown"),
			Key::Home => f.write_str("home"),
			Key::End => f.write_str("end"),
			Key::Enter => f.write_str("enter"),
			Key::Backspace => f.write_str("backspace"),
			Key::Delete => f.write_str("delete"),
			Key::Tab => f.write_str("tab"),
			Key::Esc => f.write_str("esc"),
			Key::Char(' ') => f.write_str("space"),
			Key::Char(ch) => write!(f, "{ch}"),
			Key::Ctrl(ch) => write!(f, "ctrl-{ch}"),
			Key::Interrupt => f.write_str("interrupt"),
			Key::Resize => f.write_str("resize"),
			Key::Unknown => f.write_str("unknown"),
		}
	}
}

/// Everything a key can ask the menu to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	MoveUp,
	MoveDown,
	PageUp,
	PageDown,
	JumpFirst,
	JumpLast,
	Delete,
	Select,
	Search,
	Quit,
	/// Drop the last query character, leaving the search once it is empty.
	EraseQuery,
	LeaveSearch,
}

impl Action {
	pub const ALL: [Action; 12] = [
		Action::MoveUp,
		Action::MoveDown,
		Action::PageUp,
		Action::PageDown,
		Action::JumpFirst,
		Action::JumpLast,
		Action::Delete,
		Action::Select,
		Action::Search,
		Action::Quit,
		Action::EraseQuery,
		Action::LeaveSearch,
	];

	/// Name used for this action in configuration files.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Action::MoveUp => "up",
			Action::MoveDown => "down",
			Action::PageUp => "page_up",
			Action::PageDown => "page_down",
			Action::JumpFirst => "first",
			Action::JumpLast => "last",
			Action::Delete => "delete",
			Action::Select => "select",
			Action::Search => "search",
			Action::Quit => "quit",
			Action::EraseQuery => "erase",
			Action::LeaveSearch => "leave",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Action {
	type Err = MenuError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let action = match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"up" | "move_up" => Action::MoveUp,
			"down" | "move_down" => Action::MoveDown,
			"page_up" => Action::PageUp,
			"page_down" => Action::PageDown,
			"first" | "jump_first" => Action::JumpFirst,
			"last" | "jump_last" => Action::JumpLast,
			"delete" => Action::Delete,
			"select" => Action::Select,
			"search" => Action::Search,
			"quit" => Action::Quit,
			"erase" => Action::EraseQuery,
			"leave" => Action::LeaveSearch,
			_ => return Err(MenuError::UnknownAction(value.trim().to_string())),
		};
		Ok(action)
	}
}

/// Immutable key-to-action table.
///
/// Clones share the same table; rebinding produces a new keymap and leaves
/// the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
	bindings: Arc<HashMap<Key, Action>>,
}

impl Keymap {
	/// Build a keymap from explicit bindings. Later duplicates win.
	pub fn from_bindings(bindings: impl IntoIterator<Item = (Key, Action)>) -> Self {
		Self {
			bindings: Arc::new(bindings.into_iter().collect()),
		}
	}

	/// Bindings used while browsing the list.
	#[must_use]
	pub fn navigation() -> Self {
		Self::from_bindings([
			(Key::Up, Action::MoveUp),
			(Key::Down, Action::MoveDown),
			(Key::PageUp, Action::PageUp),
			(Key::PageDown, Action::PageDown),
			(Key::Home, Action::JumpFirst),
			(Key::End, Action::JumpLast),
			(Key::Enter, Action::Select),
			(Key::Char('/'), Action::Search),
			(Key::Char('_'), Action::Search),
			(Key::Char('q'), Action::Quit),
			(Key::Esc, Action::Quit),
			(Key::Interrupt, Action::Quit),
		])
	}

	/// Bindings owned by a search context. Keys missing here are resolved
	/// through the parent's keymap.
	#[must_use]
	pub fn search() -> Self {
		Self::from_bindings([
			(Key::Backspace, Action::EraseQuery),
			(Key::Left, Action::LeaveSearch),
			(Key::Esc, Action::LeaveSearch),
		])
	}

	#[must_use]
	pub fn get(&self, key: Key) -> Option<Action> {
		self.bindings.get(&key).copied()
	}

	/// Keys currently bound to `action`, in no particular order.
	#[must_use]
	pub fn keys_for(&self, action: Action) -> Vec<Key> {
		self.bindings
			.iter()
			.filter(|(_, bound)| **bound == action)
			.map(|(key, _)| *key)
			.collect()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Return a keymap where `action` is bound to exactly `keys`.
	#[must_use]
	pub fn rebind(&self, action: Action, keys: impl IntoIterator<Item = Key>) -> Self {
		let mut bindings: HashMap<Key, Action> = self
			.bindings
			.iter()
			.filter(|(_, bound)| **bound != action)
			.map(|(key, bound)| (*key, *bound))
			.collect();
		bindings.extend(keys.into_iter().map(|key| (key, action)));
		Self {
			bindings: Arc::new(bindings),
		}
	}

	/// Apply textual overrides of the form `action = [key, ...]`.
	pub fn with_overrides<A, I, K>(
		self,
		overrides: impl IntoIterator<Item = (A, I)>,
	) -> Result<Self, MenuError>
	where
		A: AsRef<str>,
		I: IntoIterator<Item = K>,
		K: AsRef<str>,
	{
		let mut keymap = self;
		for (action, keys) in overrides {
			let action: Action = action.as_ref().parse()?;
			let keys = keys
				.into_iter()
				.map(|key| key.as_ref().parse::<Key>())
				.collect::<Result<Vec<_>, _>>()?;
			log::debug!("rebinding {action} to {keys:?}");
			keymap = keymap.rebind(action, keys);
		}
		Ok(keymap)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navigation_defaults() {
		let keymap = Keymap::navigation();
		assert_eq!(keymap.get(Key::Up), Some(Action::MoveUp));
		assert_eq!(keymap.get(Key::End), Some(Action::JumpLast));
		assert_eq!(keymap.get(Key::Char('_')), Some(Action::Search));
		assert_eq!(keymap.get(Key::Interrupt), Some(Action::Quit));
		assert_eq!(keymap.get(Key::Delete), None);
		assert_eq!(keymap.get(Key::Backspace), None);
	}

	#[test]
	fn printable_range_excludes_control_and_non_ascii() {
		assert_eq!(Key::Char('a').printable(), Some('a'));
		assert_eq!(Key::Char(' ').printable(), Some(' '));
		assert_eq!(Key::Char('~').printable(), Some('~'));
		assert_eq!(Key::Char('\u{7f}').printable(), None);
		assert_eq!(Key::Char('\u{1f}').printable(), None);
		assert_eq!(Key::Char('é').printable(), None);
		assert_eq!(Key::Enter.printable(), None);
	}

	#[test]
	fn key_names_parse() {
		assert_eq!("PageDown".parse::<Key>(), Ok(Key::PageDown));
		assert_eq!("escape".parse::<Key>(), Ok(Key::Esc));
		assert_eq!("G".parse::<Key>(), Ok(Key::Char('G')));
		assert_eq!("ctrl-d".parse::<Key>(), Ok(Key::Ctrl('d')));
		assert_eq!("ctrl-c".parse::<Key>(), Ok(Key::Interrupt));
		assert_eq!(
			"hyper-x".parse::<Key>(),
			Err(MenuError::UnknownKey("hyper-x".into()))
		);
	}

	#[test]
	fn key_names_round_trip() {
		for key in [Key::PageUp, Key::Char(' '), Key::Char('/'), Key::Ctrl('d'), Key::Interrupt] {
			assert_eq!(key.to_string().parse::<Key>(), Ok(key));
		}
	}

	#[test]
	fn action_names_round_trip() {
		for action in Action::ALL {
			assert_eq!(action.name().parse::<Action>(), Ok(action));
		}
		assert_eq!("jump-last".parse::<Action>(), Ok(Action::JumpLast));
	}

	#[test]
	fn overrides_replace_default_keys() {
		let keymap = Keymap::navigation()
			.with_overrides([("down", vec!["j"]), ("delete", vec!["ctrl-d", "delete"])])
			.expect("valid overrides");

		assert_eq!(keymap.get(Key::Char('j')), Some(Action::MoveDown));
		assert_eq!(keymap.get(Key::Down), None);
		assert_eq!(keymap.get(Key::Ctrl('d')), Some(Action::Delete));
		assert_eq!(keymap.get(Key::Delete), Some(Action::Delete));
		assert_eq!(keymap.get(Key::Up), Some(Action::MoveUp));
	}

	#[test]
	fn rebinding_leaves_the_original_untouched() {
		let original = Keymap::navigation();
		let rebound = original.rebind(Action::Quit, [Key::Char('x')]);
		assert_eq!(original.get(Key::Char('q')), Some(Action::Quit));
		assert_eq!(rebound.get(Key::Char('q')), None);
		assert_eq!(rebound.keys_for(Action::Quit), vec![Key::Char('x')]);
	}

	#[test]
	fn bad_override_is_rejected() {
		let err = Keymap::navigation()
			.with_overrides([("teleport", vec!["t"])])
			.unwrap_err();
		assert_eq!(err, MenuError::UnknownAction("teleport".into()));
	}
}
