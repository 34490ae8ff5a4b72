//! Sources of [`Key`] events for the menu loop.

use std::collections::VecDeque;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tpick_core::Key;

/// Blocking supplier of input events, one per call.
pub trait InputSource {
	/// Wait for the next key. Failures are reported as [`Key::Interrupt`].
	fn next_key(&mut self) -> Key;
}

/// Reads key presses from the controlling terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
	fn next_key(&mut self) -> Key {
		loop {
			match event::read() {
				Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return key_from_event(key),
				Ok(Event::Resize(_, _)) => return Key::Resize,
				Ok(_) => {}
				Err(err) => {
					log::warn!("reading terminal input failed: {err}");
					return Key::Interrupt;
				}
			}
		}
	}
}

/// Translate a crossterm key event into the menu's input code.
#[must_use]
pub fn key_from_event(key: KeyEvent) -> Key {
	match key.code {
		KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => {
			let ch = ch.to_ascii_lowercase();
			if ch == 'c' { Key::Interrupt } else { Key::Ctrl(ch) }
		}
		KeyCode::Char(ch) => Key::Char(ch),
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		KeyCode::Left => Key::Left,
		KeyCode::Right => Key::Right,
		KeyCode::PageUp => Key::PageUp,
		KeyCode::PageDown => Key::PageDown,
		KeyCode::Home => Key::Home,
		KeyCode::End => Key::End,
		KeyCode::Enter => Key::Enter,
		KeyCode::Backspace => Key::Backspace,
		KeyCode::Delete => Key::Delete,
		KeyCode::Tab => Key::Tab,
		KeyCode::Esc => Key::Esc,
		_ => Key::Unknown,
	}
}

/// Replays a fixed sequence of keys, then reports [`Key::Interrupt`] forever.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
	keys: VecDeque<Key>,
}

impl ScriptedInput {
	pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
		Self {
			keys: keys.into_iter().collect(),
		}
	}

	/// Script typing `text` character by character.
	pub fn typing(text: &str) -> Self {
		Self::new(text.chars().map(Key::Char))
	}

	/// Append more keys to the script.
	#[must_use]
	pub fn then(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
		self.keys.extend(keys);
		self
	}

	#[must_use]
	pub fn remaining(&self) -> usize {
		self.keys.len()
	}
}

impl InputSource for ScriptedInput {
	fn next_key(&mut self) -> Key {
		self.keys.pop_front().unwrap_or(Key::Interrupt)
	}
}
