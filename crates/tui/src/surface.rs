use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::Size;
use ratatui::{Frame, Terminal};
use tpick_core::Key;

use crate::input::InputSource;

/// A drawable terminal paired with the source of its key presses.
pub struct Surface<B: Backend, I: InputSource> {
	terminal: Terminal<B>,
	input: I,
}

impl<B: Backend, I: InputSource> Surface<B, I> {
	pub fn new(terminal: Terminal<B>, input: I) -> Self {
		Self { terminal, input }
	}

	/// Current size in columns and rows.
	pub fn size(&self) -> Result<Size> {
		Ok(self.terminal.size()?)
	}

	/// Render one frame.
	pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
		self.terminal.draw(render)?;
		Ok(())
	}

	/// Block until the next key arrives.
	pub fn read_input(&mut self) -> Key {
		self.input.next_key()
	}

	pub fn backend(&self) -> &B {
		self.terminal.backend()
	}

	pub fn input(&self) -> &I {
		&self.input
	}
}
