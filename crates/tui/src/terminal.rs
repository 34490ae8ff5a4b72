//! Acquiring and releasing the real terminal.
//!
//! The menu draws on stderr so that stdout stays free for whatever the
//! caller prints once a selection is made.

use std::io::{self, Stderr, stderr};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::cursor::{Hide, Show};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::input::CrosstermInput;
use crate::surface::Surface;

/// Surface backed by the process's controlling terminal.
pub type TerminalSurface = Surface<CrosstermBackend<Stderr>, CrosstermInput>;

/// Scoped ownership of the terminal in raw, alternate-screen mode.
///
/// Dropping the session restores the previous mode, whatever path the caller
/// leaves by. A panic hook does the same before the panic message prints.
pub struct TerminalSession {
	surface: TerminalSurface,
}

impl TerminalSession {
	/// Switch the terminal into menu mode.
	pub fn enter() -> Result<Self> {
		install_panic_hook();
		enable_raw_mode().context("failed to enable raw mode")?;
		Self::setup().inspect_err(|_| {
			let _ = restore();
		})
	}

	fn setup() -> Result<Self> {
		execute!(stderr(), EnterAlternateScreen, Hide)
			.context("failed to enter the alternate screen")?;
		let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;
		terminal.clear()?;
		log::debug!("terminal session started ({:?})", terminal.size()?);
		Ok(Self {
			surface: Surface::new(terminal, CrosstermInput),
		})
	}

	pub fn surface_mut(&mut self) -> &mut TerminalSurface {
		&mut self.surface
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		match restore() {
			Ok(()) => log::debug!("terminal session restored"),
			Err(err) => log::warn!("failed to restore terminal: {err}"),
		}
	}
}

/// Put the terminal back into cooked mode with a visible cursor.
pub fn restore() -> io::Result<()> {
	disable_raw_mode()?;
	execute!(stderr(), LeaveAlternateScreen, Show)
}

fn install_panic_hook() {
	static HOOK: Once = Once::new();
	HOOK.call_once(|| {
		let previous = panic::take_hook();
		panic::set_hook(Box::new(move |info| {
			let _ = restore();
			previous(info);
		}));
	});
}
