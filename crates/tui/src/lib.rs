//! Terminal front end for `tpick`.
//!
//! Draws the active selection state of a [`tpick_core::Navigator`] through
//! ratatui, reads keys through an [`InputSource`], and owns the terminal
//! setup and teardown around an interactive session. Rendering goes to
//! stderr so stdout stays free for the chosen item.

pub mod input;
mod pad;
mod session;
pub mod style;
mod surface;
mod terminal;
pub mod viewport;

pub use input::{CrosstermInput, InputSource, ScriptedInput};
pub use session::{MenuOptions, MenuSession, pick, run};
pub use style::{Emphasis, MenuStyle};
pub use surface::Surface;
pub use terminal::{TerminalSession, TerminalSurface, restore};
pub use viewport::{Geometry, ViewportRenderer};
