//! Terminal-independent model behind the `tpick` menu.
//!
//! This crate holds everything that decides *what* the menu shows: the
//! selection state and its movement rules, the keymaps that turn input codes
//! into actions, the fuzzy ranking used by incremental search, and the
//! [`Navigator`] state machine tying them together. Drawing and reading the
//! terminal live in `tpick-tui`.

pub mod distance;
mod error;
pub mod keymap;
mod navigator;
pub mod rank;
mod search;
mod selection;

pub use distance::{levenshtein, score};
pub use error::MenuError;
pub use keymap::{Action, Key, Keymap};
pub use navigator::{Mode, Navigator, Outcome, Transition};
pub use rank::{Ranked, rank};
pub use search::SearchContext;
pub use selection::{DEFAULT_PAGE_SIZE, SelectionState};
