use thiserror::Error;

/// Errors raised by the menu model and its renderer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
	/// The drawable surface is below the 2-row, 4-column minimum.
	#[error("terminal too small: {rows}x{cols} (need at least 2 rows and 4 columns)")]
	TooSmall { rows: u16, cols: u16 },

	/// An operation needed a current item but the list is empty.
	#[error("no items to choose from")]
	EmptyList,

	/// A key name in a keymap override was not recognised.
	#[error("unknown key '{0}'")]
	UnknownKey(String),

	/// An action name in a keymap override was not recognised.
	#[error("unknown action '{0}'")]
	UnknownAction(String),
}
