//! Support code for the `tpick` binary: application directories, file
//! logging and item sources.
//!
//! The menu itself lives in `tpick-core` (state and ranking) and
//! `tpick-tui` (terminal rendering and the run loop).

pub mod app_dirs;
pub mod logging;
pub mod sources;
