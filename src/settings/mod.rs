//! Configuration loading and resolution.
//!
//! `load` layers config files, environment variables and CLI flags into a
//! [`RawConfig`](raw::RawConfig) and resolves it into the
//! [`ResolvedConfig`] the workflow runs from.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{ItemSource, ResolvedConfig};
