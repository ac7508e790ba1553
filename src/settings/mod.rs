//! Configuration loading and resolution.
//!
//! `load` layers config files, the environment and CLI flags into a
//! [`ResolvedConfig`]. Settings that fail validation report a `ConfigError`
//! naming where the bad value came from.

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
