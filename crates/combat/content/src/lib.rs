//! Data-driven combat content.
//!
//! Reads rule tables (TOML) and character rosters (RON) from disk and turns
//! them into `combat-core` types. Content is only consulted at setup time;
//! the rules themselves never touch the filesystem.

pub mod loaders;

pub use loaders::{CharacterSpec, ConfigLoader, LoadResult, RosterLoader};
