//! Persisted application state: tile URLs, splitter sizes, mode flags.
//!
//! A flat JSON object of string keys. No schema version; last write wins.

pub mod keys;
mod store;

#[cfg(test)]
mod tests;

pub use store::SettingsStore;
