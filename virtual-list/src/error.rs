//! Error types.
//!
//! Every error is raised at the point of assignment (`set_items`, `append_items`, `set_config`)
//! and leaves the previous state untouched.

use thiserror::Error;

use crate::Key;

/// Rejected item data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item at index {index} has no id")]
    MissingId { index: usize },

    #[error("duplicate key `{key}` at indexes {first} and {second}")]
    DuplicateKey {
        key: Key,
        first: usize,
        second: usize,
    },

    #[error("item at index {index} has invalid height {height}")]
    InvalidHeight { index: usize, height: u32 },
}

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("item size must be in 1..={max}, got {size}")]
    InvalidItemSize { size: u32, max: u32 },

    #[error("buffer must be at most {max}, got {buffer}")]
    InvalidBuffer { buffer: usize, max: usize },

    #[error("reach-end threshold must be in (0, 1], got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("malformed size `{input}`")]
    MalformedSize { input: String },

    #[error("unsupported size unit `{unit}` in `{input}` (only px is supported)")]
    UnsupportedUnit { input: String, unit: String },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid item: {0}")]
    Item(#[from] ItemError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
