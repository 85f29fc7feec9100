//! Sliding-window character language model.
//!
//! This crate provides a character-level n-gram engine including:
//! - Per-window frequency accumulation (`Distribution`, `CharCount`)
//! - Window-keyed model table built in a single streaming pass
//! - Inverse-CDF sampling of successor characters
//! - A seedable owner object tying training and generation together
//!
//! Low-level components are exposed read-only so that callers can inspect
//! a trained model without being able to mutate it.

/// Error type shared by the whole crate.
pub mod error;

/// Model configuration (window length, random source).
pub mod config;

/// Core statistical engine and the `LanguageModel` owner object.
pub mod model;

/// I/O utilities (corpus loading).
pub mod io;

pub use config::{ModelConfig, RandomSource};
pub use error::{LmError, Result};
pub use model::language_model::LanguageModel;
