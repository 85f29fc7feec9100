//! Statistical engine of the sliding-window language model.
//!
//! - Per-character counters and per-window distributions (`Distribution`)
//! - The window-keyed model table (`WindowTable`)
//! - Streaming training (`Trainer`) and sampling (`Generator`)
//! - The owner object binding them to a random source (`LanguageModel`)

/// Per-character counter and the ordered per-window distribution.
///
/// Accumulates successor counts and converts them into probabilities
/// and cumulative probabilities for inverse-CDF sampling.
pub mod distribution;

/// Mapping from window to distribution.
///
/// Built during training, read-only during generation.
pub mod window_table;

/// Single-pass streaming trainer filling a `WindowTable`.
pub mod trainer;

/// Generation loop sampling successors from a finalized `WindowTable`.
pub mod generator;

/// Language model owning the table, the configuration and the random source.
pub mod language_model;
