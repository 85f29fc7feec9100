use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = LmError> = std::result::Result<T, E>;

/// Failures raised by the language model.
///
/// Unknown windows during generation, initial texts shorter than the window
/// and rounding at the tail of a distribution are not errors: they have
/// defined fallbacks and never surface here.
#[derive(Debug, Error)]
pub enum LmError {
	/// The window length must be at least one character.
	#[error("window length must be >= 1, got {0}")]
	InvalidWindowLength(usize),

	/// The corpus does not even fill the first window.
	#[error("corpus holds {available} character(s), at least {window_length} are needed to seed the window")]
	InsufficientCorpus {
		window_length: usize,
		available: usize,
	},

	/// The corpus file could not be read.
	#[error("io error while reading {path:?}: {source}")]
	Io {
		source: std::io::Error,
		path: Option<PathBuf>,
	},
}

impl LmError {
	/// Wraps an IO error together with the path that caused it.
	pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
		Self::Io { source, path }
	}
}
