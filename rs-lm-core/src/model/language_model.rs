use std::fmt;
use std::path::Path;

use rand::rngs::StdRng;

use super::distribution::Distribution;
use super::generator::Generator;
use super::trainer::{Trainer, TrainingStats};
use super::window_table::WindowTable;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::io::read_corpus;

/// Character-level sliding-window language model.
///
/// Owns the window table, its configuration and the random source used by
/// generation. The random source lives as long as the model: with a seeded
/// configuration, identical call sequences produce identical texts.
///
/// # Lifecycle
/// - `train` (or `train_file`) fills and finalizes the table
/// - `generate` only reads it
///
/// Training again accumulates into the existing table and finalizes it anew.
#[derive(Debug)]
pub struct LanguageModel {
	config: ModelConfig,
	table: WindowTable,
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an untrained model from a validated configuration.
	pub fn new(config: ModelConfig) -> Self {
		let rng = config.random_source.build_rng();
		Self { config, table: WindowTable::new(), rng }
	}

	/// Deterministic model seeded with `seed`.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Ok(Self::new(ModelConfig::new(window_length)?.with_seed(seed)))
	}

	/// Model seeded from OS entropy.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn unseeded(window_length: usize) -> Result<Self> {
		Ok(Self::new(ModelConfig::new(window_length)?.unseeded()))
	}

	/// Trains the model on a character stream.
	///
	/// # Errors
	/// Returns `InsufficientCorpus` if the stream is shorter than the window.
	pub fn train<I>(&mut self, corpus: I) -> Result<TrainingStats>
	where
		I: IntoIterator<Item = char>,
	{
		Trainer::new(&mut self.table, self.config.window_length()).train(corpus)
	}

	/// Reads a corpus file and trains the model on its content.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<TrainingStats> {
		let corpus = read_corpus(path)?;
		self.train(corpus.chars())
	}

	/// Generates up to `text_length` characters after the seed window taken
	/// from the end of `initial_text`.
	///
	/// See `Generator::generate` for the exact semantics.
	pub fn generate(&mut self, initial_text: &str, text_length: usize) -> String {
		Generator::new(&self.table, self.config.window_length()).generate(&mut self.rng, initial_text, text_length)
	}

	/// Distribution learned for `window`, or `None` if it was never observed.
	pub fn distribution_for(&self, window: &str) -> Option<&Distribution> {
		self.table.distribution_for(window)
	}

	pub fn window_length(&self) -> usize {
		self.config.window_length()
	}

	/// Number of distinct windows learned so far.
	pub fn window_count(&self) -> usize {
		self.table.len()
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.table)
	}
}
