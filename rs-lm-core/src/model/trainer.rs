use log::{debug, info};

use super::window_table::WindowTable;
use crate::error::{LmError, Result};

/// Summary of one training pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingStats {
	/// Characters read from the stream, seed window included.
	pub characters: usize,
	/// `(window, next character)` pairs routed to the table.
	pub observations: usize,
}

/// Streaming trainer filling a `WindowTable`.
///
/// Reads `window_length` characters to seed the window, then for every
/// further character records one observation and slides the window by one.
/// Finalizes the whole table once the stream is exhausted.
pub struct Trainer<'a> {
	table: &'a mut WindowTable,
	window_length: usize,
}

impl<'a> Trainer<'a> {
	pub fn new(table: &'a mut WindowTable, window_length: usize) -> Self {
		Self { table, window_length }
	}

	/// Consumes `corpus` in a single pass.
	///
	/// # Errors
	/// Returns `InsufficientCorpus` if the stream ends before the first window
	/// is complete; the table is left untouched in that case.
	pub fn train<I>(self, corpus: I) -> Result<TrainingStats>
	where
		I: IntoIterator<Item = char>,
	{
		let mut chars = corpus.into_iter();

		let mut window: String = chars.by_ref().take(self.window_length).collect();
		let seeded = window.chars().count();
		if seeded < self.window_length {
			return Err(LmError::InsufficientCorpus {
				window_length: self.window_length,
				available: seeded,
			});
		}
		debug!("Seed window: {:?}", window);

		let mut stats = TrainingStats { characters: seeded, observations: 0 };
		for c in chars {
			self.table.observe(&window, c);
			window.remove(0);
			window.push(c);
			stats.characters += 1;
			stats.observations += 1;
		}

		self.table.finalize_all();
		info!(
			"Trained on {} characters: {} observations, {} windows",
			stats.characters,
			stats.observations,
			self.table.len()
		);
		Ok(stats)
	}
}
