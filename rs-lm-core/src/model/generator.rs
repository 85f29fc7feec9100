use log::debug;
use rand::Rng;

use super::distribution::Distribution;
use super::window_table::WindowTable;

/// Read-only generation view over a finalized `WindowTable`.
///
/// # Responsibilities
/// - Draw successor characters by inverse-CDF sampling
/// - Slide the window over the produced text
/// - Stop early when the current window was never learned
pub struct Generator<'a> {
	table: &'a WindowTable,
	window_length: usize,
}

impl<'a> Generator<'a> {
	pub fn new(table: &'a WindowTable, window_length: usize) -> Self {
		Self { table, window_length }
	}

	/// Samples one successor from `distribution` with a fresh uniform draw in `[0, 1)`.
	pub fn sample_next<R: Rng>(distribution: &Distribution, rng: &mut R) -> Option<char> {
		let r: f64 = rng.random();
		distribution.sample(r)
	}

	/// Returns the last `n` characters of a string.
	///
	/// If `n` is greater than the number of characters in `s`, the entire
	/// string is returned. UTF-8 safe: counts characters, not bytes.
	fn last_n_chars(s: &str, n: usize) -> String {
		let len = s.chars().count();
		if n >= len {
			return s.to_owned();
		}
		s.chars().skip(len - n).collect()
	}

	/// Generates text starting from the last `window_length` characters of `initial_text`.
	///
	/// # Behavior
	/// - If `initial_text` is shorter than the window, it is returned unchanged.
	/// - Otherwise the output starts with the seed window and up to
	///   `text_length` characters are appended to it (the target length is
	///   `text_length + window_length`, saturating at `usize::MAX`).
	/// - Generation stops as soon as the current window is unknown.
	pub fn generate<R: Rng>(&self, rng: &mut R, initial_text: &str, text_length: usize) -> String {
		if initial_text.chars().count() < self.window_length {
			return initial_text.to_owned();
		}

		let mut window = Self::last_n_chars(initial_text, self.window_length);
		let mut output = window.clone();
		let target = text_length.saturating_add(self.window_length);
		let mut produced = self.window_length;

		while produced < target {
			let Some(distribution) = self.table.distribution_for(&window) else {
				debug!("Unknown window {:?}, stopping after {} character(s)", window, produced);
				break;
			};
			let Some(c) = Self::sample_next(distribution, rng) else {
				break;
			};

			output.push(c);
			produced += 1;
			window.remove(0);
			window.push(c);
		}

		output
	}
}
