use std::collections::HashMap;
use std::fmt;

use super::distribution::Distribution;

/// Maps every observed window to the distribution of its successors.
///
/// # Responsibilities
/// - Route `(window, next character)` observations to the right distribution
/// - Finalize all distributions once training is over
/// - Answer lookups during generation, reporting unknown windows as `None`
///
/// # Invariants
/// - Keys are compared by value
/// - A distribution only exists once at least one successor was observed
#[derive(Clone, Debug, Default)]
pub struct WindowTable {
	windows: HashMap<String, Distribution>,
}

impl WindowTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `next_char` followed `window`.
	pub fn observe(&mut self, window: &str, next_char: char) {
		self.windows.entry(window.to_owned()).or_default().bump(next_char);
	}

	/// Finalizes every distribution of the table.
	pub fn finalize_all(&mut self) {
		for distribution in self.windows.values_mut() {
			distribution.finalize();
		}
	}

	/// Returns the distribution learned for `window`, if any.
	///
	/// Never fails: a window of the wrong length is simply unknown.
	pub fn distribution_for(&self, window: &str) -> Option<&Distribution> {
		self.windows.get(window)
	}

	/// Number of distinct windows learned.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates over `(window, distribution)` pairs sorted by window.
	pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		let mut pairs: Vec<(&str, &Distribution)> =
			self.windows.iter().map(|(k, v)| (k.as_str(), v)).collect();
		pairs.sort_by(|a, b| a.0.cmp(b.0));
		pairs.into_iter()
	}
}

impl fmt::Display for WindowTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in self.iter_sorted() {
			writeln!(f, "{} : {}", window, distribution)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn observe_creates_then_bumps() {
		let mut table = WindowTable::new();
		table.observe("ab", 'c');
		table.observe("ab", 'c');
		table.observe("ab", 'd');
		table.observe("bc", 'a');

		assert_eq!(table.len(), 2);
		let distribution = table.distribution_for("ab").unwrap();
		assert_eq!(distribution.total(), 3);
		assert_eq!(distribution.entries()[0].character(), 'c');
		assert_eq!(distribution.entries()[0].count(), 2);
	}

	#[test]
	fn unknown_windows_are_absent() {
		let mut table = WindowTable::new();
		table.observe("ab", 'c');
		assert!(table.distribution_for("zz").is_none());
		assert!(table.distribution_for("").is_none());
		assert!(table.distribution_for("abcdef").is_none());
	}

	#[test]
	fn finalize_all_touches_every_distribution() {
		let mut table = WindowTable::new();
		table.observe("a", 'b');
		table.observe("b", 'a');
		table.observe("b", 'c');
		table.finalize_all();

		for (_, distribution) in table.iter_sorted() {
			let last = distribution.entries().last().unwrap();
			assert!((last.cumulative().unwrap() - 1.0).abs() < 1e-12);
		}
	}

	#[test]
	fn display_is_one_sorted_line_per_window() {
		let mut table = WindowTable::new();
		table.observe("b", 'a');
		table.observe("a", 'b');
		table.finalize_all();
		assert_eq!(table.to_string(), "a : ((b 1 1.0 1.0))\nb : ((a 1 1.0 1.0))\n");
	}
}
