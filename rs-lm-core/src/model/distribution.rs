use std::fmt;

/// Occurrence counter of one character following a given window.
///
/// `probability` and `cumulative` stay unset until the owning
/// `Distribution` is finalized.
#[derive(Clone, Debug, PartialEq)]
pub struct CharCount {
	character: char,
	count: usize,
	probability: Option<f64>,
	cumulative: Option<f64>,
}

impl CharCount {
	fn new(character: char) -> Self {
		Self { character, count: 0, probability: None, cumulative: None }
	}

	/// The counted character.
	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times the character was observed after the window.
	pub fn count(&self) -> usize {
		self.count
	}

	/// `count / total`, once finalized.
	pub fn probability(&self) -> Option<f64> {
		self.probability
	}

	/// Running sum of probabilities up to and including this entry, once finalized.
	pub fn cumulative(&self) -> Option<f64> {
		self.cumulative
	}
}

impl fmt::Display for CharCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {}", self.character, self.count)?;
		match (self.probability, self.cumulative) {
			(Some(p), Some(cp)) => write!(f, " {:?} {:?})", p, cp),
			_ => write!(f, ")"),
		}
	}
}

/// Empirical distribution of the characters observed after one window.
///
/// Entries are kept in first-occurrence order. That order is the traversal
/// used both to accumulate cumulative probabilities and to sample, so it must
/// never change once an entry has been inserted.
///
/// # Invariants
/// - Each character appears at most once
/// - Every entry has a count >= 1 (entries are only created by `bump`)
/// - After `finalize`, cumulative probabilities are non-decreasing and the
///   last one is 1.0 up to rounding
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
	entries: Vec<CharCount>,
}

impl Distribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `character`.
	///
	/// Linear scan in insertion order; a new counter is appended on first sight.
	pub fn bump(&mut self, character: char) {
		let index = match self.entries.iter().position(|entry| entry.character == character) {
			Some(index) => index,
			None => {
				self.entries.push(CharCount::new(character));
				self.entries.len() - 1
			}
		};
		self.entries[index].count += 1;
	}

	/// Computes `probability` and `cumulative` for every entry.
	///
	/// Recomputes from the raw counts, so calling it again without new
	/// observations yields identical values.
	pub fn finalize(&mut self) {
		let total: usize = self.entries.iter().map(CharCount::count).sum();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for entry in &mut self.entries {
			let p = entry.count as f64 / total as f64;
			cumulative += p;
			entry.probability = Some(p);
			entry.cumulative = Some(cumulative);
		}
	}

	/// Returns the first character whose cumulative probability is `>= r`.
	///
	/// `r` is expected in `[0, 1)`. When rounding leaves the last cumulative
	/// value slightly below `r`, the last entry is returned.
	/// Returns `None` only for an empty distribution.
	pub fn sample(&self, r: f64) -> Option<char> {
		self.entries
			.iter()
			.find(|entry| entry.cumulative.is_some_and(|cp| cp >= r))
			.or_else(|| self.entries.last())
			.map(CharCount::character)
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[CharCount] {
		&self.entries
	}

	/// Total number of observations.
	pub fn total(&self) -> usize {
		self.entries.iter().map(CharCount::count).sum()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		write!(f, ")")
	}
}
