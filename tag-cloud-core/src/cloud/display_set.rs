use serde::Serialize;

/// One word of the tag cloud.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CloudEntry {
	/// Lowercased word.
	pub word: String,
	/// Occurrences in the document at selection time.
	pub count: usize,
	/// Font-size class in `[MIN_FONT, MAX_FONT]`.
	pub font: u32,
}

/// The top-N words of a document, ready for display.
///
/// Entries are ordered by word ascending. This is not the order used to
/// choose them, which is by count (see `ranker`).
///
/// # Invariants
/// - Words are unique
/// - `min_count` and `max_count` are the extremes of `entries`, or `1` and `1` when empty
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DisplaySet {
	pub entries: Vec<CloudEntry>,
	pub min_count: usize,
	pub max_count: usize,
}

impl DisplaySet {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CloudEntry> {
		self.entries.iter()
	}

	/// Words in display order.
	pub fn words(&self) -> Vec<&str> {
		self.entries.iter().map(|e| e.word.as_str()).collect()
	}
}

impl<'a> IntoIterator for &'a DisplaySet {
	type Item = &'a CloudEntry;
	type IntoIter = std::slice::Iter<'a, CloudEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
