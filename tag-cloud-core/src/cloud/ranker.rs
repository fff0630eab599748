use std::cmp::Ordering;

use log::debug;

use super::display_set::{CloudEntry, DisplaySet};
use super::font::font_bucket;
use super::frequency_map::FrequencyMap;

/// Order used to choose which entries are displayed.
///
/// - **Primary:** count descending.
/// - **Secondary:** word descending, so among equal counts the
///   lexicographically later word is chosen first.
pub fn selection_order(a: &(&str, usize), b: &(&str, usize)) -> Ordering {
	b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0))
}

/// Order used to present the chosen entries.
///
/// - **Primary:** word ascending.
/// - **Secondary:** count descending (words are unique, so this only
///   matters for determinism).
pub fn display_order(a: &CloudEntry, b: &CloudEntry) -> Ordering {
	a.word.cmp(&b.word).then_with(|| b.count.cmp(&a.count))
}

/// Clamps a requested word count to `[0, distinct]`.
pub fn clamp_limit(requested: i64, distinct: usize) -> usize {
	usize::try_from(requested).unwrap_or(0).min(distinct)
}

/// Selects the `n` most frequent words of `frequencies`.
///
/// # Behavior
/// - Ranks every word with [`selection_order`] and keeps the first `n`
///   (fewer if the map has fewer distinct words).
/// - Computes the min and max counts of the kept words; both default
///   to `1` when nothing is kept.
/// - Attaches a font bucket to each kept word, then reorders them with
///   [`display_order`].
///
/// # Notes
/// - The map is only read; ranking works on a separate owned list.
/// - Words are stored lowercased, so plain string comparison is
///   case-insensitive comparison.
pub fn select_top(frequencies: &FrequencyMap, n: usize) -> DisplaySet {
	let mut ranked: Vec<(&str, usize)> = frequencies.iter().collect();
	ranked.sort_by(selection_order);
	ranked.truncate(n);

	let (min_count, max_count) = match (ranked.last(), ranked.first()) {
		(Some(last), Some(first)) => (last.1, first.1),
		_ => (1, 1),
	};

	let mut entries: Vec<CloudEntry> = ranked
		.into_iter()
		.map(|(word, count)| CloudEntry {
			word: word.to_owned(),
			count,
			font: font_bucket(count, max_count, min_count),
		})
		.collect();
	entries.sort_by(display_order);

	debug!(
		"Selected {} of {} words (counts {}..={})",
		entries.len(),
		frequencies.len(),
		min_count,
		max_count
	);

	DisplaySet { entries, min_count, max_count }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cloud::font::{MAX_FONT, MIN_FONT};
	use crate::cloud::separators::Separators;

	fn map_of(text: &str) -> FrequencyMap {
		let mut map = FrequencyMap::new();
		map.add_line(text, &Separators::new(" ."));
		map
	}

	#[test]
	fn ties_prefer_later_words() {
		let map = map_of("on mat sat ran");
		let set = select_top(&map, 2);
		assert_eq!(set.words(), vec!["ran", "sat"]);
	}

	#[test]
	fn selection_order_sorts_count_then_word_descending() {
		let mut pairs = vec![("b", 1), ("a", 2), ("c", 1), ("d", 2)];
		pairs.sort_by(selection_order);
		assert_eq!(pairs, vec![("d", 2), ("a", 2), ("c", 1), ("b", 1)]);
	}

	#[test]
	fn display_order_sorts_word_ascending() {
		let entry = |word: &str, count| CloudEntry { word: word.to_owned(), count, font: MIN_FONT };
		let mut entries = vec![entry("the", 3), entry("cat", 2), entry("sat", 1)];
		entries.sort_by(display_order);
		let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
		assert_eq!(words, vec!["cat", "sat", "the"]);
	}

	#[test]
	fn limit_larger_than_map() {
		let map = map_of("a b c");
		assert_eq!(select_top(&map, 10).len(), 3);
	}

	#[test]
	fn zero_limit_is_empty() {
		let set = select_top(&map_of("a b c"), 0);
		assert!(set.is_empty());
		assert_eq!((set.min_count, set.max_count), (1, 1));
	}

	#[test]
	fn single_count_maps_to_max_font() {
		let set = select_top(&map_of("x y z"), 3);
		assert!(set.iter().all(|e| e.font == MAX_FONT));
	}

	#[test]
	fn is_deterministic() {
		let map = map_of("q w e r t y u i o p q w e r t q w e");
		let first = select_top(&map, 5);
		for _ in 0..10 {
			assert_eq!(select_top(&map.clone(), 5), first);
		}
	}

	#[test]
	fn clamps_requested_limit() {
		assert_eq!(clamp_limit(-4, 10), 0);
		assert_eq!(clamp_limit(4, 10), 4);
		assert_eq!(clamp_limit(40, 10), 10);
		assert_eq!(clamp_limit(i64::MAX, 10), 10);
	}
}
