use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Characters treated as separators when no specification is supplied.
///
/// Whitespace, ASCII digits and ASCII punctuation.
pub const DEFAULT_SEPARATORS: &str = " \t\r\n.,:;'\"{}[]|/<>?!`~1234567890@#$%^&*()-_=+";

/// Set of characters that split a text into words.
///
/// Membership is case-sensitive and fixed once built. An empty set
/// classifies every character as part of a word, so each line becomes
/// a single token.
///
/// # Invariants
/// - Each character is stored once, regardless of repeats in the specification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separators {
	chars: HashSet<char>,
}

impl Separators {
	/// Builds the set from every character of `spec`.
	pub fn new(spec: &str) -> Self {
		Self { chars: spec.chars().collect() }
	}

	/// Returns `true` if `c` splits words.
	pub fn is_separator(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	/// Number of distinct separator characters.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}
}

impl Default for Separators {
	fn default() -> Self {
		Self::new(DEFAULT_SEPARATORS)
	}
}

impl FromStr for Separators {
	type Err = Infallible;

	fn from_str(spec: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(spec))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeats_are_absorbed() {
		let separators = Separators::new("..  ,,");
		assert_eq!(separators.len(), 3);
		assert!(separators.is_separator('.'));
		assert!(separators.is_separator(' '));
		assert!(separators.is_separator(','));
	}

	#[test]
	fn membership_is_case_sensitive() {
		let separators = Separators::new("x");
		assert!(separators.is_separator('x'));
		assert!(!separators.is_separator('X'));
	}

	#[test]
	fn empty_spec_matches_nothing() {
		let separators = Separators::new("");
		assert!(separators.is_empty());
		assert!(!separators.is_separator(' '));
		assert!(!separators.is_separator('\n'));
	}

	#[test]
	fn default_covers_whitespace_digits_and_punctuation() {
		let separators = Separators::default();
		for c in [' ', '\t', '.', '7', '"', '\'', '-', '_', '+', '<', '>'] {
			assert!(separators.is_separator(c), "{:?} should separate", c);
		}
		for c in ['a', 'Z', 'é'] {
			assert!(!separators.is_separator(c), "{:?} should not separate", c);
		}
	}

	#[test]
	fn parses_from_str() {
		let separators: Separators = " .".parse().unwrap();
		assert_eq!(separators, Separators::new(". "));
	}
}
