use super::render::DEFAULT_STYLESHEETS;
use super::separators::Separators;
use crate::error::Error;

/// Word count used when none is requested.
pub const DEFAULT_LIMIT: usize = 100;

/// Parses a requested word count.
///
/// Surrounding whitespace is ignored and negative values become `0`.
/// Values above the number of distinct words are clamped later, when
/// the display set is built.
///
/// # Errors
/// Returns `Error::InvalidCount` if `input` is not an integer.
pub fn parse_limit(input: &str) -> Result<usize, Error> {
	let trimmed = input.trim();
	let requested: i64 = trimmed
		.parse()
		.map_err(|_| Error::InvalidCount(trimmed.to_owned()))?;
	Ok(usize::try_from(requested).unwrap_or(0))
}

/// Settings for one tag cloud run.
///
/// # Responsibilities
/// - Hold the number of words to display
/// - Hold the separator set used for tokenization
/// - Hold the stylesheets linked from the rendered page
#[derive(Clone, Debug)]
pub struct TagCloudOptions {
	/// Number of words to display.
	pub limit: usize,

	separators: Separators,

	stylesheets: Vec<String>,
}

impl Default for TagCloudOptions {
	fn default() -> Self {
		Self {
			limit: DEFAULT_LIMIT,
			separators: Separators::default(),
			stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl TagCloudOptions {
	pub fn separators(&self) -> &Separators {
		&self.separators
	}

	/// Replaces the separator set with the characters of `spec`.
	pub fn set_separators(&mut self, spec: &str) {
		self.separators = Separators::new(spec);
	}

	pub fn stylesheets(&self) -> &[String] {
		&self.stylesheets
	}

	/// Replaces the linked stylesheets. An empty list links none.
	pub fn set_stylesheets(&mut self, stylesheets: Vec<String>) {
		self.stylesheets = stylesheets;
	}

	/// Sets `limit` from user input.
	///
	/// # Errors
	/// Returns `Error::InvalidCount` if the input is not an integer; the
	/// current limit is left unchanged.
	pub fn set_limit_from_str(&mut self, input: &str) -> Result<(), Error> {
		self.limit = parse_limit(input)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_counts() {
		assert_eq!(parse_limit("25").unwrap(), 25);
		assert_eq!(parse_limit(" 7\n").unwrap(), 7);
		assert_eq!(parse_limit("0").unwrap(), 0);
	}

	#[test]
	fn negative_counts_become_zero() {
		assert_eq!(parse_limit("-3").unwrap(), 0);
	}

	#[test]
	fn rejects_non_integers() {
		assert!(matches!(parse_limit("ten"), Err(Error::InvalidCount(v)) if v == "ten"));
		assert!(matches!(parse_limit(""), Err(Error::InvalidCount(_))));
		assert!(matches!(parse_limit("2.5"), Err(Error::InvalidCount(_))));
	}

	#[test]
	fn invalid_input_keeps_previous_limit() {
		let mut options = TagCloudOptions::default();
		options.set_limit_from_str("12").unwrap();
		assert!(options.set_limit_from_str("twelve").is_err());
		assert_eq!(options.limit, 12);
	}

	#[test]
	fn defaults() {
		let options = TagCloudOptions::default();
		assert_eq!(options.limit, DEFAULT_LIMIT);
		assert_eq!(options.separators(), &Separators::default());
		assert_eq!(options.stylesheets().len(), 2);
	}
}
