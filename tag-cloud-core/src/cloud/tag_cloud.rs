use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::display_set::DisplaySet;
use super::frequency_map::FrequencyMap;
use super::options::TagCloudOptions;
use super::ranker::select_top;
use super::render;
use super::separators::Separators;
use crate::error::Error;
use crate::io;

/// High-level tag cloud built from one input document.
///
/// # Responsibilities
/// - Read a document and keep its word frequencies
/// - Record a read failure without discarding the counts gathered before it
/// - Build display sets and render them as HTML
#[derive(Debug)]
pub struct TagCloud {
	name: String,
	frequencies: FrequencyMap,
	interrupted: Option<Error>,
}

impl TagCloud {
	/// Reads the file at `path`.
	///
	/// The path, as given, becomes the name shown in the page header.
	///
	/// # Errors
	/// Returns `Error::Io` if the file cannot be opened. A failure while
	/// reading is not an error here, see [`TagCloud::interrupted`].
	pub fn from_path<P: AsRef<Path>>(path: P, separators: &Separators) -> Result<Self, Error> {
		let reader = io::open_reader(&path)?;
		Ok(Self::from_reader(&io::display_name(&path), reader, separators))
	}

	/// Reads `reader` line by line until end of stream.
	///
	/// # Behavior
	/// - If a line cannot be read, reading stops and the counts gathered
	///   so far are kept.
	/// - The failure is logged and available through [`TagCloud::interrupted`].
	pub fn from_reader<R: BufRead>(name: &str, reader: R, separators: &Separators) -> Self {
		let mut frequencies = FrequencyMap::new();
		let interrupted = match frequencies.add_reader(reader, separators) {
			Ok(()) => None,
			Err(err) => {
				warn!("Using partial counts for {}: {}", name, err);
				Some(err)
			}
		};
		Self { name: name.to_owned(), frequencies, interrupted }
	}

	/// Counts an in-memory document, splitting its lines across worker threads.
	pub fn from_text(name: &str, text: &str, separators: &Separators) -> Self {
		let lines: Vec<&str> = text.lines().collect();
		Self {
			name: name.to_owned(),
			frequencies: FrequencyMap::from_lines_parallel(&lines, separators),
			interrupted: None,
		}
	}

	/// Name shown in the page header.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn frequencies(&self) -> &FrequencyMap {
		&self.frequencies
	}

	/// Read failure that cut the input short, if any.
	pub fn interrupted(&self) -> Option<&Error> {
		self.interrupted.as_ref()
	}

	/// Selects the `n` most frequent words (at most the number of distinct words).
	pub fn display_set(&self, n: usize) -> DisplaySet {
		select_top(&self.frequencies, n)
	}

	/// Writes the HTML page for `options.limit` words to `out`.
	///
	/// # Errors
	/// Returns `Error::Io` if writing fails.
	pub fn write_html<W: Write>(&self, out: &mut W, options: &TagCloudOptions) -> Result<(), Error> {
		let set = self.display_set(options.limit);
		render::write_html(out, &self.name, &set, options.stylesheets())?;
		Ok(())
	}

	/// Renders the HTML page for `options.limit` words.
	pub fn to_html(&self, options: &TagCloudOptions) -> String {
		render::to_html(&self.name, &self.display_set(options.limit), options.stylesheets())
	}

	/// Writes the HTML page to a file, replacing it if it exists.
	///
	/// # Errors
	/// Returns `Error::Io` if the file cannot be created or written.
	pub fn write_to_path<P: AsRef<Path>>(&self, path: P, options: &TagCloudOptions) -> Result<(), Error> {
		let mut writer = io::create_writer(&path)?;
		self.write_html(&mut writer, options)?;
		writer.flush()?;
		info!("Wrote tag cloud of {} to {}", self.name, path.as_ref().display());
		Ok(())
	}

	/// Default output location for an input file: same path, `.html` extension.
	///
	/// # Errors
	/// Returns `Error::Io` if `input` has no file name.
	pub fn default_output_path<P: AsRef<Path>>(input: P) -> Result<PathBuf, Error> {
		Ok(io::html_output_path(input)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn reader_and_text_agree() {
		let text = "One fish, two fish.\nRed fish, blue fish.\n";
		let separators = Separators::default();
		let from_reader = TagCloud::from_reader("fish", Cursor::new(text), &separators);
		let from_text = TagCloud::from_text("fish", text, &separators);

		assert_eq!(from_reader.frequencies(), from_text.frequencies());
		assert_eq!(from_reader.frequencies().get("fish"), Some(4));
		assert!(from_reader.interrupted().is_none());
	}

	#[test]
	fn text_with_bare_carriage_returns() {
		let cloud = TagCloud::from_text("mac", "one\rtwo\none", &Separators::new(" ."));
		assert_eq!(cloud.frequencies().get("one"), Some(2));
		assert_eq!(cloud.frequencies().get("two"), Some(1));
		assert_eq!(cloud.frequencies().len(), 2);
	}

	#[test]
	fn to_html_uses_limit() {
		let cloud = TagCloud::from_text("doc", "a a b c", &Separators::default());
		let mut options = TagCloudOptions::default();
		options.limit = 2;
		options.set_stylesheets(Vec::new());

		let html = cloud.to_html(&options);
		assert!(html.contains("Top 2 words in doc"));
		assert!(html.contains(">a</span>"));
		assert!(html.contains(">c</span>"));
		assert!(!html.contains(">b</span>"));
	}

	#[test]
	fn default_output_path_swaps_extension() {
		let path = TagCloud::default_output_path("books/moby.txt").unwrap();
		assert_eq!(path, PathBuf::from("books/moby.html"));
	}

	#[test]
	fn missing_file_is_io_error() {
		let result = TagCloud::from_path("definitely/not/here.txt", &Separators::default());
		assert!(matches!(result, Err(Error::Io(_))));
	}
}
