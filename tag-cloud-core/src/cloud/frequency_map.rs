use std::collections::HashMap;
use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};
use serde::Serialize;

use super::separators::Separators;
use super::tokenizer::tokenize;
use crate::error::Error;

/// Word → occurrence count mapping built from a document.
///
/// Keys are lowercased words; separator runs are never counted.
///
/// # Responsibilities
/// - Count every word token of every line fed to it
/// - Merge with another map built from a different part of the same document
///
/// # Invariants
/// - Every count is strictly positive
/// - The sum of all counts equals the number of word tokens seen
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyMap {
	counts: HashMap<String, usize>,
}

impl FrequencyMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts the words of a single line.
	///
	/// A bare `\r` left in `line` still ends a line: each part is tokenized
	/// independently so a word never spans two lines.
	pub fn add_line(&mut self, line: &str, separators: &Separators) {
		for part in line.split('\r') {
			for token in tokenize(part, separators).filter(|t| t.is_word()) {
				*self.counts.entry(token.to_word()).or_insert(0) += 1;
			}
		}
	}

	/// Counts the words of every line.
	pub fn add_lines<I, S>(&mut self, lines: I, separators: &Separators)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for line in lines {
			self.add_line(line.as_ref(), separators);
		}
	}

	/// Reads `reader` line by line until end of stream, counting words.
	///
	/// # Errors
	/// Returns `Error::StreamRead` as soon as a line cannot be read. Counts
	/// gathered before the failure stay in the map, so it remains usable.
	pub fn add_reader<R: BufRead>(&mut self, reader: R, separators: &Separators) -> Result<(), Error> {
		for (number, line) in reader.lines().enumerate() {
			let line = line.map_err(|err| {
				warn!("Stopped reading at line {}: {}", number + 1, err);
				Error::StreamRead(err)
			})?;
			self.add_line(&line, separators);
		}
		debug!("Aggregated {} distinct words ({} total)", self.len(), self.total());
		Ok(())
	}

	/// Builds a map from a whole stream.
	///
	/// # Errors
	/// Returns `Error::StreamRead` if the stream fails. Use [`FrequencyMap::add_reader`]
	/// to keep the partial counts instead.
	pub fn from_reader<R: BufRead>(reader: R, separators: &Separators) -> Result<Self, Error> {
		let mut map = Self::new();
		map.add_reader(reader, separators)?;
		Ok(map)
	}

	/// Builds a map by splitting `lines` into chunks counted on worker threads.
	///
	/// # Behavior
	/// - Splits input lines into chunks (based on CPU cores * factor).
	/// - Spawns scoped threads to build a partial map for each chunk.
	/// - Merges all partial maps by summing counts.
	///
	/// # Notes
	/// - The result is identical to counting the lines sequentially, since
	///   merging only sums per-word counts.
	pub fn from_lines_parallel<S>(lines: &[S], separators: &Separators) -> Self
	where
		S: AsRef<str> + Sync,
	{
		if lines.is_empty() {
			return Self::new();
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = lines.len().div_ceil(chunks).max(1);

		let mut final_map = Self::new();
		thread::scope(|scope| {
			let (tx, rx) = mpsc::channel();
			for chunk in lines.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial_map = Self::new();
					partial_map.add_lines(chunk, separators);
					// The receiver outlives every worker
					let _ = tx.send(partial_map);
				});
			}
			drop(tx);

			for partial_map in rx.iter() {
				final_map.merge(&partial_map);
			}
		});

		debug!(
			"Aggregated {} lines in chunks of {}: {} distinct words",
			lines.len(),
			chunk_size,
			final_map.len()
		);
		final_map
	}

	/// Merges another map into this one.
	///
	/// Counts for words present in both maps are summed.
	pub fn merge(&mut self, other: &Self) {
		for (word, count) in &other.counts {
			*self.counts.entry(word.clone()).or_insert(0) += *count;
		}
	}

	/// Count of `word`, compared case-insensitively.
	pub fn get(&self, word: &str) -> Option<usize> {
		self.counts.get(&word.to_lowercase()).copied()
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(word, count)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}
}
