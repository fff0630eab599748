use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Opens a text file for line-by-line reading.
pub(crate) fn open_reader<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Creates (or truncates) a file for buffered writing.
pub(crate) fn create_writer<P: AsRef<Path>>(filename: P) -> io::Result<BufWriter<File>> {
	Ok(BufWriter::new(File::create(filename)?))
}

/// Page written next to an input file when no output is given.
///
/// Examples:
/// - `books/moby.txt` → `books/moby.html`
/// - `notes` → `notes.html`
pub(crate) fn html_output_path<P: AsRef<Path>>(input_path: P) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();
	if input_path.file_stem().is_none() {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"));
	}
	Ok(input_path.with_extension("html"))
}

/// Name shown in the rendered header for an input path.
///
/// The path is kept as given by the user, matching what they typed.
pub(crate) fn display_name<P: AsRef<Path>>(input_path: P) -> String {
	input_path.as_ref().to_string_lossy().to_string()
}
