use std::fmt;
use std::io;

/// Errors produced while building or writing a tag cloud.
#[derive(Debug)]
pub enum Error {
	/// The input stream could not produce its next line.
	///
	/// Counts aggregated before the failure are kept by the caller.
	StreamRead(io::Error),
	/// A requested word count could not be parsed.
	InvalidCount(String),
	/// Opening the input or writing the output failed.
	Io(io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::StreamRead(err) => write!(f, "Stream Read Error: {}", err),
			Error::InvalidCount(value) => write!(f, "Invalid Count: {:?} is not an integer", value),
			Error::Io(err) => write!(f, "IO Error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::StreamRead(err) | Error::Io(err) => Some(err),
			Error::InvalidCount(_) => None,
		}
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Error {
		Error::Io(err)
	}
}
