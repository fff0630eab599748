//! Tag cloud generation library.
//!
//! This crate turns a text document into a tag cloud, including:
//! - Separator-based tokenization of raw text
//! - Word frequency aggregation (sequential or chunked across threads)
//! - Deterministic top-N selection and font-size scaling
//! - HTML rendering of the selected words
//!
//! The pipeline types are exposed through [`cloud`]. File and stream
//! helpers are kept internal.

/// Text analysis pipeline and rendering.
///
/// Data flows one way: text → tokens → frequency map → display set → HTML.
pub mod cloud;

/// Error type shared by the whole pipeline.
pub mod error;

/// I/O utilities (file opening, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use cloud::display_set::{CloudEntry, DisplaySet};
pub use cloud::font::{MAX_FONT, MIN_FONT, SPAN, font_bucket};
pub use cloud::frequency_map::FrequencyMap;
pub use cloud::options::{TagCloudOptions, parse_limit};
pub use cloud::ranker::{clamp_limit, select_top};
pub use cloud::separators::{DEFAULT_SEPARATORS, Separators};
pub use cloud::tag_cloud::TagCloud;
pub use cloud::tokenizer::{Token, TokenKind, Tokens, next_token, tokenize};
pub use error::Error;
