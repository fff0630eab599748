//! Top-level module for the tag cloud pipeline.
//!
//! This module provides every stage between raw text and rendered HTML:
//! - Separator classification (`Separators`)
//! - Token segmentation (`Tokens`)
//! - Word counting (`FrequencyMap`)
//! - Top-N selection and font scaling (`DisplaySet`)
//! - A high-level interface tying the stages together (`TagCloud`)

/// Character classifier built from a separator specification string.
pub mod separators;

/// Lossless segmentation of a line into word and separator runs.
pub mod tokenizer;

/// Word → count aggregation, sequential or chunked across worker threads.
///
/// Supports merging partial maps by summing counts.
pub mod frequency_map;

/// Selection of the N most frequent words with a fixed tie-break.
pub mod ranker;

/// Linear mapping of a count onto a discrete font-size class.
pub mod font;

/// Selected entries in display (alphabetical) order.
pub mod display_set;

/// HTML output of a display set.
pub mod render;

/// Configuration record for a tag cloud run.
pub mod options;

/// High-level interface for building and writing a tag cloud.
///
/// Reads an input document, keeps its frequency map and renders
/// display sets of any size from it.
pub mod tag_cloud;
