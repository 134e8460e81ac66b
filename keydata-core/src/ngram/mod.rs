//! Character n-gram frequency analysis of a quote corpus.
//!
//! The corpus is first "unshifted" (lowercased, shifted symbols mapped back
//! to their base key) and then scanned with a sliding window for each
//! n-gram kind:
//! - monograms: single characters
//! - bigrams: adjacent pairs
//! - skipgrams: pairs with one character in between
//! - trigrams: adjacent triples
//!
//! Only windows made entirely of layout characters are counted.

/// Alphabet and unshift pre-processing.
pub mod text;

/// The n-gram kinds and their key construction.
pub mod kind;

/// Ordered occurrence counts for one n-gram kind.
pub mod table;

/// Corpus analysis producing the four frequency tables.
pub mod analyzer;

pub use analyzer::{FrequencyReport, analyze};
pub use kind::NGramKind;
pub use table::FrequencyTable;
