//! Quote collection for the typing corpus.
//!
//! Quotes come from two typing sites:
//! - monkeytype, a JSON document listing quote objects
//! - typeracer (through typeracerdata), an HTML table of texts
//!
//! Both lists are merged and deduplicated on their normalized text
//! (lowercase, punctuation stripped) into the combined `monkeyracer` set.

/// Text normalization and deduplication.
pub mod normalize;

/// Remote quote sources (fetching and parsing).
pub mod sources;

/// Corpus files (blank-line separated quotes).
pub mod corpus;

pub use corpus::{Corpus, QuoteSets};
pub use normalize::{deduplicate, normalize};
