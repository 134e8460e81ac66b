//! Data preparation for keyboard layout analysis.
//!
//! This crate provides the independent steps of the layout-analysis pipeline:
//! - Quote scraping, normalization and deduplication
//! - Character n-gram frequency tables over a quote corpus
//! - Layout extraction from per-layout JSON descriptors
//! - Layout scoring against n-gram tables and percentile statistics
//!
//! Each step reads and writes plain files, but every boundary is also
//! available as a typed value so the steps can be chained in-process.

/// Error type shared by every step.
pub mod error;

/// Quote sources, normalization and corpus files.
pub mod quotes;

/// N-gram extraction and frequency tables.
pub mod ngram;

/// Layout descriptors and 30-key layout reconstruction.
pub mod layout;

/// Layout metrics and percentile statistics.
pub mod stats;

/// I/O utilities (file loading, JSON output, directory listing).
pub mod io;

pub use error::{Error, Result};
