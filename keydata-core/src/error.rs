use thiserror::Error;

/// Errors produced by the pipeline steps.
///
/// Every step is a one-shot transformation: an error aborts the step and
/// nothing is retried. The only tolerated failures (malformed layout
/// descriptors) never surface here.
#[derive(Debug, Error)]
pub enum Error {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The quote page did not have the expected table structure.
	#[error("unexpected HTML structure: {0}")]
	Html(String),

	#[error("invalid layout: {0}")]
	InvalidLayout(String),

	/// The percentile reference record is absent from the input.
	#[error("reference record `{0}` not found")]
	MissingReference(String),

	/// The record to grade is absent from the input.
	#[error("record `{0}` not found")]
	MissingRecord(String),

	/// A record lacks a category of the reference record, or holds a non-numeric value for it.
	#[error("record `{record}` has no numeric value for `{category}`")]
	MissingCategory { record: String, category: String },
}

pub type Result<T> = std::result::Result<T, Error>;
