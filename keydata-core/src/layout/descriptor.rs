use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::io::read_file;
use crate::Result;

/// One physical key of a descriptor.
///
/// Rows and columns are signed so that out-of-grid placements (including
/// negative ones) are read and then ignored rather than rejected. The
/// character is kept as raw JSON for the same reason: a missing, null or
/// non-string `char` only invalidates this placement.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct KeyPlacement {
	pub row: i64,
	pub col: i64,
	#[serde(rename = "char", default)]
	pub character: Option<Value>,
}

/// A layout as published: a name and its key placements.
///
/// Unknown fields (author, board, fingering...) are ignored.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutDescriptor {
	pub name: String,
	#[serde(default)]
	pub keys: Vec<KeyPlacement>,
}

impl LayoutDescriptor {
	/// Reads a descriptor file.
	pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(serde_json::from_str(&read_file(path)?)?)
	}
}
