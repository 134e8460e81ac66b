use std::fmt;

use serde_json::Value;

use super::descriptor::KeyPlacement;
use crate::{Error, Result};

/// Marker for a key with no character.
pub const SENTINEL: char = '~';

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 10;
pub const KEY_COUNT: usize = ROWS * COLUMNS;

/// Characters every complete layout must place.
pub const REQUIRED: &str = "abcdefghijklmnopqrstuvwxyz,.'";

/// Characters that may be filled into free keys when a layout omits them,
/// in fill order.
pub const BACKFILL: [char; 3] = [',', '.', '\''];

/// A 30-key layout, indexed by `row * 10 + col`.
///
/// # Invariants
/// - Every key holds a character of [`REQUIRED`] or [`SENTINEL`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
	keys: [char; KEY_COUNT],
}

impl Default for Layout {
	fn default() -> Self {
		Self { keys: [SENTINEL; KEY_COUNT] }
	}
}

impl Layout {
	/// Creates a layout with every key unused.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a layout from descriptor placements; see [`Layout::place`].
	pub fn from_placements<'a, I>(placements: I) -> Self
	where
		I: IntoIterator<Item = &'a KeyPlacement>,
	{
		let mut layout = Self::empty();
		for placement in placements {
			layout.place(placement);
		}
		layout
	}

	/// Parses a 30-character layout string.
	///
	/// # Errors
	/// Returns an error if the string does not have 30 characters, or holds
	/// a character outside [`REQUIRED`] and [`SENTINEL`].
	pub fn parse(text: &str) -> Result<Self> {
		let chars: Vec<char> = text.chars().collect();
		if chars.len() != KEY_COUNT {
			return Err(Error::InvalidLayout(format!("expected {KEY_COUNT} keys, got {}", chars.len())));
		}

		let mut layout = Self::empty();
		for (index, c) in chars.into_iter().enumerate() {
			if c != SENTINEL && !REQUIRED.contains(c) {
				return Err(Error::InvalidLayout(format!("unexpected character '{c}' at key {index}")));
			}
			layout.keys[index] = c;
		}
		Ok(layout)
	}

	/// Places a single key.
	///
	/// The placement is ignored (and `false` returned) if it lies outside
	/// rows 0-2 / columns 0-9, or if its character is missing, not a string,
	/// or not exactly one character of [`REQUIRED`]. A later placement on the
	/// same key overwrites the earlier one.
	pub fn place(&mut self, placement: &KeyPlacement) -> bool {
		let (Ok(row), Ok(col)) = (usize::try_from(placement.row), usize::try_from(placement.col)) else {
			return false;
		};
		if row >= ROWS || col >= COLUMNS {
			return false;
		}

		let Some(Value::String(text)) = &placement.character else {
			return false;
		};
		let mut chars = text.chars();
		let (Some(c), None) = (chars.next(), chars.next()) else {
			return false;
		};
		if !REQUIRED.contains(c) {
			return false;
		}

		self.keys[row * COLUMNS + col] = c;
		true
	}

	/// Returns the required characters not placed on any key, in [`REQUIRED`] order.
	pub fn missing(&self) -> Vec<char> {
		REQUIRED.chars().filter(|c| !self.keys.contains(c)).collect()
	}

	/// Fills missing punctuation into free keys.
	///
	/// Only applies when every missing character is one of [`BACKFILL`]:
	/// they are placed in `, . '` order on the lowest-index free keys.
	/// A character with no free key left stays missing.
	pub fn backfill_punctuation(&mut self) {
		let missing = self.missing();
		if missing.is_empty() || !missing.iter().all(|c| BACKFILL.contains(c)) {
			return;
		}

		for c in BACKFILL.iter().filter(|c| missing.contains(c)) {
			match self.keys.iter().position(|key| *key == SENTINEL) {
				Some(free) => self.keys[free] = *c,
				None => break,
			}
		}
	}

	/// Returns `true` if every required character is placed.
	pub fn is_complete(&self) -> bool {
		self.missing().is_empty()
	}

	/// Returns the placed keys as `(index, character)`, skipping unused keys.
	pub fn placed(&self) -> impl Iterator<Item = (usize, char)> + '_ {
		self.keys.iter().copied().enumerate().filter(|(_, c)| *c != SENTINEL)
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in &self.keys {
			write!(f, "{c}")?;
		}
		Ok(())
	}
}
