use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Occurrence count of a single gram.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GramCount {
	/// Number of windows producing this gram
	count: u64,
	/// Text offset of the first window producing this gram
	first_seen: usize,
}

/// Occurrence counts for one n-gram kind.
///
/// Besides its count, every gram remembers where it was first seen, so that
/// tables built from different parts of a text can be merged and still be
/// ordered exactly as a single left-to-right scan would order them.
///
/// # Invariants
/// - Every stored count is >= 1
/// - [`FrequencyTable::most_common`] is sorted by descending count, ties by
///   first occurrence
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	grams: HashMap<String, GramCount>,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `gram`, found at text offset `position`.
	pub fn add(&mut self, gram: String, position: usize) {
		self.add_count(gram, 1, position);
	}

	fn add_count(&mut self, gram: String, count: u64, position: usize) {
		let entry = self.grams.entry(gram).or_insert(GramCount { count: 0, first_seen: position });
		entry.count += count;
		entry.first_seen = entry.first_seen.min(position);
	}

	/// Merges another table into this one.
	///
	/// Counts are summed; the earliest first occurrence is kept.
	pub fn merge(&mut self, other: &Self) {
		for (gram, value) in &other.grams {
			self.add_count(gram.clone(), value.count, value.first_seen);
		}
	}

	/// Returns the count of `gram` (0 if never seen).
	pub fn count(&self, gram: &str) -> u64 {
		self.grams.get(gram).map(|value| value.count).unwrap_or(0)
	}

	/// Sum of all counts.
	pub fn total(&self) -> u64 {
		self.grams.values().map(|value| value.count).sum()
	}

	/// Number of distinct grams.
	pub fn len(&self) -> usize {
		self.grams.len()
	}

	pub fn is_empty(&self) -> bool {
		self.grams.is_empty()
	}

	/// Iterates over grams and counts, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.grams.iter().map(|(gram, value)| (gram.as_str(), value.count))
	}

	/// Returns all grams with their counts, most common first.
	pub fn most_common(&self) -> Vec<(&str, u64)> {
		let mut entries: Vec<_> = self.grams.iter().collect();
		entries.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));
		entries.into_iter().map(|(gram, value)| (gram.as_str(), value.count)).collect()
	}
}

/// Serialized as a JSON object of gram -> count, most common first.
impl Serialize for FrequencyTable {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.most_common().into_iter().collect::<IndexMap<_, _>>().serialize(serializer)
	}
}

/// Document order stands in for the first occurrence, so a table read back
/// from a report keeps the order it was written in.
impl From<IndexMap<String, u64>> for FrequencyTable {
	fn from(counts: IndexMap<String, u64>) -> Self {
		let mut table = Self::new();
		for (position, (gram, count)) in counts.into_iter().enumerate() {
			table.add_count(gram, count, position);
		}
		table
	}
}

impl<'de> Deserialize<'de> for FrequencyTable {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		IndexMap::<String, u64>::deserialize(deserializer).map(Self::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(grams: &[&str]) -> FrequencyTable {
		let mut table = FrequencyTable::new();
		for (position, gram) in grams.iter().enumerate() {
			table.add(gram.to_string(), position);
		}
		table
	}

	#[test]
	fn ties_keep_encounter_order() {
		let table = table(&["b", "a", "c", "a", "c"]);
		assert_eq!(table.most_common(), vec![("a", 2), ("c", 2), ("b", 1)]);
		assert_eq!(table.total(), 5);
	}

	#[test]
	fn merge_sums_counts_and_keeps_earliest_position() {
		let mut left = FrequencyTable::new();
		left.add("x".to_owned(), 10);
		left.add("y".to_owned(), 11);
		let mut right = FrequencyTable::new();
		right.add("y".to_owned(), 2);
		right.add("x".to_owned(), 3);

		left.merge(&right);
		assert_eq!(left.count("x"), 2);
		assert_eq!(left.most_common(), vec![("y", 2), ("x", 2)]);
	}

	#[test]
	fn serializes_most_common_first() {
		let json = serde_json::to_string(&table(&["t", "h", "e", "e"])).unwrap();
		assert_eq!(json, r#"{"e":2,"t":1,"h":1}"#);
	}

	#[test]
	fn deserialized_table_keeps_document_order() {
		let table: FrequencyTable = serde_json::from_str(r#"{"th": 5, "he": 5, "in": 3}"#).unwrap();
		assert_eq!(table.most_common(), vec![("th", 5), ("he", 5), ("in", 3)]);
	}
}
