use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use super::kind::NGramKind;
use super::table::FrequencyTable;
use super::text::{is_layout_char, unshift};
use crate::io::{read_file, write_json};
use crate::Result;

/// Widest window among all kinds.
const MAX_WIDTH: usize = 3;

/// The four frequency tables of a corpus.
///
/// Serialized as `{"monograms": {...}, "bigrams": {...}, "skipgrams": {...}, "trigrams": {...}}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FrequencyReport {
	pub monograms: FrequencyTable,
	pub bigrams: FrequencyTable,
	pub skipgrams: FrequencyTable,
	pub trigrams: FrequencyTable,
}

impl FrequencyReport {
	pub fn table(&self, kind: NGramKind) -> &FrequencyTable {
		match kind {
			NGramKind::Monogram => &self.monograms,
			NGramKind::Bigram => &self.bigrams,
			NGramKind::Skipgram => &self.skipgrams,
			NGramKind::Trigram => &self.trigrams,
		}
	}

	fn table_mut(&mut self, kind: NGramKind) -> &mut FrequencyTable {
		match kind {
			NGramKind::Monogram => &mut self.monograms,
			NGramKind::Bigram => &mut self.bigrams,
			NGramKind::Skipgram => &mut self.skipgrams,
			NGramKind::Trigram => &mut self.trigrams,
		}
	}

	/// Merges another report, table by table.
	pub fn merge(&mut self, other: &Self) {
		for kind in NGramKind::ALL {
			self.table_mut(kind).merge(other.table(kind));
		}
	}

	/// Reads a report previously written with [`FrequencyReport::write`].
	pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(serde_json::from_str(&read_file(path)?)?)
	}

	/// Writes the report as 4-space indented JSON.
	pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		write_json(path, self)
	}
}

/// Counts every window starting in `chars[..starts]`.
///
/// - `chars` may extend past `starts` so that windows near the end of a
///   chunk can be completed
/// - `offset` is the text position of `chars[0]`, used to order ties
fn count_windows(chars: &[char], starts: usize, offset: usize) -> FrequencyReport {
	let mut report = FrequencyReport::default();

	for kind in NGramKind::ALL {
		let table = report.table_mut(kind);
		let width = kind.width();

		for (i, window) in chars.windows(width).take(starts).enumerate() {
			if window.iter().all(|c| is_layout_char(*c)) {
				table.add(kind.key(window), offset + i);
			}
		}
	}

	report
}

/// Analyzes a text on the current thread.
pub fn analyze_sequential(text: &str) -> FrequencyReport {
	let chars = unshift(text);
	count_windows(&chars, chars.len(), 0)
}

/// Analyzes a text and returns its four frequency tables.
///
/// # Behavior
/// - Unshifts the text (lowercase, shifted symbols to base keys).
/// - Splits window start positions into chunks (based on CPU cores * factor).
/// - Spawns threads to count each chunk, each chunk overlapping the next by
///   the widest window minus one character.
/// - Merges all partial reports.
///
/// The result is identical to [`analyze_sequential`], order included.
pub fn analyze(text: &str) -> FrequencyReport {
	let chars = unshift(text);
	if chars.is_empty() {
		return FrequencyReport::default();
	}

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = chars.len().div_ceil(chunks).max(1);

	let (tx, rx) = mpsc::channel();
	for start in (0..chars.len()).step_by(chunk_size) {
		let tx = tx.clone();
		let starts = chunk_size.min(chars.len() - start);
		let end = (start + starts + MAX_WIDTH - 1).min(chars.len());
		let chunk: Vec<char> = chars[start..end].to_vec();

		thread::spawn(move || {
			let partial = count_windows(&chunk, starts, start);
			tx.send(partial).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut report = FrequencyReport::default();
	for partial in rx.iter() {
		report.merge(&partial);
	}

	log::info!(
		"counted {} monograms, {} bigrams, {} skipgrams, {} trigrams",
		report.monograms.len(),
		report.bigrams.len(),
		report.skipgrams.len(),
		report.trigrams.len()
	);
	report
}

/// Reads a corpus file and analyzes it.
pub fn analyze_file<P: AsRef<Path>>(corpus: P) -> Result<FrequencyReport> {
	let corpus = corpus.as_ref();
	log::info!("analyzing {}", corpus.display());
	Ok(analyze(&read_file(corpus)?))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn space_is_not_counted() {
		let report = analyze("ab ab");
		assert_eq!(report.monograms.most_common(), vec![("a", 2), ("b", 2)]);
		assert_eq!(report.bigrams.most_common(), vec![("ab", 2)]);
	}

	#[test]
	fn bigrams_never_span_a_space() {
		let report = analyze("the theft");
		assert_eq!(report.bigrams.most_common(), vec![("th", 2), ("he", 2), ("ef", 1), ("ft", 1)]);
		assert_eq!(report.bigrams.count("e "), 0);
		assert_eq!(report.bigrams.count(" t"), 0);
	}

	#[test]
	fn worked_example_cat() {
		let report = analyze("cat");
		assert_eq!(report.monograms.most_common(), vec![("c", 1), ("a", 1), ("t", 1)]);
		assert_eq!(report.bigrams.most_common(), vec![("ca", 1), ("at", 1)]);
		assert_eq!(report.skipgrams.most_common(), vec![("ct", 1)]);
		assert_eq!(report.trigrams.most_common(), vec![("cat", 1)]);
	}

	#[test]
	fn shifted_symbols_are_counted_as_base_keys() {
		let report = analyze("A? \"B\"");
		assert_eq!(report.monograms.count("/"), 1);
		assert_eq!(report.monograms.count("'"), 2);
		assert_eq!(report.bigrams.count("a/"), 1);
		assert_eq!(report.trigrams.count("'b'"), 1);
	}

	#[test]
	fn short_text_has_no_wide_windows() {
		let report = analyze("ab");
		assert_eq!(report.bigrams.total(), 1);
		assert!(report.skipgrams.is_empty());
		assert!(report.trigrams.is_empty());
		assert_eq!(analyze(""), FrequencyReport::default());
	}

	#[test]
	fn parallel_matches_sequential() {
		let text = "The quick brown fox jumps over the lazy dog; it's 100% true!\n\n\
			Pack my box with five dozen liquor jugs. Sphinx of black quartz, judge my vow? "
			.repeat(40);
		let parallel = analyze(&text);
		let sequential = analyze_sequential(&text);
		assert_eq!(parallel, sequential);
		for kind in NGramKind::ALL {
			assert_eq!(parallel.table(kind).most_common(), sequential.table(kind).most_common());
		}
	}

	#[test]
	fn report_json_round_trip_keeps_order() {
		let report = analyze("the theft of the thing");
		let json = crate::io::to_json_pretty(&report).unwrap();
		assert!(json.starts_with("{\n    \"monograms\": {\n        \"t\": 5,"));

		let read: FrequencyReport = serde_json::from_str(&json).unwrap();
		assert_eq!(read.trigrams.most_common(), report.trigrams.most_common());
	}
}
