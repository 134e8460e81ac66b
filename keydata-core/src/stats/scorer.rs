use std::collections::HashMap;

use indexmap::IndexMap;

use super::metrics::Metric;
use super::position::Position;
use crate::layout::{Layout, LayoutSet};
use crate::ngram::{FrequencyReport, NGramKind};
use crate::Result;

/// Layout name -> metric name -> frequency (percent).
///
/// This is the `data.json` record format read by the percentile calculator.
pub type StatsTable = IndexMap<String, IndexMap<String, f64>>;

/// Matching and total n-gram counts of one metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricCount {
	/// Occurrences of n-grams matching the metric
	pub count: u64,
	/// Occurrences of all n-grams fully placed on the layout
	pub total: u64,
}

impl MetricCount {
	/// Frequency in percent; 0 when no n-gram could be placed.
	pub fn frequency(&self) -> f64 {
		if self.total == 0 {
			return 0.0;
		}
		self.count as f64 / self.total as f64 * 100.0
	}
}

/// Maps every placed character to its key position.
///
/// A character placed twice keeps its last position.
pub fn keymap(layout: &Layout) -> HashMap<char, Position> {
	layout.placed().map(|(index, c)| (c, Position::new(index))).collect()
}

/// Counts every metric of a layout over a frequency report.
///
/// N-grams with a character absent from the layout are ignored entirely
/// (neither matching nor part of the total).
pub fn count_metrics(layout: &Layout, report: &FrequencyReport) -> HashMap<Metric, MetricCount> {
	let keymap = keymap(layout);
	let mut counts: HashMap<Metric, MetricCount> = Metric::ALL.iter().map(|metric| (*metric, MetricCount::default())).collect();

	for kind in [NGramKind::Bigram, NGramKind::Skipgram, NGramKind::Trigram] {
		let metrics: Vec<Metric> = Metric::ALL.into_iter().filter(|metric| metric.kind() == kind).collect();

		for (gram, occurrences) in report.table(kind).iter() {
			let Some(keys) = gram.chars().map(|c| keymap.get(&c).copied()).collect::<Option<Vec<_>>>() else {
				continue;
			};

			for metric in &metrics {
				let entry = counts.entry(*metric).or_default();
				entry.total += occurrences;
				if metric.matches(&keys) {
					entry.count += occurrences;
				}
			}
		}
	}

	counts
}

/// Returns the frequency of every metric, in [`Metric::ALL`] order.
pub fn score_layout(layout: &Layout, report: &FrequencyReport) -> IndexMap<String, f64> {
	let counts = count_metrics(layout, report);
	Metric::ALL
		.iter()
		.map(|metric| (metric.name().to_owned(), counts.get(metric).map(MetricCount::frequency).unwrap_or(0.0)))
		.collect()
}

/// Scores every layout of a set.
///
/// # Errors
/// Returns an error if a layout string is not a valid 30-key layout.
pub fn score_layouts(layouts: &LayoutSet, report: &FrequencyReport) -> Result<StatsTable> {
	let mut table = StatsTable::new();
	for (name, text) in layouts.iter() {
		let layout = Layout::parse(text)?;
		table.insert(name.clone(), score_layout(&layout, report));
	}
	log::info!("scored {} layouts", table.len());
	Ok(table)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ngram::analyze;

	const QWERTY: &str = "qwertyuiopasdfghjkl'zxcvbnm,.~";

	#[test]
	fn frequencies_over_placed_grams() {
		let layout = Layout::parse(QWERTY).unwrap();
		// bigrams: ed (sfb) x2, de (sfb), ab, b; (';' unplaced, ignored)
		let report = analyze("ed ed de ab b;");
		let counts = count_metrics(&layout, &report);

		assert_eq!(counts[&Metric::Sfb], MetricCount { count: 3, total: 4 });
		assert_eq!(score_layout(&layout, &report).get("sfb"), Some(&75.0));
	}

	#[test]
	fn repeated_character_keeps_last_position() {
		let layout = Layout::parse(&format!("a{}a", "~".repeat(28))).unwrap();
		let keymap = keymap(&layout);
		assert_eq!(keymap.len(), 1);
		assert_eq!(keymap[&'a'], Position::new(29));
	}

	#[test]
	fn nothing_placed_scores_zero() {
		let layout = Layout::empty();
		let scores = score_layout(&layout, &analyze("the quick brown fox"));
		assert_eq!(scores.len(), Metric::ALL.len());
		assert!(scores.values().all(|value| *value == 0.0));
	}

	#[test]
	fn score_layouts_keeps_layout_order() {
		let mut layouts = LayoutSet::new();
		layouts.insert("qwerty".to_owned(), QWERTY.to_owned());
		layouts.insert("dvorak".to_owned(), "',.pyfgcrlaoeuidhtns~qjkxbmwvz".to_owned());

		let table = score_layouts(&layouts, &analyze("the quick brown fox jumps over the lazy dog")).unwrap();
		assert_eq!(table.keys().collect::<Vec<_>>(), vec!["qwerty", "dvorak"]);
		let qwerty = table.get("qwerty").unwrap();
		assert_eq!(qwerty.keys().collect::<Vec<_>>(), Metric::ALL.iter().map(|m| m.name()).collect::<Vec<_>>());
	}

	#[test]
	fn invalid_layout_is_an_error() {
		let mut layouts = LayoutSet::new();
		layouts.insert("short".to_owned(), "abc".to_owned());
		assert!(score_layouts(&layouts, &FrequencyReport::default()).is_err());
	}
}
