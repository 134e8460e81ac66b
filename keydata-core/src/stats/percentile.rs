use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::metrics::Metric;
use crate::io::read_file;
use crate::{Error, Result};

/// Number of percentiles per category (1st to 100th).
pub const PERCENTILES: usize = 100;

/// Default reference record of `data.json`.
pub const DEFAULT_REFERENCE: &str = "whorf";

/// Record name -> category -> value, as read from `data.json`.
pub type Records = IndexMap<String, IndexMap<String, Value>>;

/// A value that can be gathered into a percentile distribution.
pub trait RecordValue {
	fn numeric(&self) -> Option<f64>;
}

impl RecordValue for f64 {
	fn numeric(&self) -> Option<f64> {
		Some(*self)
	}
}

impl RecordValue for Value {
	fn numeric(&self) -> Option<f64> {
		self.as_f64()
	}
}

/// Percentile of an ascending-sorted distribution, by linear interpolation
/// between the two closest order statistics.
///
/// `p` is in percent (0..=100); `sorted` must not be empty.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
	let rank = p / 100.0 * (sorted.len() - 1) as f64;
	let lower = rank.floor() as usize;
	let upper = rank.ceil() as usize;
	let (low, high) = (sorted[lower], sorted[upper]);

	// Clamped so rounding never steps outside the bracketing values.
	(low + (high - low) * (rank - lower as f64)).max(low).min(high)
}

/// Returns the 1st to 100th percentiles of `values`.
pub fn percentiles(values: &[f64]) -> Vec<f64> {
	let mut sorted = values.to_vec();
	sorted.sort_by(f64::total_cmp);
	if sorted.is_empty() {
		return Vec::new();
	}
	(1..=PERCENTILES).map(|p| percentile(&sorted, p as f64)).collect()
}

/// Category -> 100 percentile values.
///
/// Serialized as a JSON object of arrays, categories in reference-record order.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct PercentileReport {
	categories: IndexMap<String, Vec<f64>>,
}

impl PercentileReport {
	/// Computes the percentile distributions of a set of records.
	///
	/// The categories are the keys of the `reference` record; each category
	/// is gathered over every record, the reference included.
	///
	/// # Errors
	/// - The reference record does not exist
	/// - A record has no numeric value for a category
	pub fn from_records<V: RecordValue>(records: &IndexMap<String, IndexMap<String, V>>, reference: &str) -> Result<Self> {
		let categories = records
			.get(reference)
			.ok_or_else(|| Error::MissingReference(reference.to_owned()))?;

		let mut report = Self::default();
		for category in categories.keys() {
			let values = records
				.iter()
				.map(|(name, record)| {
					record
						.get(category)
						.and_then(|value| value.numeric())
						.ok_or_else(|| Error::MissingCategory { record: name.to_owned(), category: category.to_owned() })
				})
				.collect::<Result<Vec<f64>>>()?;

			report.categories.insert(category.clone(), percentiles(&values));
		}

		log::info!("computed percentiles of {} categories over {} records", report.categories.len(), records.len());
		Ok(report)
	}

	/// Reads `data.json`-style records.
	pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Records> {
		Ok(serde_json::from_str(&read_file(path)?)?)
	}

	pub fn get(&self, category: &str) -> Option<&[f64]> {
		self.categories.get(category).map(Vec::as_slice)
	}

	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	/// Grades every category of one record from 0 to 100, in report order.
	///
	/// See `grade_value`. A category named after a [`Metric`] uses its direction; any other
	/// category is graded as lower-is-better.
	///
	/// # Errors
	/// - The record does not exist
	/// - The record has no numeric value for a category
	pub fn grade<V: RecordValue>(&self, records: &IndexMap<String, IndexMap<String, V>>, name: &str) -> Result<IndexMap<String, u32>> {
		let record = records.get(name).ok_or_else(|| Error::MissingRecord(name.to_owned()))?;

		let mut grades = IndexMap::new();
		for (category, values) in &self.categories {
			let value = record
				.get(category)
				.and_then(|value| value.numeric())
				.ok_or_else(|| Error::MissingCategory { record: name.to_owned(), category: category.clone() })?;
			let positive = Metric::from_name(category).is_some_and(Metric::is_positive);
			grades.insert(category.clone(), grade_value(values, value, positive));
		}
		Ok(grades)
	}
}

/// Grades a value against a percentile distribution, from 0 to 100.
///
/// The raw rank is the index of the first percentile value greater than or
/// equal to `value` (100 if none). For positive statistics (higher is better)
/// the grade is `raw + 1`, capped at 100; otherwise `100 - raw`.
fn grade_value(distribution: &[f64], value: f64, positive: bool) -> u32 {
	let raw = distribution.iter().position(|v| value <= *v).unwrap_or(PERCENTILES) as u32;
	let max = PERCENTILES as u32;

	if positive { (raw + 1).min(max) } else { max - raw }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn records(json: &str) -> Records {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn linear_interpolation() {
		let sorted = [1.0, 2.0, 3.0, 4.0];
		assert_eq!(percentile(&sorted, 100.0), 4.0);
		assert_eq!(percentile(&sorted, 50.0), 2.5);
		assert_eq!(percentile(&sorted, 0.0), 1.0);
		assert!((percentile(&sorted, 10.0) - 1.3).abs() < 1e-12);
	}

	#[test]
	fn single_value_distribution() {
		assert_eq!(percentiles(&[7.5]), vec![7.5; 100]);
	}

	#[test]
	fn percentiles_are_non_decreasing() {
		let values: Vec<f64> = (0..37).map(|i| ((i * 7919) % 101) as f64 / 3.0).collect();
		let result = percentiles(&values);
		assert_eq!(result.len(), 100);
		assert!(result.windows(2).all(|pair| pair[0] <= pair[1]));
		assert_eq!(result[99], values.iter().copied().fold(f64::MIN, f64::max));
	}

	#[test]
	fn report_uses_reference_categories() {
		let data = records(
			r#"{
				"qwerty": {"sfb": 6.0, "roll": 30.0, "extra": "ignored"},
				"whorf": {"sfb": 1.0, "roll": 40.0},
				"dvorak": {"sfb": 2.0, "roll": 35.0}
			}"#,
		);
		let report = PercentileReport::from_records(&data, "whorf").unwrap();

		assert_eq!(report.categories().collect::<Vec<_>>(), vec!["sfb", "roll"]);
		let sfb = report.get("sfb").unwrap();
		assert_eq!(sfb[49], 2.0);
		assert_eq!(sfb[99], 6.0);

		let json = crate::io::to_json_pretty(&report).unwrap();
		assert!(json.starts_with("{\n    \"sfb\": [\n        1.0"));
	}

	#[test]
	fn missing_reference_or_category_is_an_error() {
		let data = records(r#"{"whorf": {"sfb": 1.0}, "other": {"roll": 2.0}}"#);
		assert!(matches!(PercentileReport::from_records(&data, "semimak"), Err(Error::MissingReference(_))));
		assert!(matches!(
			PercentileReport::from_records(&data, "whorf"),
			Err(Error::MissingCategory { record, category }) if record == "other" && category == "sfb"
		));
	}

	#[test]
	fn rank_against_distribution() {
		let values: Vec<f64> = (1..=100).map(f64::from).collect();
		let mut data = IndexMap::new();
		for (i, value) in values.iter().enumerate() {
			let mut record = IndexMap::new();
			record.insert("sfb".to_owned(), *value);
			data.insert(if i == 0 { "whorf".to_owned() } else { format!("layout{i}") }, record);
		}
		let report = PercentileReport::from_records(&data, "whorf").unwrap();
		let sfb = report.get("sfb").unwrap();

		assert_eq!(grade_value(sfb, 0.5, false), 100);
		assert_eq!(grade_value(sfb, 0.5, true), 1);
		assert_eq!(grade_value(sfb, 1000.0, false), 0);
		assert_eq!(grade_value(sfb, 1000.0, true), 100);
		assert_eq!(report.get("roll"), None);
	}

	#[test]
	fn grade_uses_metric_direction() {
		let data = records(
			r#"{
				"whorf": {"sfb": 1.0, "roll": 40.0, "score": 3.0},
				"qwerty": {"sfb": 6.0, "roll": 30.0, "score": 9.0},
				"dvorak": {"sfb": 2.0, "roll": 35.0}
			}"#,
		);
		let mut complete = data.clone();
		complete.shift_remove("dvorak");
		let report = PercentileReport::from_records(&complete, "whorf").unwrap();

		let grades = report.grade(&complete, "whorf").unwrap();
		assert_eq!(grades.keys().collect::<Vec<_>>(), vec!["sfb", "roll", "score"]);
		assert_eq!(grades["sfb"], 100);
		assert_eq!(grades["roll"], 100);
		assert_eq!(grades["score"], 100);

		let grades = report.grade(&complete, "qwerty").unwrap();
		assert_eq!(grades["sfb"], 1);
		assert_eq!(grades["roll"], 1);

		assert!(matches!(report.grade(&data, "dvorak"), Err(Error::MissingCategory { category, .. }) if category == "score"));
		assert!(matches!(report.grade(&data, "colemak"), Err(Error::MissingRecord(name)) if name == "colemak"));
	}
}
