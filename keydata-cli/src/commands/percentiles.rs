use std::path::Path;

use keydata_core::stats::PercentileReport;

use super::emit;

/// Emits the percentile report, or the grades of `rank` against it.
pub fn run(data: &Path, reference: &str, rank: Option<&str>, output: Option<&Path>) -> keydata_core::Result<()> {
	let records = PercentileReport::read_records(data)?;
	let report = PercentileReport::from_records(&records, reference)?;

	match rank {
		Some(name) => emit(&report.grade(&records, name)?, output),
		None => emit(&report, output),
	}
}
