use std::path::Path;

use keydata_core::layout::read_layouts;
use keydata_core::ngram::FrequencyReport;
use keydata_core::stats::score_layouts;

use super::emit;

/// Scores every layout of `layouts` (as written by process-layouts) against
/// the corpus frequency report.
pub fn run(layouts: &Path, corpus: &Path, output: Option<&Path>) -> keydata_core::Result<()> {
	let layouts = read_layouts(layouts)?;
	let report = FrequencyReport::read(corpus)?;

	let stats = score_layouts(&layouts, &report)?;
	emit(&stats, output)
}
