use std::path::Path;

use keydata_core::ngram::analyzer::analyze_file;

/// Name of the frequency report inside the output directory.
const REPORT_FILE: &str = "out.json";

pub fn run(corpus: &Path, out_dir: &Path) -> keydata_core::Result<()> {
	let report = analyze_file(corpus)?;
	report.write(out_dir.join(REPORT_FILE))
}
