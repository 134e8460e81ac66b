pub mod fetch_quotes;
pub mod layout_stats;
pub mod percentiles;
pub mod process_layouts;
pub mod process_quotes;

use std::path::Path;

use serde::Serialize;

/// Prints a report to stdout, or writes it to `output` when given.
pub fn emit<T: Serialize>(report: &T, output: Option<&Path>) -> keydata_core::Result<()> {
	match output {
		Some(path) => keydata_core::io::write_json(path, report),
		None => {
			println!("{}", keydata_core::io::to_json_pretty(report)?);
			Ok(())
		}
	}
}
