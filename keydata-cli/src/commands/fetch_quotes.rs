use std::path::Path;
use std::time::Duration;

use keydata_core::quotes::sources::{fetch_monkeytype, fetch_typeracer, http_client};
use keydata_core::quotes::QuoteSets;

/// Downloads both quote sources and writes the three corpus files.
///
/// Any network or parse failure aborts before anything is written.
pub fn run(out_dir: &Path, monkeytype_url: &str, typeracer_url: &str, timeout: u64) -> keydata_core::Result<()> {
	let client = http_client(Duration::from_secs(timeout))?;

	let monkeytype = fetch_monkeytype(&client, monkeytype_url)?;
	let typeracer = fetch_typeracer(&client, typeracer_url)?;

	let sets = QuoteSets::from_sources(monkeytype, typeracer);
	sets.write_to(out_dir)?;
	Ok(())
}
