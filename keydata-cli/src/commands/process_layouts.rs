use std::path::Path;

use keydata_core::layout::extract_layouts;

use super::emit;

pub fn run(source_dir: &Path, output: Option<&Path>) -> keydata_core::Result<()> {
	let layouts = extract_layouts(source_dir)?;
	emit(&layouts, output)
}
