use std::path::Path;

use indexmap::IndexMap;

use super::descriptor::LayoutDescriptor;
use super::grid::Layout;
use crate::io::{list_files, read_file};
use crate::Result;

/// Layout name -> 30-character layout string, in extraction order.
pub type LayoutSet = IndexMap<String, String>;

/// Reads a layout set previously written as JSON.
pub fn read_layouts<P: AsRef<Path>>(path: P) -> Result<LayoutSet> {
	Ok(serde_json::from_str(&read_file(path)?)?)
}

/// Reconstructs a descriptor's layout.
///
/// Returns `None` when the descriptor has no placements, or when the layout
/// is still incomplete after punctuation backfill.
pub fn extract_layout(descriptor: &LayoutDescriptor) -> Option<Layout> {
	if descriptor.keys.is_empty() {
		return None;
	}

	let mut layout = Layout::from_placements(&descriptor.keys);
	layout.backfill_punctuation();

	layout.is_complete().then_some(layout)
}

/// Extracts every complete layout of a descriptor directory.
///
/// # Behavior
/// - Reads every non-hidden file of `dir`, in sorted order.
/// - Files that are not valid descriptors are skipped with a warning.
/// - Empty or incomplete layouts are dropped.
/// - A later layout with an already-used name replaces the earlier one.
///
/// # Errors
/// Returns an error only if the directory itself cannot be listed.
pub fn extract_layouts<P: AsRef<Path>>(dir: P) -> Result<LayoutSet> {
	let mut layouts = LayoutSet::new();
	let files = list_files(&dir)?;

	for file in &files {
		let descriptor = match LayoutDescriptor::read(file) {
			Ok(descriptor) => descriptor,
			Err(e) => {
				log::warn!("skipping {}: {e}", file.display());
				continue;
			}
		};

		match extract_layout(&descriptor) {
			Some(layout) => {
				layouts.insert(descriptor.name, layout.to_string());
			}
			None => log::debug!("dropping incomplete layout '{}' ({})", descriptor.name, file.display()),
		}
	}

	log::info!("extracted {} of {} layouts", layouts.len(), files.len());
	Ok(layouts)
}
