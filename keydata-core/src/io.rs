use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Reads a whole UTF-8 text file into memory.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Creates a directory (and its parents) if it does not exist yet.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> io::Result<()> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		log::debug!("creating directory {}", dir.display());
		fs::create_dir_all(dir)?;
	}
	Ok(())
}

/// Lists all regular files of a directory.
///
/// - Hidden files (leading `.`) are ignored
/// - Subdirectories are not traversed
/// - Paths are returned sorted, so callers see a stable order
pub fn list_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if !path.is_file() {
			continue;
		}
		let hidden = path
			.file_name()
			.map(|name| name.to_string_lossy().starts_with('.'))
			.unwrap_or(true);
		if !hidden {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Serializes a value as JSON with a 4-space indent.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
	let mut buffer = Vec::new();
	let formatter = PrettyFormatter::with_indent(b"    ");
	let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
	value.serialize(&mut serializer)?;

	// serde_json only ever emits valid UTF-8
	Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes a value as 4-space indented JSON, creating the parent directory if needed.
pub fn write_json<T, P>(path: P, value: &T) -> crate::Result<()>
where
	T: Serialize + ?Sized,
	P: AsRef<Path>,
{
	let path = path.as_ref();
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		ensure_dir(parent)?;
	}
	fs::write(path, to_json_pretty(value)?)?;
	log::info!("wrote {}", path.display());
	Ok(())
}
