use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{ensure_dir, read_file};
use crate::quotes::normalize::deduplicate;
use crate::Result;

/// Separator between two quotes in a corpus file.
pub const QUOTE_SEPARATOR: &str = "\n\n";

/// An ordered list of quotes, stored on disk as blank-line separated blocks.
///
/// # Invariants
/// - A quote never contains a blank line, otherwise it would not survive a
///   join/split round-trip
/// - A corpus made of a single empty quote joins to an empty text, which
///   splits back into an empty corpus
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corpus {
	quotes: Vec<String>,
}

impl Corpus {
	pub fn new(quotes: Vec<String>) -> Self {
		Self { quotes }
	}

	pub fn quotes(&self) -> &[String] {
		&self.quotes
	}

	pub fn len(&self) -> usize {
		self.quotes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.quotes.is_empty()
	}

	/// Joins all quotes with a blank line (no trailing separator).
	pub fn join(&self) -> String {
		self.quotes.join(QUOTE_SEPARATOR)
	}

	/// Splits a corpus text back into quotes.
	///
	/// An empty text is an empty corpus, never a corpus of one empty quote.
	pub fn split(text: &str) -> Self {
		if text.is_empty() {
			return Self::default();
		}
		Self { quotes: text.split(QUOTE_SEPARATOR).map(str::to_owned).collect() }
	}

	/// Reads a corpus file.
	pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(Self::split(&read_file(path)?))
	}

	/// Writes the joined corpus to `path`, replacing any previous content.
	pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let path = path.as_ref();
		fs::write(path, self.join())?;
		log::info!("wrote {} quotes to {}", self.quotes.len(), path.display());
		Ok(())
	}
}

/// The three named quote sets written by the fetcher.
///
/// - `monkeytype`: quotes from monkeytype, as downloaded
/// - `typeracer`: quotes from typeracer, as downloaded
/// - `monkeyracer`: both lists concatenated and deduplicated
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSets {
	pub monkeytype: Corpus,
	pub typeracer: Corpus,
	pub monkeyracer: Corpus,
}

impl QuoteSets {
	/// Builds the three sets from the raw source lists.
	///
	/// monkeytype quotes come first, so they win over typeracer duplicates.
	pub fn from_sources(monkeytype: Vec<String>, typeracer: Vec<String>) -> Self {
		let merged = deduplicate(monkeytype.iter().chain(typeracer.iter()).cloned());
		log::info!(
			"{} monkeytype + {} typeracer quotes -> {} unique",
			monkeytype.len(),
			typeracer.len(),
			merged.len()
		);

		Self {
			monkeytype: Corpus::new(monkeytype),
			typeracer: Corpus::new(typeracer),
			monkeyracer: Corpus::new(merged),
		}
	}

	/// Returns each set with its file alias, in output order.
	pub fn named(&self) -> [(&'static str, &Corpus); 3] {
		[
			("monkeytype", &self.monkeytype),
			("typeracer", &self.typeracer),
			("monkeyracer", &self.monkeyracer),
		]
	}

	/// Writes `<alias>.txt` for each set into `dir`, creating it if needed.
	///
	/// Returns the written paths.
	pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
		let dir = dir.as_ref();
		ensure_dir(dir)?;

		let mut written = Vec::new();
		for (alias, corpus) in self.named() {
			let path = dir.join(format!("{alias}.txt"));
			corpus.write(&path)?;
			written.push(path);
		}
		Ok(written)
	}
}
