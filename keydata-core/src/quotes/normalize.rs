use std::collections::HashSet;

/// Returns the comparison form of a quote.
///
/// - ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`) is removed
/// - The remaining text is lowercased
///
/// Whitespace is kept as-is, so quotes differing only in spacing stay distinct.
pub fn normalize(text: &str) -> String {
	text.chars()
		.filter(|c| !c.is_ascii_punctuation())
		.collect::<String>()
		.to_lowercase()
}

/// Removes quotes whose normalized form was already seen.
///
/// The first occurrence wins and keeps its original casing and punctuation;
/// the relative order of surviving quotes is preserved.
pub fn deduplicate<I, S>(quotes: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut seen = HashSet::new();
	let mut unique = Vec::new();

	for quote in quotes {
		let quote = quote.into();
		if seen.insert(normalize(&quote)) {
			unique.push(quote);
		}
	}

	unique
}
