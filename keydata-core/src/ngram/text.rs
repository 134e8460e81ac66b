/// Characters an n-gram window may contain: the 30 main-block keys of a
/// standard keyboard plus the apostrophe.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz,./;'";

/// Shifted symbols and the base key that produces them (US layout).
const UNSHIFT: [(char, char); 19] = [
	('!', '1'),
	('@', '2'),
	('#', '3'),
	('$', '4'),
	('%', '5'),
	('^', '6'),
	('&', '7'),
	('*', '8'),
	('(', '9'),
	(')', '0'),
	('_', '-'),
	('+', '='),
	(':', ';'),
	('{', '['),
	('}', ']'),
	('<', ','),
	('>', '.'),
	('?', '/'),
	('"', '\''),
];

/// Returns `true` if `c` may appear in an n-gram.
pub fn is_layout_char(c: char) -> bool {
	ALPHABET.contains(c)
}

/// Maps a single shifted symbol to its base key; other characters are unchanged.
pub fn unshift_char(c: char) -> char {
	UNSHIFT
		.iter()
		.find(|(shifted, _)| *shifted == c)
		.map(|(_, base)| *base)
		.unwrap_or(c)
}

/// Lowercases `text` and maps every shifted symbol to its base key.
///
/// Returns the characters of the processed text, ready for windowing.
pub fn unshift(text: &str) -> Vec<char> {
	text.to_lowercase().chars().map(unshift_char).collect()
}
