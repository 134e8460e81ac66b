use std::fmt;

/// The n-gram shapes extracted from a corpus.
///
/// Each kind scans windows of `width()` characters. The key kept for a
/// window is its first `size/2` characters followed by its last
/// `size - size/2` characters, which drops the skipped middle of a
/// skipgram and keeps plain n-grams whole. The rule is written out per
/// kind in [`NGramKind::key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NGramKind {
	Monogram,
	Bigram,
	Skipgram,
	Trigram,
}

impl NGramKind {
	/// All kinds, in report order.
	pub const ALL: [NGramKind; 4] = [NGramKind::Monogram, NGramKind::Bigram, NGramKind::Skipgram, NGramKind::Trigram];

	/// Number of characters in the emitted key.
	pub fn size(self) -> usize {
		match self {
			NGramKind::Monogram => 1,
			NGramKind::Bigram | NGramKind::Skipgram => 2,
			NGramKind::Trigram => 3,
		}
	}

	/// Number of characters skipped between the two halves of the key.
	pub fn skip(self) -> usize {
		match self {
			NGramKind::Skipgram => 1,
			_ => 0,
		}
	}

	/// Window width: `size + skip`.
	pub fn width(self) -> usize {
		self.size() + self.skip()
	}

	/// Report name of the kind (`monograms`, `bigrams`, ...).
	pub fn name(self) -> &'static str {
		match self {
			NGramKind::Monogram => "monograms",
			NGramKind::Bigram => "bigrams",
			NGramKind::Skipgram => "skipgrams",
			NGramKind::Trigram => "trigrams",
		}
	}

	/// Builds the key of a window.
	///
	/// `window` must hold exactly `width()` characters.
	pub fn key(self, window: &[char]) -> String {
		debug_assert_eq!(window.len(), self.width());
		match self {
			NGramKind::Monogram => window[0].to_string(),
			NGramKind::Bigram => [window[0], window[1]].iter().collect(),
			NGramKind::Skipgram => [window[0], window[2]].iter().collect(),
			NGramKind::Trigram => [window[0], window[1], window[2]].iter().collect(),
		}
	}
}

impl fmt::Display for NGramKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn monogram_key() {
		assert_eq!(NGramKind::Monogram.width(), 1);
		assert_eq!(NGramKind::Monogram.key(&chars("c")), "c");
	}

	#[test]
	fn bigram_key() {
		assert_eq!(NGramKind::Bigram.width(), 2);
		assert_eq!(NGramKind::Bigram.key(&chars("ca")), "ca");
	}

	#[test]
	fn skipgram_key_drops_middle() {
		assert_eq!(NGramKind::Skipgram.width(), 3);
		assert_eq!(NGramKind::Skipgram.key(&chars("cat")), "ct");
	}

	#[test]
	fn trigram_key() {
		assert_eq!(NGramKind::Trigram.width(), 3);
		assert_eq!(NGramKind::Trigram.key(&chars("cat")), "cat");
	}

	#[test]
	fn keys_follow_half_floor_half_ceil_rule() {
		for kind in NGramKind::ALL {
			let window: Vec<char> = "abcdefgh".chars().take(kind.width()).collect();
			let size = kind.size();
			let expected: String = window[..size / 2]
				.iter()
				.chain(&window[window.len() - (size - size / 2)..])
				.collect();
			assert_eq!(kind.key(&window), expected, "{kind}");
		}
	}
}
