use std::fmt;

use super::position::{Direction, Position};
use crate::ngram::NGramKind;

/// Fingers whose scissors count: ring and middle of both hands.
const SCISSOR_FINGERS: [u8; 4] = [1, 2, 7, 8];

/// Typing metrics computed over corpus n-grams.
///
/// Bigram metrics and skipgram metrics share their predicates; only the
/// table they are applied to differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
	/// Same-finger bigram
	Sfb,
	/// Lateral stretch bigram
	Lsb,
	/// Half scissor bigram
	Hsb,
	/// Full scissor bigram
	Fsb,
	/// Same-finger skipgram
	Sfs,
	/// Lateral stretch skipgram
	Lss,
	/// Half scissor skipgram
	Hss,
	/// Full scissor skipgram
	Fss,
	Alternate,
	Roll,
	Redirect,
	Onehand,
	Inroll,
	Outroll,
}

impl Metric {
	/// All metrics, in report order.
	pub const ALL: [Metric; 14] = [
		Metric::Sfb,
		Metric::Lsb,
		Metric::Hsb,
		Metric::Fsb,
		Metric::Sfs,
		Metric::Lss,
		Metric::Hss,
		Metric::Fss,
		Metric::Alternate,
		Metric::Roll,
		Metric::Redirect,
		Metric::Onehand,
		Metric::Inroll,
		Metric::Outroll,
	];

	pub fn name(self) -> &'static str {
		match self {
			Metric::Sfb => "sfb",
			Metric::Lsb => "lsb",
			Metric::Hsb => "hsb",
			Metric::Fsb => "fsb",
			Metric::Sfs => "sfs",
			Metric::Lss => "lss",
			Metric::Hss => "hss",
			Metric::Fss => "fss",
			Metric::Alternate => "alternate",
			Metric::Roll => "roll",
			Metric::Redirect => "redirect",
			Metric::Onehand => "onehand",
			Metric::Inroll => "inroll",
			Metric::Outroll => "outroll",
		}
	}

	/// Looks a metric up by report name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|metric| metric.name() == name)
	}

	/// The n-gram table the metric is measured on.
	pub fn kind(self) -> NGramKind {
		match self {
			Metric::Sfb | Metric::Lsb | Metric::Hsb | Metric::Fsb => NGramKind::Bigram,
			Metric::Sfs | Metric::Lss | Metric::Hss | Metric::Fss => NGramKind::Skipgram,
			_ => NGramKind::Trigram,
		}
	}

	/// Returns `true` when a higher frequency is better.
	pub fn is_positive(self) -> bool {
		matches!(self, Metric::Roll | Metric::Onehand | Metric::Inroll)
	}

	/// Evaluates the metric on the key positions of one n-gram.
	///
	/// `keys` must hold `self.kind().size()` positions; any other length never matches.
	pub fn matches(self, keys: &[Position]) -> bool {
		match (self, keys) {
			(Metric::Sfb | Metric::Sfs, [a, b]) => same_finger(a, b),
			(Metric::Lsb | Metric::Lss, [a, b]) => lateral(a, b),
			(Metric::Hsb | Metric::Hss, [a, b]) => scissor(a, b, 1),
			(Metric::Fsb | Metric::Fss, [a, b]) => scissor(a, b, 2),
			(Metric::Alternate, [a, b, c]) => a.hand != b.hand && b.hand != c.hand,
			(Metric::Roll, [a, b, c]) => a.hand != c.hand && a.finger != b.finger && b.finger != c.finger,
			(Metric::Redirect, [a, b, c]) => one_hand(a, b, c) && a.direction(b) != b.direction(c),
			(Metric::Onehand, [a, b, c]) => one_hand(a, b, c) && a.direction(b) == b.direction(c),
			(Metric::Inroll, [a, b, c]) => rolls(a, b, c, Direction::Inward),
			(Metric::Outroll, [a, b, c]) => rolls(a, b, c, Direction::Outward),
			_ => false,
		}
	}
}

impl fmt::Display for Metric {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

fn same_finger(a: &Position, b: &Position) -> bool {
	a.finger == b.finger && a.index != b.index
}

fn lateral(a: &Position, b: &Position) -> bool {
	a.hand == b.hand && a.finger.abs_diff(b.finger) == 1 && a.column.abs_diff(b.column) == 2
}

/// Adjacent-row (`rows == 1`) or skipped-row (`rows == 2`) scissor, where the
/// lower key is pressed by a middle or ring finger.
fn scissor(a: &Position, b: &Position, rows: usize) -> bool {
	let lower = if a.row > b.row { a } else { b };
	a.hand == b.hand
		&& a.finger != b.finger
		&& a.row.abs_diff(b.row) == rows
		&& SCISSOR_FINGERS.contains(&lower.finger)
}

/// All three keys on one hand, without a finger repeat between neighbours.
fn one_hand(a: &Position, b: &Position, c: &Position) -> bool {
	a.hand == b.hand && b.hand == c.hand && a.finger != b.finger && b.finger != c.finger
}

fn rolls(a: &Position, b: &Position, c: &Position, direction: Direction) -> bool {
	a.hand != c.hand && (a.direction(b) == Some(direction) || b.direction(c) == Some(direction))
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Positions of characters on QWERTY, with `'` on the right of `;`.
	fn qwerty(gram: &str) -> Vec<Position> {
		let layout = "qwertyuiopasdfghjkl'zxcvbnm,.~";
		gram.chars().map(|c| Position::new(layout.find(c).unwrap())).collect()
	}

	#[test]
	fn same_finger_bigrams() {
		assert!(Metric::Sfb.matches(&qwerty("ed")));
		assert!(Metric::Sfb.matches(&qwerty("fg")));
		assert!(!Metric::Sfb.matches(&qwerty("ee")));
		assert!(!Metric::Sfb.matches(&qwerty("ef")));
	}

	#[test]
	fn lateral_stretch() {
		// d (middle, column 2) to g (index, column 4)
		assert!(Metric::Lsb.matches(&qwerty("dg")));
		assert!(!Metric::Lsb.matches(&qwerty("df")));
	}

	#[test]
	fn scissors() {
		// c (bottom middle) with r (top index): two rows, lower key on the middle finger
		assert!(Metric::Fsb.matches(&qwerty("rc")));
		assert!(Metric::Fss.matches(&qwerty("cr")));
		// x (bottom ring) with d (home middle): one row, lower key on the ring finger
		assert!(Metric::Hsb.matches(&qwerty("dx")));
		// v (bottom index) lower key is not a scissor finger
		assert!(!Metric::Hsb.matches(&qwerty("dv")));
		assert!(!Metric::Fsb.matches(&qwerty("dx")));
	}

	#[test]
	fn trigram_metrics() {
		assert!(Metric::Alternate.matches(&qwerty("aja")));
		assert!(Metric::Roll.matches(&qwerty("asj")));
		assert!(Metric::Inroll.matches(&qwerty("asj")));
		assert!(!Metric::Outroll.matches(&qwerty("asj")));
		assert!(Metric::Outroll.matches(&qwerty("dsj")));
		assert!(Metric::Onehand.matches(&qwerty("asd")));
		assert!(Metric::Redirect.matches(&qwerty("sad")));
		assert!(!Metric::Roll.matches(&qwerty("aja")));
	}

	#[test]
	fn wrong_arity_never_matches() {
		assert!(!Metric::Sfb.matches(&qwerty("e")));
		assert!(!Metric::Roll.matches(&qwerty("as")));
	}

	#[test]
	fn names_round_trip() {
		for metric in Metric::ALL {
			assert_eq!(Metric::from_name(metric.name()), Some(metric));
		}
		assert_eq!(Metric::Sfs.kind(), NGramKind::Skipgram);
		assert!(Metric::Inroll.is_positive());
		assert!(!Metric::Sfb.is_positive());
	}
}
