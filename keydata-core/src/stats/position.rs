use crate::layout::grid::COLUMNS;

/// Finger pressing each column, numbered 0 (left pinky) to 9 (right pinky).
///
/// Both inner columns (4 and 5) are pressed by the index fingers (3 and 6);
/// thumbs (4 and 5) never press a main-block key.
const COLUMN_FINGERS: [u8; COLUMNS] = [0, 1, 2, 3, 3, 6, 6, 7, 8, 9];

/// Movement between two keys of the same hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// Toward the index finger
	Inward,
	/// Toward the pinky
	Outward,
}

/// A key of the 3x10 grid with its fingering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
	/// Key index (`row * 10 + column`)
	pub index: usize,
	pub column: usize,
	pub row: usize,
	pub finger: u8,
	/// 0 for the left hand, 1 for the right hand
	pub hand: u8,
}

impl Position {
	pub fn new(index: usize) -> Self {
		let column = index % COLUMNS;
		let finger = COLUMN_FINGERS[column];
		Self { index, column, row: index / COLUMNS, finger, hand: if finger < 5 { 0 } else { 1 } }
	}

	/// Direction of a movement from `self` to `other`.
	///
	/// Returns `None` when the keys are on different hands or the same finger.
	pub fn direction(&self, other: &Position) -> Option<Direction> {
		if self.hand != other.hand || self.finger == other.finger {
			return None;
		}
		// Finger numbers grow toward the index on the left hand and away from it on the right.
		let increasing = self.finger < other.finger;
		match (self.hand, increasing) {
			(0, true) | (1, false) => Some(Direction::Inward),
			_ => Some(Direction::Outward),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fingering_of_home_row() {
		let fingers: Vec<u8> = (10..20).map(|i| Position::new(i).finger).collect();
		assert_eq!(fingers, vec![0, 1, 2, 3, 3, 6, 6, 7, 8, 9]);
		assert_eq!(Position::new(14).hand, 0);
		assert_eq!(Position::new(15).hand, 1);
		assert_eq!(Position::new(27).row, 2);
		assert_eq!(Position::new(27).column, 7);
	}

	#[test]
	fn direction_per_hand() {
		let (a, s, j, l) = (Position::new(10), Position::new(11), Position::new(16), Position::new(18));
		assert_eq!(a.direction(&s), Some(Direction::Inward));
		assert_eq!(s.direction(&a), Some(Direction::Outward));
		assert_eq!(l.direction(&j), Some(Direction::Inward));
		assert_eq!(j.direction(&l), Some(Direction::Outward));
		assert_eq!(a.direction(&j), None);
		assert_eq!(Position::new(13).direction(&Position::new(14)), None);
	}
}
