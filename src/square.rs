use core::fmt;

use crate::board_utils::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::errors::BoardError;

/// Named tiles in array order: a8 is index 0, h1 is index 63.
#[rustfmt::skip]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

#[rustfmt::skip]
const ALL_SQUARES: [Square; NUM_TILES] = [
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
];

impl Square {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    pub fn from_algebraic_notation(notation: &str) -> Result<Square, BoardError> {
        let invalid = || BoardError::new(&format!("Invalid square string: {notation}"));

        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(invalid()),
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }

        let column = file as usize - 'a' as usize;
        let row = '8' as usize - rank as usize;

        Ok(ALL_SQUARES[row * NUM_TILES_PER_ROW + column])
    }

    /// Array row, 0 being the eighth rank.
    pub fn row(&self) -> usize {
        self.as_index() / NUM_TILES_PER_ROW
    }

    pub fn column(&self) -> usize {
        self.as_index() % NUM_TILES_PER_ROW
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.column() as u8) as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<&str> for Square {
    type Error = BoardError;

    fn try_from(notation: &str) -> Result<Self, Self::Error> {
        Square::from_algebraic_notation(notation)
    }
}

#[cfg(test)]
mod tests {
    use crate::square::Square;

    #[test]
    fn test_array_orientation() {
        assert_eq!(Square::A8.as_index(), 0);
        assert_eq!(Square::H8.as_index(), 7);
        assert_eq!(Square::E7.as_index(), 12);
        assert_eq!(Square::A1.as_index(), 56);
        assert_eq!(Square::H1.as_index(), 63);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(4), Some(Square::E8));
        assert_eq!(Square::from_index(60), Some(Square::E1));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_from_algebraic_notation() {
        assert_eq!(Square::from_algebraic_notation("a8").unwrap(), Square::A8);
        assert_eq!(Square::from_algebraic_notation("e4").unwrap(), Square::E4);
        assert_eq!(Square::from_algebraic_notation("h1").unwrap(), Square::H1);
    }

    #[test]
    fn test_from_algebraic_notation_invalid() {
        for notation in ["-7", "h", "hh", "i1", "a9", "a10", ""] {
            let square = Square::from_algebraic_notation(notation);
            assert_eq!(
                square.err().unwrap().to_string(),
                format!("Invalid square string: {notation}")
            );
        }
    }

    #[test]
    fn test_display_round_trips_every_square() {
        for index in 0..64 {
            let square = Square::from_index(index).unwrap();
            assert_eq!(Square::try_from(square.to_string().as_str()).unwrap(), square);
        }
    }
}
