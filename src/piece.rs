use core::fmt;

use crate::alliance::Alliance;
use crate::square::Square;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn is_sliding_piece(&self) -> bool {
        matches!(self, Self::Queen | Self::Rook | Self::Bishop)
    }

    pub fn to_symbol(&self, alliance: Alliance) -> char {
        let symbol = match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        };

        match alliance {
            Alliance::White => symbol,
            Alliance::Black => symbol.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<(PieceKind, Alliance)> {
        let alliance = if symbol.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };

        let kind = match symbol.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'R' => Self::Rook,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        };

        Some((kind, alliance))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub position: usize,
    pub alliance: Alliance,
    /// Cleared once the piece has moved; pawns read it for the double push.
    pub first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, position: usize, alliance: Alliance) -> Self {
        Self {
            kind,
            position,
            alliance,
            first_move: true,
        }
    }

    pub fn moved(self) -> Self {
        Self {
            first_move: false,
            ..self
        }
    }

    pub fn to_symbol(&self) -> char {
        self.kind.to_symbol(self.alliance)
    }

    pub fn square(&self) -> Option<Square> {
        Square::from_index(self.position)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.square() {
            Some(square) => write!(f, "{:?} {:?} on {}", self.alliance, self.kind, square),
            None => write!(f, "{:?} {:?} on {}", self.alliance, self.kind, self.position),
        }
    }
}
