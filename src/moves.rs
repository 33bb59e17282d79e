use core::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// A candidate transition generated against a borrowed board snapshot.
#[derive(Clone, Copy)]
pub enum Move<'a> {
    /// Relocation onto a tile that was empty when the move was generated.
    Major {
        board: &'a Board,
        piece: Piece,
        destination: usize,
    },
    /// Relocation onto a tile held by an opposing piece.
    Attack {
        board: &'a Board,
        piece: Piece,
        destination: usize,
        attacked: Piece,
    },
}

impl<'a> Move<'a> {
    pub fn major(board: &'a Board, piece: Piece, destination: usize) -> Self {
        Self::Major {
            board,
            piece,
            destination,
        }
    }

    pub fn attack(board: &'a Board, piece: Piece, destination: usize, attacked: Piece) -> Self {
        Self::Attack {
            board,
            piece,
            destination,
            attacked,
        }
    }

    pub fn board(&self) -> &'a Board {
        match self {
            Self::Major { board, .. } | Self::Attack { board, .. } => *board,
        }
    }

    pub fn moved_piece(&self) -> &Piece {
        match self {
            Self::Major { piece, .. } | Self::Attack { piece, .. } => piece,
        }
    }

    pub fn current_coordinate(&self) -> usize {
        self.moved_piece().position
    }

    pub fn destination_coordinate(&self) -> usize {
        match self {
            Self::Major { destination, .. } | Self::Attack { destination, .. } => *destination,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Self::Attack { .. })
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Self::Major { .. } => None,
            Self::Attack { attacked, .. } => Some(attacked),
        }
    }

    pub fn to_record(&self) -> MoveRecord {
        MoveRecord {
            piece: self.moved_piece().to_symbol(),
            from: square_name(self.current_coordinate()),
            to: square_name(self.destination_coordinate()),
            captured: self.attacked_piece().map(Piece::to_symbol),
        }
    }
}

fn square_name(coordinate: usize) -> String {
    match Square::from_index(coordinate) {
        Some(square) => square.to_string(),
        None => coordinate.to_string(),
    }
}

// Two moves are only equal when generated against the same snapshot.
impl PartialEq for Move<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.board(), other.board())
            && self.moved_piece() == other.moved_piece()
            && self.destination_coordinate() == other.destination_coordinate()
            && self.attacked_piece() == other.attacked_piece()
    }
}

impl Eq for Move<'_> {}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = if self.is_attack() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.moved_piece(),
            square_name(self.current_coordinate()),
            separator,
            square_name(self.destination_coordinate())
        )
    }
}

impl fmt::Debug for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Major {
                piece, destination, ..
            } => write!(
                f,
                "Major {{ piece: {:?}, destination: {} }}",
                piece,
                square_name(*destination)
            ),
            Self::Attack {
                piece,
                destination,
                attacked,
                ..
            } => write!(
                f,
                "Attack {{ piece: {:?}, destination: {}, attacked: {:?} }}",
                piece,
                square_name(*destination),
                attacked
            ),
        }
    }
}

/// Owned, serializable summary of a [`Move`] for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub piece: char,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<char>,
}

#[cfg(test)]
mod tests {
    use crate::alliance::Alliance;
    use crate::board::Board;
    use crate::board_builder::BoardBuilder;
    use crate::moves::{Move, MoveRecord};
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn test_major_move_accessors() {
        let board = Board::starting_position();
        let knight = *board.tile(Square::G1.as_index()).piece().unwrap();
        let mv = Move::major(&board, knight, Square::F3.as_index());

        assert!(!mv.is_attack());
        assert!(mv.attacked_piece().is_none());
        assert_eq!(mv.current_coordinate(), Square::G1.as_index());
        assert_eq!(mv.destination_coordinate(), Square::F3.as_index());
        assert!(std::ptr::eq(mv.board(), &board));
        assert_eq!(mv.to_string(), "Ng1-f3");
    }

    #[test]
    fn test_attack_move_record() {
        let board = BoardBuilder::new()
            .piece(Square::D4, PieceKind::Bishop, Alliance::White)
            .piece(Square::G7, PieceKind::Rook, Alliance::Black)
            .build();
        let bishop = *board.tile(Square::D4.as_index()).piece().unwrap();
        let rook = *board.tile(Square::G7.as_index()).piece().unwrap();
        let mv = Move::attack(&board, bishop, Square::G7.as_index(), rook);

        assert!(mv.is_attack());
        assert_eq!(mv.attacked_piece(), Some(&rook));
        assert_eq!(mv.to_string(), "Bd4xg7");
        assert_eq!(
            mv.to_record(),
            MoveRecord {
                piece: 'B',
                from: "d4".to_string(),
                to: "g7".to_string(),
                captured: Some('r'),
            }
        );
        assert_eq!(
            serde_json::to_string(&mv.to_record()).unwrap(),
            r#"{"piece":"B","from":"d4","to":"g7","captured":"r"}"#
        );
        assert_eq!(
            serde_json::to_string(&Move::major(&board, bishop, Square::E5.as_index()).to_record())
                .unwrap(),
            r#"{"piece":"B","from":"d4","to":"e5"}"#
        );
    }

    #[test]
    fn test_equality_is_per_snapshot() {
        let board = Board::starting_position();
        let copy = board.clone();
        let pawn = Piece::new(PieceKind::Pawn, Square::E2.as_index(), Alliance::White);

        let mv = Move::major(&board, pawn, Square::E4.as_index());
        assert_eq!(mv, Move::major(&board, pawn, Square::E4.as_index()));
        assert_ne!(mv, Move::major(&board, pawn, Square::E3.as_index()));
        assert_ne!(mv, Move::major(&copy, pawn, Square::E4.as_index()));
    }

    #[test]
    fn test_debug() {
        let board = Board::starting_position();
        let pawn = Piece::new(PieceKind::Pawn, Square::E7.as_index(), Alliance::Black);
        let mv = Move::major(&board, pawn, Square::E5.as_index());

        assert_eq!(
            format!("{mv:?}"),
            "Major { piece: Black Pawn on e7, destination: e5 }"
        );
    }
}
