use core::fmt;

use crate::alliance::Alliance;
use crate::board_builder::BoardBuilder;
use crate::board_utils::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::move_generation::generate_moves;
use crate::moves::Move;
use crate::piece::Piece;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Occupied(Piece),
}

impl Tile {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece),
        }
    }
}

/// Read-only snapshot of a position. Built through [`BoardBuilder`]; move
/// generation only ever borrows it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) tiles: [Option<Piece>; NUM_TILES],
    pub(crate) to_move: Alliance,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tiles: [None; NUM_TILES],
            to_move: Alliance::White,
        }
    }
}

impl Board {
    pub fn starting_position() -> Self {
        BoardBuilder::try_from_fen(STARTING_FEN).expect("failed to construct default board config")
    }

    /// Occupancy of `coordinate`. Coordinates past the last tile read as empty.
    pub fn tile(&self, coordinate: usize) -> Tile {
        match self.tiles.get(coordinate).copied().flatten() {
            Some(piece) => Tile::Occupied(piece),
            None => Tile::Empty,
        }
    }

    pub fn to_move(&self) -> Alliance {
        self.to_move
    }

    pub fn pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> + '_ {
        self.tiles
            .iter()
            .flatten()
            .filter(move |piece| piece.alliance == alliance)
    }

    /// Every geometric move available to `alliance`, piece by piece in tile order.
    /// King safety is not checked.
    pub fn all_moves(&self, alliance: Alliance) -> Vec<Move<'_>> {
        self.pieces(alliance)
            .flat_map(|piece| generate_moves(piece, self))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        for (row, tiles) in self.tiles.chunks(NUM_TILES_PER_ROW).enumerate() {
            let rank: Vec<char> = tiles
                .iter()
                .map(|tile| match tile {
                    Some(piece) => piece.to_symbol(),
                    None => ' ',
                })
                .collect();
            writeln!(f, "{}  {:?}\n", 8 - row, rank)?;
        }

        writeln!(f, "     A    B    C    D    E    F    G    H\n")?;
        writeln!(f, "{:?} to move.", self.to_move)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::alliance::Alliance;
    use crate::board::{Board, Tile};
    use crate::board_builder::BoardBuilder;
    use crate::piece::PieceKind;
    use crate::square::Square;

    #[test]
    fn test_starting_position_tiles() {
        let board = Board::starting_position();

        let king = board.tile(Square::E1.as_index());
        let king = king.piece().unwrap();
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(king.alliance, Alliance::White);
        assert_eq!(king.position, Square::E1.as_index());

        let queen = *board.tile(Square::D8.as_index()).piece().unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.alliance, Alliance::Black);

        for index in Square::A6.as_index()..=Square::H3.as_index() {
            assert_eq!(board.tile(index), Tile::Empty);
        }
        assert_eq!(board.to_move(), Alliance::White);
    }

    #[test]
    fn test_tile_past_the_board_is_empty() {
        let board = Board::starting_position();
        assert_eq!(board.tile(64), Tile::Empty);
        assert_eq!(board.tile(usize::MAX), Tile::Empty);
    }

    #[test]
    fn test_pieces_by_alliance() {
        let board = Board::starting_position();
        assert_eq!(board.pieces(Alliance::White).count(), 16);
        assert_eq!(board.pieces(Alliance::Black).count(), 16);
        assert!(board
            .pieces(Alliance::Black)
            .all(|piece| piece.position < Square::A6.as_index()));
    }

    #[test]
    fn test_all_moves_starting_position() {
        let board = Board::starting_position();
        // 16 pawn moves and 4 knight moves for each side.
        assert_eq!(board.all_moves(Alliance::White).len(), 20);
        assert_eq!(board.all_moves(Alliance::Black).len(), 20);
    }

    #[test]
    fn test_all_moves_empty_board() {
        let board = Board::default();
        assert!(board.all_moves(Alliance::White).is_empty());
    }

    #[test]
    fn test_all_moves_lone_king() {
        let board = BoardBuilder::new()
            .piece(Square::E8, PieceKind::King, Alliance::White)
            .build();
        assert_eq!(board.all_moves(Alliance::White).len(), 5);
        assert!(board.all_moves(Alliance::Black).is_empty());
    }

    #[test]
    fn test_display() {
        let board = Board::starting_position();
        let rendered = board.to_string();
        assert!(rendered.contains("8  ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r']"));
        assert!(rendered.contains("1  ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R']"));
        assert!(rendered.ends_with("White to move.\n"));
    }
}
