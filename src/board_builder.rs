use crate::alliance::Alliance;
use crate::board::Board;
use crate::board_utils::{in_row, NUM_TILES_PER_ROW};
use crate::errors::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use std::collections::HashSet;

pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
        }
    }

    pub fn from_starting_position() -> Self {
        Self {
            board: Board::starting_position(),
        }
    }

    pub fn build_from(board: Board) -> Self {
        Self { board }
    }

    /// Places an unmoved piece, replacing whatever stood on `square`.
    pub fn piece(mut self, square: Square, kind: PieceKind, alliance: Alliance) -> Self {
        let index = square.as_index();
        self.board.tiles[index] = Some(Piece::new(kind, index, alliance));
        self
    }

    /// Like [`BoardBuilder::piece`], but refuses to cover an occupied tile.
    pub fn try_piece(
        self,
        square: Square,
        kind: PieceKind,
        alliance: Alliance,
    ) -> Result<Self, BoardError> {
        if let Some(occupant) = self.board.tiles[square.as_index()] {
            return Err(BoardError::new(&format!(
                "cannot place {alliance:?} {kind:?} on {square}, already occupied by {occupant:?}"
            )));
        }

        Ok(self.piece(square, kind, alliance))
    }

    pub fn moved_piece(mut self, square: Square, kind: PieceKind, alliance: Alliance) -> Self {
        let index = square.as_index();
        self.board.tiles[index] = Some(Piece::new(kind, index, alliance).moved());
        self
    }

    pub fn clear(mut self, square: Square) -> Self {
        self.board.tiles[square.as_index()] = None;
        self
    }

    pub fn to_move(mut self, alliance: Alliance) -> Self {
        self.board.to_move = alliance;
        self
    }

    pub fn build(self) -> Board {
        self.board
    }

    /// Reads the placement and active color fields. Castling, en passant and
    /// the clocks are checked for shape only; the snapshot does not keep them.
    pub fn try_from_fen(fen: &str) -> Result<Board, BoardError> {
        // 0: board arrangement
        // 1: active color
        // 2: Castling availability
        // 3: En passant square
        // 4: Halfmove clock
        // 5: Fullmove number
        let fen_string_fields: Vec<&str> = fen.split_whitespace().collect();
        if fen_string_fields.len() < 2 {
            return Err(BoardError::new(
                "FEN must contain at least a board arrangement and an active color",
            ));
        }

        let mut board = Board::default();
        let mut file = 0;
        let mut rank = 0;

        for symbol in fen_string_fields[0].chars() {
            match symbol {
                '/' => {
                    if file != NUM_TILES_PER_ROW {
                        return Err(BoardError::new("incomplete rank in FEN"));
                    }
                    file = 0;
                    rank += 1;
                }
                '1'..='8' => file += symbol as usize - '0' as usize,
                piece_char => {
                    let (kind, alliance) = PieceKind::from_symbol(piece_char)
                        .ok_or(BoardError::new("invalid piece symbol in FEN"))?;
                    if file >= NUM_TILES_PER_ROW || rank >= NUM_TILES_PER_ROW {
                        return Err(BoardError::new("too many squares in FEN rank"));
                    }

                    let index = rank * NUM_TILES_PER_ROW + file;
                    let mut piece = Piece::new(kind, index, alliance);
                    if kind == PieceKind::Pawn && !Self::on_pawn_start_row(index, alliance) {
                        piece = piece.moved();
                    }
                    board.tiles[index] = Some(piece);

                    file += 1;
                }
            }

            if file > NUM_TILES_PER_ROW {
                return Err(BoardError::new("too many squares in FEN rank"));
            }
        }

        if rank != NUM_TILES_PER_ROW - 1 || file != NUM_TILES_PER_ROW {
            return Err(BoardError::new("FEN board arrangement must describe 8 full ranks"));
        }

        board.to_move = match fen_string_fields[1] {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            _ => {
                return Err(BoardError::new(
                    "failed to parse active board color, must be 'b' or 'w'.",
                ))
            }
        };

        if let Some(castling_field) = fen_string_fields.get(2) {
            let valid_casting_right_chars: HashSet<char> =
                ['K', 'Q', 'k', 'q', '-'].iter().cloned().collect();
            let castling_rights: HashSet<char> = castling_field.chars().collect();
            if !castling_rights.is_subset(&valid_casting_right_chars) {
                return Err(BoardError::new(
                    "invalid castling rights in fen, must be a combination of 'K', 'Q', 'k', and 'q' or '-'",
                ));
            }
        }

        if let Some(en_passant_field) = fen_string_fields.get(3) {
            if *en_passant_field != "-" {
                Square::from_algebraic_notation(en_passant_field)?;
            }
        }

        if let Some(half_move_clock) = fen_string_fields.get(4) {
            half_move_clock
                .parse::<u32>()
                .map_err(|_| BoardError::new("failed to parse half move clock from fen"))?;
        }

        if let Some(full_move_number) = fen_string_fields.get(5) {
            full_move_number
                .parse::<u32>()
                .map_err(|_| BoardError::new("failed to parse full move number from fen"))?;
        }

        Ok(board)
    }

    fn on_pawn_start_row(index: usize, alliance: Alliance) -> bool {
        match alliance {
            Alliance::White => in_row(index as isize, 7),
            Alliance::Black => in_row(index as isize, 2),
        }
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
