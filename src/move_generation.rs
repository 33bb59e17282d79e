use tracing::{debug, trace};

use crate::alliance::Alliance;
use crate::board::{Board, Tile};
use crate::board_utils::{
    in_column, in_row, is_knight_exclusion, is_single_step_exclusion, is_valid_tile_coordinate,
};
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};

pub const BISHOP_DIRECTIONS: [isize; 4] = [-9, -7, 7, 9];
pub const ROOK_DIRECTIONS: [isize; 4] = [-8, -1, 1, 8];
pub const QUEEN_DIRECTIONS: [isize; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const KING_OFFSETS: [isize; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const KNIGHT_OFFSETS: [isize; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PawnCandidate {
    Push,
    DoublePush,
    LeftAttack,
    RightAttack,
}

// Offsets before the alliance direction is applied.
const PAWN_CANDIDATES: [(isize, PawnCandidate); 4] = [
    (8, PawnCandidate::Push),
    (16, PawnCandidate::DoublePush),
    (7, PawnCandidate::LeftAttack),
    (9, PawnCandidate::RightAttack),
];

/// Geometric moves for `piece` on `board`. King safety is left to the caller.
pub fn generate_moves<'a>(piece: &Piece, board: &'a Board) -> Vec<Move<'a>> {
    MoveGenerator::new(board).generate_moves(piece)
}

pub struct MoveGenerator<'a> {
    board: &'a Board,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn generate_moves(&self, piece: &Piece) -> Vec<Move<'a>> {
        let mut moves = Vec::new();

        if piece.kind.is_sliding_piece() {
            let directions: &[isize] = match piece.kind {
                PieceKind::Bishop => &BISHOP_DIRECTIONS,
                PieceKind::Rook => &ROOK_DIRECTIONS,
                _ => &QUEEN_DIRECTIONS,
            };
            self.generate_sliding_moves(piece, directions, &mut moves);
        } else {
            match piece.kind {
                PieceKind::King => self.generate_stepping_moves(
                    piece,
                    &KING_OFFSETS,
                    is_single_step_exclusion,
                    &mut moves,
                ),
                PieceKind::Knight => self.generate_stepping_moves(
                    piece,
                    &KNIGHT_OFFSETS,
                    is_knight_exclusion,
                    &mut moves,
                ),
                _ => self.generate_pawn_moves(piece, &mut moves),
            }
        }

        debug!(piece = ?piece, moves = moves.len(), "generated moves");
        moves
    }

    fn generate_sliding_moves(
        &self,
        piece: &Piece,
        directions: &[isize],
        moves: &mut Vec<Move<'a>>,
    ) {
        for &offset in directions {
            let mut candidate = piece.position as isize;

            loop {
                // Checked from the tile we are leaving, on every step of the ray.
                if is_single_step_exclusion(candidate, offset) {
                    trace!(candidate, offset, "ray stopped at board edge");
                    break;
                }

                candidate += offset;
                if !is_valid_tile_coordinate(candidate) {
                    break;
                }

                let destination = candidate as usize;
                match self.board.tile(destination) {
                    Tile::Empty => moves.push(Move::major(self.board, *piece, destination)),
                    Tile::Occupied(occupant) => {
                        if occupant.alliance != piece.alliance {
                            moves.push(Move::attack(self.board, *piece, destination, occupant));
                        }
                        trace!(destination, offset, "ray blocked");
                        break;
                    }
                }
            }
        }
    }

    fn generate_stepping_moves(
        &self,
        piece: &Piece,
        offsets: &[isize],
        is_excluded: fn(isize, isize) -> bool,
        moves: &mut Vec<Move<'a>>,
    ) {
        let position = piece.position as isize;

        for &offset in offsets {
            let candidate = position + offset;
            if !is_valid_tile_coordinate(candidate) || is_excluded(position, offset) {
                continue;
            }

            let destination = candidate as usize;
            match self.board.tile(destination) {
                Tile::Empty => moves.push(Move::major(self.board, *piece, destination)),
                Tile::Occupied(occupant) if occupant.alliance != piece.alliance => {
                    moves.push(Move::attack(self.board, *piece, destination, occupant))
                }
                Tile::Occupied(_) => continue,
            }
        }
    }

    fn generate_pawn_moves(&self, piece: &Piece, moves: &mut Vec<Move<'a>>) {
        let position = piece.position as isize;
        let direction = piece.alliance.direction();

        for (offset, candidate_kind) in PAWN_CANDIDATES {
            let candidate = position + offset * direction;
            if !is_valid_tile_coordinate(candidate) {
                continue;
            }
            let destination = candidate as usize;

            match candidate_kind {
                PawnCandidate::Push => {
                    if !self.board.tile(destination).is_occupied() {
                        moves.push(Move::major(self.board, *piece, destination));
                    }
                }
                PawnCandidate::DoublePush => {
                    if !Self::can_double_push(piece) {
                        continue;
                    }
                    let intermediate = (position + 8 * direction) as usize;
                    if !self.board.tile(intermediate).is_occupied()
                        && !self.board.tile(destination).is_occupied()
                    {
                        moves.push(Move::major(self.board, *piece, destination));
                    }
                }
                PawnCandidate::LeftAttack => {
                    if !Self::is_left_attack_excluded(position, piece.alliance) {
                        self.push_pawn_attack(piece, destination, moves);
                    }
                }
                PawnCandidate::RightAttack => {
                    if !Self::is_right_attack_excluded(position, piece.alliance) {
                        self.push_pawn_attack(piece, destination, moves);
                    }
                }
            }
        }
    }

    fn can_double_push(piece: &Piece) -> bool {
        let position = piece.position as isize;
        let on_start_row = (piece.alliance.is_black() && in_row(position, 2))
            || (piece.alliance.is_white() && in_row(position, 7));

        piece.first_move && on_start_row
    }

    // The 7 offset leans toward the h-file for White and the a-file for Black.
    fn is_left_attack_excluded(position: isize, alliance: Alliance) -> bool {
        (alliance.is_white() && in_column(position, 8))
            || (alliance.is_black() && in_column(position, 1))
    }

    fn is_right_attack_excluded(position: isize, alliance: Alliance) -> bool {
        (alliance.is_white() && in_column(position, 1))
            || (alliance.is_black() && in_column(position, 8))
    }

    fn push_pawn_attack(&self, piece: &Piece, destination: usize, moves: &mut Vec<Move<'a>>) {
        if let Tile::Occupied(occupant) = self.board.tile(destination) {
            if occupant.alliance != piece.alliance {
                moves.push(Move::attack(self.board, *piece, destination, occupant));
            }
        }
    }
}
