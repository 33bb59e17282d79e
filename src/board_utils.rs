//! Board geometry for the flat 64-tile array.
//!
//! Every generator asks these tables before it touches a tile: first whether
//! a candidate index is on the board, then whether the offset that produced
//! it wrapped across a board edge.

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

/// Row 2 of the array (a7..h7), where Black pawns start.
pub const SECOND_ROW: [bool; NUM_TILES] = init_row(1);
/// Row 7 of the array (a2..h2), where White pawns start.
pub const SEVENTH_ROW: [bool; NUM_TILES] = init_row(6);

const fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut index = column;
    while index < NUM_TILES {
        table[index] = true;
        index += NUM_TILES_PER_ROW;
    }
    table
}

const fn init_row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut index = row * NUM_TILES_PER_ROW;
    while index < (row + 1) * NUM_TILES_PER_ROW {
        table[index] = true;
        index += 1;
    }
    table
}

pub fn is_valid_tile_coordinate(coordinate: isize) -> bool {
    (0..NUM_TILES as isize).contains(&coordinate)
}

/// `column` is 1-based, as in "first column". Only 1, 2, 7 and 8 are tabled;
/// anything else, like any off-board coordinate, answers false.
pub fn in_column(coordinate: isize, column: usize) -> bool {
    let table = match column {
        1 => &FIRST_COLUMN,
        2 => &SECOND_COLUMN,
        7 => &SEVENTH_COLUMN,
        8 => &EIGHTH_COLUMN,
        _ => return false,
    };

    is_valid_tile_coordinate(coordinate) && table[coordinate as usize]
}

/// `row` is 1-based like [`in_column`]; only rows 2 and 7 are tabled.
pub fn in_row(coordinate: isize, row: usize) -> bool {
    let table = match row {
        2 => &SECOND_ROW,
        7 => &SEVENTH_ROW,
        _ => return false,
    };

    is_valid_tile_coordinate(coordinate) && table[coordinate as usize]
}

type ExclusionTable = [(usize, &'static [isize])];

// (column, offsets that wrap when applied from that column)
const SINGLE_STEP_EXCLUSIONS: [(usize, &[isize]); 2] = [(1, &[-9, -1, 7]), (8, &[-7, 1, 9])];

const KNIGHT_EXCLUSIONS: [(usize, &[isize]); 4] = [
    (1, &[-17, -10, 6, 15]),
    (2, &[-10, 6]),
    (7, &[-6, 10]),
    (8, &[-15, -6, 10, 17]),
];

fn is_excluded(table: &ExclusionTable, position: isize, offset: isize) -> bool {
    table
        .iter()
        .any(|(column, offsets)| in_column(position, *column) && offsets.contains(&offset))
}

/// True when a one-tile step (king step, or one step of a sliding ray)
/// from `position` by `offset` would wrap onto the opposite edge.
pub fn is_single_step_exclusion(position: isize, offset: isize) -> bool {
    is_excluded(&SINGLE_STEP_EXCLUSIONS, position, offset)
}

pub fn is_knight_exclusion(position: isize, offset: isize) -> bool {
    is_excluded(&KNIGHT_EXCLUSIONS, position, offset)
}
