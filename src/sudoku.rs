//! Sudoku <-> exact-cover encoding, decoding, and verification.
//!
//! Builds the fully-populated 324x729 matrix unconditionally, then
//! pre-covers one row per clue; decoding walks the chosen row indices back
//! through the same (d, x, y) arithmetic used to build them.

use crate::dlx::DlxMatrix;
use crate::grid::Grid;

/// 4 quadrants x 81 constraints each.
pub const NUM_COLUMNS: usize = 9 * 9 * 4;
/// 9 digits x 9 columns x 9 rows of candidate placements.
pub const NUM_ROWS: usize = 9 * 9 * 9;

/// Row `r` encodes placing digit `d` (0-indexed: 0 means digit 1) at
/// `(x, y)`, where `d = r % 9`, `x = (r / 9) % 9`, `y = r / 81`.
#[inline]
fn row_triplet(row: usize) -> (u8, u8, u8) {
    let d = (row % 9) as u8;
    let x = ((row / 9) % 9) as u8;
    let y = (row / 81) as u8;
    (d, x, y)
}

#[inline]
fn row_index(d: u8, x: u8, y: u8) -> usize {
    d as usize + 9 * x as usize + 81 * y as usize
}

/// The four column indices a placement of digit `d` at `(x, y)` satisfies,
/// one per quadrant (cell, row, column, block).
#[inline]
fn column_indices(d: u8, x: u8, y: u8) -> [usize; 4] {
    let (d, x, y) = (d as usize, x as usize, y as usize);
    let block = (x / 3) + 3 * (y / 3);
    [
        x + 9 * y,
        81 + d + 9 * y,
        162 + d + 9 * x,
        243 + d + 9 * block,
    ]
}

/// Builds the fully-populated exact-cover matrix for a 9x9 Sudoku, with no
/// clues pre-covered yet.
fn build_exact_cover_matrix() -> DlxMatrix {
    let mut matrix = DlxMatrix::new(NUM_COLUMNS);
    matrix.build_matrix(NUM_ROWS, |row, col| {
        let (d, x, y) = row_triplet(row);
        column_indices(d, x, y).contains(&col)
    });
    matrix
}

/// Encodes `grid` into an exact-cover matrix with every clue's row already
/// pre-covered. Two clues that conflict on some column simply leave that
/// column already gone by the time the second clue's `cover_row` runs;
/// `solve` then correctly reports no solution rather than panicking.
fn encode(grid: &Grid) -> DlxMatrix {
    let mut matrix = build_exact_cover_matrix();

    for y in 0..9u8 {
        for x in 0..9u8 {
            let value = grid.get(x as usize, y as usize);
            if value != 0 {
                matrix.cover_row(row_index(value - 1, x, y));
            }
        }
    }

    matrix
}

/// Writes the chosen rows' digits back into a copy of `grid`. Clue rows are
/// among the chosen indices (they were pre-covered, not omitted), so
/// decoding is idempotent: it rewrites the same clue values it started
/// with.
fn decode(grid: &Grid, rows: &[usize]) -> Grid {
    let mut result = grid.clone();
    for &row in rows {
        let (d, x, y) = row_triplet(row);
        result.set(x as usize, y as usize, d + 1);
    }
    result
}

/// Solves `grid` and returns a new grid with clues preserved and unknowns
/// filled in. If the puzzle is unsolvable under its given clues, unknown
/// cells are left as `0` — callers that care should follow up with
/// [`verify`].
pub fn solve(grid: &Grid) -> Grid {
    let mut matrix = encode(grid);
    let rows = matrix.solve();
    decode(grid, &rows)
}

/// Returns `true` iff every row, column, and block of `grid` contains each
/// digit 1..=9 exactly once. A single pass with a 9-bit mask per view
/// suffices; any value outside `1..=9` fails the check without panicking.
pub fn verify(grid: &Grid) -> bool {
    const FULL_MASK: u16 = 0b1_1111_1111;

    let mask_of = |iter: &mut dyn Iterator<Item = u8>| -> Option<u16> {
        let mut mask = 0u16;
        for value in iter {
            if !(1..=9).contains(&value) {
                return None;
            }
            mask |= 1 << (value - 1);
        }
        Some(mask)
    };

    for i in 0..9 {
        let row_mask = mask_of(&mut grid.row(i));
        let col_mask = mask_of(&mut grid.col(i));
        let block_mask = mask_of(&mut grid.block(i));

        match (row_mask, col_mask, block_mask) {
            (Some(r), Some(c), Some(b)) if r == FULL_MASK && c == FULL_MASK && b == FULL_MASK => {}
            _ => return false,
        }
    }

    true
}
