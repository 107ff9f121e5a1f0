//! Swap module - adjacency checking and tentative position exchange
//!
//! A swap only ever exchanges the positions of two tokens; kinds and ids
//! never move. Whether the tentative layout survives is the caller's call:
//! the session runs the matcher against it and either commits or applies
//! the same exchange again, which restores the exact prior id-to-position
//! mapping (the presentation layer relies on that symmetry for its
//! snap-back animation).

use crate::grid::Grid;
use crate::types::TokenId;

/// Whether two tokens occupy grid-adjacent cells (Manhattan distance 1).
///
/// Diagonal neighbors are not adjacent. Panics if either id is not on the
/// board; callers validate ids at the session boundary.
pub fn are_adjacent(grid: &Grid, a: TokenId, b: TokenId) -> bool {
    let ta = grid.token(a).expect("are_adjacent: unknown token id");
    let tb = grid.token(b).expect("are_adjacent: unknown token id");

    let dc = (ta.col as i16 - tb.col as i16).unsigned_abs();
    let dr = (ta.row as i16 - tb.row as i16).unsigned_abs();
    dc + dr == 1
}

/// Exchange the positions of `a` and `b` if they are adjacent.
///
/// Returns whether the swap was applied; a non-adjacent pair leaves the
/// grid untouched. Applying the same call again reverts the swap.
pub fn try_swap(grid: &mut Grid, a: TokenId, b: TokenId) -> bool {
    if !are_adjacent(grid, a, b) {
        return false;
    }
    grid.swap_positions(a, b);
    true
}
