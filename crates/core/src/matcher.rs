//! Matcher module - run detection over a full board
//!
//! Scans every row and column with a window of three cells, extending each
//! hit greedily along the scan direction. Diagonals never match. Detection
//! is pure: it never mutates the grid.

use crate::grid::Grid;
use crate::types::{TokenId, MIN_RUN};

/// Deduplicated ids of every token that sits in a run of 3+.
///
/// A token belonging to both a horizontal and a vertical run appears once.
/// Ids are sorted, so equal match sets compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    ids: Vec<TokenId>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.ids.iter().copied()
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<TokenId> {
        self.ids
    }
}

/// Find every token that is part of a horizontal or vertical run of 3+.
///
/// The layout must be full; a gap here means a resolution phase leaked a
/// partially-compacted board, which is an engine bug.
pub fn find_matches(grid: &Grid) -> MatchSet {
    assert!(
        grid.is_full(),
        "match detection requires a full board (gap between phases)"
    );

    let width = grid.width();
    let height = grid.height();
    let mut marked = vec![false; width as usize * height as usize];
    let mark = |marked: &mut Vec<bool>, col: u8, row: u8| {
        marked[row as usize * width as usize + col as usize] = true;
    };

    let window = MIN_RUN as u8;

    // Horizontal runs: slide a 3-wide window along each row, then extend.
    for row in 0..height {
        let mut col = 0;
        while col + window <= width {
            let kind = grid.kind_at(col, row);
            if grid.kind_at(col + 1, row) == kind && grid.kind_at(col + 2, row) == kind {
                for c in col..col + window {
                    mark(&mut marked, c, row);
                }
                let mut end = col + window;
                while end < width && grid.kind_at(end, row) == kind {
                    mark(&mut marked, end, row);
                    end += 1;
                }
                col = end;
            } else {
                col += 1;
            }
        }
    }

    // Vertical runs: same scan down each column.
    for col in 0..width {
        let mut row = 0;
        while row + window <= height {
            let kind = grid.kind_at(col, row);
            if grid.kind_at(col, row + 1) == kind && grid.kind_at(col, row + 2) == kind {
                for r in row..row + window {
                    mark(&mut marked, col, r);
                }
                let mut end = row + window;
                while end < height && grid.kind_at(col, end) == kind {
                    mark(&mut marked, col, end);
                    end += 1;
                }
                row = end;
            } else {
                row += 1;
            }
        }
    }

    let mut ids: Vec<TokenId> = Vec::new();
    for row in 0..height {
        for col in 0..width {
            if marked[row as usize * width as usize + col as usize] {
                let token = grid
                    .token_at(col, row)
                    .expect("full board has a token in every cell");
                ids.push(token.id);
            }
        }
    }
    ids.sort_unstable();

    MatchSet { ids }
}
