//! Cascade module - resolution rounds until the board is stable
//!
//! One committed swap hands control to the resolver, which loops:
//! detect matches, remove them, settle every column, refill the vacated
//! top rows, and detect again with the multiplier bumped by one. The loop
//! ends when a round finds nothing. The reference design is an explicit
//! loop rather than recursion, so a long cascade costs no stack.
//!
//! Refill draws no anti-match heuristic: new runs arising from refill are
//! intentional and are what drives chained rounds. There is no
//! maximum-round cap; with a multi-kind alphabet an unbounded cascade is a
//! measure-zero event and the reference behavior does not guard against it.

use crate::grid::Grid;
use crate::matcher::find_matches;
use crate::scoring::round_points;
use crate::types::{TokenId, TokenKind};

/// One resolution round: how many tokens matched and what they scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub matched: usize,
    pub points: u32,
}

/// Result of resolving one cascade to stability
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeOutcome {
    /// Total points across all rounds
    pub score_delta: u32,
    /// Per-round breakdown, in round order
    pub rounds: Vec<RoundReport>,
    /// Every id removed during the cascade, sorted
    pub removed: Vec<TokenId>,
}

impl CascadeOutcome {
    pub fn rounds_run(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Whether the cascade found nothing at all (layout was already stable)
    pub fn is_noop(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Resolve the grid to stability, drawing refill kinds through `draw`.
///
/// The multiplier starts at 1 and increments each round; round points are
/// `matched * 10 * multiplier`. Columns refill left to right, vacated rows
/// top to bottom. On return the grid is full again.
pub fn resolve(grid: &mut Grid, mut draw: impl FnMut() -> TokenKind) -> CascadeOutcome {
    let mut outcome = CascadeOutcome::default();
    let mut multiplier: u32 = 1;

    loop {
        let matches = find_matches(grid);
        if matches.is_empty() {
            break;
        }

        let points = round_points(matches.len(), multiplier);
        outcome.score_delta = outcome.score_delta.saturating_add(points);
        outcome.rounds.push(RoundReport {
            matched: matches.len(),
            points,
        });

        for id in matches.iter() {
            grid.remove(id).expect("matched token is live");
            outcome.removed.push(id);
        }

        for col in 0..grid.width() {
            let vacancies = grid.settle_column(col);
            for row in 0..vacancies {
                grid.spawn(draw(), col, row);
            }
        }

        multiplier += 1;
    }

    outcome.removed.sort_unstable();
    outcome
}
