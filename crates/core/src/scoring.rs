//! Scoring module - the cascade score formula
//!
//! Each resolution round is worth `matched * 10 * multiplier`, where the
//! multiplier is 1 for the round triggered directly by the swap and grows
//! by 1 for every chained round after it. Nothing else scores: drops,
//! swaps, and reverts are all worth zero.

use crate::types::MATCH_POINTS;

/// Points for one resolution round.
///
/// `matched` is the size of the round's match set; `multiplier` is the
/// 1-indexed round number within the cascade.
pub fn round_points(matched: usize, multiplier: u32) -> u32 {
    (matched as u32)
        .saturating_mul(MATCH_POINTS)
        .saturating_mul(multiplier)
}
