//! Snapshot module - read-only views for the presentation layer
//!
//! The engine never pushes state anywhere; after every phase transition the
//! presentation layer pulls one of these and renders it however it likes.
//! Pacing (how long a removal or fall appears to take) is entirely the
//! caller's business.

use crate::session::Phase;
use crate::types::{TokenId, TokenKind};

/// One token as seen from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenView {
    pub id: TokenId,
    pub col: u8,
    pub row: u8,
    pub kind: TokenKind,
}

/// Full session view: state machine phase, score, board, and the ids
/// removed by the most recent committed cascade (for keying removal
/// effects in the cosmetic layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub score: u32,
    /// Live tokens in row-major order (row 0 first, left to right)
    pub board: Vec<TokenView>,
    /// Sorted ids removed by the last committed swap's cascade; empty
    /// after a revert, a reset, or before the first commit
    pub last_removed: Vec<TokenId>,
}

impl SessionSnapshot {
    /// Find a token view by id
    pub fn token(&self, id: TokenId) -> Option<&TokenView> {
        self.board.iter().find(|t| t.id == id)
    }

    /// Whether the snapshot covers every cell of a `width` x `height` board
    pub fn covers(&self, width: u8, height: u8) -> bool {
        self.board.len() == width as usize * height as usize
    }
}
