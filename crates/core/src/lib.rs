//! Core engine logic - pure, deterministic, and testable
//!
//! This crate contains the whole board resolution engine: grid state,
//! match detection, swap validation, cascade resolution, and the session
//! state machine. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: the same seed produces identical boards and refills
//! - **Testable**: every rule is covered by unit tests in its module
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: token arena plus a column/row-indexed cell array with O(1)
//!   positional lookup, initial fill, gravity compaction
//! - [`matcher`]: run detection (horizontal and vertical windows of 3 with
//!   greedy extension)
//! - [`swap`]: adjacency checking and tentative position exchange
//! - [`cascade`]: detect / remove / settle / refill rounds with the
//!   escalating multiplier, looped until the board is stable
//! - [`scoring`]: the per-round score formula
//! - [`session`]: selection state machine, score ownership, pause and reset
//! - [`snapshot`]: read-only views handed to the presentation layer
//! - [`rng`]: seeded LCG and the uniform kind picker
//!
//! # Game Rules
//!
//! - A swap is legal only between grid-adjacent tokens (no diagonals).
//! - A swap that produces no run of 3+ is reverted token-for-token.
//! - A committed swap starts a cascade: matched tokens are removed,
//!   survivors fall straight down preserving order, fresh tokens fill the
//!   vacated top rows, and detection runs again with the multiplier
//!   incremented, until a round finds nothing.
//! - Round score is `matched * 10 * multiplier`.
//!
//! # Example
//!
//! ```
//! use match_three_core::{BoardConfig, Session};
//!
//! let mut session = Session::new(BoardConfig::default()).unwrap();
//! let snapshot = session.snapshot();
//!
//! // A fresh board is full and match-free.
//! assert_eq!(snapshot.board.len(), 64);
//! assert_eq!(snapshot.score, 0);
//!
//! // Select a token, then its right neighbor, to request a swap.
//! let first = snapshot.board[0].id;
//! let second = snapshot.board[1].id;
//! session.select(first).unwrap();
//! let after = session.select(second).unwrap();
//! assert!(after.score == 0 || after.score >= 30);
//! ```

pub mod cascade;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod swap;

pub use match_three_types as types;

// Re-export commonly used types for convenience
pub use cascade::{resolve, CascadeOutcome, RoundReport};
pub use grid::{BoardConfig, ConfigError, Grid, Token};
pub use matcher::{find_matches, MatchSet};
pub use rng::{KindPicker, SimpleRng};
pub use scoring::round_points;
pub use session::{Phase, SelectError, Session};
pub use snapshot::{SessionSnapshot, TokenView};
pub use swap::{are_adjacent, try_swap};
