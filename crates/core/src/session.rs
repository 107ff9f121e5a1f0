//! Session module - selection state machine, score, pause, reset
//!
//! The session exclusively owns the grid and the score. A single tagged
//! phase enum replaces the reference implementation's pile of independent
//! booleans, so illegal combinations ("processing" while also "idle") are
//! unrepresentable. The orthogonal `paused` flag only gates the start of
//! new selections and swaps; it never suspends a cascade already running.
//!
//! Selection flow: the first selected token arms the session; selecting it
//! again disarms it; selecting a non-adjacent second token replaces the
//! selection; selecting an adjacent second token swaps the pair, and the
//! result either commits (match found, cascade runs to completion,
//! score accumulates) or reverts token-for-token.

use crate::cascade;
use crate::grid::{BoardConfig, ConfigError, Grid};
use crate::matcher::find_matches;
use crate::rng::KindPicker;
use crate::snapshot::{SessionSnapshot, TokenView};
use crate::swap;
use crate::types::TokenId;

/// Session state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected
    Idle,
    /// One token chosen, awaiting a second
    Selected(TokenId),
    /// A swap-and-cascade sequence is in flight; no new swap may start
    Processing,
}

/// Rejected select request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The id is not on the board: a caller bug, not a game outcome
    UnknownToken(TokenId),
    /// A swap-and-cascade sequence is already in flight.
    ///
    /// `select` resolves its cascade before returning, so a synchronous
    /// caller never sees this; the variant exists for drivers that step
    /// the `Processing` phase non-atomically (an animated frontend
    /// replaying one round per frame).
    Busy,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::UnknownToken(id) => write!(f, "token {} is not on the board", id),
            SelectError::Busy => write!(f, "a swap is already being processed"),
        }
    }
}

impl std::error::Error for SelectError {}

/// One player's board, score, and selection state
#[derive(Debug, Clone)]
pub struct Session {
    config: BoardConfig,
    grid: Grid,
    picker: KindPicker,
    score: u32,
    phase: Phase,
    paused: bool,
    last_removed: Vec<TokenId>,
}

impl Session {
    /// Create a session with a freshly generated board
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut picker = KindPicker::new(&config.kinds, config.seed);
        let grid = Grid::generate(&config, || picker.draw())?;
        Ok(Self {
            config,
            grid,
            picker,
            score: 0,
            phase: Phase::Idle,
            paused: false,
            last_removed: Vec::new(),
        })
    }

    /// Create a session over a prepared layout (deterministic tests and
    /// replays). Refill draws still come from the config's seeded picker.
    ///
    /// The config's dimensions must match the grid's; `reset` regenerates
    /// from the config, so a mismatch would change the board size mid-game.
    pub fn from_grid(grid: Grid, config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.width != grid.width() || config.height != grid.height() {
            return Err(ConfigError::DimensionMismatch);
        }
        let picker = KindPicker::new(&config.kinds, config.seed);
        Ok(Self {
            config,
            grid,
            picker,
            score: 0,
            phase: Phase::Idle,
            paused: false,
            last_removed: Vec::new(),
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn last_removed(&self) -> &[TokenId] {
        &self.last_removed
    }

    /// Drive the state machine with one token selection.
    ///
    /// See the module docs for the transition table. Selecting while
    /// paused is a defined no-op; selecting an unknown id is an error.
    pub fn select(&mut self, id: TokenId) -> Result<SessionSnapshot, SelectError> {
        if !self.grid.contains(id) {
            return Err(SelectError::UnknownToken(id));
        }
        if self.phase == Phase::Processing {
            return Err(SelectError::Busy);
        }
        if self.paused {
            return Ok(self.snapshot());
        }

        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Selected(id);
            }
            Phase::Selected(current) if current == id => {
                self.phase = Phase::Idle;
            }
            Phase::Selected(current) => {
                if swap::are_adjacent(&self.grid, current, id) {
                    self.phase = Phase::Processing;
                    self.resolve_swap(current, id);
                    self.phase = Phase::Idle;
                } else {
                    self.phase = Phase::Selected(id);
                }
            }
            Phase::Processing => unreachable!("handled above"),
        }

        Ok(self.snapshot())
    }

    /// Apply the tentative swap, then commit (cascade) or revert.
    fn resolve_swap(&mut self, a: TokenId, b: TokenId) {
        let applied = swap::try_swap(&mut self.grid, a, b);
        debug_assert!(applied, "adjacency was checked before swapping");

        if find_matches(&self.grid).is_empty() {
            // No match: the same exchange restores the exact prior
            // id-to-position mapping.
            swap::try_swap(&mut self.grid, a, b);
            self.last_removed.clear();
        } else {
            let picker = &mut self.picker;
            let outcome = cascade::resolve(&mut self.grid, || picker.draw());
            self.score = self.score.saturating_add(outcome.score_delta);
            self.last_removed = outcome.removed;
        }
    }

    /// Reinitialize the board and zero the score.
    ///
    /// The RNG stream continues rather than restarting, so consecutive
    /// resets produce different boards. The paused flag is orthogonal and
    /// survives a reset.
    pub fn reset(&mut self) -> SessionSnapshot {
        let picker = &mut self.picker;
        self.grid = Grid::generate(&self.config, || picker.draw())
            .expect("config was validated at construction");
        self.score = 0;
        self.phase = Phase::Idle;
        self.last_removed.clear();
        self.snapshot()
    }

    /// Set the pause flag. Pausing never cancels or reverts anything; it
    /// only blocks new selections and swaps from starting.
    pub fn set_paused(&mut self, paused: bool) -> SessionSnapshot {
        self.paused = paused;
        self.snapshot()
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        let board = self
            .grid
            .tokens_row_major()
            .iter()
            .map(|t| TokenView {
                id: t.id,
                col: t.col,
                row: t.row,
                kind: t.kind,
            })
            .collect();

        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            board,
            last_removed: self.last_removed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenKind::{self, *};

    fn config_for(grid: &Grid) -> BoardConfig {
        BoardConfig {
            width: grid.width(),
            height: grid.height(),
            kinds: TokenKind::ALL.to_vec(),
            seed: 5,
        }
    }

    fn stable_2x2() -> Session {
        let grid = Grid::from_rows(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);
        let config = config_for(&grid);
        Session::from_grid(grid, config).unwrap()
    }

    #[test]
    fn from_grid_rejects_mismatched_dimensions() {
        let grid = Grid::from_rows(&[vec![Ruby, Amber], vec![Emerald, Sapphire]]);
        let config = BoardConfig {
            width: 4,
            height: 4,
            kinds: TokenKind::ALL.to_vec(),
            seed: 5,
        };
        let err = Session::from_grid(grid, config).unwrap_err();
        assert_eq!(err, crate::grid::ConfigError::DimensionMismatch);
    }

    #[test]
    fn new_session_is_idle_full_and_scoreless() {
        let session = Session::new(BoardConfig::default()).unwrap();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.score(), 0);
        assert!(!session.paused());
        assert!(session.grid().is_full());
        assert!(session.last_removed().is_empty());
    }

    #[test]
    fn fresh_board_has_no_matches() {
        for seed in 1..50 {
            let config = BoardConfig {
                seed,
                ..BoardConfig::default()
            };
            let session = Session::new(config).unwrap();
            assert!(
                find_matches(session.grid()).is_empty(),
                "initial match at seed {}",
                seed
            );
        }
    }

    #[test]
    fn select_then_deselect() {
        let mut session = stable_2x2();
        let snap = session.select(TokenId(0)).unwrap();
        assert_eq!(snap.phase, Phase::Selected(TokenId(0)));

        let snap = session.select(TokenId(0)).unwrap();
        assert_eq!(snap.phase, Phase::Idle);
    }

    #[test]
    fn non_adjacent_second_pick_replaces_the_selection() {
        let mut session = stable_2x2();
        session.select(TokenId(0)).unwrap();
        // Diagonal: not adjacent, so no swap, selection moves.
        let snap = session.select(TokenId(3)).unwrap();
        assert_eq!(snap.phase, Phase::Selected(TokenId(3)));
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut session = stable_2x2();
        let err = session.select(TokenId(999)).unwrap_err();
        assert_eq!(err, SelectError::UnknownToken(TokenId(999)));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn no_match_swap_reverts_exactly() {
        let mut session = stable_2x2();
        let before = session.snapshot();

        session.select(TokenId(0)).unwrap();
        let after = session.select(TokenId(1)).unwrap();

        // Adjacent but matchless: board restored token-for-token.
        assert_eq!(after.phase, Phase::Idle);
        assert_eq!(after.score, 0);
        assert_eq!(after.board, before.board);
        assert!(after.last_removed.is_empty());
    }

    #[test]
    fn matching_swap_commits_scores_and_reports_removals() {
        // Swapping the Amber at (0,1) with the Ruby at (1,1) completes a
        // vertical Ruby run in column 0.
        let grid = Grid::from_rows(&[
            vec![Ruby, Emerald],
            vec![Amber, Ruby],
            vec![Ruby, Sapphire],
        ]);
        let config = config_for(&grid);
        let mut session = Session::from_grid(grid, config).unwrap();

        session.select(TokenId(2)).unwrap();
        let snap = session.select(TokenId(3)).unwrap();

        assert_eq!(snap.phase, Phase::Idle);
        // At least the first round committed: 3 tokens at multiplier 1.
        assert!(snap.score >= 30);
        assert_eq!(snap.score % 10, 0);
        assert!(snap.last_removed.contains(&TokenId(0)));
        assert!(snap.last_removed.contains(&TokenId(3)));
        assert!(snap.last_removed.contains(&TokenId(4)));
        // Stable again: full board, nothing left to match.
        assert!(snap.covers(2, 3));
        assert!(find_matches(session.grid()).is_empty());
    }

    #[test]
    fn pause_blocks_selection_but_keeps_state() {
        let mut session = stable_2x2();
        session.select(TokenId(0)).unwrap();
        session.set_paused(true);

        // Selecting while paused is a defined no-op.
        let snap = session.select(TokenId(1)).unwrap();
        assert_eq!(snap.phase, Phase::Selected(TokenId(0)));

        session.set_paused(false);
        let snap = session.select(TokenId(0)).unwrap();
        assert_eq!(snap.phase, Phase::Idle);
    }

    #[test]
    fn reset_zeroes_score_and_clears_selection() {
        let grid = Grid::from_rows(&[
            vec![Ruby, Emerald],
            vec![Amber, Ruby],
            vec![Ruby, Sapphire],
        ]);
        let mut config = config_for(&grid);
        config.width = 2;
        config.height = 3;
        let mut session = Session::from_grid(grid, config).unwrap();

        session.select(TokenId(2)).unwrap();
        session.select(TokenId(3)).unwrap();
        assert!(session.score() > 0);

        let snap = session.reset();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.last_removed.is_empty());
        assert!(snap.covers(2, 3));
        assert!(find_matches(session.grid()).is_empty());
    }

    #[test]
    fn reset_does_not_unpause() {
        let mut session = stable_2x2();
        session.set_paused(true);
        session.reset();
        assert!(session.paused());
    }

    #[test]
    fn consecutive_resets_produce_different_boards() {
        let mut session = Session::new(BoardConfig::default()).unwrap();
        let first: Vec<_> = session.reset().board.iter().map(|t| t.kind).collect();
        let second: Vec<_> = session.reset().board.iter().map(|t| t.kind).collect();
        // The RNG stream continues across resets; identical boards would
        // mean the stream restarted.
        assert_ne!(first, second);
    }

    #[test]
    fn snapshot_board_is_row_major() {
        let session = stable_2x2();
        let snap = session.snapshot();
        let positions: Vec<(u8, u8)> = snap.board.iter().map(|t| (t.col, t.row)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
