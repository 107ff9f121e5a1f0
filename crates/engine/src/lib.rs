//! Engine crate - the embedding boundary around the core session
//!
//! Hosts (a GUI shell, a headless driver, a replay harness) talk to the
//! engine instead of the core types directly. The engine owns one session,
//! maps core errors onto stable `code`/`message` pairs, and produces
//! JSON-serializable observations after every operation.
//!
//! # Example
//!
//! ```
//! use match_three_engine::Engine;
//! use match_three_core::BoardConfig;
//!
//! let mut engine = Engine::initialize(BoardConfig::default()).unwrap();
//! let obs = engine.observe();
//! assert_eq!(obs.score, 0);
//! assert_eq!(obs.board.len(), 64);
//!
//! let first = obs.board[0].id;
//! let after = engine.select(first).unwrap();
//! assert!(matches!(
//!     after.phase,
//!     match_three_engine::PhaseDto::Selected { id } if id == first
//! ));
//! ```

pub mod observe;

pub use match_three_core as core;
pub use match_three_types as types;

pub use observe::{KindLower, Observation, PhaseDto, TokenDto};

use crate::core::{BoardConfig, ConfigError, SelectError, Session};
use crate::types::TokenId;

/// Rejected engine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidConfig(ConfigError),
    UnknownToken(TokenId),
    /// Reserved for non-atomic drivers; `select` never returns this when
    /// the cascade is resolved synchronously
    Busy,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidConfig(_) => "invalid_config",
            EngineError::UnknownToken(_) => "unknown_token",
            EngineError::Busy => "busy",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::InvalidConfig(_) => "board configuration is invalid",
            EngineError::UnknownToken(_) => "token id is not on the board",
            EngineError::Busy => "a swap is already being processed",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfig(e) => write!(f, "{}: {}", self.message(), e),
            EngineError::UnknownToken(id) => write!(f, "{}: {}", self.message(), id),
            EngineError::Busy => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        EngineError::InvalidConfig(value)
    }
}

impl From<SelectError> for EngineError {
    fn from(value: SelectError) -> Self {
        match value {
            SelectError::UnknownToken(id) => EngineError::UnknownToken(id),
            SelectError::Busy => EngineError::Busy,
        }
    }
}

/// One embedded session plus its board dimensions
#[derive(Debug, Clone)]
pub struct Engine {
    session: Session,
    width: u8,
    height: u8,
}

impl Engine {
    /// Validate the config and start a session over a fresh board
    pub fn initialize(config: BoardConfig) -> Result<Self, EngineError> {
        let width = config.width;
        let height = config.height;
        let session = Session::new(config)?;
        Ok(Self {
            session,
            width,
            height,
        })
    }

    /// Select a token by id; returns the observation after the transition.
    ///
    /// A select may complete instantly (selection moved) or run a whole
    /// swap-and-cascade sequence before returning.
    pub fn select(&mut self, id: u32) -> Result<Observation, EngineError> {
        let snapshot = self.session.select(TokenId(id))?;
        Ok(Observation::build(
            &snapshot,
            self.session.paused(),
            self.width,
            self.height,
        ))
    }

    /// Regenerate the board and zero the score
    pub fn reset(&mut self) -> Observation {
        let snapshot = self.session.reset();
        Observation::build(&snapshot, self.session.paused(), self.width, self.height)
    }

    /// Set the pause flag
    pub fn set_paused(&mut self, paused: bool) -> Observation {
        let snapshot = self.session.set_paused(paused);
        Observation::build(&snapshot, paused, self.width, self.height)
    }

    /// Observe the current state without changing it
    pub fn observe(&self) -> Observation {
        Observation::build(
            &self.session.snapshot(),
            self.session.paused(),
            self.width,
            self.height,
        )
    }

    /// Current observation as a JSON string
    pub fn observe_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.observe())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
