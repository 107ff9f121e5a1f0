//! Observation module - JSON-serializable views of the session
//!
//! Everything a host process needs to render or drive a session, flattened
//! into plain serde structs. Kinds and phases serialize as lowercase
//! strings so observations stay stable across internal renames.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, SessionSnapshot};
use crate::types::{TokenId, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindLower {
    #[serde(rename = "ruby")]
    Ruby,
    #[serde(rename = "amber")]
    Amber,
    #[serde(rename = "emerald")]
    Emerald,
    #[serde(rename = "sapphire")]
    Sapphire,
    #[serde(rename = "amethyst")]
    Amethyst,
    #[serde(rename = "pearl")]
    Pearl,
}

impl From<TokenKind> for KindLower {
    fn from(value: TokenKind) -> Self {
        match value {
            TokenKind::Ruby => Self::Ruby,
            TokenKind::Amber => Self::Amber,
            TokenKind::Emerald => Self::Emerald,
            TokenKind::Sapphire => Self::Sapphire,
            TokenKind::Amethyst => Self::Amethyst,
            TokenKind::Pearl => Self::Pearl,
        }
    }
}

impl From<KindLower> for TokenKind {
    fn from(value: KindLower) -> Self {
        match value {
            KindLower::Ruby => Self::Ruby,
            KindLower::Amber => Self::Amber,
            KindLower::Emerald => Self::Emerald,
            KindLower::Sapphire => Self::Sapphire,
            KindLower::Amethyst => Self::Amethyst,
            KindLower::Pearl => Self::Pearl,
        }
    }
}

/// Session phase as observed from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum PhaseDto {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "selected")]
    Selected { id: u32 },
    #[serde(rename = "processing")]
    Processing,
}

impl From<Phase> for PhaseDto {
    fn from(value: Phase) -> Self {
        match value {
            Phase::Idle => Self::Idle,
            Phase::Selected(id) => Self::Selected { id: id.0 },
            Phase::Processing => Self::Processing,
        }
    }
}

/// One live token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDto {
    pub id: u32,
    pub col: u8,
    pub row: u8,
    pub kind: KindLower,
}

/// Full session observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub phase: PhaseDto,
    pub score: u32,
    pub paused: bool,
    pub width: u8,
    pub height: u8,
    /// Row-major: row 0 first, left to right
    pub board: Vec<TokenDto>,
    #[serde(rename = "last_removed")]
    pub last_removed: Vec<u32>,
}

impl Observation {
    pub(crate) fn build(snapshot: &SessionSnapshot, paused: bool, width: u8, height: u8) -> Self {
        Self {
            phase: snapshot.phase.into(),
            score: snapshot.score,
            paused,
            width,
            height,
            board: snapshot
                .board
                .iter()
                .map(|t| TokenDto {
                    id: t.id.0,
                    col: t.col,
                    row: t.row,
                    kind: t.kind.into(),
                })
                .collect(),
            last_removed: snapshot.last_removed.iter().map(|TokenId(n)| *n).collect(),
        }
    }
}
