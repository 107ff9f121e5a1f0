//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, presentation glue, IPC DTOs).
//!
//! # Board Dimensions
//!
//! The reference board is square:
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 8 rows (indexed 0-7, row 0 at the top)
//!
//! Dimensions are configurable per session up to [`MAX_BOARD_EDGE`] cells
//! per side.
//!
//! # Scoring
//!
//! A resolution round that removes `m` tokens in cascade round `i`
//! (1-indexed) is worth `m * MATCH_POINTS * i`.
//!
//! # Examples
//!
//! ```
//! use match_three_types::{TokenId, TokenKind, DEFAULT_BOARD_WIDTH, MIN_RUN};
//!
//! let kind = TokenKind::Ruby;
//! assert_eq!(TokenKind::from_str("ruby"), Some(kind));
//! assert_eq!(kind.as_str(), "ruby");
//!
//! let id = TokenId(7);
//! assert_eq!(id.0, 7);
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 8);
//! assert_eq!(MIN_RUN, 3);
//! ```

/// Default board width in cells (8 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 8;

/// Default board height in cells (8 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 8;

/// Upper bound on either board dimension.
///
/// Column compaction buffers are stack-allocated with this capacity, so
/// configurations are validated against it.
pub const MAX_BOARD_EDGE: usize = 32;

/// Minimum run length that counts as a match (3 same-kind tokens)
pub const MIN_RUN: usize = 3;

/// Points awarded per matched token, before the cascade multiplier
pub const MATCH_POINTS: u32 = 10;

/// Stable identity of a token.
///
/// Assigned at creation, never reused and never mutated for the token's
/// lifetime. Ids are ordered by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u32);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The six token kinds of the reference alphabet
///
/// Tokens of the same kind are mutually matchable. The visual motif behind
/// each kind belongs to the presentation layer; the engine only compares
/// kinds for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ruby,
    Amber,
    Emerald,
    Sapphire,
    Amethyst,
    Pearl,
}

impl TokenKind {
    /// All kinds of the reference alphabet, in canonical order
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Ruby,
        TokenKind::Amber,
        TokenKind::Emerald,
        TokenKind::Sapphire,
        TokenKind::Amethyst,
        TokenKind::Pearl,
    ];

    /// Parse a kind from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match_three_types::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_str("ruby"), Some(TokenKind::Ruby));
    /// assert_eq!(TokenKind::from_str("Pearl"), Some(TokenKind::Pearl));
    /// assert_eq!(TokenKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(TokenKind::Ruby),
            "amber" => Some(TokenKind::Amber),
            "emerald" => Some(TokenKind::Emerald),
            "sapphire" => Some(TokenKind::Sapphire),
            "amethyst" => Some(TokenKind::Amethyst),
            "pearl" => Some(TokenKind::Pearl),
            _ => None,
        }
    }

    /// Convert to the lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Ruby => "ruby",
            TokenKind::Amber => "amber",
            TokenKind::Emerald => "emerald",
            TokenKind::Sapphire => "sapphire",
            TokenKind::Amethyst => "amethyst",
            TokenKind::Pearl => "pearl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(TokenKind::from_str("RUBY"), Some(TokenKind::Ruby));
        assert_eq!(TokenKind::from_str("Sapphire"), Some(TokenKind::Sapphire));
    }

    #[test]
    fn token_id_ordering_follows_creation_order() {
        assert!(TokenId(0) < TokenId(1));
        assert!(TokenId(41) < TokenId(42));
    }

    #[test]
    fn reference_constants() {
        assert_eq!(DEFAULT_BOARD_WIDTH, 8);
        assert_eq!(DEFAULT_BOARD_HEIGHT, 8);
        assert_eq!(MIN_RUN, 3);
        assert_eq!(MATCH_POINTS, 10);
        assert_eq!(TokenKind::ALL.len(), 6);
    }
}
