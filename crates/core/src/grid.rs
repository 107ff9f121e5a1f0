//! Grid module - token arena plus positional index
//!
//! The grid owns every live token and answers positional queries in O(1)
//! through a flat row-major array of optional token ids. The token records
//! themselves live in an id-keyed map used only for id -> token lookup.
//! Coordinates: (col, row) with col in 0..width (left to right) and row in
//! 0..height (row 0 at the top).
//!
//! Between resolution phases the grid is always full: exactly one token per
//! cell. Vacant cells exist only transiently inside a cascade round, between
//! removal and refill.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::types::{
    TokenId, TokenKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_EDGE,
};

/// Board configuration: dimensions, kind alphabet, and RNG seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    pub kinds: Vec<TokenKind>,
    pub seed: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            kinds: TokenKind::ALL.to_vec(),
            seed: 1,
        }
    }
}

/// Rejected board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    EdgeTooLarge,
    EmptyAlphabet,
    /// Config dimensions disagree with a prepared grid's
    DimensionMismatch,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "board width must be at least 1"),
            ConfigError::ZeroHeight => write!(f, "board height must be at least 1"),
            ConfigError::EdgeTooLarge => {
                write!(f, "board dimensions must not exceed {}", MAX_BOARD_EDGE)
            }
            ConfigError::EmptyAlphabet => write!(f, "kind alphabet must be non-empty"),
            ConfigError::DimensionMismatch => {
                write!(f, "configured dimensions do not match the provided grid")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl BoardConfig {
    /// Validate dimensions and alphabet
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width as usize > MAX_BOARD_EDGE || self.height as usize > MAX_BOARD_EDGE {
            return Err(ConfigError::EdgeTooLarge);
        }
        if self.kinds.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }
}

/// A single grid-occupying game piece.
///
/// Identity and kind are fixed for the token's lifetime; only the position
/// changes (via swaps and gravity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
    pub col: u8,
    pub row: u8,
}

/// The board: a width x height cell index over an arena of live tokens
#[derive(Debug, Clone)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Option<TokenId>>,
    tokens: HashMap<TokenId, Token>,
    next_id: u32,
}

impl Grid {
    fn empty(width: u8, height: u8) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
            tokens: HashMap::with_capacity(size),
            next_id: 0,
        }
    }

    /// Generate a full board, drawing kinds through `draw`.
    ///
    /// Cells are visited in row-major order. Each draw is retried while it
    /// would complete an immediate run of three with the two cells to the
    /// left or the two cells above. This local heuristic is exactly the
    /// reference behavior: under row-major placement a run can only grow
    /// leftward or upward, so the last cell of any would-be run is always
    /// the one being placed and gets redrawn.
    ///
    /// `kinds` is the alphabet the draws come from; if no kind in it could
    /// avoid a run at some cell, the first draw is accepted rather than
    /// redrawing forever. Only alphabets of fewer than three kinds can
    /// reach that state: the left pair and the above pair forbid at most
    /// one kind each.
    pub fn generate(
        config: &BoardConfig,
        mut draw: impl FnMut() -> TokenKind,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Self::empty(config.width, config.height);
        for row in 0..config.height {
            for col in 0..config.width {
                let mut kind = draw();
                if config
                    .kinds
                    .iter()
                    .any(|&k| !grid.would_complete_run(col, row, k))
                {
                    while grid.would_complete_run(col, row, kind) {
                        kind = draw();
                    }
                }
                grid.spawn(kind, col, row);
            }
        }
        Ok(grid)
    }

    /// Build a grid from a kind matrix (outer: rows, top first).
    ///
    /// Ids are assigned in row-major placement order starting at 0, so a
    /// caller can address the token at (col, row) as `row * width + col`.
    /// Intended for deterministic layouts in tests and tools.
    ///
    /// Panics if `rows` is empty or ragged.
    pub fn from_rows(rows: &[Vec<TokenKind>]) -> Self {
        assert!(!rows.is_empty(), "from_rows: no rows");
        let width = rows[0].len();
        assert!(width > 0, "from_rows: empty rows");
        assert!(
            rows.iter().all(|r| r.len() == width),
            "from_rows: ragged rows"
        );
        assert!(
            width <= MAX_BOARD_EDGE && rows.len() <= MAX_BOARD_EDGE,
            "from_rows: dimensions exceed {}",
            MAX_BOARD_EDGE
        );

        let mut grid = Self::empty(width as u8, rows.len() as u8);
        for (row, kinds) in rows.iter().enumerate() {
            for (col, &kind) in kinds.iter().enumerate() {
                grid.spawn(kind, col as u8, row as u8);
            }
        }
        grid
    }

    /// Would placing `kind` at (col, row) complete a run of three with
    /// already-placed neighbors to the left or above?
    fn would_complete_run(&self, col: u8, row: u8, kind: TokenKind) -> bool {
        let left = col >= 2
            && self.kind_at(col - 1, row) == Some(kind)
            && self.kind_at(col - 2, row) == Some(kind);
        let above = row >= 2
            && self.kind_at(col, row - 1) == Some(kind)
            && self.kind_at(col, row - 2) == Some(kind);
        left || above
    }

    /// Calculate flat index from (col, row), or None if out of bounds
    #[inline]
    fn index(&self, col: u8, row: u8) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell contents at (col, row).
    ///
    /// Returns `None` out of bounds, `Some(None)` for a transiently vacant
    /// cell, `Some(Some(id))` for an occupied one.
    pub fn cell(&self, col: u8, row: u8) -> Option<Option<TokenId>> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Token occupying (col, row), if any
    pub fn token_at(&self, col: u8, row: u8) -> Option<&Token> {
        self.cell(col, row).flatten().map(|id| {
            self.tokens
                .get(&id)
                .expect("grid index points at a live token")
        })
    }

    /// Kind of the token at (col, row), if any
    pub fn kind_at(&self, col: u8, row: u8) -> Option<TokenKind> {
        self.token_at(col, row).map(|t| t.kind)
    }

    /// Look up a token by id
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(&id)
    }

    /// Whether `id` is on the board
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains_key(&id)
    }

    /// Iterate over all live tokens (unordered)
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// Live tokens in row-major cell order (snapshot/rendering order)
    pub fn tokens_row_major(&self) -> Vec<&Token> {
        self.cells
            .iter()
            .filter_map(|cell| cell.map(|id| &self.tokens[&id]))
            .collect()
    }

    /// Number of live tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether every cell holds a token (the stable-state invariant)
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Create a fresh token at (col, row) and return its id.
    ///
    /// Ids are never reused. Panics if the cell is out of bounds or
    /// occupied; callers only spawn into vacated cells.
    pub fn spawn(&mut self, kind: TokenKind, col: u8, row: u8) -> TokenId {
        let idx = self.index(col, row).expect("spawn: cell out of bounds");
        assert!(self.cells[idx].is_none(), "spawn: cell already occupied");

        let id = TokenId(self.next_id);
        self.next_id += 1;
        self.cells[idx] = Some(id);
        self.tokens.insert(id, Token { id, kind, col, row });
        id
    }

    /// Remove a token from the live set, vacating its cell
    pub fn remove(&mut self, id: TokenId) -> Option<Token> {
        let token = self.tokens.remove(&id)?;
        let idx = self
            .index(token.col, token.row)
            .expect("live token has an in-bounds position");
        self.cells[idx] = None;
        Some(token)
    }

    /// Exchange the positions of two tokens (kinds and ids unchanged).
    ///
    /// Applying the same exchange again restores the exact prior
    /// id-to-position mapping. Panics if either id is not on the board.
    pub fn swap_positions(&mut self, a: TokenId, b: TokenId) {
        assert!(a != b, "swap_positions: identical ids");
        let pa = {
            let t = self.tokens.get(&a).expect("swap_positions: unknown id");
            (t.col, t.row)
        };
        let pb = {
            let t = self.tokens.get(&b).expect("swap_positions: unknown id");
            (t.col, t.row)
        };

        let ia = self.index(pa.0, pa.1).expect("live token in bounds");
        let ib = self.index(pb.0, pb.1).expect("live token in bounds");
        self.cells.swap(ia, ib);

        if let Some(t) = self.tokens.get_mut(&a) {
            t.col = pb.0;
            t.row = pb.1;
        }
        if let Some(t) = self.tokens.get_mut(&b) {
            t.col = pa.0;
            t.row = pa.1;
        }
    }

    /// Apply gravity to one column: survivors keep their relative top-to-
    /// bottom order and are packed into the bottom-most rows. Returns the
    /// number of vacant rows left at the top of the column.
    pub fn settle_column(&mut self, col: u8) -> u8 {
        assert!(col < self.width, "settle_column: column out of bounds");

        let mut survivors: ArrayVec<TokenId, MAX_BOARD_EDGE> = ArrayVec::new();
        for row in 0..self.height {
            let idx = self.index(col, row).expect("column cell in bounds");
            if let Some(id) = self.cells[idx].take() {
                survivors.push(id);
            }
        }

        let vacancies = self.height - survivors.len() as u8;
        for (i, id) in survivors.iter().enumerate() {
            let row = vacancies + i as u8;
            let idx = self.index(col, row).expect("column cell in bounds");
            self.cells[idx] = Some(*id);
            let token = self.tokens.get_mut(id).expect("survivor is live");
            token.col = col;
            token.row = row;
        }

        vacancies
    }
}
