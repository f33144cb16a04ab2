//! `Grid`: the immutable N×N sliding-tile board.
//!
//! # Layout
//!
//! Tiles are stored flattened in row-major order. Tile `0` is the blank.
//!
//! # Equality semantics
//!
//! Equality is by value (side + every cell). The fingerprint produced by
//! [`Grid::fingerprint`] is injective for a fixed separator, so two grids are
//! equal iff their fingerprints are equal. Search dedup relies on this.

use std::fmt;

use serde::Serialize;

use crate::error::KernelError;

/// A single tile value. `0` is reserved for the blank.
pub type Tile = u16;

/// The blank tile.
pub const BLANK: Tile = 0;

/// Separator used by fingerprints unless the caller configures another.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Smallest side length that still admits a legal move.
pub const MIN_SIDE: usize = 2;

/// Immutable square board.
///
/// Construct via [`Grid::parse`] or [`Grid::from_cells`]; both validate the
/// shape. Successor generation never mutates a grid, it produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    side: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Parse a separator-delimited tile sequence into a grid.
    ///
    /// A whitespace separator splits on any run of whitespace; any other
    /// separator splits exactly and trims each token.
    ///
    /// # Errors
    ///
    /// - [`KernelError::Format`] if a token is not a valid tile value.
    /// - [`KernelError::Shape`] if the token count is not a perfect square
    ///   of side >= 2.
    pub fn parse(text: &str, separator: &str) -> Result<Self, KernelError> {
        let tokens: Vec<&str> = if separator.trim().is_empty() {
            text.split_whitespace().collect()
        } else {
            text.trim().split(separator).map(str::trim).collect()
        };

        let cells = tokens
            .iter()
            .map(|token| {
                token.parse::<Tile>().map_err(|_| KernelError::Format {
                    token: (*token).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }

    /// Build a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Shape`] unless `cells.len()` is `side * side`
    /// for some `side >= 2`.
    pub fn from_cells(cells: Vec<Tile>) -> Result<Self, KernelError> {
        let tiles = cells.len();
        let side = integer_sqrt(tiles);
        if side < MIN_SIDE || side * side != tiles {
            return Err(KernelError::Shape { tiles });
        }
        Ok(Self { side, cells })
    }

    /// Side length N.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Row-major tiles.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.side + col]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.side)
    }

    /// Canonical row-major encoding joined with `separator`.
    ///
    /// Exact inverse of [`Grid::parse`] for a non-empty separator.
    #[must_use]
    pub fn fingerprint(&self, separator: &str) -> String {
        let mut out = String::with_capacity(self.cells.len() * (2 + separator.len()));
        for (i, tile) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&tile.to_string());
        }
        out
    }

    /// Coordinate of the blank tile.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvariantViolation`] if no cell holds [`BLANK`].
    pub fn blank_position(&self) -> Result<(usize, usize), KernelError> {
        self.position_of(BLANK)
            .ok_or_else(|| KernelError::InvariantViolation {
                detail: format!("no blank tile on {}x{} board", self.side, self.side),
            })
    }

    /// First coordinate holding `tile`, scanning row-major.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|idx| (idx / self.side, idx % self.side))
    }

    /// New grid with the tiles at `a` and `b` exchanged.
    #[must_use]
    pub fn with_swapped(&self, a: (usize, usize), b: (usize, usize)) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a.0 * self.side + a.1, b.0 * self.side + b.1);
        Self {
            side: self.side,
            cells,
        }
    }

    /// Heap bytes owned by this grid (the cell buffer).
    #[must_use]
    pub fn heap_bytes(&self) -> usize {
        self.cells.len() * std::mem::size_of::<Tile>()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{tile:4}")?;
            }
        }
        Ok(())
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0usize;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
