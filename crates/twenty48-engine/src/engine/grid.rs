use std::fmt;

use super::ops;
use crate::error::{EngineError, Result};

/// Stored cell value: 0 is empty, `v > 0` is the tile face `2^v`.
pub type Exponent = u8;
/// Board score, the sum of `2^exponent` over every cell.
pub type Score = u64;

/// Rectangular grid of tile exponents, stored row-major.
///
/// Row `y` is a display row and "left" is toward `x = 0`. The dimensions are
/// fixed for a given grid except that a quarter turn swaps them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Exponent>,
}

impl Grid {
    /// An all-empty `width x height` grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_cells(width, height, vec![0; width.saturating_mul(height)])
    }

    /// Build a grid from row-major cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Exponent>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::DegenerateDimensions { width, height });
        }
        if cells.len() != width * height {
            return Err(EngineError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from display rows, rejecting empty or ragged input.
    ///
    /// ```
    /// use twenty48_engine::Grid;
    /// let grid = Grid::from_rows(vec![vec![2, 2, 4, 0]]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (4, 1));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Exponent>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(EngineError::DegenerateDimensions { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(EngineError::RaggedRows {
                    row,
                    expected: width,
                    actual: line.len(),
                });
            }
            cells.extend(line);
        }
        Self::from_cells(width, height, cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Exponent at column `x`, row `y`.
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Exponent {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the exponent at column `x`, row `y`.
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, exponent: Exponent) {
        let idx = self.index(x, y);
        self.cells[idx] = exponent;
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Exponent] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Exponent] {
        &mut self.cells
    }

    /// Iterate over display rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Exponent]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Exponent>> {
        self.rows().map(<[Exponent]>::to_vec).collect()
    }

    /// Row-major indices of every empty cell. Scans the whole grid.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, &e)| (e == 0).then_some(idx))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&e| e == 0).count()
    }

    pub fn highest_exponent(&self) -> Exponent {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// `Σ 2^exponent` over every cell, empty cells included.
    ///
    /// ```
    /// use twenty48_engine::Grid;
    /// let grid = Grid::from_rows(vec![vec![0, 1, 2]]).unwrap();
    /// assert_eq!(grid.score(), 7);
    /// ```
    pub fn score(&self) -> Score {
        ops::line_score(&self.cells)
    }

    /// Merge equal tiles toward the left edge of every row, without sliding.
    /// Returns the total number of merges.
    pub fn merge_left(&mut self) -> usize {
        self.cells
            .chunks_mut(self.width)
            .map(ops::merge_line_left)
            .sum()
    }

    /// Slide every tile as far left as possible, without merging.
    /// Returns whether any tile moved.
    pub fn compact_left(&mut self) -> bool {
        self.cells
            .chunks_mut(self.width)
            .fold(false, |moved, row| ops::compact_line_left(row) | moved)
    }

    /// Rotate the whole grid a quarter turn clockwise. Dimensions swap.
    ///
    /// The bottom row becomes the left column, so a clockwise turn followed by
    /// a left move is a downward move in the original orientation.
    pub fn rotate_cw(&mut self) {
        let (w, h) = (self.width, self.height);
        let mut rotated = vec![0; self.cells.len()];
        // new (x', y') = old (y', h - 1 - x'), new width = h
        for ny in 0..w {
            for nx in 0..h {
                rotated[ny * h + nx] = self.cells[(h - 1 - nx) * w + ny];
            }
        }
        self.cells = rotated;
        self.width = h;
        self.height = w;
    }

    /// Apply `turns mod 4` clockwise quarter turns.
    pub fn rotate(&mut self, turns: usize) {
        for _ in 0..turns % 4 {
            self.rotate_cw();
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid{:?}", self.to_rows())
    }
}

/// One line per row, each cell shown as its raw exponent centered in a
/// five-character field between `|` separators.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "|{cell:^5}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
