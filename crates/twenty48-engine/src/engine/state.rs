use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::grid::{Exponent, Grid, Score};
use crate::error::{EngineError, Result};

pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_HEIGHT: usize = 4;

/// Exponents a spawned tile may take, chosen uniformly (faces 2 and 4).
pub const SPAWN_EXPONENTS: [Exponent; 2] = [1, 2];

/// Upper bound (exclusive) for exponents written by `GameState::randomize`.
const RANDOM_FILL_LIMIT: Exponent = 10;

/// A direction to slide/merge tiles.
///
/// The discriminant is also the number of clockwise quarter turns that bring
/// the target edge to the left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    fn quarter_turns(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Up),
            other => Err(EngineError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
        };
        f.write_str(name)
    }
}

/// A single play session: the grid, its score and the RNG used for spawns.
///
/// Cloning produces a fully independent state (grid and RNG included), which
/// is what the game-over lookahead relies on.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    width: usize,
    height: usize,
    score: Score,
    rng: StdRng,
}

impl GameState {
    /// A fresh game seeded from OS entropy.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// A fresh game with a reproducible spawn sequence.
    ///
    /// ```
    /// use twenty48_engine::GameState;
    /// let a = GameState::with_seed(4, 4, 123).unwrap();
    /// let b = GameState::with_seed(4, 4, 123).unwrap();
    /// assert_eq!(a.grid(), b.grid());
    /// assert_eq!(a.grid().count_empty(), 15);
    /// ```
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// An empty `width x height` board with one starting tile spawned.
    pub fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self> {
        let mut state = Self::from_grid(Grid::new(width, height)?, rng);
        let exponent = state.random_spawn_exponent();
        state.spawn(exponent);
        debug!("new {width}x{height} game, starting tile exponent {exponent}");
        Ok(state)
    }

    /// Wrap an existing grid. No starting tile is spawned and score starts at 0.
    pub fn from_grid(grid: Grid, rng: StdRng) -> Self {
        let (width, height) = grid.dims();
        Self {
            grid,
            width,
            height,
            score: 0,
            rng,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Score as of the last merge: `Σ 2^exponent` over every cell, empty cells
    /// counting as 1. Spawns do not refresh it.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn count_empty(&self) -> usize {
        self.grid.count_empty()
    }

    pub fn highest_exponent(&self) -> Exponent {
        self.grid.highest_exponent()
    }

    /// Replace the board wholesale. The score is left as is.
    pub fn set_grid(&mut self, grid: Grid) -> Result<()> {
        if grid.dims() != (self.width, self.height) {
            return Err(EngineError::ShapeMismatch {
                expected: (self.width, self.height),
                actual: grid.dims(),
            });
        }
        self.grid = grid;
        Ok(())
    }

    /// Fill every cell with an exponent drawn uniformly from `0..10`.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.grid.cells_mut() {
            *cell = rng.gen_range(0..RANDOM_FILL_LIMIT);
        }
    }

    /// Place `exponent` on an empty cell chosen uniformly at random.
    ///
    /// Returns false, leaving the board untouched, when there is no empty cell
    /// or `exponent` is 0 (which would not place a tile).
    pub fn spawn(&mut self, exponent: Exponent) -> bool {
        if exponent == 0 {
            debug!("spawn of an empty tile ignored");
            return false;
        }
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            debug!("spawn of exponent {exponent} skipped: board full");
            return false;
        }
        let idx = empty[self.rng.gen_range(0..empty.len())];
        self.grid.cells_mut()[idx] = exponent;
        true
    }

    /// Merge then compact toward the left edge. Returns whether the grid changed.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use twenty48_engine::{GameState, Grid};
    /// let grid = Grid::from_rows(vec![vec![2, 2, 4, 0]]).unwrap();
    /// let mut game = GameState::from_grid(grid, StdRng::seed_from_u64(0));
    /// assert!(game.move_left());
    /// assert_eq!(game.grid().cells(), &[3, 4, 0, 0]);
    /// ```
    pub fn move_left(&mut self) -> bool {
        let before = self.grid.clone();
        if self.grid.merge_left() > 0 {
            self.score = self.grid.score();
        }
        self.grid.compact_left();
        self.grid != before
    }

    /// Slide/merge toward `direction`, then spawn a tile if anything changed.
    ///
    /// A move that changes nothing returns false and does not spawn.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        let before = self.grid.clone();
        let turns = direction.quarter_turns();
        self.grid.rotate(turns);
        self.move_left();
        self.grid.rotate((4 - turns) % 4);
        if self.grid == before {
            return false;
        }
        let exponent = self.random_spawn_exponent();
        self.spawn(exponent);
        true
    }

    /// `make_move` keyed by the numeric direction (0=left, 1=down, 2=right, 3=up).
    pub fn make_move_index(&mut self, direction: u8) -> Result<bool> {
        Ok(self.make_move(Direction::try_from(direction)?))
    }

    /// True when the board is full and no direction changes it.
    ///
    /// Each direction is tried on an independent copy, so `self` is untouched.
    pub fn is_over(&self) -> bool {
        if self.grid.count_empty() > 0 {
            return false;
        }
        !Direction::ALL
            .iter()
            .any(|&direction| self.clone().make_move(direction))
    }

    /// Rendered board, one text line per row with raw exponents.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    fn random_spawn_exponent(&mut self) -> Exponent {
        SPAWN_EXPONENTS[self.rng.gen_range(0..SPAWN_EXPONENTS.len())]
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: &[&[Exponent]]) -> GameState {
        let grid = Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap();
        GameState::from_grid(grid, StdRng::seed_from_u64(42))
    }

    fn non_empty(game: &GameState) -> usize {
        game.grid().cells().iter().filter(|&&e| e != 0).count()
    }

    #[test]
    fn new_game_has_exactly_one_starting_tile() {
        for seed in 0..32 {
            let game = GameState::with_seed(4, 4, seed).unwrap();
            assert_eq!(game.count_empty(), 15);
            assert!(SPAWN_EXPONENTS.contains(&game.highest_exponent()));
            assert_eq!(game.score(), 0);
            assert_eq!((game.width(), game.height()), (4, 4));
        }
    }

    #[test]
    fn degenerate_dimensions_fail_fast() {
        assert_eq!(
            GameState::with_seed(0, 4, 1).unwrap_err(),
            EngineError::DegenerateDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(GameState::new(4, 0).is_err());
    }

    #[test]
    fn direction_from_index() {
        for d in Direction::ALL {
            assert_eq!(Direction::try_from(d.index()), Ok(d));
        }
        assert_eq!(
            Direction::try_from(4),
            Err(EngineError::InvalidDirection(4))
        );
    }

    #[test]
    fn move_left_merges_then_slides() {
        let mut game = state(&[&[2, 2, 4, 0]]);
        assert!(game.move_left());
        assert_eq!(game.grid().cells(), &[3, 4, 0, 0]);
        assert_eq!(game.score(), 8 + 16 + 1 + 1);
    }

    #[test]
    fn move_left_chains_merges_from_one_origin() {
        let mut game = state(&[&[1, 1, 2, 0]]);
        assert!(game.move_left());
        assert_eq!(game.grid().cells(), &[3, 0, 0, 0]);
        assert_eq!(game.score(), 8 + 1 + 1 + 1);

        let mut game = state(&[&[1, 1, 1, 1]]);
        assert!(game.move_left());
        assert_eq!(game.grid().cells(), &[2, 2, 0, 0]);

        let mut game = state(&[&[1, 1, 2, 2]]);
        assert!(game.move_left());
        assert_eq!(game.grid().cells(), &[3, 2, 0, 0]);
    }

    #[test]
    fn slide_without_merge_leaves_score_alone() {
        let mut game = state(&[&[0, 1, 0, 2]]);
        assert!(game.move_left());
        assert_eq!(game.grid().cells(), &[1, 2, 0, 0]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn make_move_reaches_each_edge() {
        let column: &[&[Exponent]] = &[&[0, 1, 0, 0], &[0, 0, 0, 0], &[0, 1, 0, 0], &[0, 0, 0, 0]];

        let mut down = state(column);
        assert!(down.make_move(Direction::Down));
        assert_eq!(down.grid().get(1, 3), 2);
        assert_eq!(non_empty(&down), 2);

        let mut up = state(column);
        assert!(up.make_move(Direction::Up));
        assert_eq!(up.grid().get(1, 0), 2);
        assert_eq!(non_empty(&up), 2);

        let row: &[&[Exponent]] = &[&[1, 0, 0, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]];

        let mut right = state(row);
        assert!(right.make_move(Direction::Right));
        assert_eq!(right.grid().get(3, 0), 2);
        assert_eq!(non_empty(&right), 2);

        let mut left = state(row);
        assert!(left.make_move_index(0).unwrap());
        assert_eq!(left.grid().get(0, 0), 2);
        assert_eq!(non_empty(&left), 2);
    }

    #[test]
    fn make_move_spawns_one_small_tile_on_an_empty_cell() {
        let mut game = state(&[&[0, 0, 0, 3]]);
        assert!(game.make_move(Direction::Left));
        let cells = game.grid().cells();
        assert_eq!(cells[0], 3);
        assert_eq!(non_empty(&game), 2);
        assert!(cells[1..].iter().all(|e| *e == 0 || SPAWN_EXPONENTS.contains(e)));
    }

    #[test]
    fn no_op_move_changes_nothing() {
        let mut game = state(&[&[1, 2], &[3, 4]]);
        let before = game.grid().clone();
        for d in Direction::ALL {
            assert!(!game.make_move(d), "{d} should be illegal");
            assert_eq!(game.grid(), &before);
            assert_eq!(game.score(), 0);
        }

        let mut packed = state(&[&[1, 2, 0, 0]]);
        assert!(!packed.make_move(Direction::Left));
        assert_eq!(packed.grid().cells(), &[1, 2, 0, 0]);
    }

    #[test]
    fn invalid_direction_index_is_rejected() {
        let mut game = state(&[&[1, 0]]);
        assert_eq!(
            game.make_move_index(7),
            Err(EngineError::InvalidDirection(7))
        );
        assert_eq!(game.grid().cells(), &[1, 0]);
    }

    #[test]
    fn moves_work_on_non_square_boards() {
        let mut game = state(&[&[1, 0, 2], &[1, 0, 0]]);
        assert!(game.make_move(Direction::Up));
        assert_eq!((game.grid().width(), game.grid().height()), (3, 2));
        assert_eq!(game.grid().get(0, 0), 2);
        assert_eq!(game.grid().get(2, 0), 2);
        assert_eq!(non_empty(&game), 3);
    }

    #[test]
    fn full_board_without_pairs_is_over() {
        let game = state(&[&[1, 2, 1, 2], &[2, 1, 2, 1], &[1, 2, 1, 2], &[2, 1, 2, 1]]);
        assert!(game.is_over());

        let mut open = game.clone();
        let mut grid = open.grid().clone();
        grid.set(2, 1, 0);
        open.set_grid(grid).unwrap();
        assert!(!open.is_over());
    }

    #[test]
    fn full_board_with_a_vertical_pair_is_not_over() {
        let game = state(&[&[1, 2], &[1, 3]]);
        assert!(!game.is_over());
        // lookahead must not touch the real board
        assert_eq!(game.grid().to_rows(), vec![vec![1, 2], vec![1, 3]]);
    }

    #[test]
    fn spawn_fills_only_empty_cells() {
        let mut game = state(&[&[1, 0, 2]]);
        assert!(game.spawn(2));
        assert_eq!(game.grid().cells(), &[1, 2, 2]);
        assert!(!game.spawn(1));
        assert_eq!(game.grid().cells(), &[1, 2, 2]);
    }

    #[test]
    fn spawning_an_empty_tile_is_refused() {
        let mut game = state(&[&[1, 0, 0]]);
        assert!(!game.spawn(0));
        assert_eq!(game.grid().cells(), &[1, 0, 0]);
        assert!(game.spawn(2));
        assert_eq!(game.count_empty(), 1);
    }

    #[test]
    fn clone_does_not_share_the_board() {
        let original = state(&[&[1, 1, 0, 0]]);
        let mut copy = original.clone();
        assert!(copy.make_move(Direction::Left));
        assert_eq!(original.grid().cells(), &[1, 1, 0, 0]);
        assert_eq!(original.score(), 0);
    }

    #[test]
    fn set_grid_rejects_a_different_shape() {
        let mut game = state(&[&[1, 0], &[0, 0]]);
        let wide = Grid::new(3, 2).unwrap();
        assert_eq!(
            game.set_grid(wide),
            Err(EngineError::ShapeMismatch {
                expected: (2, 2),
                actual: (3, 2)
            })
        );
    }

    #[test]
    fn randomize_stays_in_range() {
        let mut game = GameState::with_seed(5, 5, 9).unwrap();
        game.randomize();
        assert!(game.grid().cells().iter().all(|&e| e < 10));
    }

    #[test]
    fn render_shows_exponents_not_faces() {
        let game = state(&[&[0, 11], &[3, 0]]);
        assert_eq!(game.render(), "|  0  | 11  |\n|  3  |  0  |\n");
        assert_eq!(game.to_string(), game.render());
    }
}
