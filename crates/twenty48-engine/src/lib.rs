//! Board engine for the 2048 sliding-tile puzzle.
//!
//! Cells hold power exponents (0 = empty, `v` = tile face `2^v`). Every move
//! direction is reduced to a single "move left" primitive by rotating the
//! whole grid, so there is exactly one merge/slide algorithm.
//!
//! ```
//! use twenty48_engine::{Direction, GameState};
//!
//! let mut game = GameState::with_seed(4, 4, 7).unwrap();
//! let _changed = game.make_move(Direction::Left);
//! println!("{game}score: {}", game.score());
//! ```

pub mod engine;
pub mod error;

pub use engine::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, Direction, Exponent, GameState, Grid, SPAWN_EXPONENTS, Score,
};
pub use error::{EngineError, Result};
