//! Engine module: exponent grid, merge/slide line ops, and the game state
//! that ties them together with scoring and tile spawning.
//!
//! - `Grid` is the rectangular cell array with rotation and row primitives.
//! - `GameState` owns a grid, the score and the RNG used for spawns.
//! - Line-level merge/compact kernels live in `ops` and stay private.

pub mod grid;
mod ops;
pub mod state;

pub use grid::{Exponent, Grid, Score};
pub use state::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Direction, GameState, SPAWN_EXPONENTS};
