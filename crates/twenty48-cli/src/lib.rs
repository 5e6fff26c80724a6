//! Terminal front end for the board engine: argument/config handling, board
//! file loading, input parsing and the interactive play loop.

pub mod args;
pub mod board;
pub mod config;
pub mod input;
pub mod session;
