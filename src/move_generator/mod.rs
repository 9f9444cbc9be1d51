//! Checkers move generation.

pub mod generator;

pub use generator::{count_positions, directions, generate_moves, has_legal_moves};
