#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::missing_panics_doc)]

pub mod cube;
pub mod moves;
pub mod parsing;

pub use cube::{Color, CubeState, Face, state_history};
pub use moves::{Move, Turn, format_move_seq};
