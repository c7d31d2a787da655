use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cube::Face;

/// How far a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    Counterclockwise,
    Half,
}

impl Turn {
    /// Number of clockwise quarter turns this turn amounts to.
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::Counterclockwise => 3,
        }
    }
}

/// A single face turn. A solve is an ordered list of these; insertion order
/// is the solve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.face {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        };

        match self.turn {
            Turn::Clockwise => write!(f, "{letter}"),
            Turn::Counterclockwise => write!(f, "{letter}'"),
            Turn::Half => write!(f, "{letter}2"),
        }
    }
}

/// Render a move sequence the way it was entered: whitespace separated.
#[must_use]
pub fn format_move_seq(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
