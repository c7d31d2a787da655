use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// One of the six sticker colors.
///
/// Declaration order is the cross-detection priority order used by the
/// analysis layer, and it mirrors [`Face`]: each color's home face is the
/// face with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// Every color, in cross-detection priority order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// The face whose center carries this color on a solved cube.
    #[must_use]
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
            Color::Red => Face::Right,
            Color::Orange => Face::Left,
        }
    }
}

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    /// The color of this face's center on a solved cube.
    #[must_use]
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }
}

/// Row-major source index for a clockwise face rotation: the sticker at
/// position `i` comes from position `ROTATE_CW[i]`.
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// The twelve stickers adjacent to a face, as four triples in cycle order: a
/// clockwise quarter turn moves each triple onto the next one, elementwise,
/// wrapping around.
///
/// Indices follow the unfolded-cross layout: Up is viewed with Back at its
/// top, Down with Front at its top, and the side faces upright with Up above
/// (Front's left column touches Left, Right's left column touches Front,
/// Back's left column touches Right, Left's left column touches Back).
fn neighbor_cycle(face: Face) -> [(Face, [usize; 3]); 4] {
    match face {
        Face::Up => [
            (Face::Front, [0, 1, 2]),
            (Face::Left, [0, 1, 2]),
            (Face::Back, [0, 1, 2]),
            (Face::Right, [0, 1, 2]),
        ],
        Face::Down => [
            (Face::Front, [6, 7, 8]),
            (Face::Right, [6, 7, 8]),
            (Face::Back, [6, 7, 8]),
            (Face::Left, [6, 7, 8]),
        ],
        Face::Front => [
            (Face::Up, [6, 7, 8]),
            (Face::Right, [0, 3, 6]),
            (Face::Down, [2, 1, 0]),
            (Face::Left, [8, 5, 2]),
        ],
        Face::Back => [
            (Face::Up, [0, 1, 2]),
            (Face::Left, [6, 3, 0]),
            (Face::Down, [8, 7, 6]),
            (Face::Right, [2, 5, 8]),
        ],
        Face::Right => [
            (Face::Front, [2, 5, 8]),
            (Face::Up, [2, 5, 8]),
            (Face::Back, [6, 3, 0]),
            (Face::Down, [2, 5, 8]),
        ],
        Face::Left => [
            (Face::Up, [0, 3, 6]),
            (Face::Front, [0, 3, 6]),
            (Face::Down, [0, 3, 6]),
            (Face::Back, [8, 5, 2]),
        ],
    }
}

/// The visible stickers of a 3x3x3 cube: nine per face, row-major, with
/// index 4 the center. Centers are fixed reference points and never change
/// color, since the engine only models outer face turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: [[Color; 9]; 6],
}

impl CubeState {
    /// The canonical solved state: every face uniform in its home color.
    #[must_use]
    pub fn solved() -> CubeState {
        CubeState {
            faces: [
                [Color::White; 9],
                [Color::Yellow; 9],
                [Color::Green; 9],
                [Color::Blue; 9],
                [Color::Red; 9],
                [Color::Orange; 9],
            ],
        }
    }

    /// Get the sticker at row-major position `idx` of `face`.
    #[must_use]
    pub fn sticker(&self, face: Face, idx: usize) -> Color {
        self.faces[face as usize][idx]
    }

    /// Get the center sticker of `face`.
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.faces[face as usize][4]
    }

    /// Whether every sticker of `face` matches its center.
    #[must_use]
    pub fn face_uniform(&self, face: Face) -> bool {
        let stickers = &self.faces[face as usize];
        stickers.iter().all(|&c| c == stickers[4])
    }

    /// Apply a single move, returning the resulting state. Any syntactically
    /// valid move applies to any state unconditionally.
    #[must_use]
    pub fn apply(self, mv: Move) -> CubeState {
        let mut state = self;
        for _ in 0..mv.turn.quarter_turns() {
            state = state.quarter_turn(mv.face);
        }
        state
    }

    /// Apply a whole move sequence in order.
    #[must_use]
    pub fn apply_all(self, moves: &[Move]) -> CubeState {
        moves.iter().fold(self, |state, mv| state.apply(*mv))
    }

    fn quarter_turn(self, face: Face) -> CubeState {
        let mut next = self;

        let f = face as usize;
        for (i, &src) in ROTATE_CW.iter().enumerate() {
            next.faces[f][i] = self.faces[f][src];
        }

        let cycle = neighbor_cycle(face);
        for from in 0..4 {
            let (from_face, from_idx) = cycle[from];
            let (to_face, to_idx) = cycle[(from + 1) % 4];
            for j in 0..3 {
                next.faces[to_face as usize][to_idx[j]] = self.faces[from_face as usize][from_idx[j]];
            }
        }

        next
    }
}

/// Record one snapshot per move: index 0 is `start` (the post-scramble
/// state), index i the state after move i-1. The segmentation algorithm
/// consumes this sequence read-only and never re-simulates.
#[must_use]
pub fn state_history(start: CubeState, moves: &[Move]) -> Vec<CubeState> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    let mut current = start;
    states.push(current);
    for &mv in moves {
        current = current.apply(mv);
        states.push(current);
    }
    states
}
