//! Boolean tests over a single cube state: cross complete, F2L slot
//! complete, last layer oriented, cube solved.
//!
//! The slot and cross-edge tables are per-orientation data, one fixed record
//! for each of the six possible cross faces, looked up by face rather than
//! computed. Expected colors are always read from the relevant face's
//! center, so every test works regardless of which physical piece currently
//! occupies a position.

use cube_sim::{Color, CubeState, Face};

/// The four first-layer edges of `face`: the edge position on the face
/// itself, paired with the sticker on the neighboring face that the same
/// piece shows.
fn cross_edges(face: Face) -> [(usize, (Face, usize)); 4] {
    match face {
        Face::Up => [
            (1, (Face::Back, 1)),
            (3, (Face::Left, 1)),
            (5, (Face::Right, 1)),
            (7, (Face::Front, 1)),
        ],
        Face::Down => [
            (1, (Face::Front, 7)),
            (3, (Face::Left, 7)),
            (5, (Face::Right, 7)),
            (7, (Face::Back, 7)),
        ],
        Face::Front => [
            (1, (Face::Up, 7)),
            (3, (Face::Left, 5)),
            (5, (Face::Right, 3)),
            (7, (Face::Down, 1)),
        ],
        Face::Back => [
            (1, (Face::Up, 1)),
            (3, (Face::Right, 5)),
            (5, (Face::Left, 3)),
            (7, (Face::Down, 7)),
        ],
        Face::Right => [
            (1, (Face::Up, 5)),
            (3, (Face::Front, 5)),
            (5, (Face::Back, 3)),
            (7, (Face::Down, 5)),
        ],
        Face::Left => [
            (1, (Face::Up, 3)),
            (3, (Face::Back, 5)),
            (5, (Face::Front, 3)),
            (7, (Face::Down, 3)),
        ],
    }
}

/// The sticker positions of one corner+edge pair of the first two layers.
struct SlotFacelets {
    corner: [(Face, usize); 3],
    edge: [(Face, usize); 2],
}

/// The four slots of the first two layers relative to `face`, the cross
/// face. Geometric order within each record is fixed; the segmentation
/// algorithm relabels slots by completion order.
fn slots(face: Face) -> [SlotFacelets; 4] {
    match face {
        Face::Up => [
            SlotFacelets {
                corner: [(Face::Up, 8), (Face::Front, 2), (Face::Right, 0)],
                edge: [(Face::Front, 5), (Face::Right, 3)],
            },
            SlotFacelets {
                corner: [(Face::Up, 6), (Face::Front, 0), (Face::Left, 2)],
                edge: [(Face::Front, 3), (Face::Left, 5)],
            },
            SlotFacelets {
                corner: [(Face::Up, 2), (Face::Back, 0), (Face::Right, 2)],
                edge: [(Face::Back, 3), (Face::Right, 5)],
            },
            SlotFacelets {
                corner: [(Face::Up, 0), (Face::Back, 2), (Face::Left, 0)],
                edge: [(Face::Back, 5), (Face::Left, 3)],
            },
        ],
        Face::Down => [
            SlotFacelets {
                corner: [(Face::Down, 2), (Face::Front, 8), (Face::Right, 6)],
                edge: [(Face::Front, 5), (Face::Right, 3)],
            },
            SlotFacelets {
                corner: [(Face::Down, 0), (Face::Front, 6), (Face::Left, 8)],
                edge: [(Face::Front, 3), (Face::Left, 5)],
            },
            SlotFacelets {
                corner: [(Face::Down, 8), (Face::Back, 6), (Face::Right, 8)],
                edge: [(Face::Back, 3), (Face::Right, 5)],
            },
            SlotFacelets {
                corner: [(Face::Down, 6), (Face::Back, 8), (Face::Left, 6)],
                edge: [(Face::Back, 5), (Face::Left, 3)],
            },
        ],
        Face::Front => [
            SlotFacelets {
                corner: [(Face::Up, 8), (Face::Front, 2), (Face::Right, 0)],
                edge: [(Face::Up, 5), (Face::Right, 1)],
            },
            SlotFacelets {
                corner: [(Face::Up, 6), (Face::Front, 0), (Face::Left, 2)],
                edge: [(Face::Up, 3), (Face::Left, 1)],
            },
            SlotFacelets {
                corner: [(Face::Down, 2), (Face::Front, 8), (Face::Right, 6)],
                edge: [(Face::Down, 5), (Face::Right, 7)],
            },
            SlotFacelets {
                corner: [(Face::Down, 0), (Face::Front, 6), (Face::Left, 8)],
                edge: [(Face::Down, 3), (Face::Left, 7)],
            },
        ],
        Face::Back => [
            SlotFacelets {
                corner: [(Face::Up, 2), (Face::Back, 0), (Face::Right, 2)],
                edge: [(Face::Up, 5), (Face::Right, 1)],
            },
            SlotFacelets {
                corner: [(Face::Up, 0), (Face::Back, 2), (Face::Left, 0)],
                edge: [(Face::Up, 3), (Face::Left, 1)],
            },
            SlotFacelets {
                corner: [(Face::Down, 8), (Face::Back, 6), (Face::Right, 8)],
                edge: [(Face::Down, 5), (Face::Right, 7)],
            },
            SlotFacelets {
                corner: [(Face::Down, 6), (Face::Back, 8), (Face::Left, 6)],
                edge: [(Face::Down, 3), (Face::Left, 7)],
            },
        ],
        Face::Right => [
            SlotFacelets {
                corner: [(Face::Up, 8), (Face::Front, 2), (Face::Right, 0)],
                edge: [(Face::Up, 7), (Face::Front, 1)],
            },
            SlotFacelets {
                corner: [(Face::Up, 2), (Face::Back, 0), (Face::Right, 2)],
                edge: [(Face::Up, 1), (Face::Back, 1)],
            },
            SlotFacelets {
                corner: [(Face::Down, 2), (Face::Front, 8), (Face::Right, 6)],
                edge: [(Face::Down, 1), (Face::Front, 7)],
            },
            SlotFacelets {
                corner: [(Face::Down, 8), (Face::Back, 6), (Face::Right, 8)],
                edge: [(Face::Down, 7), (Face::Back, 7)],
            },
        ],
        Face::Left => [
            SlotFacelets {
                corner: [(Face::Up, 6), (Face::Front, 0), (Face::Left, 2)],
                edge: [(Face::Up, 7), (Face::Front, 1)],
            },
            SlotFacelets {
                corner: [(Face::Up, 0), (Face::Back, 2), (Face::Left, 0)],
                edge: [(Face::Up, 1), (Face::Back, 1)],
            },
            SlotFacelets {
                corner: [(Face::Down, 0), (Face::Front, 6), (Face::Left, 8)],
                edge: [(Face::Down, 1), (Face::Front, 7)],
            },
            SlotFacelets {
                corner: [(Face::Down, 6), (Face::Back, 8), (Face::Left, 6)],
                edge: [(Face::Down, 7), (Face::Back, 7)],
            },
        ],
    }
}

fn facelets_match_centers(state: &CubeState, facelets: &[(Face, usize)]) -> bool {
    facelets
        .iter()
        .all(|&(face, idx)| state.sticker(face, idx) == state.center(face))
}

/// Whether the cross of `color` is complete: each of the four edge positions
/// of the home face shows `color` and the touching sticker on the
/// neighboring face matches that neighbor's center. A color-only match
/// without orientation does not count.
#[must_use]
pub fn cross_solved(state: &CubeState, color: Color) -> bool {
    let face = color.home_face();

    cross_edges(face).iter().all(|&(idx, (adj, adj_idx))| {
        state.sticker(face, idx) == color && state.sticker(adj, adj_idx) == state.center(adj)
    })
}

/// The first color, in the fixed priority order White, Yellow, Green, Blue,
/// Red, Orange, whose cross is complete. The priority order is the
/// deterministic tie-break when several crosses hold at once (always the
/// case on a solved cube).
#[must_use]
pub fn detect_cross_color(state: &CubeState) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&color| cross_solved(state, color))
}

/// Whether slot `slot_index` (0..4, geometric order) of the first two layers
/// relative to `cross_color` is complete: three corner stickers and two edge
/// stickers all matching their faces' centers.
#[must_use]
pub fn f2l_slot_solved(state: &CubeState, cross_color: Color, slot_index: usize) -> bool {
    let slot = &slots(cross_color.home_face())[slot_index];

    facelets_match_centers(state, &slot.corner) && facelets_match_centers(state, &slot.edge)
}

/// Whether the last layer is oriented: the face opposite the cross face is
/// uniform in its center color.
#[must_use]
pub fn oll_solved(state: &CubeState, cross_color: Color) -> bool {
    state.face_uniform(cross_color.home_face().opposite())
}

/// Whether the cube is fully solved: every face uniform in its center color.
#[must_use]
pub fn pll_solved(state: &CubeState) -> bool {
    [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ]
    .into_iter()
    .all(|face| state.face_uniform(face))
}
