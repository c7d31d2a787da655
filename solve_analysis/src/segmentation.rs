//! Partitions a solve's move list into the six CFOP phases by walking the
//! per-move state snapshots and the phase predicates.

use std::fmt;
use std::iter::once;

use cube_sim::{Color, CubeState, Face, Move, format_move_seq};
use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::predicates::{cross_solved, detect_cross_color, f2l_slot_solved, oll_solved, pll_solved};

/// Which phase of a solve a group of moves belongs to. F2L slots are
/// numbered by completion order, not by geometric position: `F2l(1)` is
/// whichever slot was finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Cross,
    F2l(u8),
    Oll,
    Pll,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseKind::Cross => write!(f, "Cross"),
            PhaseKind::F2l(n) => write!(f, "F2L {n}"),
            PhaseKind::Oll => write!(f, "OLL"),
            PhaseKind::Pll => write!(f, "PLL"),
        }
    }
}

/// One detected phase: its label, the sub-list of moves attributed to it
/// (possibly empty), and whether the solver skipped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CfopPhase {
    kind: PhaseKind,
    moves: Vec<Move>,
    skipped: bool,
}

impl CfopPhase {
    fn new(kind: PhaseKind, moves: Vec<Move>) -> CfopPhase {
        CfopPhase {
            kind,
            skipped: moves.is_empty(),
            moves,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    /// The moves attributed to this phase, in solve order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn skipped(&self) -> bool {
        self.skipped
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// The segmentation of one completed solve. Built once by [`analyze`] and
/// immutable afterwards; the concatenation of all phases in canonical order
/// (Cross, F2L 1-4, OLL, PLL) reconstructs the original move list exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CfopAnalysis {
    cross_color: Color,
    cross: CfopPhase,
    f2l: [CfopPhase; 4],
    oll: CfopPhase,
    pll: CfopPhase,
}

impl CfopAnalysis {
    /// The color the cross was solved in.
    #[must_use]
    pub fn cross_color(&self) -> Color {
        self.cross_color
    }

    #[must_use]
    pub fn cross(&self) -> &CfopPhase {
        &self.cross
    }

    /// The four F2L slot phases, in completion order.
    #[must_use]
    pub fn f2l(&self) -> &[CfopPhase; 4] {
        &self.f2l
    }

    #[must_use]
    pub fn oll(&self) -> &CfopPhase {
        &self.oll
    }

    #[must_use]
    pub fn pll(&self) -> &CfopPhase {
        &self.pll
    }

    /// All six phases in canonical order.
    pub fn phases(&self) -> impl Iterator<Item = &CfopPhase> {
        once(&self.cross)
            .chain(self.f2l.iter())
            .chain(once(&self.oll))
            .chain(once(&self.pll))
    }
}

/// Whether every move is a rotation of the face opposite the cross face.
/// Such a tail is a final orientation adjustment, not a permutation
/// algorithm.
fn auf_only(moves: &[Move], auf_face: Face) -> bool {
    !moves.is_empty() && moves.iter().all(|mv| mv.face == auf_face)
}

/// Segment a solve into its CFOP phases.
///
/// `states` must hold one snapshot per move plus the starting state, as
/// produced by [`cube_sim::state_history`] or an equivalent simulator using
/// the same sticker layout.
///
/// Returns `None` when the move list is empty, when the history does not
/// line up with it, or when no cross is ever completed; such a solve cannot
/// be CFOP-segmented. Every other missing boundary falls through to a
/// documented default, so a found cross always yields a complete analysis.
#[must_use]
pub fn analyze(moves: &[Move], states: &[CubeState]) -> Option<CfopAnalysis> {
    if moves.is_empty() || states.len() != moves.len() + 1 {
        return None;
    }

    let (cross_color, cross_end) = (1..states.len())
        .find_map(|i| detect_cross_color(&states[i]).map(|color| (color, i - 1)))?;

    trace!(
        "{cross_color:?} cross done at move {cross_end}: {}",
        format_move_seq(&moves[..=cross_end])
    );

    // A slot only counts once the cross has re-settled: F2L moves routinely
    // break the cross mid-algorithm.
    let mut recorded = [false; 4];
    let mut slot_bounds = Vec::with_capacity(4);
    for i in cross_end + 2..states.len() {
        if !cross_solved(&states[i], cross_color) {
            continue;
        }

        for slot in 0..4 {
            if !recorded[slot] && f2l_slot_solved(&states[i], cross_color, slot) {
                recorded[slot] = true;
                slot_bounds.push((slot, i - 1));
            }
        }

        if slot_bounds.len() == 4 {
            break;
        }
    }

    trace!(
        "slots done (geometric index @ move): {}",
        slot_bounds
            .iter()
            .map(|(slot, bound)| format!("{slot}@{bound}"))
            .join(", ")
    );

    let f2l_end = slot_bounds.last().map_or(cross_end, |&(_, bound)| bound);

    let oll_bound = (f2l_end + 1..states.len())
        .find_map(|i| oll_solved(&states[i], cross_color).then_some(i - 1));

    // An unresolved tail is still attributed to PLL rather than discarded.
    let pll_scan_from = oll_bound.unwrap_or(f2l_end);
    let pll_bound = (pll_scan_from + 1..states.len())
        .find_map(|i| pll_solved(&states[i]).then_some(i - 1))
        .unwrap_or(moves.len() - 1);

    let oll_end = oll_bound.unwrap_or(pll_bound);

    debug!("boundaries: cross {cross_end}, f2l {f2l_end}, oll {oll_end}, pll {pll_bound}");

    let cross = CfopPhase::new(PhaseKind::Cross, moves[..=cross_end].to_vec());

    let mut prev = cross_end;
    let f2l = std::array::from_fn(|k| {
        let slot_moves = match slot_bounds.get(k) {
            Some(&(_, bound)) => {
                let slot_moves = moves[prev + 1..=bound].to_vec();
                prev = bound;
                slot_moves
            }
            None => Vec::new(),
        };

        CfopPhase::new(PhaseKind::F2l([1, 2, 3, 4][k]), slot_moves)
    });

    let oll = CfopPhase::new(PhaseKind::Oll, moves[f2l_end + 1..=oll_end].to_vec());

    let mut pll = CfopPhase::new(PhaseKind::Pll, moves[oll_end + 1..].to_vec());
    pll.skipped = pll.moves.is_empty() || auf_only(&pll.moves, cross_color.home_face().opposite());

    Some(CfopAnalysis {
        cross_color,
        cross,
        f2l,
        oll,
        pll,
    })
}
