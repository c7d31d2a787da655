//! Splits each phase's wall time into recognition (dead time before the
//! phase's first move) and execution (the span of its own moves). Timings
//! are derived on demand from an analysis plus the timestamped move log; the
//! analysis itself never stores them.

use cube_sim::Move;
use serde::{Deserialize, Serialize};

use crate::segmentation::{CfopAnalysis, CfopPhase};

/// One solving move with the millisecond timestamp it was performed at,
/// aligned index-for-index with the solve's move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedMove {
    pub timestamp_ms: u64,
    pub mv: Move,
}

/// The time split of one phase. All durations are milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    recognition_ms: u64,
    execution_ms: u64,
    move_count: usize,
    started_at: Option<u64>,
    ended_at: Option<u64>,
}

impl PhaseTiming {
    /// Dead time between the previous phase's last move and this phase's
    /// first.
    #[must_use]
    pub fn recognition_ms(&self) -> u64 {
        self.recognition_ms
    }

    /// Span from this phase's first move to its last; 0 for one move or
    /// none.
    #[must_use]
    pub fn execution_ms(&self) -> u64 {
        self.execution_ms
    }

    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.recognition_ms + self.execution_ms
    }

    /// Share of the phase spent recognizing, 0 when the phase took no time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn recognition_ratio(&self) -> f64 {
        let total = self.total_ms();
        if total == 0 {
            0.0
        } else {
            self.recognition_ms as f64 / total as f64
        }
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Timestamp of the phase's first move, if it has any.
    #[must_use]
    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// Timestamp of the phase's last move, if it has any.
    #[must_use]
    pub fn ended_at(&self) -> Option<u64> {
        self.ended_at
    }

    fn aggregate(timings: &[PhaseTiming]) -> PhaseTiming {
        PhaseTiming {
            recognition_ms: timings.iter().map(|t| t.recognition_ms).sum(),
            execution_ms: timings.iter().map(|t| t.execution_ms).sum(),
            move_count: timings.iter().map(|t| t.move_count).sum(),
            started_at: timings.iter().find_map(|t| t.started_at),
            ended_at: timings.iter().rev().find_map(|t| t.ended_at),
        }
    }
}

/// The recognition/execution split of a whole solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingBreakdown {
    cross: PhaseTiming,
    f2l: [PhaseTiming; 4],
    f2l_total: PhaseTiming,
    oll: PhaseTiming,
    pll: PhaseTiming,
}

impl TimingBreakdown {
    #[must_use]
    pub fn cross(&self) -> &PhaseTiming {
        &self.cross
    }

    /// Per-slot timings, in the analysis' completion order.
    #[must_use]
    pub fn f2l(&self) -> &[PhaseTiming; 4] {
        &self.f2l
    }

    /// All four slots summed into one F2L timing.
    #[must_use]
    pub fn f2l_total(&self) -> &PhaseTiming {
        &self.f2l_total
    }

    #[must_use]
    pub fn oll(&self) -> &PhaseTiming {
        &self.oll
    }

    #[must_use]
    pub fn pll(&self) -> &PhaseTiming {
        &self.pll
    }
}

/// Decompose a solve's duration into per-phase recognition and execution.
///
/// `timed_moves` must parallel the move list the analysis was built from.
/// Returns `None` when it is empty or does not line up with the analysis.
#[must_use]
pub fn phase_timings(
    analysis: &CfopAnalysis,
    timed_moves: &[TimedMove],
) -> Option<TimingBreakdown> {
    let total: usize = analysis.phases().map(CfopPhase::move_count).sum();
    if timed_moves.is_empty() || timed_moves.len() != total {
        return None;
    }

    let mut cursor = 0;
    let mut prev_end: Option<u64> = None;

    let mut timing_for = |phase: &CfopPhase| {
        let span = &timed_moves[cursor..cursor + phase.move_count()];
        cursor += phase.move_count();

        let (Some(first), Some(last)) = (span.first(), span.last()) else {
            return PhaseTiming::default();
        };

        let start = first.timestamp_ms;
        let end = last.timestamp_ms;
        let timing = PhaseTiming {
            // There is nothing to recognize before the first move of a solve
            recognition_ms: prev_end.map_or(0, |prev| start.saturating_sub(prev)),
            execution_ms: end.saturating_sub(start),
            move_count: phase.move_count(),
            started_at: Some(start),
            ended_at: Some(end),
        };
        prev_end = Some(end);

        timing
    };

    let cross = timing_for(analysis.cross());
    let f2l = [
        timing_for(&analysis.f2l()[0]),
        timing_for(&analysis.f2l()[1]),
        timing_for(&analysis.f2l()[2]),
        timing_for(&analysis.f2l()[3]),
    ];
    let oll = timing_for(analysis.oll());
    let pll = timing_for(analysis.pll());

    Some(TimingBreakdown {
        cross,
        f2l_total: PhaseTiming::aggregate(&f2l),
        f2l,
        oll,
        pll,
    })
}

#[cfg(test)]
mod tests {
    use cube_sim::parsing::parse_moves;
    use cube_sim::{CubeState, state_history};
    use pretty_assertions::assert_eq;

    use crate::segmentation::{CfopAnalysis, analyze};

    use super::{TimedMove, phase_timings};

    fn sune_analysis() -> CfopAnalysis {
        let scramble = parse_moves("R U2 R' U' R U' R'").unwrap();
        let solution = parse_moves("R U R' U R U2 R'").unwrap();
        let start = CubeState::solved().apply_all(&scramble);

        analyze(&solution, &state_history(start, &solution)).unwrap()
    }

    fn timed(timestamps: &[u64], solution: &str) -> Vec<TimedMove> {
        timestamps
            .iter()
            .zip(parse_moves(solution).unwrap())
            .map(|(&timestamp_ms, mv)| TimedMove { timestamp_ms, mv })
            .collect()
    }

    #[test]
    fn empty_or_mismatched_log_yields_no_timing() {
        let analysis = sune_analysis();

        assert_eq!(phase_timings(&analysis, &[]), None);
        assert_eq!(phase_timings(&analysis, &timed(&[0, 100], "R U")), None);
    }

    #[test]
    fn recognition_and_execution_split_per_phase() {
        // Cross = R U R', slot 1 = U, slot 4 = R U2 R'
        let analysis = sune_analysis();
        let log = timed(&[0, 200, 400, 800, 1000, 1100, 1300], "R U R' U R U2 R'");

        let breakdown = phase_timings(&analysis, &log).unwrap();

        let cross = breakdown.cross();
        assert_eq!(cross.recognition_ms(), 0);
        assert_eq!(cross.execution_ms(), 400);
        assert_eq!(cross.move_count(), 3);
        assert_eq!(cross.started_at(), Some(0));
        assert_eq!(cross.ended_at(), Some(400));

        let first_slot = &breakdown.f2l()[0];
        assert_eq!(first_slot.recognition_ms(), 400);
        assert_eq!(first_slot.execution_ms(), 0, "single-move phase");

        // Empty slots take no time and do not break the recognition chain
        assert_eq!(breakdown.f2l()[1].total_ms(), 0);
        assert_eq!(breakdown.f2l()[2].started_at(), None);

        let last_slot = &breakdown.f2l()[3];
        assert_eq!(last_slot.recognition_ms(), 200);
        assert_eq!(last_slot.execution_ms(), 300);

        assert_eq!(breakdown.oll().total_ms(), 0);
        assert_eq!(breakdown.pll().total_ms(), 0);
    }

    #[test]
    fn f2l_total_sums_the_slots() {
        let analysis = sune_analysis();
        let log = timed(&[0, 200, 400, 800, 1000, 1100, 1300], "R U R' U R U2 R'");

        let breakdown = phase_timings(&analysis, &log).unwrap();
        let total = breakdown.f2l_total();

        assert_eq!(total.recognition_ms(), 600);
        assert_eq!(total.execution_ms(), 300);
        assert_eq!(total.move_count(), 4);
        assert_eq!(total.started_at(), Some(800));
        assert_eq!(total.ended_at(), Some(1300));
        assert!((total.recognition_ratio() - 600.0 / 900.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_zero_for_zero_duration() {
        let analysis = sune_analysis();
        let log = timed(&[5; 7], "R U R' U R U2 R'");

        let breakdown = phase_timings(&analysis, &log).unwrap();

        assert!((breakdown.cross().recognition_ratio() - 0.0).abs() < f64::EPSILON);
    }
}
