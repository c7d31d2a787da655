#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::missing_panics_doc)]

//! Segments a completed solve into the four CFOP phases and splits each
//! phase's duration into recognition and execution time.
//!
//! The caller supplies the move list and one cube-state snapshot per move
//! (see [`cube_sim::state_history`]); nothing here re-simulates, performs
//! I/O, or keeps state across calls.

pub mod predicates;
pub mod segmentation;
pub mod timing;

pub use segmentation::{CfopAnalysis, CfopPhase, PhaseKind, analyze};
pub use timing::{PhaseTiming, TimedMove, TimingBreakdown, phase_timings};
