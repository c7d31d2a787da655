use cube_sim::{Color, CubeState, Move, Turn, parsing::parse_moves, state_history};
use pretty_assertions::assert_eq;
use solve_analysis::{CfopAnalysis, PhaseKind, TimedMove, analyze, phase_timings};

fn inverted(moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .rev()
        .map(|mv| Move {
            face: mv.face,
            turn: match mv.turn {
                Turn::Clockwise => Turn::Counterclockwise,
                Turn::Counterclockwise => Turn::Clockwise,
                Turn::Half => Turn::Half,
            },
        })
        .collect()
}

fn analyze_solve(scramble: &str, solution: &[Move]) -> Option<CfopAnalysis> {
    let scramble = parse_moves(scramble).unwrap();
    let start = CubeState::solved().apply_all(&scramble);

    analyze(solution, &state_history(start, solution))
}

#[test_log::test]
fn undoing_a_scramble_segments_cleanly() {
    let scrambles = [
        "R U R' U'",
        "R2 B F' L D2 U R' F' B2 D",
        "F L2 D' R U2 B' L' D2 F2 R2 U",
        "L' U2 L U L' U L",
        "D F R B L U D' F' R' B'",
    ];

    for scramble in scrambles {
        let solution = inverted(&parse_moves(scramble).unwrap());
        let analysis = analyze_solve(scramble, &solution)
            .unwrap_or_else(|| panic!("no analysis for scramble {scramble}"));

        // Every solving move lands in exactly one phase, in order
        let replayed: Vec<Move> = analysis
            .phases()
            .flat_map(|phase| phase.moves().iter().copied())
            .collect();
        assert_eq!(replayed, solution, "scramble {scramble}");

        // A phase is marked skipped exactly when it got no moves
        for phase in analysis.phases() {
            assert_eq!(phase.skipped(), phase.moves().is_empty(), "scramble {scramble}");
        }
    }
}

#[test_log::test]
fn sune_ending_solve_end_to_end() {
    let solution = parse_moves("R U R' U R U2 R'").unwrap();
    let analysis = analyze_solve("R U2 R' U' R U' R'", &solution).unwrap();

    assert_eq!(analysis.cross_color(), Color::Yellow);
    assert_eq!(analysis.cross().moves(), &solution[..3]);
    assert_eq!(analysis.cross().kind(), PhaseKind::Cross);

    let f2l = analysis.f2l();
    assert_eq!(f2l[0].kind(), PhaseKind::F2l(1));
    assert_eq!(f2l[0].moves(), &solution[3..4]);
    assert!(f2l[1].skipped());
    assert!(f2l[2].skipped());
    assert_eq!(f2l[3].moves(), &solution[4..]);

    assert!(analysis.oll().skipped());
    assert!(analysis.pll().skipped());

    let log: Vec<TimedMove> = [0, 200, 400, 800, 1000, 1100, 1300]
        .into_iter()
        .zip(solution)
        .map(|(timestamp_ms, mv)| TimedMove { timestamp_ms, mv })
        .collect();
    let breakdown = phase_timings(&analysis, &log).unwrap();

    assert_eq!(breakdown.cross().execution_ms(), 400);
    assert_eq!(breakdown.f2l_total().recognition_ms(), 600);
    assert_eq!(breakdown.f2l_total().execution_ms(), 300);

    // The splits add back up to the solve's wall time
    let accounted: u64 = [breakdown.cross(), breakdown.oll(), breakdown.pll()]
        .into_iter()
        .chain(breakdown.f2l())
        .map(|timing| timing.total_ms())
        .sum();
    assert_eq!(accounted, 1300);
}

#[test_log::test]
fn long_scramble_red_cross_solve_keeps_phases_apart() {
    // A full-length scramble solved cross-first in red. The solution tears
    // the cross back down mid-F2L before rebuilding, ends the last layer
    // already oriented, and finishes with a corner-and-edge swap of the
    // left layer that gets redone after a slice-in adjustment.
    let solution = parse_moves(
        "R B' R' D' B2 F B2 F' D R B R' D2 L' U2 R U2 F2 L U2 F2 R2 D2 U' L' B D' L F R B' \
         U L U' L' U' F U2 L' U' L' U L U' F' R2 U L U' L' U' F U2 L' U' L' U L U' F'",
    )
    .unwrap();
    let analysis = analyze_solve(
        "R2 B R' F' L' D B' L U D2 R2 F2 U2 L' F2 U2 R' U2 L D2",
        &solution,
    )
    .unwrap();

    assert_eq!(analysis.cross_color(), Color::Red);
    assert_eq!(analysis.cross().moves(), &solution[..5]);

    let f2l = analysis.f2l();
    assert!(f2l.iter().any(|slot| !slot.skipped()));

    // F2L must not bleed into the last layer: everything between the cross
    // and the closing left-layer swap belongs to the slots
    let f2l_moves: usize = f2l.iter().map(|slot| slot.move_count()).sum();
    assert_eq!(f2l_moves, 41);
    assert!(analysis.oll().move_count() < 30);
    assert_eq!(analysis.pll().moves(), &solution[46..]);
    assert!(!analysis.pll().skipped());

    let rebuilt: Vec<Move> = analysis
        .phases()
        .flat_map(|phase| phase.moves().iter().copied())
        .collect();
    assert_eq!(rebuilt, solution);
}

#[test_log::test]
fn trailing_adjustment_is_a_skipped_pll() {
    let solution = parse_moves("R' U U").unwrap();
    let analysis = analyze_solve("U2 R", &solution).unwrap();

    assert_eq!(analysis.cross_color(), Color::Yellow);
    assert_eq!(analysis.cross().moves(), &solution[..1]);
    assert_eq!(analysis.f2l()[0].moves(), &solution[1..2]);
    assert_eq!(analysis.pll().moves(), &solution[2..]);
    assert!(analysis.pll().skipped(), "a lone U adjustment is not a PLL");
}
