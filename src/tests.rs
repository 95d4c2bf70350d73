use std::io::Write;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::config::SolverConfig;
use crate::constants::*;
use crate::game::{GoalRule, State};
use crate::instance::{check_layout, deal, load_puzzle, standard_colors};
use crate::solver::solutions::{read_solution, store_solution, verify, SolutionRecord};
use crate::solver::{solve, solve_checked, Algorithm, Outcome};

#[test]
fn test_load_puzzle() {
    let from_notation = load_puzzle(SAMPLE_PUZZLE).unwrap();
    assert_eq!(from_notation.notation(), SAMPLE_PUZZLE);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"tubes": [["R", "G", "B"], ["B", "R", "G"], ["G", "B", "R"], []]}}"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();
    assert_eq!(load_puzzle(&path).unwrap(), from_notation);
}

#[test]
fn test_config_driven_solve() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"algorithm": "branch_and_bound", "max_expansions": 100000}}"#).unwrap();
    let config = SolverConfig::load(file.path()).unwrap();

    let start = load_puzzle(SAMPLE_PUZZLE).unwrap();
    let report = solve_checked(&start, None, &config).unwrap();
    assert_eq!(
        report.moves().map(|moves| moves.len()),
        Some(8),
        "{}",
        report
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solution.json");
    store_solution(&path, &SolutionRecord { start, report }).unwrap();
    let record = read_solution(&path).unwrap();
    assert!(record.report.is_solved());
    assert!(verify(&record.start, record.report.moves().unwrap(), GoalRule::Uniform).unwrap());
}

#[test]
fn test_engines_agree_on_deals() {
    let colors = standard_colors(3).unwrap();
    let mut rng = Pcg64Mcg::seed_from_u64(42);
    for _ in 0..30 {
        let start: State = deal(&colors, 3, &mut rng);
        assert_eq!(check_layout(&start, 3), Ok(()));
        let quick = solve(&start, Algorithm::Backtracking, DEFAULT_MAX_EXPANSIONS).unwrap();
        let best = solve(&start, Algorithm::BranchAndBound, DEFAULT_MAX_EXPANSIONS).unwrap();
        match (&quick.outcome, &best.outcome) {
            (Outcome::Insoluble, Outcome::Insoluble) => {}
            (Outcome::Solved { moves: found, .. }, Outcome::Solved { moves: shortest, proven_optimal }) => {
                assert!(*proven_optimal);
                assert!(shortest.len() <= found.len());
                assert!(verify(&start, found, GoalRule::Uniform).unwrap());
                assert!(verify(&start, shortest, GoalRule::Uniform).unwrap());
            }
            (a, b) => panic!("engines disagree on {}: {} vs {}", start.notation(), a, b),
        }
    }
}

#[test]
fn test_fixture_puzzles() {
    for (notation, optimum) in [(SAMPLE_PUZZLE, 8), (DETOUR_PUZZLE, 3), (DEEP_PUZZLE, 19)] {
        let start = load_puzzle(notation).unwrap();
        let report = solve(&start, Algorithm::BranchAndBound, DEFAULT_MAX_EXPANSIONS).unwrap();
        assert_eq!(
            report.outcome,
            Outcome::Solved {
                moves: report.moves().unwrap().to_vec(),
                proven_optimal: true
            }
        );
        assert_eq!(report.moves().map(|moves| moves.len()), Some(optimum));
    }
    let dead_end = load_puzzle(DEAD_END_PUZZLE).unwrap();
    for algorithm in Algorithm::ALL {
        let report = solve(&dead_end, algorithm, DEFAULT_MAX_EXPANSIONS).unwrap();
        assert_eq!(report.outcome, Outcome::Insoluble);
    }
}
