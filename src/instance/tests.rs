use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use super::*;
use crate::solver::{solve, Algorithm};

fn rgb() -> Vec<Item> {
    standard_colors(3).unwrap()
}

#[test]
fn test_sorted() {
    let state = sorted(&rgb(), 4, 2);
    assert_eq!(state.notation(), "RRRR|GGGG|BBBB||");
    assert_eq!(state.capacity(), 4);
    assert!(state.is_complete());
}

#[test]
fn test_deal_shape() {
    let mut rng = Pcg64Mcg::seed_from_u64(7);
    let colors = standard_colors(5).unwrap();
    for _ in 0..20 {
        let state = deal(&colors, 5, &mut rng);
        assert_eq!(check_layout(&state, colors.len()), Ok(()));
        let counts = state.item_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 5));
    }
}

#[test]
fn test_deal_is_reproducible() {
    let colors = rgb();
    let a = deal(&colors, 4, &mut Pcg64Mcg::seed_from_u64(11));
    let b = deal(&colors, 4, &mut Pcg64Mcg::seed_from_u64(11));
    assert_eq!(a, b);
}

#[test]
fn test_scramble_is_solvable() {
    let mut rng = Pcg64Mcg::seed_from_u64(3);
    let colors = rgb();
    for moves in [5, 10, 20] {
        let state = scramble(&colors, 3, 2, moves, &mut rng);
        assert_eq!(state.item_counts(), sorted(&colors, 3, 2).item_counts());
        let report = solve(&state, Algorithm::Backtracking, 1_000_000).unwrap();
        assert!(report.is_solved(), "{} was not solved", state.notation());
    }
}

#[test]
fn test_check_layout() {
    let good: State = "RGB|BRG|GBR|".parse().unwrap();
    assert_eq!(check_layout(&good, 3), Ok(()));
    assert_eq!(
        check_layout(&good, 4),
        Err(InvalidInput::TubeCount {
            expected: 5,
            found: 4
        })
    );
    let short: State = "RGBR|BR|GBRG|".parse().unwrap();
    assert_eq!(
        check_layout(&short, 3),
        Err(InvalidInput::NotFull {
            tube: 1,
            len: 2,
            capacity: 4
        })
    );
    let busy: State = "RG|BR|G".parse::<State>().unwrap().with_capacity(2);
    assert_eq!(check_layout(&busy, 2), Err(InvalidInput::BufferNotEmpty(2)));
}

#[test]
fn test_fresh_deal_skips_known_instances() {
    let colors = standard_colors(2).unwrap();
    let mut ledger = MemoryLedger::new();
    let mut rng = Pcg64Mcg::seed_from_u64(1);
    // two colors of capacity 2 can only be dealt six ways
    let mut seen = Vec::new();
    while let Some(state) = fresh_deal(&colors, 2, &mut ledger, 200, &mut rng).unwrap() {
        assert!(!seen.contains(&state));
        seen.push(state);
    }
    assert_eq!(seen.len(), 6);
    assert_eq!(ledger.len(), 6);
}

#[test]
fn test_file_ledger_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let state: State = "RG|GR|".parse().unwrap();
    {
        let mut ledger = FileLedger::open(&path).unwrap();
        assert!(ledger.is_empty());
        assert!(!ledger.contains(&state));
        ledger.record(&state).unwrap();
        ledger.record(&state).unwrap();
        assert_eq!(ledger.len(), 1);
    }
    let reopened = FileLedger::open(&path).unwrap();
    assert!(reopened.contains(&state));
    // the same tubes at another capacity are a different instance
    assert!(!reopened.contains(&state.clone().with_capacity(3)));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn test_file_ledger_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(FileLedger::open(&path), Err(SolverError::Serde(_))));
}
