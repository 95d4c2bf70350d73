/// Nuts per tube in the standard game.
pub const DEFAULT_CAPACITY: usize = 5;
/// Expansion cap used when none is configured.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 500_000;
/// Attempts `fresh_deal` makes before giving up on finding an unseen instance.
pub const DEFAULT_DEAL_ATTEMPTS: usize = 1000;
/// Engines log their counters every this many expansions.
pub const PROGRESS_INTERVAL: u64 = 1 << 20;

/// Labels in the order colors are handed out to generated instances.
pub const STANDARD_COLORS: [char; 15] = [
    'R', 'G', 'B', 'Y', 'O', 'V', 'P', 'C', 'M', 'S', 'L', 'T', 'D', 'A', 'I',
];

// fixtures shared by the tests and benches

/// Three colors, capacity 3, one buffer. Eight moves at best.
pub const SAMPLE_PUZZLE: &str = "RGB|BRG|GBR|";
/// Four colors, capacity 4, one buffer. Nineteen moves at best.
pub const DEEP_PUZZLE: &str = "RGBY|YBGR|BRYG|GYRB|";
/// Solvable in three moves, but the first path found depth first takes eight.
pub const DETOUR_PUZZLE: &str = "RRB|GGR|BBG||";
/// Every tube is full and none is sorted.
pub const DEAD_END_PUZZLE: &str = "RGB|BBB|GGR";
