//! Standard collector-resistor candidate tables and random selection.
//!
//! Each stage position carries an ordered set of three standard magnitudes;
//! values grow for stages electrically closer to the input so that headroom
//! is preserved as loading accumulates toward the output. Candidate
//! selection is the only source of non-determinism in the engine, so the
//! generator is always passed in by the caller.

use rand::Rng;

/// Three standard values assigned to one stage position (ohms).
pub type CandidateSet = [f64; 3];

const ONE_STAGE: [CandidateSet; 1] = [[10_500.0, 15_500.0, 19_500.0]];

const TWO_STAGES: [CandidateSet; 2] = [
    [12_500.0, 15_500.0, 19_500.0],
    [10_500.0, 13_500.0, 15_500.0],
];

const THREE_STAGES: [CandidateSet; 3] = [
    [22_500.0, 25_500.0, 28_500.0],
    [17_500.0, 18_500.0, 19_500.0],
    [10_500.0, 13_500.0, 15_500.0],
];

// A follower raises the load on the last stage, so the follower variants
// shift the input-side candidates down a notch.
const TWO_STAGES_FOLLOWER: [CandidateSet; 2] = [
    [17_500.0, 18_500.0, 19_500.0],
    [10_500.0, 13_500.0, 15_500.0],
];

const THREE_STAGES_FOLLOWER: [CandidateSet; 3] = [
    [21_500.0, 23_500.0, 25_500.0],
    [17_500.0, 18_500.0, 19_500.0],
    [10_500.0, 13_500.0, 15_500.0],
];

/// Dual-supply collector candidates, input to output.
pub const DUAL_COLLECTOR_CANDIDATES: [CandidateSet; 4] = [
    [7_000.0, 7_250.0, 7_500.0],
    [6_000.0, 6_250.0, 6_500.0],
    [5_000.0, 5_250.0, 5_500.0],
    [4_000.0, 4_250.0, 4_500.0],
];

/// Emitter-resistor candidates for the single-supply follower.
pub const SINGLE_FOLLOWER_RE: CandidateSet = [1_000.0, 1_500.0, 2_000.0];

/// Emitter-resistor candidates for the dual-supply follower.
pub const DUAL_FOLLOWER_RE: CandidateSet = [175.0, 200.0, 235.0];

/// Collector candidate tables for a single-supply topology, indexed input
/// to output (index 0 = stage 1).
pub fn collector_candidates(stages: usize, follower: bool) -> &'static [CandidateSet] {
    debug_assert!((1..=3).contains(&stages));
    match (stages, follower) {
        (1, _) => &ONE_STAGE,
        (2, false) => &TWO_STAGES,
        (2, true) => &TWO_STAGES_FOLLOWER,
        (3, false) => &THREE_STAGES,
        (_, true) => &THREE_STAGES_FOLLOWER,
        (_, false) => &THREE_STAGES,
    }
}

/// Uniform pick from a stage position's candidate set.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &CandidateSet) -> f64 {
    candidates[rng.gen_range(0..candidates.len())]
}
