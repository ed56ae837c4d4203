//! Overall-gain allocation across cascaded inverting stages.

/// Split an overall voltage-gain target geometrically: each of `stages`
/// inverting stages targets `gain^(1/stages)`, so the per-stage products
/// recompose the overall target. A follower, when present, is excluded from
/// the split; it buffers the output at unity gain.
pub fn allocate_stage_gains(gain: f64, stages: usize) -> Vec<f64> {
    let per_stage = gain.powf(1.0 / stages as f64);
    vec![per_stage; stages]
}
