//! Inter-stage load coupling.
//!
//! The AC load a stage drives is its own collector resistor in parallel
//! with the input resistance of the element downstream of it. That input
//! resistance only exists once the downstream element is solved, which is
//! why the pipeline works back-to-front: the output-most element first,
//! then each preceding stage against the just-computed input resistance of
//! its successor.

use quiescent_core::units::{parallel, parallel3};

use crate::bias::{StageBias, THERMAL_VOLTAGE};
use crate::follower::FollowerBias;

/// Effective collector load of a stage driving something downstream.
pub fn effective_load(rc: f64, downstream_input: f64) -> f64 {
    parallel(rc, downstream_input)
}

/// Small-signal input resistance of a solved inverting stage:
/// `R1 || R2 || (rpi + (beta+1)*RE)`.
pub fn inverting_input_resistance(stage: &StageBias, beta: f64) -> f64 {
    let rpi = THERMAL_VOLTAGE * beta / stage.collector_current;
    parallel3(stage.r1, stage.r2, rpi + (beta + 1.0) * stage.re)
}

/// Input resistance of a single-supply follower:
/// `RB || (rpi + (beta+1)*RE)`, with rpi taken at the follower's quiescent
/// current `vce/RE`.
pub fn follower_input_resistance(follower: &FollowerBias, beta: f64, vcc: f64) -> f64 {
    let vce = vcc / 2.0;
    let rpi = THERMAL_VOLTAGE * beta / (vce / follower.re);
    parallel(follower.rb, rpi + (beta + 1.0) * follower.re)
}
