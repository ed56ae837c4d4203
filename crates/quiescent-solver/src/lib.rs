//! Analytical bias-resistor solvers for Quiescent.
//!
//! This crate turns a validated [`DesignRequest`] into a complete resistor
//! network for a multi-stage common-emitter amplifier:
//! - geometric allocation of the overall gain target across stages
//! - randomized selection of standard collector-resistor candidates
//! - closed-form single-stage bias solving
//! - back-to-front resolution of inter-stage loading
//! - emitter-follower bias solving and dual-supply Thevenin synthesis
//!
//! Entry point: [`design`] (caller-supplied generator) or [`design_seeded`]
//! (request-scoped generator, reproducible per seed).

pub mod bias;
pub mod candidates;
pub mod coupling;
pub mod design;
pub mod dual;
pub mod follower;
pub mod gain;

pub use bias::{solve_stage, StageBias, THERMAL_VOLTAGE, VBE_ON};
pub use design::{design, design_seeded};
pub use dual::{solve_dual_follower, solve_dual_stage, DualFollowerBias, DualStageBias};
pub use follower::{solve_follower, FollowerBias};
pub use gain::allocate_stage_gains;

pub use quiescent_core::{
    DesignRequest, DesignResult, Error, FollowerStage, Result, Stage, Supply, Topology,
};
