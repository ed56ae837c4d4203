//! # Quiescent
//!
//! A bias-resistor design engine for multi-stage bipolar-transistor
//! common-emitter amplifiers.
//!
//! Given a target voltage gain, a transistor beta, and a supply voltage,
//! Quiescent selects a topology (one to four cascaded inverting stages,
//! with an optional or mandatory output follower), splits the gain target
//! geometrically across the stages, and solves each stage's bias network in
//! closed form, resolving inter-stage loading from the output back toward
//! the input.
//!
//! ## Quick start
//!
//! ```rust
//! use quiescent::prelude::*;
//!
//! let request = DesignRequest::single(10.0, 150.0, 15.0, false);
//! let result = design_seeded(&request, 42).unwrap();
//!
//! assert_eq!(result.stages.len(), 2);
//! let product = result.gain_product();
//! assert!((product - 10.0).abs() / 10.0 < 0.01);
//! ```
//!
//! Candidate selection is the only source of non-determinism; pass your own
//! generator to [`design`] or a seed to [`design_seeded`] to make designs
//! reproducible.

// Re-export the member crates.
pub use quiescent_core as core;
pub use quiescent_solver as solver;

// Convenient re-exports from quiescent_core.
pub use quiescent_core::{
    DesignRequest, DesignResult, Error, FollowerStage, Result, Stage, Supply, Topology,
};

// Convenient re-exports from quiescent_solver.
pub use quiescent_solver::{
    allocate_stage_gains, design, design_seeded, solve_dual_follower, solve_dual_stage,
    solve_follower, solve_stage, DualFollowerBias, DualStageBias, FollowerBias, StageBias,
};

/// Prelude module containing commonly used types and entry points.
///
/// ```rust
/// use quiescent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        design, design_seeded, DesignRequest, DesignResult, Error, FollowerStage, Result, Stage,
        Supply, Topology,
    };
}
