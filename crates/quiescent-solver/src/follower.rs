//! Single-supply output emitter-follower bias solving.

use quiescent_core::{Error, Result};

use crate::bias::VBE_ON;

/// A solved single-supply follower: single base resistor plus emitter
/// resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerBias {
    /// Base bias resistor (ohms).
    pub rb: f64,
    /// Emitter resistor (ohms).
    pub re: f64,
}

/// Solve the fixed-form follower bias network for a chosen emitter
/// resistor. No gain target: the follower buffers at unity. The base
/// resistor places the operating point at mid-supply with base current
/// `IC/beta`:
///
/// ```text
/// RB = (0.7 + vce) / ((vce/RE) / beta)
/// ```
pub fn solve_follower(re: f64, beta: f64, vcc: f64) -> Result<FollowerBias> {
    let vce = vcc / 2.0;
    let rb = (VBE_ON + vce) / ((vce / re) / beta);
    if !rb.is_finite() || rb <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "follower base resistor collapsed: RB={rb:.1} for RE={re}"
        )));
    }
    Ok(FollowerBias { rb, re })
}
