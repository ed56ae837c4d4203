//! Single-stage bias solving for common-emitter stages.

use quiescent_core::{Error, Result};

/// Room-temperature thermal voltage (V), the 25 mV in rπ = 0.025·β/IC.
pub const THERMAL_VOLTAGE: f64 = 0.025;

/// Forward drop of a conducting base-emitter junction (V).
pub const VBE_ON: f64 = 0.7;

/// A solved single-supply common-emitter stage, before assembly into a
/// design result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBias {
    /// Assumed collector resistor (ohms).
    pub rc: f64,
    /// Solved emitter resistor (ohms).
    pub re: f64,
    /// Upper base-divider resistor (ohms).
    pub r1: f64,
    /// Lower base-divider resistor (ohms).
    pub r2: f64,
    /// Quiescent collector current (A).
    pub collector_current: f64,
    /// Quiescent base voltage (V).
    pub base_voltage: f64,
    /// Achieved loaded gain magnitude.
    pub gain: f64,
}

/// Solve the bias network of one inverting stage.
///
/// The stage gain equation is
///
/// ```text
/// g = beta * Rcl / (rpi + (beta+1) * RE)
/// ```
///
/// with `Rcl` the effective collector load (`effective_load` when the stage
/// drives something downstream, bare `rc` otherwise), `rpi = 0.025*beta/IC`,
/// and `IC = vce/(RE+RC)` at the mid-supply operating point `vce = vcc/2`.
/// Substituting `rpi` makes the equation linear in `RE`, so the single
/// physically valid root comes out in closed form; a non-positive root means
/// the requested stage gain is unreachable for this collector resistor and
/// load, which is reported as [`Error::InfeasibleDesign`].
///
/// From `RE` the base network follows the one-tenth divider-current rule:
/// `R2 = beta*RE/10`, `VB = 0.7 + IC*RE`, `R1 = vcc*R2/VB - R2`.
pub fn solve_stage(
    rc: f64,
    effective_load: Option<f64>,
    gain: f64,
    beta: f64,
    vcc: f64,
) -> Result<StageBias> {
    let vce = vcc / 2.0;
    let rcl = effective_load.unwrap_or(rc);

    let numerator = beta * (vce * rcl - THERMAL_VOLTAGE * gain * rc);
    let denominator = gain * ((beta + 1.0) * vce + THERMAL_VOLTAGE * beta);
    let re = numerator / denominator;
    if !re.is_finite() || re <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "stage gain {gain:.2} is unreachable with RC={rc} and load {rcl:.1}"
        )));
    }

    let ic = vce / (re + rc);
    let r2 = beta * re / 10.0;
    let vb = VBE_ON + ic * re;
    let r1 = vcc * r2 / vb - r2;
    if r1 <= 0.0 || r2 <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "base divider collapsed: R1={r1:.1}, R2={r2:.1}"
        )));
    }

    let rpi = THERMAL_VOLTAGE * beta / ic;
    let achieved = beta * rcl / (rpi + (beta + 1.0) * re);

    Ok(StageBias {
        rc,
        re,
        r1,
        r2,
        collector_current: ic,
        base_voltage: vb,
        gain: achieved,
    })
}
