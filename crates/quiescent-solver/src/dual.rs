//! Dual-supply bias synthesis for the four-stage symmetric-rail topology.
//!
//! Every inverting stage sits between +vcc and -vcc with an assumed
//! collector voltage close to the negative rail's headroom limit, and the
//! base divider is recovered from a Thevenin-equivalent network matching an
//! assumed input resistance. The follower uses the same synthesis around a
//! small emitter offset below ground.

use quiescent_core::{Error, Result};

use crate::bias::{THERMAL_VOLTAGE, VBE_ON};

/// Assumed quiescent collector voltage (V) of every dual-supply inverting
/// stage. Kept close to zero so the output swing clears the negative rail.
pub const COLLECTOR_VOLTAGE: f64 = 1.2;

/// Assumed quiescent emitter voltage (V) of the dual-supply follower.
pub const FOLLOWER_EMITTER_VOLTAGE: f64 = -0.6;

/// Fixed ratio of assumed stage input resistance to `rpi + (beta+1)*RE`.
pub const INPUT_RESISTANCE_RATIO: f64 = 0.5;

/// A solved dual-supply inverting stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualStageBias {
    /// Assumed collector resistor (ohms).
    pub rc: f64,
    /// Solved emitter resistor (ohms).
    pub re: f64,
    /// Upper base-divider resistor, to +vcc (ohms).
    pub r1: f64,
    /// Lower base-divider resistor, to -vcc (ohms).
    pub r2: f64,
    /// Quiescent collector current (A).
    pub collector_current: f64,
    /// Quiescent base voltage (V).
    pub base_voltage: f64,
    /// Achieved loaded gain magnitude.
    pub gain: f64,
    /// Assumed input resistance presented upstream (ohms).
    pub input_resistance: f64,
}

/// A solved dual-supply follower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualFollowerBias {
    /// Upper base-divider resistor (ohms).
    pub r1: f64,
    /// Lower base-divider resistor (ohms).
    pub r2: f64,
    /// Emitter resistor (ohms).
    pub re: f64,
    /// Assumed input resistance presented upstream (ohms).
    pub input_resistance: f64,
}

/// Solve one dual-supply inverting stage against its effective collector
/// load (already the parallel combination with the downstream input
/// resistance).
///
/// The operating point is fixed by the collector-voltage assumption:
/// `IC = (vcc - 1.2)/RC`, so `rpi` is known up front and the gain equation
/// is linear in `RE`:
///
/// ```text
/// RE = (beta*Rcl/g - rpi) / (beta + 1)
/// ```
pub fn solve_dual_stage(
    rc: f64,
    effective_load: f64,
    gain: f64,
    beta: f64,
    vcc: f64,
) -> Result<DualStageBias> {
    let ic = (vcc - COLLECTOR_VOLTAGE) / rc;
    let rpi = THERMAL_VOLTAGE * beta / ic;

    let re = (beta * effective_load / gain - rpi) / (beta + 1.0);
    if !re.is_finite() || re <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "stage gain {gain:.2} is unreachable with RC={rc} and load {effective_load:.1}"
        )));
    }

    let req = rpi + (beta + 1.0) * re;
    let rin = INPUT_RESISTANCE_RATIO * req;
    let rth = thevenin_resistance(rin, req)?;

    let ve = re * ic - vcc;
    let vb = VBE_ON + ve;
    let ib = ic / beta;
    let (r1, r2) = synthesize_divider(rth, vb, ib, vcc)?;

    Ok(DualStageBias {
        rc,
        re,
        r1,
        r2,
        collector_current: ic,
        base_voltage: vb,
        gain: beta * effective_load / req,
        input_resistance: rin,
    })
}

/// Solve the dual-supply follower for a chosen emitter resistor. The
/// emitter sits at a fixed small offset below ground, which sets the
/// emitter current against the negative rail; the base divider comes from
/// the same Thevenin synthesis the inverting stages use.
pub fn solve_dual_follower(re: f64, beta: f64, vcc: f64) -> Result<DualFollowerBias> {
    let ve = FOLLOWER_EMITTER_VOLTAGE;
    let ie = (ve + vcc) / re;
    if ie <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "follower emitter current is not positive for RE={re} at vcc={vcc}"
        )));
    }

    let rpi = THERMAL_VOLTAGE * beta / ie;
    let req = rpi + (beta + 1.0) * re;
    let rin = INPUT_RESISTANCE_RATIO * req;
    let rth = thevenin_resistance(rin, req)?;

    let vb = VBE_ON + ve;
    let ib = ie / beta;
    let (r1, r2) = synthesize_divider(rth, vb, ib, vcc)?;

    Ok(DualFollowerBias {
        r1,
        r2,
        re,
        input_resistance: rin,
    })
}

/// Solve `Rth` from `Rth || Req = Rin`. Requires `Rin < Req`.
fn thevenin_resistance(rin: f64, req: f64) -> Result<f64> {
    if rin >= req {
        return Err(Error::InfeasibleDesign(format!(
            "target input resistance {rin:.1} not below equivalent {req:.1}"
        )));
    }
    Ok(rin * req / (req - rin))
}

/// Recover the base divider (R1 to +vcc, R2 to -vcc) realizing Thevenin
/// resistance `rth` while holding the base at `vb` and sourcing base
/// current `ib`. The Thevenin voltage is referenced to the negative rail:
///
/// ```text
/// Vth = ib*Rth + vb + vcc
/// Veq = Vth / (2*vcc - Vth)
/// R1  = Rth * (1 + Veq) / Veq
/// R2  = Veq * R1
/// ```
fn synthesize_divider(rth: f64, vb: f64, ib: f64, vcc: f64) -> Result<(f64, f64)> {
    let span = 2.0 * vcc;
    let vth = ib * rth + vb + vcc;
    if vth <= 0.0 || vth >= span {
        return Err(Error::InfeasibleDesign(format!(
            "Thevenin voltage {vth:.2} V outside the 0..{span:.1} V rail span"
        )));
    }

    let veq = vth / (span - vth);
    let r1 = rth * (1.0 + veq) / veq;
    let r2 = veq * r1;
    if r1 <= 0.0 || r2 <= 0.0 {
        return Err(Error::InfeasibleDesign(format!(
            "base divider collapsed: R1={r1:.1}, R2={r2:.1}"
        )));
    }
    Ok((r1, r2))
}
