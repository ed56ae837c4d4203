//! Design request and parameter validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Transistor current gain bounds accepted by all topology families.
pub const BETA_RANGE: (f64, f64) = (80.0, 200.0);

/// Supply voltage bounds (V) accepted by all topology families.
pub const VCC_RANGE: (f64, f64) = (10.0, 20.0);

/// Overall gain bounds for the single-supply ("basic") family.
pub const SINGLE_SUPPLY_GAIN_RANGE: (f64, f64) = (2.0, 125.0);

/// Overall gain bounds for the dual-supply ("advanced") family.
pub const DUAL_SUPPLY_GAIN_RANGE: (f64, f64) = (126.0, 250.0);

/// Supply family of a design.
///
/// Exactly one family is active per request. A follower stage is optional in
/// single-supply designs and always appended in dual-supply designs, so the
/// dual variant carries no follower flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Supply {
    /// Single positive rail, 1-3 inverting stages, optional output follower.
    Single { follower: bool },
    /// Symmetric +Vcc/-Vcc rails, 4 inverting stages plus a follower.
    Dual,
}

/// Validated input to the design pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Target overall voltage gain magnitude.
    pub gain: f64,
    /// Transistor current gain (IC/IB).
    pub beta: f64,
    /// Positive supply rail (V). Dual-supply designs use -vcc as the
    /// negative rail.
    pub vcc: f64,
    /// Supply family.
    pub supply: Supply,
}

impl DesignRequest {
    /// Single-supply request.
    pub fn single(gain: f64, beta: f64, vcc: f64, follower: bool) -> Self {
        Self {
            gain,
            beta,
            vcc,
            supply: Supply::Single { follower },
        }
    }

    /// Dual-supply request. The output follower is implied.
    pub fn dual(gain: f64, beta: f64, vcc: f64) -> Self {
        Self {
            gain,
            beta,
            vcc,
            supply: Supply::Dual,
        }
    }

    /// Check the request against the declared bounds of its family.
    ///
    /// Range validation is primarily a front-end concern; the engine
    /// re-rejects out-of-contract values so a malformed request can never
    /// reach the solvers.
    pub fn validate(&self) -> Result<()> {
        if !self.gain.is_finite() || !self.beta.is_finite() || !self.vcc.is_finite() {
            return Err(Error::InvalidParameters(
                "gain, beta and vcc must be finite".into(),
            ));
        }

        let (beta_lo, beta_hi) = BETA_RANGE;
        if self.beta < beta_lo || self.beta > beta_hi {
            return Err(Error::InvalidParameters(format!(
                "beta {} outside [{}, {}]",
                self.beta, beta_lo, beta_hi
            )));
        }

        let (vcc_lo, vcc_hi) = VCC_RANGE;
        if self.vcc < vcc_lo || self.vcc > vcc_hi {
            return Err(Error::InvalidParameters(format!(
                "vcc {} outside [{}, {}] V",
                self.vcc, vcc_lo, vcc_hi
            )));
        }

        let (gain_lo, gain_hi) = match self.supply {
            Supply::Single { .. } => SINGLE_SUPPLY_GAIN_RANGE,
            Supply::Dual => DUAL_SUPPLY_GAIN_RANGE,
        };
        if self.gain < gain_lo || self.gain > gain_hi {
            return Err(Error::InvalidParameters(format!(
                "gain {} outside [{}, {}] for this supply family",
                self.gain, gain_lo, gain_hi
            )));
        }

        Ok(())
    }
}
