//! Solved design results: stages, follower, and the assembled design.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::topology::Topology;
use crate::units::format_ohms;

/// One solved common-emitter stage.
///
/// Owned by the [`DesignResult`] that contains it; immutable once solved.
/// Resistances in ohms, currents in amperes, voltages in volts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// 1-based position, 1 = closest to the input.
    pub index: usize,
    /// Collector resistor.
    pub rc: f64,
    /// Emitter resistor.
    pub re: f64,
    /// Upper base-divider resistor (to the positive rail).
    pub r1: f64,
    /// Lower base-divider resistor.
    pub r2: f64,
    /// Quiescent collector current (diagnostic).
    pub collector_current: f64,
    /// Quiescent base voltage (diagnostic).
    pub base_voltage: f64,
    /// Achieved loaded voltage-gain magnitude (diagnostic).
    pub gain: f64,
}

/// A solved output emitter-follower stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "bias", rename_all = "snake_case")]
pub enum FollowerStage {
    /// Single-supply form: one base resistor.
    SingleSupply { rb: f64, re: f64 },
    /// Dual-supply form: Thevenin base divider between the rails.
    DualSupply { r1: f64, r2: f64, re: f64 },
}

impl FollowerStage {
    /// Emitter resistor (ohms).
    pub fn re(&self) -> f64 {
        match *self {
            Self::SingleSupply { re, .. } | Self::DualSupply { re, .. } => re,
        }
    }
}

/// The complete solved resistor network for one design request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Topology the stages were solved under.
    pub topology: Topology,
    /// Inverting stages in signal order, input to output.
    pub stages: Vec<Stage>,
    /// Output follower, when requested or forced by the topology.
    pub follower: Option<FollowerStage>,
}

impl DesignResult {
    /// Product of the achieved per-stage gains. The follower contributes
    /// unity and is excluded.
    pub fn gain_product(&self) -> f64 {
        self.stages.iter().map(|s| s.gain).product()
    }

    /// Every resistor in the design, in schematic order. Length always
    /// matches [`Topology::resistor_count`].
    pub fn resistances(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.topology.resistor_count());
        for stage in &self.stages {
            out.extend([stage.r1, stage.r2, stage.rc, stage.re]);
        }
        match self.follower {
            Some(FollowerStage::SingleSupply { rb, re }) => out.extend([rb, re]),
            Some(FollowerStage::DualSupply { r1, r2, re }) => out.extend([r1, r2, re]),
            None => {}
        }
        out
    }
}

impl fmt::Display for DesignResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.topology)?;
        for stage in &self.stages {
            writeln!(
                f,
                "  stage {}: R1={} R2={} RC={} RE={} (Av={:.2})",
                stage.index,
                format_ohms(stage.r1),
                format_ohms(stage.r2),
                format_ohms(stage.rc),
                format_ohms(stage.re),
                stage.gain,
            )?;
        }
        match self.follower {
            Some(FollowerStage::SingleSupply { rb, re }) => {
                writeln!(f, "  follower: RB={} RE={}", format_ohms(rb), format_ohms(re))?;
            }
            Some(FollowerStage::DualSupply { r1, r2, re }) => {
                writeln!(
                    f,
                    "  follower: R1={} R2={} RE={}",
                    format_ohms(r1),
                    format_ohms(r2),
                    format_ohms(re)
                )?;
            }
            None => {}
        }
        Ok(())
    }
}
