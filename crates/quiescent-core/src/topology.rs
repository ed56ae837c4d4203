//! Topology selection: gain band and supply family to stage count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::request::{DesignRequest, Supply};

/// Resolved amplifier topology: how many cascaded inverting stages, whether
/// an output follower is present, and which supply family drives the bias
/// equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Number of inverting common-emitter stages.
    pub stages: usize,
    /// Whether an emitter follower buffers the output.
    pub follower: bool,
    /// True for the symmetric +Vcc/-Vcc family.
    pub dual_supply: bool,
}

impl Topology {
    /// Map a request onto the topology table.
    ///
    /// Single supply: gain up to 5 needs one stage, up to 25 two, otherwise
    /// three (the bands [2,5], [6,25], [26,125]; fractional gains between
    /// bands fall into the larger one). Dual supply is fixed at four stages
    /// with a mandatory follower.
    ///
    /// Re-validates the request so an out-of-contract value can never select
    /// a topology.
    pub fn for_request(request: &DesignRequest) -> Result<Self> {
        request.validate()?;

        Ok(match request.supply {
            Supply::Single { follower } => {
                let stages = if request.gain <= 5.0 {
                    1
                } else if request.gain <= 25.0 {
                    2
                } else {
                    3
                };
                Self {
                    stages,
                    follower,
                    dual_supply: false,
                }
            }
            Supply::Dual => Self {
                stages: 4,
                follower: true,
                dual_supply: true,
            },
        })
    }

    /// Total number of resistors in the fixed schematic for this topology:
    /// four per inverting stage, plus two (single supply) or three (dual
    /// supply) for the follower.
    pub fn resistor_count(&self) -> usize {
        let follower = match (self.follower, self.dual_supply) {
            (false, _) => 0,
            (true, false) => 2,
            (true, true) => 3,
        };
        self.stages * 4 + follower
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-stage {}-supply amplifier{}",
            self.stages,
            if self.dual_supply { "dual" } else { "single" },
            if self.follower { " with follower" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(gain: f64) -> Topology {
        Topology::for_request(&DesignRequest::single(gain, 150.0, 15.0, false)).unwrap()
    }

    #[test]
    fn test_single_supply_gain_bands() {
        // Band boundaries: 2, 5 -> 1 stage; 6, 25 -> 2; 26, 125 -> 3.
        for (gain, stages) in [
            (2.0, 1),
            (5.0, 1),
            (6.0, 2),
            (25.0, 2),
            (26.0, 3),
            (125.0, 3),
        ] {
            let topo = single(gain);
            assert_eq!(topo.stages, stages, "gain {gain}");
            assert!(!topo.follower);
            assert!(!topo.dual_supply);
        }
    }

    #[test]
    fn test_gap_gain_falls_into_larger_band() {
        assert_eq!(single(5.5).stages, 2);
        assert_eq!(single(25.5).stages, 3);
    }

    #[test]
    fn test_follower_flag_carried() {
        let topo =
            Topology::for_request(&DesignRequest::single(10.0, 150.0, 15.0, true)).unwrap();
        assert_eq!(topo.stages, 2);
        assert!(topo.follower);
    }

    #[test]
    fn test_dual_supply_is_four_stages_plus_follower() {
        for gain in [126.0, 200.0, 250.0] {
            let topo = Topology::for_request(&DesignRequest::dual(gain, 120.0, 18.0)).unwrap();
            assert_eq!(topo.stages, 4);
            assert!(topo.follower);
            assert!(topo.dual_supply);
        }
    }

    #[test]
    fn test_out_of_band_request_rejected() {
        assert!(Topology::for_request(&DesignRequest::single(1.5, 150.0, 15.0, false)).is_err());
        assert!(Topology::for_request(&DesignRequest::dual(251.0, 150.0, 15.0)).is_err());
    }

    #[test]
    fn test_resistor_count() {
        assert_eq!(single(10.0).resistor_count(), 8);
        let with_follower =
            Topology::for_request(&DesignRequest::single(10.0, 150.0, 15.0, true)).unwrap();
        assert_eq!(with_follower.resistor_count(), 10);
        let dual = Topology::for_request(&DesignRequest::dual(200.0, 120.0, 18.0)).unwrap();
        assert_eq!(dual.resistor_count(), 19);
    }
}
