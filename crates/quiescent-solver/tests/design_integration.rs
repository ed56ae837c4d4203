//! Integration tests for the full design pipeline.

use quiescent_core::{DesignRequest, FollowerStage, Supply};
use quiescent_solver::design_seeded;

/// Relative tolerance on the achieved overall gain.
const GAIN_TOLERANCE: f64 = 0.01;

fn assert_design_sound(request: &DesignRequest, seed: u64) {
    let result = design_seeded(request, seed)
        .unwrap_or_else(|e| panic!("design failed for {request:?} (seed {seed}): {e}"));

    let resistances = result.resistances();
    assert_eq!(
        resistances.len(),
        result.topology.resistor_count(),
        "resistor count mismatch for {request:?}"
    );
    for (i, r) in resistances.iter().enumerate() {
        assert!(
            r.is_finite() && *r > 0.0,
            "resistor {i} = {r} for {request:?} (seed {seed})"
        );
    }

    let product = result.gain_product();
    assert!(
        (product - request.gain).abs() / request.gain < GAIN_TOLERANCE,
        "gain product {product} vs target {} for {request:?}",
        request.gain
    );
}

/// gain=10, beta=150, vcc=15, single supply, no follower: the documented
/// two-stage scenario.
#[test]
fn test_two_stage_scenario() {
    let request = DesignRequest::single(10.0, 150.0, 15.0, false);
    let result = design_seeded(&request, 1).unwrap();

    assert_eq!(result.stages.len(), 2);
    assert!(result.follower.is_none());
    assert_design_sound(&request, 1);
}

/// gain=200, beta=120, vcc=18, dual supply: exactly four inverting stages
/// plus one follower, nineteen positive resistors.
#[test]
fn test_dual_supply_scenario() {
    let request = DesignRequest::dual(200.0, 120.0, 18.0);
    let result = design_seeded(&request, 1).unwrap();

    assert_eq!(result.stages.len(), 4);
    assert!(matches!(
        result.follower,
        Some(FollowerStage::DualSupply { .. })
    ));
    assert_eq!(result.resistances().len(), 19);
    assert_design_sound(&request, 1);
}

/// Same request, same seed: bit-identical results.
#[test]
fn test_designs_are_reproducible() {
    let requests = [
        DesignRequest::single(10.0, 150.0, 15.0, false),
        DesignRequest::single(80.0, 120.0, 12.0, true),
        DesignRequest::dual(180.0, 100.0, 16.0),
    ];
    for request in &requests {
        for seed in 0..8 {
            let a = design_seeded(request, seed).unwrap();
            let b = design_seeded(request, seed).unwrap();
            assert_eq!(a, b, "seed {seed} not reproducible for {request:?}");
        }
    }
}

/// Boundary gains select the documented topologies.
#[test]
fn test_topology_boundaries() {
    for (gain, stages) in [
        (2.0, 1),
        (5.0, 1),
        (6.0, 2),
        (25.0, 2),
        (26.0, 3),
        (125.0, 3),
    ] {
        let request = DesignRequest::single(gain, 150.0, 15.0, false);
        let result = design_seeded(&request, 0).unwrap();
        assert_eq!(result.stages.len(), stages, "gain {gain}");
        assert!(result.follower.is_none());
    }

    for gain in [126.0, 250.0] {
        let request = DesignRequest::dual(gain, 150.0, 15.0);
        let result = design_seeded(&request, 0).unwrap();
        assert_eq!(result.stages.len(), 4, "gain {gain}");
        assert!(result.follower.is_some());
    }
}

/// A requested follower is present and solved in the single-supply form.
#[test]
fn test_requested_follower_is_appended() {
    for gain in [4.0, 20.0, 100.0] {
        let request = DesignRequest::single(gain, 150.0, 15.0, true);
        let result = design_seeded(&request, 2).unwrap();
        match result.follower {
            Some(FollowerStage::SingleSupply { rb, re }) => {
                assert!(rb > 0.0 && re > 0.0);
            }
            other => panic!("expected single-supply follower, got {other:?}"),
        }
        assert_design_sound(&request, 2);
    }
}

/// Sweep the single-supply band: every design in contract solves with
/// strictly positive resistors and recomposes the requested gain.
#[test]
fn test_single_supply_band_sweep() {
    for gain in (2..=125).step_by(3) {
        for beta in [80.0, 140.0, 200.0] {
            for vcc in [10.0, 15.0, 20.0] {
                for follower in [false, true] {
                    let request = DesignRequest::single(gain as f64, beta, vcc, follower);
                    assert_design_sound(&request, gain as u64);
                }
            }
        }
    }
}

/// Sweep the dual-supply band likewise.
#[test]
fn test_dual_supply_band_sweep() {
    for gain in (126..=250).step_by(4) {
        for beta in [80.0, 140.0, 200.0] {
            for vcc in [10.0, 15.0, 20.0] {
                let request = DesignRequest::dual(gain as f64, beta, vcc);
                assert_design_sound(&request, gain as u64);
            }
        }
    }
}

/// Base divider current rule holds in assembled results: R2 = beta*RE/10
/// for every single-supply stage.
#[test]
fn test_single_supply_divider_rule_in_results() {
    let beta = 150.0;
    let request = DesignRequest::single(60.0, beta, 18.0, false);
    let result = design_seeded(&request, 5).unwrap();
    for stage in &result.stages {
        assert!(
            (stage.r2 - beta * stage.re / 10.0).abs() < 1e-6,
            "stage {}: R2 = {}, RE = {}",
            stage.index,
            stage.r2,
            stage.re
        );
    }
}

/// The supply invariant: a dual request never yields a single-supply
/// follower form, and vice versa.
#[test]
fn test_follower_form_matches_supply_family() {
    let single = design_seeded(&DesignRequest::single(10.0, 150.0, 15.0, true), 9).unwrap();
    assert!(matches!(
        single.follower,
        Some(FollowerStage::SingleSupply { .. })
    ));
    assert!(!single.topology.dual_supply);
    assert!(matches!(
        DesignRequest::single(10.0, 150.0, 15.0, true).supply,
        Supply::Single { follower: true }
    ));

    let dual = design_seeded(&DesignRequest::dual(200.0, 120.0, 18.0), 9).unwrap();
    assert!(matches!(
        dual.follower,
        Some(FollowerStage::DualSupply { .. })
    ));
    assert!(dual.topology.dual_supply);
}
