//! The design pipeline: topology selection, candidate picks, and the
//! back-to-front stage solve.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use quiescent_core::{
    DesignRequest, DesignResult, FollowerStage, Result, Stage, Supply, Topology,
};

use crate::bias::{self, StageBias};
use crate::candidates::{
    self, DUAL_COLLECTOR_CANDIDATES, DUAL_FOLLOWER_RE, SINGLE_FOLLOWER_RE,
};
use crate::coupling;
use crate::dual::{self, DualStageBias};
use crate::follower;
use crate::gain::allocate_stage_gains;

/// Run the full design pipeline for one request.
///
/// The generator drives candidate selection only; identical (request, seed)
/// pairs reproduce identical results. Draw order is fixed: the follower's
/// emitter resistor first (when a follower is present), then one collector
/// resistor per stage from the output back toward the input.
pub fn design<R: Rng + ?Sized>(request: &DesignRequest, rng: &mut R) -> Result<DesignResult> {
    let topology = Topology::for_request(request)?;
    debug!(
        %topology,
        gain = request.gain,
        beta = request.beta,
        vcc = request.vcc,
        "starting design"
    );

    match request.supply {
        Supply::Single { .. } => design_single_supply(request, topology, rng),
        Supply::Dual => design_dual_supply(request, topology, rng),
    }
}

/// [`design`] with a request-scoped generator seeded from `seed`.
pub fn design_seeded(request: &DesignRequest, seed: u64) -> Result<DesignResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    design(request, &mut rng)
}

fn design_single_supply<R: Rng + ?Sized>(
    request: &DesignRequest,
    topology: Topology,
    rng: &mut R,
) -> Result<DesignResult> {
    let DesignRequest { gain, beta, vcc, .. } = *request;
    let targets = allocate_stage_gains(gain, topology.stages);
    let tables = candidates::collector_candidates(topology.stages, topology.follower);

    // Output-most element first: its input resistance loads the stage
    // before it.
    let (solved_follower, mut downstream) = if topology.follower {
        let re = candidates::pick(rng, &SINGLE_FOLLOWER_RE);
        let f = follower::solve_follower(re, beta, vcc)?;
        let rin = coupling::follower_input_resistance(&f, beta, vcc);
        debug!(re, rb = f.rb, rin, "solved follower");
        (Some(f), Some(rin))
    } else {
        (None, None)
    };

    let mut solved: Vec<StageBias> = Vec::with_capacity(topology.stages);
    for position in (0..topology.stages).rev() {
        let rc = candidates::pick(rng, &tables[position]);
        let load = downstream.map(|rin| coupling::effective_load(rc, rin));
        let stage = bias::solve_stage(rc, load, targets[position], beta, vcc)?;
        downstream = Some(coupling::inverting_input_resistance(&stage, beta));
        debug!(stage = position + 1, rc, re = stage.re, "solved inverting stage");
        solved.push(stage);
    }
    solved.reverse();

    Ok(DesignResult {
        topology,
        stages: solved
            .iter()
            .enumerate()
            .map(|(i, s)| Stage {
                index: i + 1,
                rc: s.rc,
                re: s.re,
                r1: s.r1,
                r2: s.r2,
                collector_current: s.collector_current,
                base_voltage: s.base_voltage,
                gain: s.gain,
            })
            .collect(),
        follower: solved_follower.map(|f| FollowerStage::SingleSupply { rb: f.rb, re: f.re }),
    })
}

fn design_dual_supply<R: Rng + ?Sized>(
    request: &DesignRequest,
    topology: Topology,
    rng: &mut R,
) -> Result<DesignResult> {
    let DesignRequest { gain, beta, vcc, .. } = *request;
    let targets = allocate_stage_gains(gain, topology.stages);

    let re = candidates::pick(rng, &DUAL_FOLLOWER_RE);
    let f = dual::solve_dual_follower(re, beta, vcc)?;
    debug!(re, rin = f.input_resistance, "solved dual-supply follower");

    let mut downstream = f.input_resistance;
    let mut solved: Vec<DualStageBias> = Vec::with_capacity(topology.stages);
    for position in (0..topology.stages).rev() {
        let rc = candidates::pick(rng, &DUAL_COLLECTOR_CANDIDATES[position]);
        let load = coupling::effective_load(rc, downstream);
        let stage = dual::solve_dual_stage(rc, load, targets[position], beta, vcc)?;
        downstream = stage.input_resistance;
        debug!(stage = position + 1, rc, re = stage.re, "solved inverting stage");
        solved.push(stage);
    }
    solved.reverse();

    Ok(DesignResult {
        topology,
        stages: solved
            .iter()
            .enumerate()
            .map(|(i, s)| Stage {
                index: i + 1,
                rc: s.rc,
                re: s.re,
                r1: s.r1,
                r2: s.r2,
                collector_current: s.collector_current,
                base_voltage: s.base_voltage,
                gain: s.gain,
            })
            .collect(),
        follower: Some(FollowerStage::DualSupply {
            r1: f.r1,
            r2: f.r2,
            re: f.re,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_indices_run_input_to_output() {
        let request = DesignRequest::single(50.0, 150.0, 15.0, false);
        let result = design_seeded(&request, 3).unwrap();
        let indices: Vec<usize> = result.stages.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_contract_request_rejected_before_solving() {
        let request = DesignRequest::single(300.0, 150.0, 15.0, false);
        assert!(design_seeded(&request, 0).is_err());
    }

    #[test]
    fn test_seed_changes_candidate_picks() {
        let request = DesignRequest::single(10.0, 150.0, 15.0, false);
        let picks: Vec<f64> = (0..32)
            .map(|seed| design_seeded(&request, seed).unwrap().stages[0].rc)
            .collect();
        assert!(
            picks.windows(2).any(|w| w[0] != w[1]),
            "32 seeds never changed the input-stage collector resistor"
        );
    }
}
