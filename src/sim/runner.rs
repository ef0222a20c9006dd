use std::time::Instant;

use crate::config::RunConfig;
use crate::dynamics::state::Trajectory;
use crate::error::{OrbitError, Result};
use crate::io::json::OrbitSummary;
use super::integrator::integrate;

/// Everything a single configured run produces.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub trajectory: Trajectory,
    pub summary: OrbitSummary,
}

/// Validate `config`, integrate the orbit and summarise it.
pub fn run(config: &RunConfig) -> Result<RunOutput> {
    let params = config.params()?;
    let n_steps = config.n_steps()?;
    let x0 = config.initial_position();
    let v0 = config.initial_velocity();

    log::info!(
        "integrating {} steps of dt={} from x0={:?} v0={:?}",
        n_steps,
        config.dt,
        config.pos,
        config.vel
    );
    log::debug!("potential: G={:e} m={:e} c={}", params.g, params.mass, params.scale);

    let started = Instant::now();
    let trajectory = integrate(x0, v0, config.dt, n_steps, &params).map_err(|e| {
        log::error!("integration failed: {}", e);
        e
    })?;
    log::info!(
        "integration finished: {} samples in {:.3} s",
        trajectory.len(),
        started.elapsed().as_secs_f64()
    );

    let summary = OrbitSummary::from_trajectory(&trajectory, &params)
        .ok_or_else(|| OrbitError::InvalidArgument("empty trajectory".into()))?;
    if summary.pericenter.is_none() {
        log::warn!("initial state is unbound (E = {:.6e})", summary.energy_initial);
    }
    log::debug!("max relative energy drift {:.3e}", summary.max_energy_drift);

    Ok(RunOutput { trajectory, summary })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
