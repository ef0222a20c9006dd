use nalgebra::Vector3;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::dynamics::state::Trajectory;
use crate::error::Result;
use crate::physics::gravity::PotentialParams;
use super::integrator::integrate;

/// Initial position and velocity of one ensemble member.
pub type InitialCondition = (Vector3<f64>, Vector3<f64>);

/// Integrate every initial condition in parallel on the global rayon pool.
///
/// Results come back in input order. Members fail independently: a singular
/// orbit in one slot does not affect the others.
pub fn integrate_ensemble(
    initials: &[InitialCondition],
    dt: f64,
    n_steps: usize,
    params: &PotentialParams,
) -> Vec<Result<Trajectory>> {
    log::debug!(
        "ensemble: {} members, {} steps each, dt={}",
        initials.len(),
        n_steps,
        dt
    );
    let results: Vec<Result<Trajectory>> = initials
        .par_iter()
        .map(|(x0, v0)| integrate(*x0, *v0, dt, n_steps, params))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!("ensemble: {} of {} members failed", failed, initials.len());
    }
    results
}

/// Same as [`integrate_ensemble`], on a dedicated pool of `threads` workers.
/// `threads == 0` uses the global pool.
pub fn integrate_ensemble_on(
    threads: usize,
    initials: &[InitialCondition],
    dt: f64,
    n_steps: usize,
    params: &PotentialParams,
) -> Result<Vec<Result<Trajectory>>> {
    if threads == 0 {
        return Ok(integrate_ensemble(initials, dt, n_steps, params));
    }
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    Ok(pool.install(|| integrate_ensemble(initials, dt, n_steps, params)))
}
