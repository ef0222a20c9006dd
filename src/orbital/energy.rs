//! Conserved quantities of motion in a static spherical potential.
//!
//! Specific energy is conserved by the exact flow and, for a symplectic
//! integrator, oscillates within O(dt^2) of its initial value. The angular
//! momentum of a central force is conserved exactly by leapfrog up to
//! round-off.

use nalgebra::Vector3;

use crate::dynamics::state::{OrbitalState, Trajectory};
use crate::physics::gravity::AccelerationLaw;

/// Kinetic plus potential energy per unit mass.
pub fn specific_energy<L: AccelerationLaw>(state: &OrbitalState, law: &L) -> f64 {
    0.5 * state.vel.norm_squared() + law.potential(&state.pos)
}

/// Specific angular momentum `r x v`.
pub fn angular_momentum(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Vector3<f64> {
    pos.cross(vel)
}

/// Energy of every sample.
pub fn energy_series<L: AccelerationLaw>(traj: &Trajectory, law: &L) -> Vec<f64> {
    traj.iter().map(|s| specific_energy(&s, law)).collect()
}

/// Largest relative energy deviation from the first sample.
///
/// Falls back to the absolute deviation when the initial energy is zero.
pub fn max_energy_drift<L: AccelerationLaw>(traj: &Trajectory, law: &L) -> f64 {
    let Some(first) = traj.first() else {
        return 0.0;
    };
    let e0 = specific_energy(&first, law);
    let norm = if e0 != 0.0 { e0.abs() } else { 1.0 };
    traj.iter()
        .map(|s| (specific_energy(&s, law) - e0).abs() / norm)
        .fold(0.0_f64, f64::max)
}

/// Largest relative change of |L| from the first sample.
pub fn max_angular_momentum_drift(traj: &Trajectory) -> f64 {
    let Some(first) = traj.first() else {
        return 0.0;
    };
    let l0 = angular_momentum(&first.pos, &first.vel);
    let norm = if l0.norm() > 0.0 { l0.norm() } else { 1.0 };
    traj.pos
        .iter()
        .zip(traj.vel.iter())
        .map(|(p, v)| (angular_momentum(p, v) - l0).norm() / norm)
        .fold(0.0_f64, f64::max)
}

/// Smallest and largest radius visited. `None` for an empty trajectory.
pub fn radius_range(traj: &Trajectory) -> Option<(f64, f64)> {
    if traj.is_empty() {
        return None;
    }
    Some(
        traj.radii()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| (lo.min(r), hi.max(r))),
    )
}
