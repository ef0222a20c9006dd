use std::collections::TryReserveError;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Single trajectory sample
// ---------------------------------------------------------------------------

/// Test-particle state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    pub time: f64,
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>, // synchronized with `pos`
}

impl OrbitalState {
    pub fn new(time: f64, pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self { time, pos, vel }
    }

    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Radial velocity component (positive = moving outward).
    pub fn radial_velocity(&self) -> f64 {
        let r = self.radius();
        if r == 0.0 {
            return 0.0;
        }
        self.pos.dot(&self.vel) / r
    }
}

// ---------------------------------------------------------------------------
// Trajectory (struct of arrays)
// ---------------------------------------------------------------------------

/// Sampled orbit: `time[i]`, `pos[i]` and `vel[i]` describe sample `i`.
///
/// The three sequences always have the same length. Sample 0 is the initial
/// condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub pos: Vec<Vector3<f64>>,
    pub vel: Vec<Vector3<f64>>,
}

impl Trajectory {
    /// Empty trajectory with room for `n` samples, failing instead of
    /// aborting when the buffers cannot be allocated.
    pub(crate) fn try_with_capacity(n: usize) -> Result<Self, TryReserveError> {
        let mut traj = Self::default();
        traj.time.try_reserve_exact(n)?;
        traj.pos.try_reserve_exact(n)?;
        traj.vel.try_reserve_exact(n)?;
        Ok(traj)
    }

    pub(crate) fn push(&mut self, time: f64, pos: Vector3<f64>, vel: Vector3<f64>) {
        self.time.push(time);
        self.pos.push(pos);
        self.vel.push(vel);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn sample(&self, i: usize) -> Option<OrbitalState> {
        Some(OrbitalState {
            time: *self.time.get(i)?,
            pos: *self.pos.get(i)?,
            vel: *self.vel.get(i)?,
        })
    }

    pub fn first(&self) -> Option<OrbitalState> {
        self.sample(0)
    }

    pub fn last(&self) -> Option<OrbitalState> {
        self.sample(self.len().checked_sub(1)?)
    }

    /// Iterate over samples in time order.
    pub fn iter(&self) -> impl Iterator<Item = OrbitalState> + '_ {
        self.time
            .iter()
            .zip(self.pos.iter().zip(self.vel.iter()))
            .map(|(&time, (&pos, &vel))| OrbitalState { time, pos, vel })
    }

    /// Radius of every sample.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.pos.iter().map(|p| p.norm())
    }
}
