//! Run configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "pos": [10.0, 0.0, 0.0],
//!   "vel": [0.0, 0.15, 0.0],
//!   "dt": 1.0,
//!   "steps": 100000,
//!   "potential": { "g": 4.498502151469554e-12, "mass": 1e11, "scale": 1.0 }
//! }
//! ```
//!
//! Units follow whatever `potential.g` assumes; the default is kpc, Myr, Msun.
//! Missing fields take their default value.

use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::physics::constants::{G_KPC_MYR_MSUN, REFERENCE_MASS, REFERENCE_SCALE};
use crate::physics::gravity::PotentialParams;
use crate::sim::integrator::steps_from_signed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotentialConfig {
    pub g: f64,
    pub mass: f64,
    pub scale: f64,
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            g: G_KPC_MYR_MSUN,
            mass: REFERENCE_MASS,
            scale: REFERENCE_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub pos: [f64; 3],
    pub vel: [f64; 3],
    pub dt: f64,
    /// Signed so that a negative count in a file is reported, not truncated.
    pub steps: i64,
    pub potential: PotentialConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pos: [10.0, 0.0, 0.0], // kpc
            vel: [0.0, 0.15, 0.0], // kpc/Myr
            dt: 1.0,               // Myr
            steps: 100_000,
            potential: PotentialConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn initial_position(&self) -> Vector3<f64> {
        Vector3::from(self.pos)
    }

    pub fn initial_velocity(&self) -> Vector3<f64> {
        Vector3::from(self.vel)
    }

    pub fn n_steps(&self) -> Result<usize> {
        steps_from_signed(self.steps)
    }

    /// Validated potential parameters.
    pub fn params(&self) -> Result<PotentialParams> {
        let p = PotentialParams::new(self.potential.g, self.potential.mass, self.potential.scale);
        p.validate()?;
        Ok(p)
    }
}
