use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::dynamics::state::Trajectory;
use crate::error::Result;
use crate::orbital::{self, OrbitShape};
use crate::physics::gravity::{Hernquist, PotentialParams};

/// Summary statistics computed from an integrated orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSummary {
    pub samples: usize,
    pub duration: f64,
    pub r_min: f64,
    pub r_max: f64,
    /// Apsides predicted from the initial energy and angular momentum.
    /// `None` for unbound orbits.
    pub pericenter: Option<f64>,
    pub apocenter: Option<f64>,
    pub radial_period: Option<f64>,
    pub energy_initial: f64,
    pub max_energy_drift: f64,
    pub max_angular_momentum_drift: f64,
}

impl OrbitSummary {
    /// Compute summary from trajectory data. `None` for an empty trajectory.
    pub fn from_trajectory(trajectory: &Trajectory, params: &PotentialParams) -> Option<Self> {
        let first = trajectory.first()?;
        let last = trajectory.last()?;
        let (r_min, r_max) = orbital::radius_range(trajectory)?;
        let law = Hernquist::new(*params);

        let shape = OrbitShape::from_state(&first.pos, &first.vel, params).ok();

        Some(OrbitSummary {
            samples: trajectory.len(),
            duration: last.time - first.time,
            r_min,
            r_max,
            pericenter: shape.map(|s| s.pericenter),
            apocenter: shape.map(|s| s.apocenter),
            radial_period: shape.map(|s| s.radial_period(params)),
            energy_initial: orbital::specific_energy(&first, &law),
            max_energy_drift: orbital::max_energy_drift(trajectory, &law),
            max_angular_momentum_drift: orbital::max_angular_momentum_drift(trajectory),
        })
    }
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a RunConfig,
    summary: &'a OrbitSummary,
}

/// Write run configuration and summary as pretty JSON.
pub fn write_summary<W: Write>(
    writer: &mut W,
    config: &RunConfig,
    summary: &OrbitSummary,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report { config, summary })?;
    writeln!(writer)?;
    Ok(())
}

/// Write summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    config: &RunConfig,
    summary: &OrbitSummary,
) -> Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, config, summary)?;
    file.flush()?;
    Ok(())
}
