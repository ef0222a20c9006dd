//! Kick-drift-kick leapfrog integration of test-particle orbits in a
//! Hernquist potential.
//!
//! The core is [`physics::gravity::acceleration`] and
//! [`sim::integrator::integrate`]; the rest of the crate wraps it with
//! configuration, orbit diagnostics, trajectory export and a parallel
//! ensemble driver.

pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;

pub use config::RunConfig;
pub use dynamics::state::{OrbitalState, Trajectory};
pub use error::{OrbitError, Result};
pub use physics::gravity::{acceleration, acceleration_into, AccelerationLaw, Hernquist, PotentialParams};
pub use sim::integrator::{integrate, integrate_with};
