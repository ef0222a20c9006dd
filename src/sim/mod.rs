pub mod ensemble;
pub mod integrator;
pub mod runner;

pub use ensemble::{integrate_ensemble, integrate_ensemble_on, InitialCondition};
pub use integrator::{integrate, integrate_with, steps_from_signed};
pub use runner::{run, RunOutput};
