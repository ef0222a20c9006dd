pub mod state;

pub use state::{OrbitalState, Trajectory};
