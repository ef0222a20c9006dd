pub mod elements;
pub mod energy;

pub use elements::{circular_orbit, OrbitShape};
pub use energy::{
    angular_momentum, energy_series, max_angular_momentum_drift, max_energy_drift, radius_range,
    specific_energy,
};
