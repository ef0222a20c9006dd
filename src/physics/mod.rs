pub mod constants;
pub mod gravity;

pub use gravity::{
    acceleration, acceleration_into, circular_speed, potential, AccelerationLaw, Hernquist,
    PotentialParams,
};
