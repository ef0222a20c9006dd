//! Gravitational constants in the unit systems used for galactic orbits.
//!
//! The integrator is unit-agnostic; pick one of these to match the units of
//! positions, velocities and masses handed to it.

// ---------------------------------------------------------------------------
// Gravitational constant
// ---------------------------------------------------------------------------
pub const G_KPC_MYR_MSUN: f64 = 4.498_502_151_469_554e-12; // kpc^3 Myr^-2 Msun^-1
pub const G_KPC_KMS_MSUN: f64 = 4.300_91e-6; // kpc (km/s)^2 Msun^-1

// ---------------------------------------------------------------------------
// Reference halo (Milky-Way-like Hernquist bulge)
// ---------------------------------------------------------------------------
pub const REFERENCE_MASS: f64 = 1.0e11; // Msun
pub const REFERENCE_SCALE: f64 = 1.0; // kpc
