use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};

// ---------------------------------------------------------------------------
// Hernquist potential: Phi(r) = -G m / (r + c)
// ---------------------------------------------------------------------------

/// Parameters of a Hernquist potential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialParams {
    pub g: f64,     // gravitational constant, caller units
    pub mass: f64,  // total mass
    pub scale: f64, // scale radius c
}

impl PotentialParams {
    pub fn new(g: f64, mass: f64, scale: f64) -> Self {
        Self { g, mass, scale }
    }

    /// Gravitational parameter G*m.
    pub fn gm(&self) -> f64 {
        self.g * self.mass
    }

    /// Reject parameters that do not describe a physical potential.
    ///
    /// The evaluator never calls this; it is meant for values that come from
    /// outside the program (config files, command line).
    pub fn validate(&self) -> Result<()> {
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(OrbitError::InvalidArgument(format!(
                "G must be positive and finite, got {}",
                self.g
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(OrbitError::InvalidArgument(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if !(self.scale.is_finite() && self.scale >= 0.0) {
            return Err(OrbitError::InvalidArgument(format!(
                "scale radius must be non-negative and finite, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Hernquist acceleration at `pos`, returned by value.
pub fn acceleration(pos: &Vector3<f64>, g: f64, m: f64, c: f64) -> Result<Vector3<f64>> {
    let mut out = Vector3::zeros();
    acceleration_into(pos, g, m, c, &mut out)?;
    Ok(out)
}

/// Hernquist acceleration at `pos`, written into `out`.
///
/// Fails with [`OrbitError::DivideByZero`] when `pos` is the origin; `out` is
/// left untouched in that case.
pub fn acceleration_into(
    pos: &Vector3<f64>,
    g: f64,
    m: f64,
    c: f64,
    out: &mut Vector3<f64>,
) -> Result<()> {
    let r = pos.norm();
    if r == 0.0 {
        return Err(OrbitError::DivideByZero);
    }
    let dphi_dr = g * m / ((r + c) * (r + c));
    for (a, x) in out.iter_mut().zip(pos.iter()) {
        *a = -dphi_dr * x / r;
    }
    Ok(())
}

/// Potential energy per unit mass at radius `r`.
pub fn potential(r: f64, g: f64, m: f64, c: f64) -> f64 {
    -g * m / (r + c)
}

/// Speed of a circular orbit at radius `r`: v_c^2 = r dPhi/dr.
pub fn circular_speed(r: f64, g: f64, m: f64, c: f64) -> f64 {
    (g * m * r).sqrt() / (r + c)
}

// ---------------------------------------------------------------------------
// Pluggable acceleration law
// ---------------------------------------------------------------------------

/// A static, position-only force field driving the integrator.
pub trait AccelerationLaw {
    /// Write the acceleration at `pos` into `out`.
    fn accel_into(&self, pos: &Vector3<f64>, out: &mut Vector3<f64>) -> Result<()>;

    /// Potential energy per unit mass at `pos`.
    fn potential(&self, pos: &Vector3<f64>) -> f64;

    fn acceleration(&self, pos: &Vector3<f64>) -> Result<Vector3<f64>> {
        let mut out = Vector3::zeros();
        self.accel_into(pos, &mut out)?;
        Ok(out)
    }
}

/// Hernquist sphere centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hernquist {
    pub params: PotentialParams,
}

impl Hernquist {
    pub fn new(params: PotentialParams) -> Self {
        Self { params }
    }
}

impl From<PotentialParams> for Hernquist {
    fn from(params: PotentialParams) -> Self {
        Self::new(params)
    }
}

impl AccelerationLaw for Hernquist {
    #[inline]
    fn accel_into(&self, pos: &Vector3<f64>, out: &mut Vector3<f64>) -> Result<()> {
        let p = &self.params;
        acceleration_into(pos, p.g, p.mass, p.scale, out)
    }

    fn potential(&self, pos: &Vector3<f64>) -> f64 {
        let p = &self.params;
        potential(pos.norm(), p.g, p.mass, p.scale)
    }
}
