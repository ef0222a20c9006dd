use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::error::{OrbitError, Result};
use crate::physics::gravity::{circular_speed, potential, PotentialParams};
use super::energy::angular_momentum;

const BISECT_ITERS: usize = 200;
const QUAD_POINTS: usize = 2048;
// Relative half-width below which apsides come from a near-double root and the quadrature is noise
const CIRCULAR_WIDTH: f64 = 1e-4;

/// Extent of a bound orbit in a Hernquist potential.
///
/// Orbits in a non-Keplerian potential do not close, so `sma` and `ecc` are
/// the radial analogues: `sma = (rp + ra) / 2`, `ecc = (ra - rp) / (ra + rp)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitShape {
    pub pericenter: f64,
    pub apocenter: f64,
    pub sma: f64,
    pub ecc: f64,
    pub energy: f64,           // specific energy
    pub angular_momentum: f64, // |r x v|
}

impl OrbitShape {
    /// Apsides of the orbit through `pos` with velocity `vel`.
    ///
    /// Turning points are the roots of `2 (E - Phi(r)) r^2 - L^2`, found by
    /// bisection. Fails for unbound orbits and at the origin.
    pub fn from_state(
        pos: &Vector3<f64>,
        vel: &Vector3<f64>,
        params: &PotentialParams,
    ) -> Result<Self> {
        let r0 = pos.norm();
        if r0 == 0.0 {
            return Err(OrbitError::DivideByZero);
        }
        let phi = |r: f64| potential(r, params.g, params.mass, params.scale);

        let energy = 0.5 * vel.norm_squared() + phi(r0);
        if energy >= 0.0 {
            return Err(OrbitError::Unbound { energy });
        }
        let l = angular_momentum(pos, vel).norm();
        let l2 = l * l;

        // True inside the allowed region [rp, ra]; r0 always belongs to it
        let allowed = |r: f64| 2.0 * (energy - phi(r)) * r * r - l2 >= 0.0;

        let pericenter = if l == 0.0 {
            0.0
        } else {
            bisect(0.0, r0, |r| !allowed(r))
        };

        let mut hi = 2.0 * r0;
        while allowed(hi) {
            hi *= 2.0;
        }
        let apocenter = bisect(r0, hi, allowed);

        Ok(Self {
            pericenter,
            apocenter,
            sma: 0.5 * (pericenter + apocenter),
            ecc: (apocenter - pericenter) / (apocenter + pericenter),
            energy,
            angular_momentum: l,
        })
    }

    /// Time to go from pericentre to apocentre and back.
    ///
    /// Orbits whose radial half-width is below `1e-4` of the apocentre use the
    /// epicyclic period `2 pi / kappa` at `sma`.
    pub fn radial_period(&self, params: &PotentialParams) -> f64 {
        let gm = params.gm();
        let c = params.scale;
        let half_width = 0.5 * (self.apocenter - self.pericenter);

        if half_width <= CIRCULAR_WIDTH * self.apocenter {
            // Circular limit: epicyclic frequency kappa^2 = Phi'' + 3 Phi' / r
            let r = self.sma;
            let d1 = gm / ((r + c) * (r + c));
            let d2 = -2.0 * gm / ((r + c) * (r + c) * (r + c));
            return 2.0 * PI / (d2 + 3.0 * d1 / r).sqrt();
        }

        // r = sma + half_width * sin(theta) removes the endpoint singularities
        let l2 = self.angular_momentum * self.angular_momentum;
        let dtheta = PI / QUAD_POINTS as f64;
        let sum: f64 = (0..QUAD_POINTS)
            .map(|k| {
                let theta = -0.5 * PI + (k as f64 + 0.5) * dtheta;
                let r = self.sma + half_width * theta.sin();
                let vr2 = 2.0 * (self.energy - potential(r, params.g, params.mass, c)) - l2 / (r * r);
                if vr2 <= 0.0 {
                    return 0.0;
                }
                half_width * theta.cos() / vr2.sqrt()
            })
            .sum();
        2.0 * sum * dtheta
    }
}

/// Shrink `[lo, hi]` onto the point where `inside` switches from true to
/// false. `inside(lo)` is taken to be true and never evaluated, so a root
/// sitting exactly on `lo` survives round-off.
fn bisect(mut lo: f64, mut hi: f64, inside: impl Fn(f64) -> bool) -> f64 {
    for _ in 0..BISECT_ITERS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if inside(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Position and velocity of a circular orbit of radius `radius`, starting on
/// the +x axis with the orbit plane tilted by `inc` about x.
pub fn circular_orbit(
    radius: f64,
    inc: f64,
    params: &PotentialParams,
) -> (Vector3<f64>, Vector3<f64>) {
    let v = circular_speed(radius, params.g, params.mass, params.scale);
    (
        Vector3::new(radius, 0.0, 0.0),
        Vector3::new(0.0, v * inc.cos(), v * inc.sin()),
    )
}
