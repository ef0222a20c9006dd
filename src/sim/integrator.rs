use nalgebra::Vector3;

use crate::dynamics::state::Trajectory;
use crate::error::{OrbitError, Result};
use crate::physics::gravity::{AccelerationLaw, Hernquist, PotentialParams};

// ---------------------------------------------------------------------------
// Kick-drift-kick leapfrog with synchronized output
// ---------------------------------------------------------------------------

/// State carried between steps: the half-step velocity and the scratch
/// acceleration buffer handed to the force law.
struct LeapfrogState {
    vel_half: Vector3<f64>,
    accel: Vector3<f64>,
}

/// Integrate a test particle in a Hernquist potential.
///
/// Returns `n_steps + 1` samples, sample 0 being `(0, x0, v0)`. Stored
/// velocities are synchronized with positions. A negative `dt` runs the orbit
/// backward in time.
pub fn integrate(
    x0: Vector3<f64>,
    v0: Vector3<f64>,
    dt: f64,
    n_steps: usize,
    params: &PotentialParams,
) -> Result<Trajectory> {
    integrate_with(&Hernquist::new(*params), x0, v0, dt, n_steps)
}

/// Leapfrog integration under an arbitrary static force law.
///
/// Uses one force evaluation per step. Any evaluation error (a zero radius for
/// [`Hernquist`]) aborts the whole call; no partial trajectory is returned.
pub fn integrate_with<L: AccelerationLaw>(
    law: &L,
    x0: Vector3<f64>,
    v0: Vector3<f64>,
    dt: f64,
    n_steps: usize,
) -> Result<Trajectory> {
    check_inputs(&x0, &v0, dt)?;

    let samples = n_steps.checked_add(1).ok_or_else(|| {
        OrbitError::InvalidArgument(format!("step count {} is too large", n_steps))
    })?;
    let mut traj = Trajectory::try_with_capacity(samples).map_err(|e| {
        OrbitError::InvalidArgument(format!("cannot store {} samples: {}", samples, e))
    })?;
    traj.push(0.0, x0, v0);
    if n_steps == 0 {
        return Ok(traj);
    }

    let half_dt = 0.5 * dt;
    let mut state = LeapfrogState {
        vel_half: v0,
        accel: Vector3::zeros(),
    };

    // Opening half kick: v_1/2 = v_0 + a_0 dt/2
    law.accel_into(&x0, &mut state.accel)?;
    state.vel_half += state.accel * half_dt;

    let mut pos = x0;
    for i in 1..=n_steps {
        // Drift: x_i = x_{i-1} + v_{i-1/2} dt
        pos += state.vel_half * dt;

        law.accel_into(&pos, &mut state.accel)?;

        // Synchronized velocity, then on to the next half step
        let vel = state.vel_half + state.accel * half_dt;
        state.vel_half = vel + state.accel * half_dt;

        traj.push(i as f64 * dt, pos, vel);
    }

    Ok(traj)
}

/// Convert a signed step count from an outside source into a step count.
pub fn steps_from_signed(n_steps: i64) -> Result<usize> {
    usize::try_from(n_steps).map_err(|_| {
        OrbitError::InvalidArgument(format!("step count must be non-negative, got {}", n_steps))
    })
}

fn check_inputs(x0: &Vector3<f64>, v0: &Vector3<f64>, dt: f64) -> Result<()> {
    if !dt.is_finite() {
        return Err(OrbitError::InvalidArgument(format!("dt must be finite, got {}", dt)));
    }
    if !x0.iter().all(|c| c.is_finite()) {
        return Err(OrbitError::InvalidArgument(format!(
            "initial position must be finite, got {:?}",
            x0.as_slice()
        )));
    }
    if !v0.iter().all(|c| c.is_finite()) {
        return Err(OrbitError::InvalidArgument(format!(
            "initial velocity must be finite, got {:?}",
            v0.as_slice()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Constant field, so every step can be checked by hand.
    struct Uniform(Vector3<f64>);

    impl AccelerationLaw for Uniform {
        fn accel_into(&self, _pos: &Vector3<f64>, out: &mut Vector3<f64>) -> Result<()> {
            *out = self.0;
            Ok(())
        }

        fn potential(&self, pos: &Vector3<f64>) -> f64 {
            -self.0.dot(pos)
        }
    }

    fn unit_params() -> PotentialParams {
        PotentialParams::new(1.0, 1.0, 0.5)
    }

    #[test]
    fn uniform_field_is_exact() {
        // Leapfrog is exact for constant acceleration
        let g = Vector3::new(0.0, 0.0, -9.81);
        let x0 = Vector3::new(1.0, 0.0, 0.0);
        let v0 = Vector3::new(0.0, 2.0, 5.0);
        let dt = 0.125;
        let traj = integrate_with(&Uniform(g), x0, v0, dt, 16).unwrap();
        let s = traj.last().unwrap();
        let t = s.time;
        assert_relative_eq!(s.pos, x0 + v0 * t + g * (0.5 * t * t), epsilon = 1e-12);
        assert_relative_eq!(s.vel, v0 + g * t, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_returns_initial_condition() {
        let x0 = Vector3::new(10.0, 0.0, 0.0);
        let v0 = Vector3::new(0.0, 0.15, 0.0);
        let traj = integrate(x0, v0, 1.0, 0, &unit_params()).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.time[0], 0.0);
        assert_eq!(traj.pos[0], x0);
        assert_eq!(traj.vel[0], v0);
    }

    #[test]
    fn zero_steps_skips_force_evaluation() {
        let traj = integrate(Vector3::zeros(), Vector3::zeros(), 1.0, 0, &unit_params()).unwrap();
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn first_sample_is_exact_and_length_is_n_plus_one() {
        let x0 = Vector3::new(1.0, 0.2, -0.3);
        let v0 = Vector3::new(0.1, 0.9, 0.0);
        let traj = integrate(x0, v0, 0.01, 250, &unit_params()).unwrap();
        assert_eq!(traj.len(), 251);
        assert_eq!(traj.pos.len(), 251);
        assert_eq!(traj.vel.len(), 251);
        assert_eq!(traj.first().unwrap(), crate::dynamics::OrbitalState::new(0.0, x0, v0));
    }

    #[test]
    fn time_grid_has_no_drift() {
        let dt = 0.1;
        let traj = integrate(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), dt, 1000, &unit_params())
            .unwrap();
        for (i, &t) in traj.time.iter().enumerate() {
            assert_eq!(t, i as f64 * dt);
        }
    }

    #[test]
    fn negative_dt_runs_time_backward() {
        let traj = integrate(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), -0.05, 20, &unit_params())
            .unwrap();
        assert!(traj.time.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(traj.last().unwrap().time, 20.0 * -0.05);
    }

    #[test]
    fn stored_velocity_is_synchronized() {
        // After one step the stored velocity is v_1/2 + a_1 dt/2, not v_1/2
        let p = unit_params();
        let law = Hernquist::new(p);
        let x0 = Vector3::new(1.0, 0.0, 0.0);
        let v0 = Vector3::new(0.0, 0.8, 0.0);
        let dt = 0.01;
        let traj = integrate(x0, v0, dt, 1, &p).unwrap();

        let a0 = law.acceleration(&x0).unwrap();
        let v_half = v0 + a0 * (0.5 * dt);
        let x1 = x0 + v_half * dt;
        let a1 = law.acceleration(&x1).unwrap();
        assert_eq!(traj.pos[1], x1);
        assert_eq!(traj.vel[1], v_half + a1 * (0.5 * dt));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let p = unit_params();
        let x = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 1.0, 0.0);
        for dt in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(integrate(x, v, dt, 10, &p), Err(OrbitError::InvalidArgument(_))));
        }
        let bad = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(integrate(bad, v, 0.1, 10, &p), Err(OrbitError::InvalidArgument(_))));
        assert!(matches!(integrate(x, bad, 0.1, 10, &p), Err(OrbitError::InvalidArgument(_))));
    }

    #[test]
    fn signed_step_counts() {
        assert_eq!(steps_from_signed(0).unwrap(), 0);
        assert_eq!(steps_from_signed(100_000).unwrap(), 100_000);
        assert!(matches!(steps_from_signed(-1), Err(OrbitError::InvalidArgument(_))));
    }

    #[test]
    fn huge_step_counts_are_rejected_before_integrating() {
        let p = unit_params();
        let x = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 1.0, 0.0);
        for n in [usize::MAX, usize::MAX - 1, usize::MAX / 4] {
            assert!(matches!(integrate(x, v, 0.1, n, &p), Err(OrbitError::InvalidArgument(_))));
        }
    }

    #[test]
    fn starting_at_origin_is_singular() {
        let err = integrate(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), 0.1, 5, &unit_params())
            .unwrap_err();
        assert!(matches!(err, OrbitError::DivideByZero));
    }

    #[test]
    fn drifting_through_origin_is_singular() {
        // G = 0 leaves a straight line that lands exactly on the origin at step 2
        let free = PotentialParams::new(0.0, 1.0, 1.0);
        let err = integrate(Vector3::new(2.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0), 1.0, 4, &free)
            .unwrap_err();
        assert!(matches!(err, OrbitError::DivideByZero));

        // One step short of the origin is fine
        let ok = integrate(Vector3::new(2.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0), 1.0, 1, &free).unwrap();
        assert_eq!(ok.last().unwrap().pos, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn deterministic() {
        let p = unit_params();
        let x0 = Vector3::new(1.0, 0.3, 0.0);
        let v0 = Vector3::new(-0.2, 0.7, 0.1);
        let a = integrate(x0, v0, 0.02, 500, &p).unwrap();
        let b = integrate(x0, v0, 0.02, 500, &p).unwrap();
        assert_eq!(a, b);
    }
}
