use nalgebra::Vector3;

use orbit_leapfrog::orbital::{self, OrbitShape};
use orbit_leapfrog::physics::{circular_speed, Hernquist};
use orbit_leapfrog::sim::{integrate_ensemble, InitialCondition};
use orbit_leapfrog::RunConfig;

fn main() {
    env_logger::init();

    let config = RunConfig::default();
    let params = config.params().expect("default potential is valid");
    let law = Hernquist::new(params);

    let r0 = 10.0;
    let vc = circular_speed(r0, params.g, params.mass, params.scale);

    println!("=== Orbit family at r = {:.1} kpc (v_c = {:.4} kpc/Myr) ===\n", r0, vc);

    // Tangential launch speeds from half to full circular speed
    let fractions: Vec<f64> = (0..=10).map(|k| 0.5 + 0.05 * k as f64).collect();
    let initials: Vec<InitialCondition> = fractions
        .iter()
        .map(|f| (Vector3::new(r0, 0.0, 0.0), Vector3::new(0.0, f * vc, 0.0)))
        .collect();

    let results = integrate_ensemble(&initials, 1.0, 20_000, &params);

    println!(
        "  {:>6}  {:>9}  {:>9}  {:>9}  {:>9}  {:>10}",
        "v/v_c", "rp pred", "rp sim", "ra pred", "ra sim", "max dE/E0"
    );
    for ((f, (x0, v0)), result) in fractions.iter().zip(&initials).zip(results) {
        let traj = match result {
            Ok(t) => t,
            Err(e) => {
                println!("  {:>6.2}  failed: {}", f, e);
                continue;
            }
        };
        let (r_min, r_max) = orbital::radius_range(&traj).unwrap_or((f64::NAN, f64::NAN));
        let shape = OrbitShape::from_state(x0, v0, &params).ok();
        println!(
            "  {:>6.2}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9.4}  {:>10.2e}",
            f,
            shape.map_or(f64::NAN, |s| s.pericenter),
            r_min,
            shape.map_or(f64::NAN, |s| s.apocenter),
            r_max,
            orbital::max_energy_drift(&traj, &law),
        );
    }
    println!();
}
