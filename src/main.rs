use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use orbit_leapfrog::config::RunConfig;
use orbit_leapfrog::io;
use orbit_leapfrog::sim;

/// Integrate a test-particle orbit in a Hernquist potential.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON run configuration (defaults to the reference orbit)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the timestep
    #[arg(long)]
    dt: Option<f64>,

    /// Override the number of steps
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Write the trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Keep every n-th sample in the CSV
    #[arg(long, default_value_t = 1)]
    stride: usize,

    /// Write config and summary as JSON
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(dt) = args.dt {
        config.dt = dt;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let out = sim::run(&config)?;
    let s = &out.summary;
    let traj = &out.trajectory;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  LEAPFROG ORBIT IN A HERNQUIST POTENTIAL");
    println!("====================================================================");
    println!();
    println!("  Setup");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  G:          {:>12.6e}    Mass:        {:>12.4e}",
        config.potential.g, config.potential.mass
    );
    println!(
        "  Scale c:    {:>12.4}    dt:          {:>12.4}",
        config.potential.scale, config.dt
    );
    println!(
        "  x0:  [{:>9.4}, {:>9.4}, {:>9.4}]",
        config.pos[0], config.pos[1], config.pos[2]
    );
    println!(
        "  v0:  [{:>9.4}, {:>9.4}, {:>9.4}]",
        config.vel[0], config.vel[1], config.vel[2]
    );
    println!();

    println!("  Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Samples:    {:>12}    Duration:    {:>12.2}", s.samples, s.duration);
    println!("  r_min:      {:>12.5}    r_max:       {:>12.5}", s.r_min, s.r_max);
    match (s.pericenter, s.apocenter, s.radial_period) {
        (Some(rp), Some(ra), Some(tr)) => {
            println!("  Pericentre: {:>12.5}    Apocentre:   {:>12.5}   (predicted)", rp, ra);
            println!("  Radial period: {:>9.3}", tr);
        }
        _ => println!("  Unbound orbit: no apsides"),
    }
    println!();

    println!("  Conservation");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  E0:              {:>14.8e}", s.energy_initial);
    println!("  max |dE/E0|:     {:>14.3e}", s.max_energy_drift);
    println!("  max |dL|/|L0|:   {:>14.3e}", s.max_angular_momentum_drift);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!(
        "  {:>12}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "time", "x", "y", "z", "r", "speed", "v_r"
    );
    let every = (traj.len() / 10).max(1);
    for (i, st) in traj.iter().enumerate() {
        if i % every != 0 && i != traj.len() - 1 {
            continue;
        }
        println!(
            "  {:>12.2}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.5}  {:>10.5}",
            st.time,
            st.pos.x,
            st.pos.y,
            st.pos.z,
            st.radius(),
            st.speed(),
            st.radial_velocity()
        );
    }
    println!("====================================================================");
    println!();

    if let Some(path) = &args.csv {
        io::write_trajectory_file(path, traj, args.stride)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("trajectory written to {}", path.display());
    }
    if let Some(path) = &args.summary {
        io::write_summary_file(path, &config, s)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("summary written to {}", path.display());
    }

    Ok(())
}
