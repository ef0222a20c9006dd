use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use orbit_leapfrog::config::RunConfig;
use orbit_leapfrog::dynamics::{OrbitalState, Trajectory};
use orbit_leapfrog::io::OrbitSummary;
use orbit_leapfrog::orbital;
use orbit_leapfrog::physics::Hernquist;
use orbit_leapfrog::sim;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RunConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to load {}: {}, using the reference orbit", path, e);
                RunConfig::default()
            }
        },
        None => RunConfig::default(),
    };

    let (trajectory, summary, energy) = match sim::run(&config) {
        Ok(out) => {
            let law = config.params().map(Hernquist::new).ok();
            let energy = law
                .map(|l| orbital::energy_series(&out.trajectory, &l))
                .unwrap_or_default();
            (out.trajectory, Some(out.summary), energy)
        }
        Err(e) => {
            log::error!("integration failed: {}", e);
            (Trajectory::default(), None, Vec::new())
        }
    };

    let app = OrbitViz { trajectory, summary, energy };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Leapfrog Orbit", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    trajectory: Trajectory,
    summary: Option<OrbitSummary>,
    energy: Vec<f64>,
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 4000).max(1);
        let sampled: Vec<OrbitalState> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Hernquist orbit (kick-drift-kick leapfrog)");
            match &self.summary {
                Some(s) => ui.label(format!(
                    "Samples: {}  |  r: {:.3} .. {:.3}  |  max |dE/E0|: {:.2e}  |  Duration: {:.0}",
                    s.samples, s.r_min, s.r_max, s.max_energy_drift, s.duration,
                )),
                None => ui.label("No trajectory: the run failed, see the log"),
            };
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Orbit in the x-y plane
                ui.vertical(|ui| {
                    ui.label("Orbit (x-y)");
                    let points: PlotPoints = sampled.iter().map(|s| [s.pos.x, s.pos.y]).collect();
                    Plot::new("orbit")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Orbit", points));
                        });
                });

                // Orbit in the x-z plane
                ui.vertical(|ui| {
                    ui.label("Orbit (x-z)");
                    let points: PlotPoints = sampled.iter().map(|s| [s.pos.x, s.pos.z]).collect();
                    Plot::new("orbit_xz")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Orbit", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Radius vs Time
                ui.vertical(|ui| {
                    ui.label("Radius");
                    let points: PlotPoints = sampled.iter().map(|s| [s.time, s.radius()]).collect();
                    Plot::new("radius")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("r", points));
                        });
                });

                // Relative energy error vs Time
                ui.vertical(|ui| {
                    ui.label("Energy error (E - E0) / |E0|");
                    let e0 = self.energy.first().copied().unwrap_or(0.0);
                    let norm = if e0 != 0.0 { e0.abs() } else { 1.0 };
                    let points: PlotPoints = self
                        .trajectory
                        .time
                        .iter()
                        .zip(self.energy.iter())
                        .step_by(step)
                        .map(|(&t, &e)| [t, (e - e0) / norm])
                        .collect();
                    Plot::new("energy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("dE", points));
                        });
                });
            });
        });
    }
}
