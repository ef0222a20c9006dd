use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::Trajectory;

/// Write trajectory data to CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z, radius
///
/// Every `stride`-th sample is written, plus the last one. Values use
/// shortest round-trip formatting so the file reproduces the run exactly.
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    stride: usize,
) -> io::Result<()> {
    writeln!(writer, "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,radius")?;

    let stride = stride.max(1);
    let last = trajectory.len().saturating_sub(1);
    for (i, s) in trajectory.iter().enumerate() {
        if i % stride != 0 && i != last {
            continue;
        }
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            s.time,
            s.pos.x, s.pos.y, s.pos.z,
            s.vel.x, s.vel.y, s.vel.z,
            s.radius(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(
    path: impl AsRef<Path>,
    trajectory: &Trajectory,
    stride: usize,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory, stride)?;
    file.flush()
}
