use std::path::PathBuf;
use std::process::Command;

use orbit_leapfrog::RunConfig;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("orbit-leapfrog-{}-{}", std::process::id(), name))
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_orbit-leapfrog"))
}

#[test]
fn writes_csv_and_summary() {
    let csv = scratch("traj.csv");
    let summary = scratch("summary.json");

    let status = bin()
        .args(["--steps", "200", "--stride", "10", "--csv"])
        .arg(&csv)
        .arg("--summary")
        .arg(&summary)
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,radius");
    assert_eq!(lines.len(), 1 + 21); // header + samples 0, 10, ..., 200
    assert!(lines[1].starts_with("0,10,0,0,0,0.15,0,10"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["summary"]["samples"], 201);
    assert_eq!(json["config"]["steps"], 200);

    let _ = std::fs::remove_file(csv);
    let _ = std::fs::remove_file(summary);
}

#[test]
fn reads_config_file() {
    let path = scratch("config.json");
    let config = RunConfig { steps: 50, dt: 0.5, ..RunConfig::default() };
    std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

    let out = bin().arg("--config").arg(&path).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("HERNQUIST"));
    assert!(stdout.contains("25.00"), "duration 50 * 0.5 missing:\n{}", stdout);

    let header = stdout.lines().find(|l| l.trim_start().starts_with("time")).unwrap();
    let columns: Vec<&str> = header.split_whitespace().collect();
    assert_eq!(columns, ["time", "x", "y", "z", "r", "speed", "v_r"]);
    // Launched at apocentre: the first row has v_r = 0 and speed = |v0|
    let first = stdout.lines().skip_while(|l| !l.contains("v_r")).nth(1).unwrap();
    let row: Vec<&str> = first.split_whitespace().collect();
    assert_eq!(row[5], "0.15000");
    assert_eq!(row[6], "0.00000");

    let _ = std::fs::remove_file(path);
}

#[test]
fn negative_steps_fail() {
    let out = bin().args(["--steps", "-3"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("non-negative"), "stderr was: {}", stderr);
}
