use std::path::PathBuf;

fn bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_pagedrift")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "pagedrift.exe"
            } else {
                "pagedrift"
            });
            p
        })
}

#[test]
fn cli_validate_accepts_the_fixture() {
    let status = std::process::Command::new(bin())
        .args(["validate", "--in", "tests/data/stock_page.json"])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn cli_simulate_emits_frame_writes() {
    let script_dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&script_dir).unwrap();
    let script_path = script_dir.join("script.json");
    std::fs::write(
        &script_path,
        r#"[{ "frame": 1, "event": "wheel", "delta_y": 500.0 }]"#,
    )
    .unwrap();

    let output = std::process::Command::new(bin())
        .args([
            "simulate",
            "--in",
            "tests/data/stock_page.json",
            "--script",
            script_path.to_string_lossy().as_ref(),
            "--frames",
            "30",
            "--intro",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    // 31 frame records: load frame plus 30 ticks.
    let frames = report["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 31);

    // Intro playback precedes the engine.
    assert!(!report["intro"].as_array().unwrap().is_empty());

    // The scripted wheel pulls the target to 500 and the loop starts chasing.
    assert_eq!(frames[1]["target"], serde_json::json!(500.0));
    let last_current = frames[30]["current"].as_f64().unwrap();
    assert!(last_current > 0.0);
    assert!(!frames[30]["writes"].as_array().unwrap().is_empty());
}
