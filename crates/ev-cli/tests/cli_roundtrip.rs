use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_evhist"))
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("evhist_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn assert_success(out: &Output, what: &str) {
    assert!(
        out.status.success(),
        "{what} should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn generate_fill_compare_render() {
    let dataset = tmp_path("events.json");
    let artifact = tmp_path("pt.json");
    let svg = tmp_path("pt.svg");

    // 1) Generate a small deterministic dataset.
    let out = run(&[
        "generate",
        "--output",
        dataset.to_string_lossy().as_ref(),
        "--events",
        "200",
        "--seed",
        "7",
    ]);
    assert_success(&out, "generate");
    assert!(dataset.exists());

    // 2) Fill with the expression engine.
    let out = run(&[
        "fill",
        "--input",
        dataset.to_string_lossy().as_ref(),
        "--engine",
        "frame-expr",
        "--output",
        artifact.to_string_lossy().as_ref(),
    ]);
    assert_success(&out, "fill");

    let text = std::fs::read_to_string(&artifact).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["name"], "pt_spectrum");
    assert_eq!(parsed["axis"]["n_bins"], 16);
    assert!(parsed["entries"].as_u64().unwrap() > 0, "toy selection kept nothing");

    // 3) All engines must agree.
    let out = run(&["compare", "--input", dataset.to_string_lossy().as_ref()]);
    assert_success(&out, "compare");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("all 4 engines agree"), "unexpected output: {stdout}");

    // 4) Render to SVG and to text.
    let out = run(&[
        "render",
        "--input",
        artifact.to_string_lossy().as_ref(),
        "--output",
        svg.to_string_lossy().as_ref(),
    ]);
    assert_success(&out, "render svg");
    let svg_text = std::fs::read_to_string(&svg).unwrap();
    assert!(svg_text.starts_with("<svg"));

    let out = run(&["render", "--input", artifact.to_string_lossy().as_ref()]);
    assert_success(&out, "render text");
    let chart = String::from_utf8_lossy(&out.stdout);
    assert!(chart.contains("pt_spectrum"));

    for path in [&dataset, &artifact, &svg] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn fill_rejects_ragged_dataset() {
    let dataset = tmp_path("ragged.json");
    std::fs::write(
        &dataset,
        r#"{"events": [{"E": [150.0, 50.0], "px": [3.0], "py": [4.0, 0.0]}]}"#,
    )
    .unwrap();

    let out = run(&["fill", "--input", dataset.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "fill of a ragged dataset must fail");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("length mismatch"), "unexpected stderr: {stderr}");

    let _ = std::fs::remove_file(&dataset);
}

#[test]
fn version_prints_package_version() {
    let out = run(&["version"]);
    assert_success(&out, "version");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
