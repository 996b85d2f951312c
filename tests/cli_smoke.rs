use std::path::PathBuf;

use ascsee::{Order, RenderSpec, TargetType};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn ascsee_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_ascsee")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) { "ascsee.exe" } else { "ascsee" });
            p
        })
}

fn image_spec(path: &PathBuf, output: &PathBuf) -> RenderSpec {
    RenderSpec {
        target_type: TargetType::Image,
        path: path.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        warp: 10.0,
        font_file: "arial.ttf".to_string(),
        font_size: 2,
        font_colors: vec!["#FFFFFF".to_string()],
        background_color: "#000000".to_string(),
    }
}

#[test]
fn cli_runs_order_and_writes_artifact() {
    let dir = scratch_dir("runs_order");
    let src = dir.join("dot.png");
    image::RgbImage::from_pixel(8, 8, image::Rgb([200, 200, 200]))
        .save(&src)
        .unwrap();

    let out_base = dir.join("dot_ascii");
    let artifact = dir.join("dot_ascii.html");
    let _ = std::fs::remove_file(&artifact);

    let order_path = dir.join("order.json");
    let order = Order(vec![image_spec(&src, &out_base)]);
    let f = std::fs::File::create(&order_path).unwrap();
    serde_json::to_writer_pretty(f, &order).unwrap();

    let status = std::process::Command::new(ascsee_exe())
        .arg("--order")
        .arg(&order_path)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(artifact.exists());
}

#[test]
fn cli_survives_unknown_target_type_jobs() {
    let dir = scratch_dir("unknown_target");
    let src = dir.join("dot.png");
    image::RgbImage::from_pixel(4, 4, image::Rgb([30, 30, 30]))
        .save(&src)
        .unwrap();

    let out_base = dir.join("after_ascii");
    let artifact = dir.join("after_ascii.html");
    let _ = std::fs::remove_file(&artifact);

    // First job names no known pipeline; the second must still run.
    let mut audio = image_spec(&src, &dir.join("skipped"));
    audio.target_type = TargetType::Other("audio".to_string());
    let order = Order(vec![audio, image_spec(&src, &out_base)]);

    let order_path = dir.join("order.json");
    let f = std::fs::File::create(&order_path).unwrap();
    serde_json::to_writer_pretty(f, &order).unwrap();

    let output = std::process::Command::new(ascsee_exe())
        .arg("--order")
        .arg(&order_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing order part 1/2:"));
    assert!(stdout.contains("audio is not a valid conversion target type."));
    assert!(stdout.contains("Processing order part 2/2:"));
    assert!(artifact.exists());
    assert!(!dir.join("skipped.html").exists());
}

#[test]
fn cli_fails_cleanly_on_missing_order_file() {
    let status = std::process::Command::new(ascsee_exe())
        .args(["--order", "target/cli_smoke/no_such_order.json"])
        .status()
        .unwrap();
    assert!(!status.success());
}
