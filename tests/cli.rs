use std::path::Path;
use std::process::{Command, Output};

use image::{GenericImageView, Rgb, RgbImage};

const INPUT: &str = "v3x_logo.png";
const OUTPUT: &str = "v3x_logo_youtube_1024x576.png";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ytcrop"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch ytcrop")
}

#[test]
fn missing_input_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Please save your V3X logo image as 'v3x_logo.png'"));
    assert!(stdout.contains("Then run this script again"));
    assert!(!dir.path().join(OUTPUT).exists());
}

#[test]
fn default_run_writes_channel_art() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_pixel(2000, 1000, Rgb([12, 34, 56]))
        .save(dir.path().join(INPUT))
        .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "{:?}", out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Original image size: (2000, 1000)"));
    assert!(stdout.contains("Final size: (1024, 576)"));
    assert!(stdout.contains("✅ Successfully cropped logo for YouTube!"));
    assert!(stdout.contains("📁 Output file: v3x_logo_youtube_1024x576.png"));

    let art = image::open(dir.path().join(OUTPUT)).unwrap();
    assert_eq!(art.dimensions(), (1024, 576));
}

#[test]
fn undecodable_input_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INPUT), b"not really a png").unwrap();

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Error processing image:"));
    assert!(stdout.contains("❌ Failed to crop image"));
    assert!(!dir.path().join(OUTPUT).exists());
}

#[test]
fn custom_paths_and_report() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_pixel(800, 1000, Rgb([200, 200, 200]))
        .save(dir.path().join("portrait.png"))
        .unwrap();

    let out = run_in(
        dir.path(),
        &["-i", "portrait.png", "-o", "banner.png", "--report", "--log"],
    );
    assert!(out.status.success(), "{:?}", out);

    let art = image::open(dir.path().join("banner.png")).unwrap();
    assert_eq!(art.dimensions(), (1024, 576));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("banner.json")).unwrap())
            .unwrap();
    assert_eq!(report["crop"]["top"], 275);
    assert_eq!(report["crop"]["bottom"], 725);

    // Logs go to stderr, never into the user-facing stdout
    assert!(!String::from_utf8_lossy(&out.stdout).contains("INFO"));
}

#[test]
fn json_named_output_still_gets_a_png() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_pixel(640, 480, Rgb([90, 90, 90]))
        .save(dir.path().join(INPUT))
        .unwrap();

    let out = run_in(dir.path(), &["-o", "art.json", "--report"]);
    assert!(out.status.success(), "{:?}", out);

    let bytes = std::fs::read(dir.path().join("art.json")).unwrap();
    let art = image::load_from_memory(&bytes).unwrap();
    assert_eq!(art.dimensions(), (1024, 576));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Crop report saved as: art.json.report.json"));
    assert!(dir.path().join("art.json.report.json").is_file());
}

#[test]
fn report_failure_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_pixel(640, 480, Rgb([90, 90, 90]))
        .save(dir.path().join(INPUT))
        .unwrap();
    std::fs::create_dir(dir.path().join("v3x_logo_youtube_1024x576.json")).unwrap();

    let out = run_in(dir.path(), &["--report"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("❌ Failed to crop image"));
    assert!(!dir.path().join(OUTPUT).exists());
}
