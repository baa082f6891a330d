use std::path::PathBuf;
use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn polygol_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_polygol-mini").expect("polygol-mini test binary not built")
}

fn temp_prefs(name: &str, ext: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!(
        "polygol_cli_{name}_{}_{nanos}.{ext}",
        std::process::id()
    ))
}

fn polygol() -> Command {
    let mut command = Command::new(polygol_bin());
    command
        .env_remove("POLYGOL_PREFS_FILE")
        .env_remove("POLYGOL_LOGS")
        .env_remove("POLYGOL_LANG");
    command
}

fn print_prefs(args: &[&str]) -> serde_json::Value {
    let output = polygol()
        .args(args)
        .arg("--print-prefs")
        .output()
        .expect("run polygol-mini --print-prefs");
    assert!(output.status.success(), "{}", combined_output(&output));
    serde_json::from_slice(&output.stdout).expect("prefs json")
}

#[test]
fn help_mentions_name() {
    let output = polygol()
        .arg("--help")
        .output()
        .expect("run polygol-mini --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Polygol Mini"));
    assert!(combined.contains("--storage"));
}

#[test]
fn print_prefs_without_file_shows_defaults() {
    let path = temp_prefs("defaults", "json");
    let prefs = print_prefs(&["--prefs-file", path.to_str().expect("utf8 path")]);
    assert_eq!(prefs["theme"], "dark");
    assert_eq!(prefs["showSeconds"], true);
    assert_eq!(prefs["use12HourFormat"], false);
    assert_eq!(prefs["showWeather"], true);
    assert_eq!(prefs["tone"], 0);
    assert!(!path.exists());
}

#[test]
fn print_prefs_merges_partial_document() {
    let path = temp_prefs("partial", "json");
    std::fs::write(
        &path,
        r#"{"polygolMiniSettings":"{\"theme\":\"light\",\"tone\":\"loud\"}","other":"kept"}"#,
    )
    .expect("seed document");
    let prefs = print_prefs(&["--prefs-file", path.to_str().expect("utf8 path")]);
    assert_eq!(prefs["theme"], "light");
    assert_eq!(prefs["tone"], 0);
    assert_eq!(prefs["showSeconds"], true);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn print_prefs_reads_cookie_jar() {
    let path = temp_prefs("jar", "txt");
    std::fs::write(&path, "theme=light; path=/\nshowWeather=off; path=/\n").expect("seed jar");
    let prefs = print_prefs(&[
        "--storage",
        "cookie",
        "--prefs-file",
        path.to_str().expect("utf8 path"),
    ]);
    assert_eq!(prefs["theme"], "light");
    assert_eq!(prefs["showWeather"], false);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn reset_prefs_rewrites_defaults() {
    let path = temp_prefs("reset", "json");
    std::fs::write(&path, r#"{"polygolMiniSettings":"{\"isFocus\":true}"}"#).expect("seed");
    let prefs = print_prefs(&[
        "--reset-prefs",
        "--prefs-file",
        path.to_str().expect("utf8 path"),
    ]);
    assert_eq!(prefs["isFocus"], false);
    let stored = std::fs::read_to_string(&path).expect("read back");
    assert!(stored.contains("polygolMiniSettings"));
    assert!(!stored.contains(r#"\"isFocus\":true"#));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn doctor_prints_report() {
    let output = polygol()
        .args(["--doctor", "--weather-source", "placeholder"])
        .output()
        .expect("run polygol-mini --doctor");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Polygol Mini Doctor"));
    assert!(combined.contains("source: placeholder"));
}

#[test]
fn invalid_coordinates_fail_before_ui() {
    let output = polygol()
        .args(["--latitude", "91", "--print-prefs"])
        .output()
        .expect("run polygol-mini with bad latitude");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--latitude"));
}
