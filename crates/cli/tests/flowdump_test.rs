//! Tests for the flowdump CLI tool:
//! - Text and JSON output
//! - Reading the scene from stdin
//! - Validation failures

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const SCENE: &str = r#"{
    "columnWidth": 500,
    "drawings": [
        { "id": "img", "top": 0, "left": 100, "width": 100, "height": 20,
          "origin": { "layoutType": "SQUARE", "wrapText": "BOTH" } }
    ],
    "lines": [
        { "blockId": "p1", "lineTop": 0, "lineHeight": 20, "isFirstSpan": true },
        { "blockId": "p1", "lineTop": 20, "lineHeight": 20, "paddingLeft": 10, "paddingRight": 10 }
    ]
}"#;

// ============================================================================
// Helper functions
// ============================================================================

/// Write `contents` to a scene file unique to the calling test.
fn scene_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("flowdump_{}_{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run flowdump with given arguments and optional stdin, returning
/// (exit_code, stdout, stderr).
fn run_flowdump(args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_flowdump"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn flowdump");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_text_output_lists_divides() {
    let path = scene_file("text", SCENE);
    let (code, stdout, stderr) = run_flowdump(&[path.to_str().unwrap()], None);
    assert_eq!(code, 0, "stderr: {stderr}");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[0.00, 100.00) [200.00, 500.00)"), "{}", lines[0]);
    assert!(lines[1].ends_with("[10.00, 490.00)"), "{}", lines[1]);
}

#[test]
fn test_json_output_from_stdin() {
    let (code, stdout, stderr) = run_flowdump(&["-t", "json", "-"], Some(SCENE));
    assert_eq!(code, 0, "stderr: {stderr}");

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["divides"].as_array().unwrap().len(), 2);
    assert_eq!(lines[0]["paragraphStart"], serde_json::Value::Bool(true));
    assert_eq!(lines[1]["divides"][0]["left"].as_f64(), Some(10.0));
}

#[test]
fn test_parallel_matches_sequential() {
    let path = scene_file("parallel", SCENE);
    let (_, sequential, _) = run_flowdump(&[path.to_str().unwrap()], None);
    let (code, parallel, _) = run_flowdump(&["--parallel", path.to_str().unwrap()], None);
    assert_eq!(code, 0);
    assert_eq!(sequential, parallel);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_invalid_scene_fails() {
    let path = scene_file("invalid", r#"{ "columnWidth": -5 }"#);
    let (code, _, stderr) = run_flowdump(&[path.to_str().unwrap()], None);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid column width"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_fails() {
    let (code, _, stderr) = run_flowdump(&["/nonexistent/scene.json"], None);
    assert_ne!(code, 0);
    assert!(stderr.contains("failed to open"), "stderr: {stderr}");
}
