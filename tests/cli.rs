//! End-to-end tests for the piper-say binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn piper_say(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_piper-say"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_list_models_prints_header_and_matches() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.onnx"), b"").unwrap();
    fs::write(temp_dir.path().join("b.ONNX"), b"").unwrap();
    fs::write(temp_dir.path().join("c.txt"), b"").unwrap();

    let output = piper_say(&["--list_models", "--models_dir", path_str(temp_dir.path())]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("models:"));
    let mut models: Vec<&str> = lines.collect();
    models.sort();
    assert_eq!(
        models,
        vec![
            path_str(&temp_dir.path().join("a.onnx")),
            path_str(&temp_dir.path().join("b.ONNX")),
        ]
    );
}

#[test]
fn test_list_models_requires_models_dir() {
    let output = piper_say(&["--list_models"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--models_dir required for --list_models"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_text_fails() {
    let output = piper_say(&["--out", "out.wav", "--model", "voice.onnx"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--text, --out, and --model are required"));
}

#[test]
fn test_missing_model_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("missing.onnx");
    let out = temp_dir.path().join("out.wav");

    let output = piper_say(&[
        "--text",
        "Hello",
        "--out",
        path_str(&out),
        "--model",
        path_str(&model),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("model not found"));
    assert!(!out.exists());
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("voice.onnx");
    fs::write(&model, b"onnx").unwrap();

    let output = piper_say(&[
        "--text",
        "Hello",
        "--out",
        path_str(&temp_dir.path().join("out.wav")),
        "--model",
        path_str(&model),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config (.json) not found"));
}

#[test]
fn test_unsupported_device_fails() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("voice.onnx");
    fs::write(&model, b"onnx").unwrap();
    fs::write(temp_dir.path().join("voice.onnx.json"), b"{}").unwrap();

    let output = piper_say(&[
        "--text",
        "Hello",
        "--out",
        path_str(&temp_dir.path().join("out.wav")),
        "--model",
        path_str(&model),
        "--device",
        "tpu",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unsupported device"));
}

#[cfg(not(feature = "cuda"))]
#[test]
fn test_gpu_request_warns_on_stdout_without_cuda() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("voice.onnx");
    let config = temp_dir.path().join("voice.onnx.json");
    fs::write(&model, b"onnx").unwrap();
    // Invalid voice config: the run stops after the device decision.
    fs::write(&config, b"{}").unwrap();

    let output = piper_say(&[
        "--text",
        "Hello",
        "--out",
        path_str(&temp_dir.path().join("out.wav")),
        "--model",
        path_str(&model),
        "--device",
        "gpu",
    ]);

    assert!(
        stdout(&output)
            .contains("warning: GPU execution provider not available, falling back to CPU")
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid voice config"));
}
