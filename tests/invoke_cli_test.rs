//! Tests for the `edge-invoke` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::{json, Value};

fn invoke(event: &str, args: &[&str]) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_edge-invoke"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(event.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_redirect_event_from_stdin() {
    let event = json!({
        "request": {
            "method": "GET",
            "uri": "/path?q=1",
            "headers": { "host": { "value": "www.example.com" } }
        }
    });

    let (ok, stdout, _) = invoke(&event.to_string(), &["--compact"]);
    assert!(ok);

    let output: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(output["statusCode"], 301);
    assert_eq!(output["statusDescription"], "Moved Permanently");
    assert_eq!(output["headers"]["location"]["value"], "https://example.com/path?q=1");
}

#[test]
fn test_pass_through_event_from_file() {
    let event = json!({
        "request": {
            "method": "GET",
            "uri": "/",
            "querystring": { "a": { "value": "1" } },
            "headers": { "host": { "value": "example.com" } }
        }
    });

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", event).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (ok, stdout, _) = invoke("", &["--event", &path]);
    assert!(ok);

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output, event["request"]);
}

#[test]
fn test_missing_host_fails() {
    let event = json!({ "request": { "uri": "/", "headers": {} } });

    let (ok, _, stderr) = invoke(&event.to_string(), &[]);
    assert!(!ok);
    assert!(stderr.contains("no host header"));
}

#[test]
fn test_compact_missing_host_fails() {
    let event = json!({ "request": { "uri": "/x", "headers": {} } });

    let (ok, stdout, stderr) = invoke(&event.to_string(), &["--compact"]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no host header"));
}
