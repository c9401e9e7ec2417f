mod common;

use common::{is_timestamped_map_name, MockServer, NAIROBI, NO_RESULTS, VALID_KEY};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary with an isolated HOME and no key in the environment.
fn phonemap(home: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_phonemap"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("OPENCAGE_API_KEY")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_credential_exits_before_parsing() {
    let home = TempDir::new().unwrap();
    let out = phonemap(&home, &["abc"], None);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("API key is required"), "{}", stderr);
    assert!(!stderr.contains("parsing"), "{}", stderr);
}

#[test]
fn test_invalid_number_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let out = phonemap(&home, &["--api-key", VALID_KEY, "--quiet", "abc"], None);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error parsing number"));
}

#[test]
fn test_full_run_writes_map_and_json() {
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let server = MockServer::start(200, NAIROBI);

    let out = phonemap(
        &home,
        &[
            "--api-key",
            VALID_KEY,
            "--base-url",
            &server.base_url,
            "--output-dir",
            out_dir.path().to_str().unwrap(),
            "--quiet",
            "--json",
            "254712345678",
        ],
        None,
    );
    assert_eq!(
        out.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["phone"], "+254712345678");
    assert_eq!(json["latitude"], -1.2921);
    assert_eq!(json["longitude"], 36.8219);
    assert_eq!(json["carrier_name"], "Safaricom");
    assert_eq!(server.queries(), vec!["Kenya".to_string()]);

    let files: Vec<String> = std::fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(is_timestamped_map_name(&files[0], "location"), "{}", files[0]);
}

#[test]
fn test_prompted_number_without_match() {
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let server = MockServer::start(200, NO_RESULTS);

    let out = phonemap(
        &home,
        &[
            "--api-key",
            VALID_KEY,
            "--base-url",
            &server.base_url,
            "--output-dir",
            out_dir.path().to_str().unwrap(),
        ],
        Some("+254712345678\n"),
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(0), "{}", stderr);
    assert!(stderr.contains("Enter phone number"), "{}", stderr);
    assert!(stderr.contains("Could not geocode"), "{}", stderr);
    assert!(stderr.contains("Safaricom"), "{}", stderr);
    assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_rejected_key_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let server = MockServer::start(200, NAIROBI);

    let out = phonemap(
        &home,
        &[
            "--api-key",
            "not-the-key",
            "--base-url",
            &server.base_url,
            "--output-dir",
            out_dir.path().to_str().unwrap(),
            "--quiet",
            "+254712345678",
        ],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("rejected the API key"));
}

#[test]
fn test_config_file_supplies_key() {
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let server = MockServer::start(200, NAIROBI);

    let config_dir = home.path().join(".phonemap");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        format!(
            r#"{{"api_key": "{}", "base_url": "{}", "prefix": "phone_loc", "quiet": true}}"#,
            VALID_KEY, server.base_url
        ),
    )
    .unwrap();

    let out = phonemap(
        &home,
        &[
            "--output-dir",
            out_dir.path().to_str().unwrap(),
            "+254712345678",
        ],
        None,
    );
    assert_eq!(
        out.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let name = std::fs::read_dir(out_dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .file_name()
        .to_string_lossy()
        .into_owned();
    assert!(is_timestamped_map_name(&name, "phone_loc"), "{}", name);
}

#[cfg(unix)]
#[test]
fn test_interrupt_at_prompt_exits_cleanly() {
    use std::io::Read;
    use std::time::{Duration, Instant};

    let home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_phonemap"))
        .args(["--api-key", VALID_KEY, "--quiet"])
        .env("HOME", home.path())
        .env_remove("OPENCAGE_API_KEY")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Wait for the prompt; stdin stays open so the binary blocks there.
    let mut stderr = child.stderr.take().unwrap();
    let mut seen = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Enter phone number") {
        assert!(Instant::now() < deadline, "no prompt");
        let n = stderr.read(&mut buf).unwrap();
        assert!(n > 0, "stderr closed before prompt");
        seen.extend_from_slice(&buf[..n]);
    }
    std::thread::sleep(Duration::from_millis(300));

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    stderr.read_to_end(&mut seen).unwrap();
    let text = String::from_utf8_lossy(&seen);
    assert_eq!(status.code(), Some(0), "{}", text);
    assert!(text.contains("Interrupted"), "{}", text);
}
