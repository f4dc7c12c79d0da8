//! CLI tests for the `zpl-build preview` subcommand, using a mock HTTP server.

use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread;
use std::time::Duration;

use assert_cmd::cargo;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nmock";

/// The mock service is on loopback; keep any ambient proxy out of the way.
fn zpl_cmd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("zpl-build"));
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Serve one request with `status_line` and `body`; return the request line
/// and body the client sent.
fn serve_once(
    status_line: &'static str,
    body: &'static [u8],
) -> (String, thread::JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut received = vec![0u8; content_length];
        reader.read_exact(&mut received).unwrap();

        let mut stream = reader.into_inner();
        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();

        (
            request_line.trim_end().to_owned(),
            String::from_utf8(received).unwrap(),
        )
    });

    (base_url, handle)
}

#[test]
fn preview_writes_png_from_profile_settings() {
    let (base_url, server) = serve_once("200 OK", PNG);
    let dir = tempfile::tempdir().unwrap();
    let job = dir.path().join("job.json");
    fs::write(
        &job,
        r#"{"commands": [{"command": "field_data", "data": "Hi"}]}"#,
    )
    .unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(
        &profile,
        format!(
            r#"{{"id": "small", "schema_version": "1.0.0", "width_in": 2, "height_in": 1, "dpmm": 12, "index": 1, "preview": {{"base_url": "{base_url}"}}}}"#
        ),
    )
    .unwrap();
    let out = dir.path().join("label.png");

    let output = zpl_cmd()
        .args([
            "preview",
            &job.to_string_lossy(),
            "--profile",
            &profile.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--output",
            "json",
        ])
        .output()
        .expect("run preview");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let (request_line, body) = server.join().unwrap();
    assert_eq!(
        request_line,
        "POST /v1/printers/12dpmm/labels/2x1/1/ HTTP/1.1"
    );
    assert_eq!(body, "^XA\n^FDHi^FS\n^XZ");
    assert_eq!(fs::read(&out).unwrap(), PNG);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["bytes"], PNG.len());
}

#[test]
fn flags_override_profile_and_defaults() {
    let (base_url, server) = serve_once("200 OK", PNG);
    let dir = tempfile::tempdir().unwrap();
    let job = dir.path().join("job.json");
    fs::write(&job, r#"{"commands": []}"#).unwrap();
    let out = dir.path().join("label.png");

    let output = zpl_cmd()
        .args([
            "preview",
            &job.to_string_lossy(),
            "--width",
            "3.5",
            "--dpmm",
            "24",
            "--base-url",
            &base_url,
            "--out",
            &out.to_string_lossy(),
        ])
        .output()
        .expect("run preview");
    assert!(output.status.success());

    let (request_line, _) = server.join().unwrap();
    // Height and index fall back to the 4x6 / label 0 defaults.
    assert_eq!(
        request_line,
        "POST /v1/printers/24dpmm/labels/3.5x6/0/ HTTP/1.1"
    );
}

#[test]
fn service_error_status_fails_the_command() {
    let (base_url, server) = serve_once("400 Bad Request", b"ERROR: bad label");
    let dir = tempfile::tempdir().unwrap();
    let job = dir.path().join("job.json");
    fs::write(&job, r#"{"commands": []}"#).unwrap();
    let out = dir.path().join("label.png");

    let output = zpl_cmd()
        .args([
            "preview",
            &job.to_string_lossy(),
            "--base-url",
            &base_url,
            "--out",
            &out.to_string_lossy(),
            "--output",
            "json",
        ])
        .output()
        .expect("run preview");
    server.join().unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], "preview_failed");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("400") && m.contains("ERROR: bad label")),
        "unexpected message: {}",
        json["message"]
    );
}
