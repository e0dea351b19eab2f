//! Tests for failing runs.
//!
//! Every failure exits with status 1 and leaves no temp files behind.

use crate::support::server::Server;
use crate::support::*;
use predicates::prelude::*;
use std::process::Stdio;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "travis-heroku");
}

#[test]
fn test_missing_travis_file() {
    let t = Test::new();

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "file not found");
    assert_no_temp_files(&t);
}

#[test]
fn test_heroku_failure() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    t.fake_heroku_failing();

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "not logged in");
    assert_stdout_contains(&output, "heroku login");
    assert_no_temp_files(&t);
    assert_eq!(t.read_travis(), SAMPLE_TRAVIS);
}

#[test]
fn test_heroku_missing() {
    let t = Test::with_travis(SAMPLE_TRAVIS);

    let output = t
        .run_with(&Server::key(PEM), &["--heroku-bin", "no-such-heroku-cli"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "no-such-heroku-cli not found on PATH");
    assert_no_temp_files(&t);
}

#[test]
fn test_empty_token() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    t.script("heroku", "echo\n");

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "produced no output");
    assert_no_temp_files(&t);
}

#[test]
fn test_key_endpoint_not_found() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    let server = Server::once("404 Not Found", r#"{"file":"not found"}"#.to_string());

    let output = t.run_with(&server, &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "404");
    assert_no_temp_files(&t);
    assert_eq!(t.read_travis(), SAMPLE_TRAVIS);
}

#[test]
fn test_key_endpoint_without_key() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    let server = Server::once("200 OK", r#"{"fingerprint":"aa"}"#.to_string());

    let output = t.run_with(&server, &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "has no public key");
    assert_no_temp_files(&t);
}

#[test]
fn test_key_endpoint_unreachable() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let output = t
        .cmd()
        .env("TRAVIS_API_ENDPOINT", endpoint)
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "request failed");
    assert_no_temp_files(&t);
}

#[test]
fn test_openssl_failure() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    t.fake_openssl_failing();

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "RSA operation error");
    assert_no_temp_files(&t);
    assert_eq!(t.read_travis(), SAMPLE_TRAVIS);
}

#[test]
fn test_invalid_yaml() {
    let t = Test::with_travis("language: [unclosed\n");

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "yaml parse error");
    assert_no_temp_files(&t);
}

#[test]
fn test_document_unwritable_after_encryption() {
    let t = Test::with_travis(SAMPLE_TRAVIS);

    // Permission bits do not stop root; nothing to test there.
    let check = t.dir.path().join("writable-check");
    std::fs::write(&check, "").unwrap();
    set_mode(&check, 0o444);
    if std::fs::OpenOptions::new().write(true).open(&check).is_ok() {
        eprintln!("skipped: permissions are not enforced for this user");
        return;
    }
    std::fs::remove_file(&check).unwrap();

    t.fake_openssl_then("chmod 444 .travis.yml");

    let output = t.run();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "failed to write");
    assert_no_temp_files(&t);
    assert_eq!(t.read_travis(), SAMPLE_TRAVIS);
}

#[test]
fn test_document_broken_after_encryption() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    // Passes the pre-flight check, then breaks before the update.
    t.fake_openssl_then("printf 'language: [unclosed\\n' > .travis.yml");

    t.cmd_with(&Server::key(PEM))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("yaml parse error"));

    let seen = std::fs::read_to_string(t.seen_path()).unwrap();
    for name in TEMP_FILES {
        assert!(seen.contains(name), "{} missing during encryption", name);
    }
    assert_no_temp_files(&t);
}

#[test]
fn test_closed_stdout_exits_one() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    let server = Server::key(PEM);

    let mut child = t
        .std_cmd()
        .env("TRAVIS_API_ENDPOINT", &server.endpoint)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_exit_one(&output);
    assert_no_temp_files(&t);
    assert_eq!(t.read_travis(), SAMPLE_TRAVIS);
}

fn set_mode(path: &std::path::Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
}
