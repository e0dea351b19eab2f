//! Tests for the before_deploy guard.

use crate::support::server::Server;
use crate::support::*;

#[test]
fn test_second_run_is_noop() {
    let t = Test::with_travis(SAMPLE_TRAVIS);
    assert_success(&t.run());
    let first = t.read_travis();

    let output = t.run();
    assert_success(&output);
    assert_stdout_contains(&output, "already has a before_deploy section");
    assert_stdout_excludes(&output, "⚠");
    assert_eq!(t.read_travis(), first);
}

#[test]
fn test_configured_file_is_untouched_byte_for_byte() {
    let t = Test::with_travis(CONFIGURED_TRAVIS);

    let output = t.run();
    assert_success(&output);
    assert_eq!(t.read_travis(), CONFIGURED_TRAVIS);
    assert_no_temp_files(&t);
}

#[test]
fn test_configured_file_skips_token_fetch() {
    let t = Test::with_travis(CONFIGURED_TRAVIS);
    // Would fail the run if the token were requested.
    t.fake_heroku_failing();
    let server = Server::key(PEM);

    let output = t.run_with(&server, &[]);
    assert_success(&output);
    assert!(server.request().is_none(), "key endpoint should not be called");
}
