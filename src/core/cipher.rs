//! RSA encryption through the OpenSSL CLI.
//!
//! ## Requirements
//!
//! - `openssl` CLI must be installed
//!
//! The key, plaintext, and ciphertext all live in files so the tool sees
//! exactly the bytes Travis will later decrypt. Padding is whatever
//! `openssl rsautl` defaults to.

use base64::Engine;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, trace};

use crate::core::tool;
use crate::error::Result;

/// Encrypt `input` with the public key at `key`, writing ciphertext to `out`.
///
/// Runs `openssl rsautl -encrypt -pubin -inkey <key> -in <input> -out <out>`.
///
/// # Errors
///
/// Returns `ToolError` if the program is missing or exits non-zero.
pub fn encrypt(program: &str, key: &Path, input: &Path, out: &Path) -> Result<()> {
    debug!(
        tool = program,
        key = %key.display(),
        out = %out.display(),
        "encrypting token"
    );

    let args: [&OsStr; 9] = [
        OsStr::new("rsautl"),
        OsStr::new("-encrypt"),
        OsStr::new("-pubin"),
        OsStr::new("-inkey"),
        key.as_os_str(),
        OsStr::new("-in"),
        input.as_os_str(),
        OsStr::new("-out"),
        out.as_os_str(),
    ];
    tool::run(program, args)?;

    Ok(())
}

/// Read the ciphertext file and encode it as standard base64.
pub fn read_base64(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    trace!(ciphertext_len = bytes.len(), "ciphertext read");
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}
