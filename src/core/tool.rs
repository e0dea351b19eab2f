//! External command-line tool invocation.
//!
//! Every tool call captures stdout and stderr in full and fails on a
//! non-zero exit status.

use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};
use tracing::trace;

use crate::error::{Result, ToolError};

/// Check that a tool is available on `PATH`.
pub fn require(program: &str) -> Result<()> {
    which::which(program).map_err(|_| ToolError::NotFound(program.to_string()))?;
    Ok(())
}

/// Run `program` with `args` and return its output.
///
/// # Errors
///
/// Returns `ToolError::NotFound` if the program is not on `PATH`,
/// `ToolError::Spawn` if it cannot be started, and `ToolError::Failed`
/// if it exits with a non-zero status.
pub fn run<I, S>(program: &str, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    require(program)?;

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ToolError::Spawn {
            tool: program.to_string(),
            source,
        })?;

    trace!(
        tool = program,
        status = ?output.status.code(),
        stdout_len = output.stdout.len(),
        "tool finished"
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ToolError::Failed {
            tool: program.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        }
        .into());
    }

    Ok(output)
}
