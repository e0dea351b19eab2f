//! Heroku credential retrieval.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::tool;
use crate::error::{Result, ToolError};

/// Fetch the Heroku API token with `<program> auth:token`.
///
/// The trailing newline is stripped. The token is zeroized on drop.
///
/// # Errors
///
/// Returns `ToolError` if the CLI is missing, exits non-zero, or prints
/// nothing.
pub fn fetch(program: &str) -> Result<Zeroizing<String>> {
    debug!(tool = program, "fetching heroku token");

    let output = tool::run(program, ["auth:token"])?;
    let stdout = Zeroizing::new(output.stdout);
    let token = Zeroizing::new(trim_newline(&String::from_utf8_lossy(&stdout)).to_string());

    if token.trim().is_empty() {
        return Err(ToolError::EmptyOutput(program.to_string()).into());
    }

    debug!(token_len = token.len(), "heroku token fetched");
    Ok(token)
}

/// Strip one trailing `\n` or `\r\n`.
pub fn trim_newline(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}
