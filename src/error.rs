//! Error types.
//!
//! One enum per failure category, wrapped by the top-level [`Error`].

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while reading git remotes.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("not inside a git repository")]
    NotARepository,

    #[error("git remote not found: {0}")]
    Missing(String),

    #[error("cannot parse url of remote '{name}': {url}")]
    Unparseable { name: String, url: String },
}

/// Failures while running an external command-line tool.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} not found on PATH")]
    NotFound(String),

    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {code}: {stderr}")]
    Failed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("{0} produced no output")]
    EmptyOutput(String),
}

/// Failures while fetching the repository public key.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("travis api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response for {0} has no public key")]
    MissingKey(String),
}

/// Failures while reading, editing, or writing the YAML document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml parse error: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("yaml serialize error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("top level of the document is not a mapping")]
    NotAMapping,
}

pub type Result<T> = std::result::Result<T, Error>;
