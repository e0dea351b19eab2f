//! Run configuration.
//!
//! Resolved from command-line arguments and their environment fallbacks.

use std::path::PathBuf;

use crate::core::constants;

/// Everything a run needs to know.
#[derive(Debug, Clone)]
pub struct Settings {
    /// YAML file to update
    pub file: PathBuf,
    /// Travis API base URL
    pub endpoint: String,
    /// Remote holding the GitHub repository
    pub origin: String,
    /// Remote holding the Heroku app
    pub remote: String,
    /// Repository slug that bypasses the origin lookup
    pub repo: Option<String>,
    /// App name that bypasses the heroku remote lookup
    pub app: Option<String>,
    /// Heroku CLI program
    pub heroku_bin: String,
    /// OpenSSL program
    pub openssl_bin: String,
    /// Print intermediate secrets and state
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(constants::CONFIG_FILE),
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            origin: constants::ORIGIN_REMOTE.to_string(),
            remote: constants::HEROKU_REMOTE.to_string(),
            repo: None,
            app: None,
            heroku_bin: constants::HEROKU_BIN.to_string(),
            openssl_bin: constants::OPENSSL_BIN.to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Whether the git remotes have to be read at all.
    pub fn needs_remotes(&self) -> bool {
        self.repo.is_none() || self.app.is_none()
    }
}
