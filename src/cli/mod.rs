//! Command-line interface.

pub mod deploy;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Settings;
use crate::core::constants;

/// Encrypt a Heroku API token for Travis CI and add a deploy section to `.travis.yml`.
#[derive(Parser, Debug)]
#[command(
    name = "travis-heroku",
    about = "Encrypt your Heroku token for Travis CI and configure deployment",
    version
)]
pub struct Cli {
    /// Print intermediate secrets and state (insecure, for debugging)
    #[arg(short, long)]
    pub verbose: bool,

    /// YAML file to update
    #[arg(short, long, env = "TRAVIS_HEROKU_FILE", default_value = constants::CONFIG_FILE)]
    pub file: PathBuf,

    /// Travis API base URL
    #[arg(long, env = "TRAVIS_API_ENDPOINT", default_value = constants::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Remote holding the GitHub repository
    #[arg(long, default_value = constants::ORIGIN_REMOTE)]
    pub origin: String,

    /// Remote holding the Heroku app
    #[arg(long, default_value = constants::HEROKU_REMOTE)]
    pub remote: String,

    /// Use this owner/repo instead of reading the origin remote
    #[arg(long)]
    pub repo: Option<String>,

    /// Use this Heroku app instead of reading the heroku remote
    #[arg(long)]
    pub app: Option<String>,

    /// Heroku CLI program
    #[arg(long, env = "TRAVIS_HEROKU_HEROKU_BIN", default_value = constants::HEROKU_BIN, hide = true)]
    pub heroku_bin: String,

    /// OpenSSL program
    #[arg(long, env = "TRAVIS_HEROKU_OPENSSL_BIN", default_value = constants::OPENSSL_BIN, hide = true)]
    pub openssl_bin: String,

    /// Any extra argument turns on verbose output
    #[arg(hide = true, allow_hyphen_values = true)]
    pub legacy_verbose: Vec<String>,
}

impl Cli {
    /// Whether verbose output was requested by flag or extra argument.
    pub fn is_verbose(&self) -> bool {
        self.verbose || !self.legacy_verbose.is_empty()
    }

    /// Resolve arguments into run settings.
    pub fn settings(&self) -> Settings {
        Settings {
            file: self.file.clone(),
            endpoint: self.endpoint.clone(),
            origin: self.origin.clone(),
            remote: self.remote.clone(),
            repo: self.repo.clone(),
            app: self.app.clone(),
            heroku_bin: self.heroku_bin.clone(),
            openssl_bin: self.openssl_bin.clone(),
            verbose: self.is_verbose(),
        }
    }
}

/// Execute the setup.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    deploy::execute(&cli.settings()).map(|_| ())
}
