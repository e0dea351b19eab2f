//! travis-heroku - Encrypt a Heroku token for Travis CI and configure deployment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use travis_heroku::cli::output;
use travis_heroku::cli::{execute, Cli};
use travis_heroku::core::constants;
use travis_heroku::error::{Error, HttpError, RemoteError, ToolError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.is_verbose() {
            EnvFilter::new("travis_heroku=debug")
        } else {
            EnvFilter::new("travis_heroku=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    // A panic still unwinds through the scratch guard, so temp files are
    // removed before the process exits.
    let code = std::panic::catch_unwind(|| run(&cli)).unwrap_or(1);
    std::process::exit(code);
}

fn run(cli: &Cli) -> i32 {
    let Err(e) = execute(cli) else {
        return 0;
    };

    let suggestion = match &e {
        Error::Tool(ToolError::NotFound(tool)) if tool.contains("heroku") => {
            Some("install the Heroku CLI: https://devcenter.heroku.com/articles/heroku-cli")
        }
        Error::Tool(ToolError::NotFound(tool)) if tool.contains("openssl") => {
            Some("install OpenSSL and make sure it is on PATH")
        }
        Error::Tool(ToolError::Failed { tool, .. }) if tool.contains("heroku") => {
            Some("run: heroku login")
        }
        Error::Remote(RemoteError::Missing(_)) => {
            Some("add the remote with git remote add, or pass --repo / --app")
        }
        Error::Remote(RemoteError::NotARepository) => Some("run this inside your project"),
        Error::Http(HttpError::Status { status: 404, .. }) => {
            Some("is the repository activated on Travis CI? try --endpoint")
        }
        _ => None,
    };

    output::error(&e.to_string());
    if let Some(hint) = suggestion {
        output::hint(hint);
    }
    1
}
