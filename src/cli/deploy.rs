//! The setup workflow.
//!
//! Resolves the repository identity, fetches and encrypts the Heroku token,
//! and writes the deploy section. Steps run strictly in order; the first
//! failure aborts the run and the scratch guard removes temp files.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::remote::{self, Identity};
use crate::core::scratch::Scratch;
use crate::core::{cipher, credential, travis, travis_yml};
use crate::error::Result;

/// Result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The deploy section was written.
    Updated,
    /// `before_deploy` was already present; nothing changed.
    AlreadyConfigured,
}

/// Work out the GitHub repository and Heroku app for this run.
pub fn resolve_identity(settings: &Settings) -> Result<Identity> {
    let remotes = if settings.needs_remotes() {
        remote::list()?
    } else {
        Vec::new()
    };

    let full_name = match &settings.repo {
        Some(repo) => repo.clone(),
        None => remote::full_name(&remotes, &settings.origin)?,
    };
    let app_name = match &settings.app {
        Some(app) => app.clone(),
        None => remote::app_name(&remotes, &settings.remote)?,
    };

    debug!(full_name = %full_name, app_name = %app_name, "identity resolved");
    Ok(Identity {
        full_name,
        app_name,
    })
}

fn already_configured(settings: &Settings) -> Outcome {
    let file = settings.file.display().to_string();
    output::dimmed(&format!(
        "{} already has a before_deploy section, nothing to do",
        file
    ));
    Outcome::AlreadyConfigured
}

/// Run the whole setup.
///
/// # Errors
///
/// Any failing step aborts the run. Temp files are removed on every path.
pub fn execute(settings: &Settings) -> Result<Outcome> {
    if travis_yml::is_configured(&settings.file)? {
        return Ok(already_configured(settings));
    }

    let identity = resolve_identity(settings)?;
    if settings.verbose {
        output::kv("repository", &identity.full_name);
        output::kv("heroku app", &identity.app_name);
    }

    let scratch = Scratch::new();

    let token = output::step("fetching heroku token", || {
        credential::fetch(&settings.heroku_bin)
    })?;
    if settings.verbose {
        output::secret("heroku token", &token);
    }
    scratch.write_token(&token)?;
    drop(token);

    let key = output::step("fetching travis public key", || {
        travis::fetch_key(&settings.endpoint, &identity.full_name)
    })?;
    if settings.verbose {
        output::secret("public key", &key);
    }
    scratch.write_key(&key)?;

    output::step("encrypting token", || {
        cipher::encrypt(
            &settings.openssl_bin,
            scratch.key_path(),
            scratch.token_path(),
            scratch.cipher_path(),
        )
    })?;
    let secure = cipher::read_base64(scratch.cipher_path())?;
    if settings.verbose {
        output::secret("secure", &secure);
    }

    let updated = travis_yml::update(&settings.file, &identity.app_name, &secure)?;
    let removed = scratch.cleanup();
    debug!(removed, "temp files cleaned up");

    if !updated {
        return Ok(already_configured(settings));
    }

    info!(app = %identity.app_name, "deploy section added");
    output::success(&format!(
        "{} now deploys to heroku app {}",
        output::path(&settings.file.display().to_string()),
        identity.app_name
    ));
    output::hint("commit the file and push to trigger a deploy");
    Ok(Outcome::Updated)
}
