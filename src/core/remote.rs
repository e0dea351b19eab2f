//! Git remote inspection.
//!
//! Derives the GitHub repository slug and the Heroku app name from the
//! fetch URLs of the configured remotes.

use std::process::{Command, Stdio};
use tracing::debug;

use crate::core::tool;
use crate::error::{RemoteError, Result};

/// A named git remote and its fetch URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

/// Repository identity for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// GitHub `owner/repo`
    pub full_name: String,
    /// Heroku app name
    pub app_name: String,
}

/// Check if we're in a git repository.
fn is_git_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// List the fetch remotes of the current repository.
pub fn list() -> Result<Vec<Remote>> {
    tool::require("git")?;
    if !is_git_repo() {
        return Err(RemoteError::NotARepository.into());
    }

    let output = tool::run("git", ["remote", "-v"])?;
    let remotes = parse(&String::from_utf8_lossy(&output.stdout));
    debug!(count = remotes.len(), "git remotes listed");
    Ok(remotes)
}

/// Parse `git remote -v` output, keeping fetch entries only.
pub fn parse(text: &str) -> Vec<Remote> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;
            let url = parts.next()?;
            match parts.next() {
                Some("(fetch)") | None => Some(Remote {
                    name: name.to_string(),
                    url: url.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

fn find<'a>(remotes: &'a [Remote], name: &str) -> Result<&'a Remote> {
    remotes
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| RemoteError::Missing(name.to_string()).into())
}

/// `owner/repo` for the named remote.
pub fn full_name(remotes: &[Remote], name: &str) -> Result<String> {
    let remote = find(remotes, name)?;
    repo_slug(&remote.url).ok_or_else(|| {
        RemoteError::Unparseable {
            name: remote.name.clone(),
            url: remote.url.clone(),
        }
        .into()
    })
}

/// Heroku app name for the named remote.
pub fn app_name(remotes: &[Remote], name: &str) -> Result<String> {
    let remote = find(remotes, name)?;
    heroku_app(&remote.url).ok_or_else(|| {
        RemoteError::Unparseable {
            name: remote.name.clone(),
            url: remote.url.clone(),
        }
        .into()
    })
}

/// Path part of a remote URL, for both URL and scp-like syntax.
fn url_path(url: &str) -> &str {
    if let Some((_, rest)) = url.split_once("://") {
        // scheme://[user@]host[:port]/path
        return rest.split_once('/').map(|(_, path)| path).unwrap_or("");
    }
    // [user@]host:path
    url.split_once(':').map(|(_, path)| path).unwrap_or(url)
}

fn strip_git(segment: &str) -> &str {
    segment.strip_suffix(".git").unwrap_or(segment)
}

/// Extract `owner/repo` from a remote URL.
///
/// Accepts `git@github.com:owner/repo.git`, `https://github.com/owner/repo`,
/// `ssh://git@github.com/owner/repo.git` and `git://` URLs.
pub fn repo_slug(url: &str) -> Option<String> {
    let path = url_path(url.trim()).trim_matches('/');
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let repo = strip_git(segments.next()?);
    let owner = segments.next()?;
    if repo.is_empty() || owner.is_empty() {
        return None;
    }
    Some(format!("{}/{}", owner, repo))
}

/// Extract the app name from a Heroku git URL.
///
/// Accepts `https://git.heroku.com/<app>.git` and `git@heroku.com:<app>.git`.
pub fn heroku_app(url: &str) -> Option<String> {
    let path = url_path(url.trim()).trim_matches('/');
    let app = strip_git(path.rsplit('/').next()?);
    if app.is_empty() {
        return None;
    }
    Some(app.to_string())
}
