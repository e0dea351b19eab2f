//! `.travis.yml` editing.
//!
//! The document is edited as text so existing comments and formatting
//! survive. `serde_yaml` is used to check the idempotence guard, render the
//! inserted section, and validate the result before anything is written.

use serde::Serialize;
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::core::constants;
use crate::error::{DocumentError, Result};

/// Comments attached above inserted keys, looked up by key name.
const COMMENTS: &[(&str, &str)] = &[
    (
        "before_deploy",
        "Drop node_modules so Heroku installs dependencies during its own build",
    ),
    ("deploy", "Deploy to Heroku after a successful build"),
    (
        "api_key",
        "Heroku API token encrypted with this repository's Travis public key",
    ),
];

#[derive(Serialize)]
struct Section<'a> {
    before_deploy: [&'a str; 1],
    deploy: Deploy<'a>,
}

#[derive(Serialize)]
struct Deploy<'a> {
    skip_cleanup: bool,
    provider: &'a str,
    app: &'a str,
    api_key: Secure<'a>,
}

#[derive(Serialize)]
struct Secure<'a> {
    secure: &'a str,
}

/// Parse the document's top-level mapping.
///
/// An empty or comment-only document counts as an empty mapping.
fn top_level(text: &str) -> Result<serde_yaml::Mapping> {
    let value: Value = serde_yaml::from_str(text).map_err(DocumentError::Parse)?;
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(serde_yaml::Mapping::new()),
        _ => Err(DocumentError::NotAMapping.into()),
    }
}

/// Whether the document already has a top-level `before_deploy` key.
pub fn has_before_deploy(text: &str) -> Result<bool> {
    Ok(top_level(text)?.contains_key(constants::GUARD_KEY))
}

/// Comment registered for `key`, if any.
fn comment_for(key: &str) -> Option<&'static str> {
    COMMENTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, comment)| *comment)
}

/// Key of a block mapping line such as `  app: foo` or `deploy:`.
fn line_key(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with('-') {
        return None;
    }
    let (key, rest) = trimmed.split_once(':')?;
    if rest.is_empty() || rest.starts_with(' ') {
        Some(key.trim())
    } else {
        None
    }
}

fn is_top_level_content(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with([' ', '\t', '#', '-'])
}

/// Render the inserted section with comments from [`COMMENTS`].
fn render(app: &str, secure: &str) -> Result<String> {
    let section = Section {
        before_deploy: [constants::CLEANUP_COMMAND],
        deploy: Deploy {
            skip_cleanup: true,
            provider: constants::PROVIDER,
            app,
            api_key: Secure { secure },
        },
    };
    let yaml = serde_yaml::to_string(&section).map_err(DocumentError::Serialize)?;

    let mut out = String::with_capacity(yaml.len() + 256);
    for line in yaml.lines() {
        if let Some(comment) = line_key(line).and_then(comment_for) {
            let indent = &line[..line.len() - line.trim_start().len()];
            out.push_str(indent);
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Drop the comment block trailing the last content line.
///
/// Leading comments of a document with no content are kept.
fn strip_trailing_comment(lines: &mut Vec<&str>) {
    let Some(last_content) = lines
        .iter()
        .rposition(|l| !l.trim().is_empty() && !l.starts_with('#'))
    else {
        return;
    };
    let stray = lines[last_content + 1..]
        .iter()
        .any(|l| l.starts_with('#'));
    if stray {
        debug!("clearing trailing top-level comment");
    }
    lines.truncate(last_content + 1);
}

/// Remove a top-level `key:` block so the key can be written again.
fn remove_top_level(lines: &mut Vec<&str>, key: &str) {
    let Some(start) = lines
        .iter()
        .position(|l| is_top_level_content(l) && line_key(l) == Some(key))
    else {
        return;
    };
    let mut end = lines[start + 1..]
        .iter()
        .position(|l| is_top_level_content(l))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());
    // Column-0 comments right before the next key belong to that key.
    while end > start + 1
        && (lines[end - 1].trim().is_empty() || lines[end - 1].starts_with('#'))
    {
        end -= 1;
    }
    while end < lines.len() && lines[end].trim().is_empty() {
        end += 1;
    }
    debug!(key, lines = end - start, "replacing existing top-level block");
    lines.drain(start..end);
}

/// Line ending used by the document, `\r\n` if its first line ends with one.
fn line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(i) if text[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Insert the deploy section into `text`.
///
/// Returns `None` when the document already has `before_deploy`, otherwise
/// the updated document.
///
/// # Errors
///
/// Returns `DocumentError` if the input or the result is not a YAML mapping.
pub fn apply(text: &str, app: &str, secure: &str) -> Result<Option<String>> {
    if has_before_deploy(text)? {
        return Ok(None);
    }

    let mut lines: Vec<&str> = text.lines().collect();
    strip_trailing_comment(&mut lines);
    remove_top_level(&mut lines, "deploy");
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let eol = line_ending(text);
    let section = render(app, secure)?;

    let mut out = String::with_capacity(text.len() + section.len() + 64);
    for line in &lines {
        out.push_str(line);
        out.push_str(eol);
    }
    if !out.is_empty() {
        out.push_str(eol);
    }
    for line in section.lines() {
        out.push_str(line);
        out.push_str(eol);
    }

    if !has_before_deploy(&out)? {
        return Err(DocumentError::NotAMapping.into());
    }
    Ok(Some(out))
}

/// Whether the file at `path` already carries the deploy section.
pub fn is_configured(path: &Path) -> Result<bool> {
    has_before_deploy(&read(path)?)
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.display().to_string()).into());
    }
    std::fs::read_to_string(path).map_err(|source| {
        DocumentError::Read {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

/// Update the file at `path` in place.
///
/// Returns `true` when the section was inserted and `false` when the file
/// was already configured, in which case it is left untouched.
pub fn update(path: &Path, app: &str, secure: &str) -> Result<bool> {
    let text = read(path)?;

    let Some(updated) = apply(&text, app, secure)? else {
        info!(path = %path.display(), "before_deploy already present");
        return Ok(false);
    };

    std::fs::write(path, updated).map_err(|source| DocumentError::Write {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), app, "deploy section written");
    Ok(true)
}
