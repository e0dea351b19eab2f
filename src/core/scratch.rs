//! Transient files for a single run.
//!
//! [`Scratch`] owns the key, token, and ciphertext paths and deletes them
//! when dropped, so every exit path (success, early `?` return, panic
//! unwind) leaves the working directory clean.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants;
use crate::error::Result;

/// Temp files for the key, plaintext token, and ciphertext.
#[derive(Debug)]
pub struct Scratch {
    key: PathBuf,
    token: PathBuf,
    cipher: PathBuf,
}

impl Scratch {
    /// Scratch paths inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            key: dir.join(constants::KEY_FILE),
            token: dir.join(constants::TOKEN_FILE),
            cipher: dir.join(constants::CIPHER_FILE),
        }
    }

    /// Scratch paths in the current working directory.
    pub fn new() -> Self {
        Self::in_dir(Path::new("."))
    }

    pub fn key_path(&self) -> &Path {
        &self.key
    }

    pub fn token_path(&self) -> &Path {
        &self.token
    }

    pub fn cipher_path(&self) -> &Path {
        &self.cipher
    }

    /// All scratch paths.
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.key.as_path(),
            self.token.as_path(),
            self.cipher.as_path(),
        ]
    }

    /// Write the public key.
    pub fn write_key(&self, pem: &str) -> Result<()> {
        fs::write(&self.key, pem)?;
        Ok(())
    }

    /// Write the plaintext token, readable by the owner only.
    pub fn write_token(&self, token: &str) -> Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.token)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }

    /// Remove every scratch file that exists.
    ///
    /// Safe to call any number of times. Returns how many files were removed.
    pub fn cleanup(&self) -> usize {
        let mut removed = 0;
        for path in self.paths() {
            if !path.exists() {
                continue;
            }
            match fs::remove_file(path) {
                Ok(()) => {
                    debug!(path = %path.display(), "removed temp file");
                    removed += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove temp file"),
            }
        }
        removed
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.cleanup();
    }
}
