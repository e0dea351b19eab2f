//! Constants used throughout travis-heroku.
//!
//! Centralizes magic strings and default values.

/// YAML file updated by default.
pub const CONFIG_FILE: &str = ".travis.yml";

/// Travis API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.travis-ci.com";

/// Remote holding the GitHub repository.
pub const ORIGIN_REMOTE: &str = "origin";

/// Remote holding the Heroku app.
pub const HEROKU_REMOTE: &str = "heroku";

/// Heroku CLI program.
pub const HEROKU_BIN: &str = "heroku";

/// OpenSSL program.
pub const OPENSSL_BIN: &str = "openssl";

/// Temp file holding the Travis public key.
pub const KEY_FILE: &str = "travis_key.pem";

/// Temp file holding the plaintext Heroku token.
pub const TOKEN_FILE: &str = "heroku_token.txt";

/// Temp file holding the encrypted token.
pub const CIPHER_FILE: &str = "heroku_token.enc";

/// Key whose presence marks the document as already configured.
pub const GUARD_KEY: &str = "before_deploy";

/// Command run by Travis before deploying.
pub const CLEANUP_COMMAND: &str = "rm -rf node_modules";

/// Travis deploy provider tag.
pub const PROVIDER: &str = "heroku";

/// Log filter environment variable.
pub const LOG_ENV: &str = "TRAVIS_HEROKU_LOG";
