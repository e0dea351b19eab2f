//! travis-heroku - Encrypt a Heroku token for Travis CI and configure deployment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/               # Command-line interface
//! │   ├── deploy         # The ordered setup workflow
//! │   └── output         # Terminal output helpers
//! └── core/              # Core library components
//!     ├── config         # Resolved run settings
//!     ├── constants      # File names and defaults
//!     ├── remote         # git remote parsing
//!     ├── credential     # heroku auth:token
//!     ├── travis         # Travis public key endpoint
//!     ├── cipher         # openssl rsautl encryption
//!     ├── travis_yml     # .travis.yml editing
//!     ├── scratch        # Temp file guard
//!     └── tool           # External tool invocation
//! ```

pub mod cli;
pub mod core;
pub mod error;
