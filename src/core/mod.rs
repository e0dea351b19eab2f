//! Core library components.
//!
//! Each step of the setup lives in its own module; `cli` wires them
//! together in order.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod credential;
pub mod remote;
pub mod scratch;
pub mod tool;
pub mod travis;
pub mod travis_yml;
