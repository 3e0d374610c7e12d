//! Core domain + application logic for the wemala chat bot client.
//!
//! This crate is intentionally transport-agnostic. The HTTP exchange with the
//! wemala server lives behind a port (trait) implemented in `wemala-client`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod status;
pub mod transport;

pub use errors::{Error, Result};
