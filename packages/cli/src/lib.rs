// ABOUTME: Library side of the todoboard binary
// ABOUTME: Configuration, logging setup and the server lifecycle

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{build_app, open_storage, run_server, serve};
