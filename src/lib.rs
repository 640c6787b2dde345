pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod routes;

pub use config::{Cli, Command};
pub use routes::{create_router, AppState};
