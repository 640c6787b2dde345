//! Command-line and environment configuration.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Superheroes - heroes, powers and hero-powers over HTTP
#[derive(Parser, Debug)]
#[command(name = "superheroes", version, about, long_about = None)]
pub struct Cli {
    /// Server bind address
    #[arg(long, default_value = "127.0.0.1", env = "SUPERHEROES_BIND", global = true)]
    pub bind: String,

    /// Server port
    #[arg(long, default_value_t = 5000, env = "SUPERHEROES_PORT", global = true)]
    pub port: u16,

    /// Path to the SQLite database file (created if absent)
    #[arg(
        long,
        default_value = "superheroes.db",
        env = "SUPERHEROES_DB_PATH",
        global = true
    )]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Insert the sample roster of heroes and powers
    Seed {
        /// Clear all heroes, powers and hero_powers first
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}
