//! Command-line interface for the `folio-api` binary.

use clap::{Parser, Subcommand};

/// Portfolio site backend.
#[derive(Parser, Debug)]
#[command(name = "folio-api", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands. Running without one serves HTTP.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server.
    Serve,
    /// Print an Argon2id PHC string for `ADMIN_PASSWORD_HASH`.
    HashPassword {
        /// Plaintext admin password.
        password: String,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to [`Command::Serve`].
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
