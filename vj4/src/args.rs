use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vj4 judge web server
#[derive(Debug, Parser)]
#[command(name = "vj4", about = "Online judge web server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vj4.toml", env = "VJ4_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VJ4_LISTEN")]
    pub listen: Option<SocketAddr>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the server (default)
    Serve,
    /// Print every user-facing error kind with its status and message template
    Errors,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["vj4"]).unwrap();
        assert_eq!(args.config, PathBuf::from("vj4.toml"));
        assert!(args.command.is_none());
    }

    #[test]
    fn listen_override_and_subcommand() {
        let args = Args::try_parse_from(["vj4", "--listen", "127.0.0.1:9000", "errors"]).unwrap();
        assert_eq!(args.listen, Some(SocketAddr::from(([127, 0, 0, 1], 9000))));
        assert!(matches!(args.command, Some(Command::Errors)));
    }
}
