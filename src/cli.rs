//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// parkdesk - parking slot and ticket management service
#[derive(Debug, Parser)]
#[command(name = "parkdesk", version, about)]
pub struct Cli {
    /// Path to a configuration file (default: parkdesk.toml if present)
    #[arg(short, long, env = "PARKDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the configuration
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding the configuration
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of parking slots created at startup, overriding the configuration
    #[arg(long)]
    pub slots: Option<u32>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["parkdesk"]);
        assert!(cli.host.is_none());
        assert!(!cli.verbose);

        let cli = Cli::parse_from(["parkdesk", "--port", "9000", "--slots", "12", "-v"]);
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.slots, Some(12));
        assert!(cli.verbose);
    }
}
