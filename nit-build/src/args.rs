//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Accepted values of `--log-level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Parser, Debug)]
#[command(name = "nit-build")]
#[command(about = "Build the NIT AMERICA landing page - render, dump content, validate")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true, value_parser = LOG_LEVELS)]
    pub log_level: String,

    /// Config file (default: ./nit.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render index.html (and copy static assets) into the output directory
    Render(RenderArgs),
    /// Print the page content as JSON
    Content {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Validate the page content
    Check,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Prefix for image paths (e.g. a CDN origin)
    #[arg(long, value_name = "URL")]
    pub asset_base: Option<String>,

    /// Path of the wasm client module as referenced from the page
    #[arg(long, value_name = "PATH", conflicts_with = "no_client")]
    pub client_module: Option<String>,

    /// Render without the client script (blocks are revealed by CSS only)
    #[arg(long)]
    pub no_client: bool,

    /// Static asset directory copied into the output directory
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from([
            "nit-build",
            "--log-level",
            "debug",
            "render",
            "--out",
            "site-out",
            "--asset-base",
            "https://cdn.example.com",
            "--no-client",
        ]);
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.out, Some(PathBuf::from("site-out")));
                assert_eq!(args.asset_base.as_deref(), Some("https://cdn.example.com"));
                assert!(args.no_client);
                assert!(args.client_module.is_none());
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["nit-build", "check", "--config", "other.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_log_level_is_validated() {
        assert_eq!(Cli::parse_from(["nit-build", "check"]).log_level, "info");
        for level in LOG_LEVELS {
            let cli = Cli::parse_from(["nit-build", "--log-level", level, "check"]);
            assert_eq!(cli.log_level, level);
        }
        assert!(Cli::try_parse_from(["nit-build", "--log-level", "verbose", "check"]).is_err());
    }

    #[test]
    fn test_client_flags_conflict() {
        let result = Cli::try_parse_from([
            "nit-build",
            "render",
            "--client-module",
            "./app.js",
            "--no-client",
        ]);
        assert!(result.is_err());
    }
}
