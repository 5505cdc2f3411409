//! # nit-build
//!
//! Static build tool for the NIT AMERICA landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Render dist/index.html and copy ./public next to it
//! nit-build render
//!
//! # Serve images from a CDN, ship without the wasm client
//! nit-build render --asset-base https://cdn.example.com --no-client
//!
//! # Dump the page content / validate it
//! nit-build content
//! nit-build check
//! ```
//!
//! Settings can also come from `nit.toml`, see [`config`].

mod args;
mod config;
mod render;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use nit_site::content::{self, SiteContent};
use tracing::{debug, info};

use args::{Cli, Command};
use config::SiteConfig;

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    debug!("nit-build v{}", env!("CARGO_PKG_VERSION"));

    let config = SiteConfig::load(Path::new("."), cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => {
            let plan = config.resolve(&args);
            let summary = render::render_site(&plan)?;
            info!(
                "Rendered {} ({} bytes, {} asset file(s))",
                summary.index_path.display(),
                summary.html_bytes,
                summary.assets_copied
            );
            println!("{}", summary.index_path.display());
        }
        Command::Content { compact } => {
            let shipped = SiteContent::shipped();
            let json = if compact {
                serde_json::to_string(&shipped)
            } else {
                serde_json::to_string_pretty(&shipped)
            }
            .context("Failed to serialize content")?;
            println!("{}", json);
        }
        Command::Check => {
            content::validate().context("Page content is invalid")?;
            let shipped = SiteContent::shipped();
            println!(
                "Content OK: {} brands, {} services, {} partners, {} offices",
                shipped.brands.len(),
                shipped.services.len(),
                shipped.partners.len(),
                shipped.offices.len()
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[nit-build] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
