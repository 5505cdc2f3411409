//! Configuration file support for nit-build.
//!
//! Loads optional `nit.toml` from the working directory, or the file given
//! with `--config`. Every key is optional; command line flags win over the
//! file and the file wins over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nit_site::{DEFAULT_CLIENT_MODULE, DEFAULT_TITLE, PageOptions};
use serde::Deserialize;
use tracing::debug;

use crate::args::RenderArgs;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nit.toml";

const DEFAULT_OUT_DIR: &str = "dist";
const DEFAULT_ASSETS_DIR: &str = "public";

/// Contents of `nit.toml`. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Output directory for `render`.
    pub out_dir: Option<PathBuf>,
    /// Prefix for image paths.
    pub asset_base: Option<String>,
    /// Client module path; an empty string renders without the client.
    pub client_module: Option<String>,
    /// Static asset directory copied next to `index.html`.
    pub assets_dir: Option<PathBuf>,
    /// Document title.
    pub title: Option<String>,
}

impl SiteConfig {
    /// Load the explicit config file, or `nit.toml` in `dir` when present.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if !default_path.exists() {
            debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&default_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Combine with the `render` flags into a render plan.
    pub fn resolve(&self, args: &RenderArgs) -> RenderPlan {
        let out_dir = args
            .out
            .clone()
            .or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        let client_module = if args.no_client {
            None
        } else {
            match args.client_module.clone().or_else(|| self.client_module.clone()) {
                Some(path) if path.is_empty() => None,
                Some(path) => Some(path),
                None => Some(DEFAULT_CLIENT_MODULE.to_string()),
            }
        };

        let (assets_dir, assets_required) = match (&args.assets, &self.assets_dir) {
            (Some(dir), _) => (dir.clone(), true),
            (None, Some(dir)) => (dir.clone(), true),
            (None, None) => (PathBuf::from(DEFAULT_ASSETS_DIR), false),
        };

        RenderPlan {
            out_dir,
            assets_dir,
            assets_required,
            options: PageOptions {
                title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                asset_base: args
                    .asset_base
                    .clone()
                    .or_else(|| self.asset_base.clone())
                    .unwrap_or_default(),
                client_module,
            },
        }
    }
}

/// Everything `render` needs, after flags and config are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub out_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// Assets directory was configured explicitly, so its absence is worth a warning.
    pub assets_required: bool,
    pub options: PageOptions,
}
