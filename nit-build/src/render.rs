//! `render`: write the page and its static assets to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::RenderPlan;

/// What a render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub index_path: PathBuf,
    pub html_bytes: usize,
    pub assets_copied: usize,
}

/// Validate the content, render `index.html` and copy assets.
pub fn render_site(plan: &RenderPlan) -> Result<RenderSummary> {
    nit_site::content::validate().context("Page content is invalid")?;

    fs::create_dir_all(&plan.out_dir)
        .with_context(|| format!("Failed to create output directory {}", plan.out_dir.display()))?;

    let html = nit_site::render_page(&plan.options);
    let index_path = plan.out_dir.join("index.html");
    fs::write(&index_path, &html)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    info!("Wrote {} ({} bytes)", index_path.display(), html.len());

    let assets_copied = if plan.assets_dir.is_dir() {
        copy_assets(&plan.assets_dir, &plan.out_dir)?
    } else {
        if plan.assets_required {
            warn!(
                "Assets directory {} not found, skipping",
                plan.assets_dir.display()
            );
        } else {
            debug!("No assets directory at {}", plan.assets_dir.display());
        }
        0
    };

    Ok(RenderSummary {
        index_path,
        html_bytes: html.len(),
        assets_copied,
    })
}

/// Copy every file under `from` into `to`, keeping relative paths.
///
/// Copying a directory onto itself is a no-op. When `to` lies inside
/// `from`, that subtree is skipped.
pub fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    let from = from
        .canonicalize()
        .with_context(|| format!("Failed to resolve assets directory {}", from.display()))?;
    let to = to
        .canonicalize()
        .with_context(|| format!("Failed to resolve output directory {}", to.display()))?;

    if from == to {
        warn!(
            "Assets directory {} is the output directory, nothing to copy",
            from.display()
        );
        return Ok(0);
    }

    let mut copied = 0;
    let walker = WalkDir::new(&from)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !e.path().starts_with(&to));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", from.display()))?;
        let relative = entry
            .path()
            .strip_prefix(&from)
            .with_context(|| format!("{} is outside {}", entry.path().display(), from.display()))?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
            debug!("Copied {}", relative.display());
            copied += 1;
        }
    }

    info!("Copied {} asset file(s) from {}", copied, from.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nit_site::PageOptions;
    use tempfile::TempDir;

    fn plan(out_dir: PathBuf, assets_dir: PathBuf) -> RenderPlan {
        RenderPlan {
            out_dir,
            assets_dir,
            assets_required: false,
            options: PageOptions::default(),
        }
    }

    #[test]
    fn test_render_writes_index() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let summary = render_site(&plan(out.clone(), temp.path().join("public"))).expect("render");
        assert_eq!(summary.index_path, out.join("index.html"));
        assert_eq!(summary.assets_copied, 0);

        let html = fs::read_to_string(out.join("index.html")).expect("read index");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.len(), summary.html_bytes);
    }

    #[test]
    fn test_copy_assets_keeps_tree() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("images")).expect("mkdir");
        fs::write(public.join("images/Maui.jpg"), b"jpg").expect("write");
        fs::write(public.join("favicon.ico"), b"ico").expect("write");

        let out = temp.path().join("dist");
        let summary = render_site(&plan(out.clone(), public)).expect("render");

        assert_eq!(summary.assets_copied, 2);
        assert_eq!(fs::read(out.join("images/Maui.jpg")).expect("read"), b"jpg");
        assert!(out.join("favicon.ico").is_file());
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn test_assets_dir_as_out_dir_keeps_files() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("images")).expect("mkdir");
        fs::write(public.join("images/Maui.jpg"), b"jpg").expect("write");

        let summary = render_site(&plan(public.clone(), public.clone())).expect("render");

        assert_eq!(summary.assets_copied, 0);
        assert_eq!(fs::read(public.join("images/Maui.jpg")).expect("read"), b"jpg");
        let index = fs::read_to_string(public.join("index.html")).expect("read index");
        assert_eq!(index.len(), summary.html_bytes);
        assert!(index.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_out_dir_inside_assets_is_not_copied_into_itself() {
        let temp = TempDir::new().expect("temp dir");
        let site = temp.path().join("site");
        fs::create_dir_all(&site).expect("mkdir");
        fs::write(site.join("logo.svg"), b"svg").expect("write");

        let out = site.join("dist");
        let summary = render_site(&plan(out.clone(), site.clone())).expect("render");

        assert_eq!(summary.assets_copied, 1);
        assert_eq!(fs::read(out.join("logo.svg")).expect("read"), b"svg");
        assert!(!out.join("dist").exists());
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn test_same_dir_through_different_spelling() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(&public).expect("mkdir");
        fs::write(public.join("favicon.ico"), b"ico").expect("write");

        let copied = copy_assets(&public, &public.join(".")).expect("copy");
        assert_eq!(copied, 0);
        assert_eq!(fs::read(public.join("favicon.ico")).expect("read"), b"ico");
    }
}
