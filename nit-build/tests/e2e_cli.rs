//! End-to-end CLI tests for nit-build.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command pointing to the nit-build binary, run inside `dir`
fn nit_build(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("nit-build");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("content"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp)
            .args(["--log-level", "verbose", "check"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("verbose"));
    }

    #[test]
    fn requires_a_subcommand() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp).assert().failure();
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_index_into_out_dir() {
        let temp = TempDir::new().unwrap();

        nit_build(&temp)
            .args(["render", "--out", "site"])
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(temp.path().join("site/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("OUR BRANDS"));
        assert!(html.contains("./pkg/nit_site_wasm.js"));
    }

    #[test]
    fn defaults_to_dist() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp).arg("render").assert().success();
        assert!(temp.path().join("dist/index.html").is_file());
    }

    #[test]
    fn applies_asset_base_and_no_client() {
        let temp = TempDir::new().unwrap();

        nit_build(&temp)
            .args([
                "render",
                "--asset-base",
                "https://cdn.example.com",
                "--no-client",
            ])
            .assert()
            .success();

        let html = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("https://cdn.example.com/images/hero-la.png"));
        assert!(!html.contains("type=\"module\""));
    }

    #[test]
    fn copies_public_assets() {
        let temp = TempDir::new().unwrap();
        let images = temp.path().join("public/images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("hero-la.png"), b"png").unwrap();

        nit_build(&temp).arg("render").assert().success();

        assert_eq!(
            fs::read(temp.path().join("dist/images/hero-la.png")).unwrap(),
            b"png"
        );
    }

    #[test]
    fn rendering_into_assets_dir_keeps_assets() {
        let temp = TempDir::new().unwrap();
        let images = temp.path().join("public/images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("lagear.jpg"), b"jpg").unwrap();

        nit_build(&temp)
            .args(["render", "--out", "public"])
            .assert()
            .success();

        assert_eq!(fs::read(images.join("lagear.jpg")).unwrap(), b"jpg");
        let html = fs::read_to_string(temp.path().join("public/index.html")).unwrap();
        assert!(html.contains("OUR BRANDS"));
    }

    #[test]
    fn reads_nit_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("nit.toml"),
            "out_dir = \"from-config\"\ntitle = \"Custom Title\"\nunknown_key = 1\n",
        )
        .unwrap();

        nit_build(&temp).arg("render").assert().success();

        let html = fs::read_to_string(temp.path().join("from-config/index.html")).unwrap();
        assert!(html.contains("<title>Custom Title</title>"));
    }

    #[test]
    fn flag_beats_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nit.toml"), "out_dir = \"from-config\"\n").unwrap();

        nit_build(&temp)
            .args(["render", "--out", "from-flag"])
            .assert()
            .success();

        assert!(temp.path().join("from-flag/index.html").is_file());
        assert!(!temp.path().join("from-config").exists());
    }
}

// ============================================
// Config errors
// ============================================

mod config_errors {
    use super::*;

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nit.toml"), "out_dir = [\n").unwrap();

        nit_build(&temp)
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse config"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();

        nit_build(&temp)
            .args(["--config", "absent.toml", "check"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("absent.toml"));
    }
}

// ============================================
// Content and check
// ============================================

mod content {
    use super::*;

    #[test]
    fn dumps_content_json() {
        let temp = TempDir::new().unwrap();

        let output = nit_build(&temp).arg("content").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let names: Vec<&str> = json["brands"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|b| b["name"].as_str())
            .collect();
        assert_eq!(names, vec!["MAUI & SONS", "LA GEAR"]);
        assert_eq!(json["contactEmail"], "nit@nitsoft.biz");
        assert_eq!(json["services"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn compact_is_single_line() {
        let temp = TempDir::new().unwrap();

        let output = nit_build(&temp).args(["content", "--compact"]).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.trim_end().lines().count(), 1);
        assert!(stdout.contains("LA GEAR"));
    }

    #[test]
    fn check_passes() {
        let temp = TempDir::new().unwrap();
        nit_build(&temp)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Content OK: 2 brands, 4 services"));
    }
}
