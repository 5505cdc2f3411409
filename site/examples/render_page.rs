//! Render the landing page to a file.
//!
//! Run with: `cargo run -p nit-site --example render_page`

use nit_site::{PageOptions, render_page};

fn main() {
    if let Err(err) = nit_site::content::validate() {
        eprintln!("Content check failed: {err}");
        std::process::exit(1);
    }

    // Serve the wasm client from the default ./pkg location
    let options = PageOptions::default();

    let html = render_page(&options);

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
