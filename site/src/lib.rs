//! # nit-site
//!
//! Leptos SSR renderer for the NIT AMERICA landing page.
//!
//! The page is a single static document: hero, about, brand portfolio,
//! services and contact footer. All content is literal data from
//! [`content`]; the only behavior is a scroll reveal that moves each block
//! from a hidden to a visible state the first time it scrolls into view.
//!
//! ## Quick Start
//!
//! ```rust
//! use nit_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("OUR BRANDS"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Brands, services, partners, offices, section ids
//! - [`motion`] - Animation variants and their CSS rendering
//! - [`reveal`] - The hidden → visible state machine and its wire format
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! The server renders every reveal block in its hidden state and embeds the
//! variant as JSON; the `nit-site-wasm` client observes the blocks in the
//! browser and applies the visible state.
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved.
//!
//! ## Features
//!
//! - `ssr` (default) - Leptos components and [`render_page`]. Without it the
//!   crate is just the content, motion and reveal model, which is what the
//!   browser client links against.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(feature = "ssr")]
pub mod components;
pub mod content;
pub mod error;
pub mod motion;
pub mod reveal;
pub mod styles;

pub use error::SiteError;

#[cfg(feature = "ssr")]
use components::LandingDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Default location of the wasm-bindgen client module, relative to the page.
pub const DEFAULT_CLIENT_MODULE: &str = "./pkg/nit_site_wasm.js";

/// Default document title.
pub const DEFAULT_TITLE: &str = "NIT AMERICA | Connecting US Trends to Korea";

/// Render the complete landing page.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`, with every
/// reveal block in its hidden state.
///
/// # Example
///
/// ```rust
/// use nit_site::{render_page, PageOptions};
///
/// let options = PageOptions {
///     asset_base: "https://cdn.example.com".into(),
///     client_module: None,
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(html.contains("https://cdn.example.com/images/Maui.jpg"));
/// assert!(!html.contains("type=\"module\""));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! {
        <LandingDocument options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Knobs for a page render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Document `<title>`.
    pub title: String,
    /// Prefix for image paths, e.g. a CDN origin. Empty keeps them root-relative.
    pub asset_base: String,
    /// Path of the wasm-bindgen client module; `None` ships no script.
    pub client_module: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            asset_base: String::new(),
            client_module: Some(DEFAULT_CLIENT_MODULE.to_string()),
        }
    }
}
