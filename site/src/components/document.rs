//! Root document component - the complete HTML page
//!
//! Page shell (frame, noise, nav) around the five sections, followed by
//! the module script that boots the reveal client.

use super::{About, Brands, Contact, Hero, Nav, Service};
use crate::PageOptions;
use crate::content::{BRANDS, CONTACT_EMAIL, OFFICES, PARTNERS, SERVICES};
use crate::styles::{CSP, LANDING_CSS, NOSCRIPT_CSS};
use leptos::prelude::*;

const DESCRIPTION: &str = "NIT AMERICA connects US brands to Korea: trend sourcing, licensing, \
    distribution infrastructure and localization from Irvine, California to Seoul.";

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    /// Title, asset base and client module
    options: PageOptions,
) -> impl IntoView {
    let PageOptions {
        title,
        asset_base,
        client_module,
    } = options;

    // Without a client nothing would ever leave the hidden state
    let static_reveal = client_module.is_none().then(|| view! { <style>{NOSCRIPT_CSS}</style> });

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=DESCRIPTION />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
                {static_reveal}
            </head>
            <body class="page">
                <div class="global-frame"></div>
                <div class="noise-bg"></div>

                <Nav />

                <main class="page-main">
                    <Hero asset_base=asset_base.clone() />
                    <About />
                    <Brands brands=BRANDS.to_vec() asset_base=asset_base />
                    <Service steps=SERVICES.to_vec() />
                    <Contact
                        offices=OFFICES.to_vec()
                        partners=PARTNERS.to_vec()
                        email=CONTACT_EMAIL.to_string()
                    />
                </main>

                <ClientScript module=client_module />
            </body>
        </html>
    }
}

/// Module script loading the reveal client, when one is configured.
#[component]
fn ClientScript(module: Option<String>) -> impl IntoView {
    module.map(|path| {
        view! { <script type="module">{client_bootstrap(&path)}</script> }
    })
}

/// `wasm-bindgen --target web` output exports an async `init`; awaiting it
/// runs the module's start function.
fn client_bootstrap(path: &str) -> String {
    let path_json = serde_json::to_string(path).unwrap_or_else(|_| "\"\"".to_string());
    format!("import init from {path_json};\ninit().catch((err) => console.error('[nit-site] client failed to start', err));")
}
