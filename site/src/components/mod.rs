//! Leptos UI components for the landing page.
//!
//! Every component is a `#[component]` function rendered once on the
//! server. Only the reveal wrappers carry behavior, and only as data
//! attributes read by the browser client.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── Nav
//! ├── Hero            (InView per text block)
//! ├── About           (ScrollReveal: fadeInRight / fadeInLeft)
//! ├── Brands          (ScrollReveal: fadeInUp)
//! │   └── BrandCard   (ScrollReveal: fadeInUp + brand delay)
//! ├── Service         (ScrollReveal: fadeInUp; StaggerGroup: staggerContainer)
//! │   └── ServiceItem (StaggerChild: fadeInUp, 0.2s apart)
//! ├── Contact         (ScrollReveal: fadeInRight / fadeInLeft)
//! └── ClientScript
//! ```
//!
//! # Usage
//!
//! Components are normally used through [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use nit_site::components::BrandCard;
//! use nit_site::content::BRANDS;
//!
//! let html = view! { <BrandCard brand=BRANDS[0].clone() /> }.to_html();
//! ```

mod about;
mod brands;
mod contact;
mod document;
mod hero;
mod icons;
mod nav;
mod reveal;
mod service;

pub use about::About;
pub use brands::{BrandCard, Brands};
pub use contact::Contact;
pub use document::LandingDocument;
pub use hero::Hero;
pub use icons::{Icon, icon_paths};
pub use nav::Nav;
pub use reveal::{InView, STAGGER_MARGIN, ScrollReveal, StaggerChild, StaggerGroup};
pub use service::{Service, ServiceItem};
