//! Brand portfolio section and the brand card.

use leptos::prelude::*;

use super::ScrollReveal;
use crate::content::{BrandEntry, SectionId};
use crate::motion::FADE_IN_UP;

/// Brand portfolio section: header and one card per brand.
#[component]
pub fn Brands(
    /// Cards in display order
    brands: Vec<BrandEntry>,
    /// Prefix for image paths
    asset_base: String,
) -> impl IntoView {
    view! {
        <section id=SectionId::Brands.id() class="section section-light brands">
            <div class="container">
                <ScrollReveal variant=FADE_IN_UP>
                    <div class="section-header-center">
                        <span class="eyebrow text-accent">"Portfolio"</span>
                        <h2 class="heading-brands">"OUR BRANDS"</h2>
                        <div class="header-bar"></div>
                    </div>
                </ScrollReveal>

                <div class="brand-grid">
                    {brands
                        .into_iter()
                        .map(|brand| view! { <BrandCard brand=brand asset_base=asset_base.clone() /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Card for one brand: image, category, name and description, tinted by
/// the brand's accent color.
///
/// Category and description slide in on hover; the card itself is revealed
/// with `fadeInUp`, delayed by the brand's own delay.
#[component]
pub fn BrandCard(
    /// Brand to show
    brand: BrandEntry,
    /// Prefix for the image path
    #[prop(default = String::new())]
    asset_base: String,
) -> impl IntoView {
    let accent = brand.accent;
    let card_class = format!("brand-card blueprint-corner corner-tl corner-br {}", accent.glow_class());
    let scanner_class = format!("{} brand-scanner", accent.scanner_class());
    let category_class = format!("brand-category {}", accent.text_class());
    let src = format!("{asset_base}{}", brand.image);

    view! {
        <ScrollReveal variant=FADE_IN_UP.with_delay(brand.delay)>
            <div class=card_class data-accent=accent.as_str()>
                <div class=scanner_class></div>
                <div class="brand-dim"></div>
                <img src=src class="brand-image" alt=brand.name />
                <div class="brand-fade"></div>

                <div class="brand-body">
                    <div class="clip">
                        <p class=category_class>{brand.category}</p>
                    </div>
                    <h3 class="brand-name">{brand.name}</h3>
                    <div class="clip">
                        <p class="brand-description">{brand.description}</p>
                    </div>
                    <div class="brand-rule"></div>
                </div>
            </div>
        </ScrollReveal>
    }
}
