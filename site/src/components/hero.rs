//! Hero section: full-height opener with the slow-zooming skyline.

use leptos::prelude::*;

use super::{Icon, InView};
use crate::content::{COMPANY, HERO_IMAGE, IconKind, SectionId};
use crate::motion::{Ease, Transition, Variant, VisualState};

const EYEBROW: Variant = Variant {
    hidden: VisualState::faded(0.0).offset(0.0, 20.0),
    visible: VisualState::SETTLED,
    transition: Transition::new(0.8, Ease::EaseOut),
};

const HEADLINE: Variant = Variant {
    hidden: VisualState::faded(0.0).scaled(0.98),
    visible: VisualState::SETTLED,
    transition: Transition::new(1.2, Ease::CircOut),
};

const LEAD: Variant = Variant {
    hidden: VisualState::faded(0.0),
    visible: VisualState::SETTLED,
    transition: Transition {
        duration: 1.0,
        delay: 0.5,
        ease: Ease::EaseOut,
        stagger_children: 0.0,
    },
};

const CTA: Variant = Variant {
    hidden: VisualState::faded(0.0).offset(0.0, 20.0),
    visible: VisualState::SETTLED,
    transition: Transition {
        duration: 0.8,
        delay: 0.8,
        ease: Ease::EaseOut,
        stagger_children: 0.0,
    },
};

/// Full-height hero with the skyline and the portfolio call to action.
#[component]
pub fn Hero(
    /// Prefix for image paths
    asset_base: String,
) -> impl IntoView {
    let hero_src = format!("{asset_base}{HERO_IMAGE}");
    view! {
        <section id=SectionId::Home.id() class="hero">
            <div class="layer blueprint-grid-fine hero-grid"></div>
            <div class="layer">
                <div class="hero-shade"></div>
                <img src=hero_src class="hero-image" alt="LA Skyline" />
                <div class="hero-glow-horizontal"></div>
                <div class="hero-glow-vertical"></div>
            </div>

            <div class="hero-content">
                <InView variant=EYEBROW>
                    <p class="hero-eyebrow">"Gateway to Korea for US Brands"</p>
                </InView>

                <InView variant=HEADLINE>
                    <h1 class="hero-title">
                        "CONNECTING"
                        <br />
                        <span class="text-gradient hero-title-accent">"US TRENDS"</span>
                        <br />
                        "TO KOREA"
                    </h1>
                </InView>

                <InView variant=LEAD>
                    <p class="hero-lead">
                        "Bringing U.S. trends to the heart of Korea."
                        <br />
                        <span class="hero-lead-strong">{COMPANY}</span>
                        " is your strategic partner for expanding brand value across borders."
                    </p>
                </InView>

                <InView variant=CTA>
                    <a href=SectionId::Brands.anchor() class="btn-explore">
                        "EXPLORE PORTFOLIO"
                        <Icon kind=IconKind::ArrowRight class="icon btn-explore-arrow" />
                    </a>
                </InView>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-line"></div>
            </div>
        </section>
    }
}
