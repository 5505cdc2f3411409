//! Service section: the four-step pipeline from discovery to expansion.

use leptos::prelude::*;

use super::{Icon, ScrollReveal, StaggerChild, StaggerGroup};
use crate::content::{SectionId, ServiceStep};
use crate::motion::{FADE_IN_UP, STAGGER_CONTAINER};

/// Service section: header and the staggered grid of steps.
#[component]
pub fn Service(
    /// Steps in pipeline order
    steps: Vec<ServiceStep>,
) -> impl IntoView {
    view! {
        <section id=SectionId::Service.id() class="section section-dark service">
            <div class="service-orb service-orb-cyan"></div>
            <div class="service-orb service-orb-purple"></div>

            <div class="container layered">
                <ScrollReveal variant=FADE_IN_UP>
                    <div class="service-header">
                        <div class="service-header-main">
                            <span class="eyebrow text-accent">"One-Stop Solution"</span>
                            <h2 class="heading-lg">"From Discovery" <br /> "To Expansion"</h2>
                        </div>
                        <p class="service-summary">
                            "Beyond simple brokerage, we provide integrated solutions covering the entire process from brand discovery to market settlement."
                        </p>
                    </div>
                </ScrollReveal>

                <StaggerGroup class="service-grid">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| view! { <ServiceItem step=step index=index /> })
                        .collect::<Vec<_>>()}
                </StaggerGroup>
            </div>
        </section>
    }
}

/// Card for one service step, revealed as child `index` of the grid.
#[component]
pub fn ServiceItem(
    /// Step to show
    step: ServiceStep,
    /// Position in the grid, sets the stagger delay
    index: usize,
) -> impl IntoView {
    view! {
        <StaggerChild
            parent=STAGGER_CONTAINER
            variant=FADE_IN_UP
            index=index
            class="glass-card service-item blueprint-grid-fine blueprint-corner corner-tr"
        >
            <div class="scanner-line service-scanner"></div>
            <div class="service-sweep"></div>

            <div class="service-head">
                <div class="service-num mono-technical">{step.num}</div>
                <div class="service-badge">{step.title}</div>
                <div class="service-icon">
                    <Icon kind=step.icon class="icon-lg" />
                </div>
            </div>

            <h3 class="service-subtitle">{step.subtitle}</h3>
            <p class="service-description">{step.description}</p>

            <div class="service-status">
                <div class="service-status-rule"></div>
                <span class="service-status-text">"System Online"</span>
            </div>
        </StaggerChild>
    }
}
