//! About section: the two-core operation and the USA to Korea bridge card.

use leptos::prelude::*;

use super::ScrollReveal;
use crate::content::{AccentColor, COMPANY, SectionId};
use crate::motion::{FADE_IN_LEFT, FADE_IN_RIGHT};

/// About section: company copy and the USA to Korea bridge card.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.id() class="section section-primary about">
            <div class="container two-col">
                <ScrollReveal variant=FADE_IN_RIGHT>
                    <div class="eyebrow-row">
                        <div class="eyebrow-rule"></div>
                        <span class="eyebrow text-accent">"About Us"</span>
                    </div>
                    <h2 class="heading-xl">"Global Vision," <br /> "Local Action."</h2>
                    <div class="about-copy">
                        <p class="about-point about-point-hover">
                            <span class="about-point-title">"Two-Core Global Operation"</span>
                            <strong class="underline-accent">{COMPANY}</strong>
                            " is the US-based entity leading brand sourcing, licensing negotiations, and strategic partnerships directly from Irvine, California."
                        </p>
                        <p class="about-point">
                            <strong class="underline-purple">"NITSOFT"</strong>
                            " serves as the execution core for the Korean market, driving localized commerce, IT-powered messaging, and scalable distribution infrastructure."
                        </p>
                    </div>
                </ScrollReveal>

                <ScrollReveal variant=FADE_IN_LEFT>
                    <BridgeCard />
                </ScrollReveal>
            </div>
        </section>
    }
}

#[component]
fn BridgeCard() -> impl IntoView {
    view! {
        <div class="bridge">
            <div class="bridge-halo"></div>
            <div class="glass-card bridge-card">
                <div class="bridge-top-line"></div>
                <div class="bridge-ends">
                    <Endpoint flag="\u{1f1fa}\u{1f1f8}" country="USA" place="Irvine, CA" />
                    <div class="bridge-link">
                        <div class="bridge-link-rule"></div>
                        <div class="bridge-link-beam"></div>
                        <div class="glass-card bridge-link-badge">"CONNECT"</div>
                    </div>
                    <Endpoint flag="\u{1f1f0}\u{1f1f7}" country="KOREA" place="Strategic Hub" />
                </div>

                <div class="bridge-notes">
                    <RoleNote accent=AccentColor::Blue>
                        <span class="strong">{COMPANY}</span>
                        " leads US operations & networking."
                    </RoleNote>
                    <RoleNote accent=AccentColor::Purple>
                        "Strategic partnership with "
                        <span class="strong">"NITSOFT"</span>
                        " for Korean market expansion."
                    </RoleNote>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Endpoint(flag: &'static str, country: &'static str, place: &'static str) -> impl IntoView {
    view! {
        <div class="bridge-end">
            <div class="bridge-flag">{flag}</div>
            <div class="bridge-country">{country}</div>
            <div class="bridge-place mono-technical">{place}</div>
        </div>
    }
}

#[component]
fn RoleNote(accent: AccentColor, children: Children) -> impl IntoView {
    view! {
        <div class=format!("glass-card role-note {}", accent.glow_class())>
            <div class=format!("role-dot {}", accent.dot_class())></div>
            <p class="role-text">{children()}</p>
        </div>
    }
}
