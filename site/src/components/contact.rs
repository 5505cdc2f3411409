//! Contact footer: offices, partners, business inquiry and copyright.

use leptos::prelude::*;

use super::{Icon, ScrollReveal};
use crate::content::{self, IconKind, Office, PartnerLink, SectionId};
use crate::motion::{FADE_IN_LEFT, FADE_IN_RIGHT};

/// Contact footer: offices, partner links, inquiry address and copyright.
#[component]
pub fn Contact(
    /// Office cards, left column
    offices: Vec<Office>,
    /// External partner links
    partners: Vec<PartnerLink>,
    /// Business inquiry address
    email: String,
) -> impl IntoView {
    let mailto = content::mailto(&email);
    view! {
        <footer id=SectionId::Contact.id() class="contact">
            <div class="container two-col contact-grid">
                <ScrollReveal variant=FADE_IN_RIGHT>
                    <h2 class="heading-contact">"Ready to" <br /> "Connect?"</h2>
                    <div class="office-list">
                        {offices
                            .into_iter()
                            .map(|office| view! { <OfficeCard office=office /> })
                            .collect::<Vec<_>>()}
                    </div>
                </ScrollReveal>

                <ScrollReveal variant=FADE_IN_LEFT>
                    <div class="contact-side">
                        <div>
                            <h3 class="partners-title">"Trusted Partners"</h3>
                            <div class="partner-grid">
                                {partners
                                    .into_iter()
                                    .map(|partner| {
                                        view! {
                                            <a
                                                href=partner.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="glass-card partner-link"
                                            >
                                                {partner.name}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="inquiry">
                            <p class="inquiry-label">
                                <Icon kind=IconKind::Mail class="icon text-accent" />
                                " Business Inquiry"
                            </p>
                            <a href=mailto class="inquiry-email">{email}</a>
                        </div>
                    </div>
                </ScrollReveal>
            </div>

            <div class="container footer-bar">
                <p>{content::copyright()}</p>
                <p class="footer-tagline">"Connecting Global Brands to Local Markets"</p>
            </div>
        </footer>
    }
}

#[component]
fn OfficeCard(office: Office) -> impl IntoView {
    let card_class = format!("group glass-card office-card {}", office.accent.glow_class());
    let label_class = format!("office-label {}", office.accent.text_class());
    view! {
        <div class=card_class>
            <div class="office-label-row">
                <span class=label_class>{office.label}</span>
            </div>
            <p class="office-city">{office.city}</p>
            <p class="office-tagline">
                <Icon kind=office.icon class="icon-sm" />
                " "
                {office.tagline}
            </p>
        </div>
    }
}
