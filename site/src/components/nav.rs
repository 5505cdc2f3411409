//! Fixed navigation bar.

use leptos::prelude::*;

use crate::content::SectionId;

/// Fixed top bar with the brand mark and section links.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <span class="nav-brand-main">"NIT"</span>
                    <span class="text-gradient nav-brand-accent">"AMERICA"</span>
                </a>

                <div class="nav-links">
                    {SectionId::ALL
                        .iter()
                        .filter_map(|section| section.nav_label().map(|label| (*section, label)))
                        .map(|(section, label)| {
                            let class = if section == SectionId::Contact { "nav-cta" } else { "nav-link" };
                            view! { <a href=section.anchor() class=class>{label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav-mobile">
                    <a href=SectionId::Contact.anchor() class="nav-mobile-cta">"CONTACT"</a>
                </div>
            </div>
        </nav>
    }
}
