//! Scroll reveal wrappers.
//!
//! Every wrapper renders its block in the hidden phase and leaves the
//! variant in a data attribute for the browser client to pick up.

use leptos::prelude::*;

use crate::motion::{Phase, STAGGER_CONTAINER, Variant};
use crate::reveal::{RevealSpec, Viewport};

/// Block revealed once, the first time 10% of it scrolls into view.
#[component]
pub fn ScrollReveal(
    /// Hidden and visible states of the block
    variant: Variant,
    /// Observation options, one-shot at 10% by default
    #[prop(optional)]
    viewport: Option<Viewport>,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let spec = RevealSpec::new(variant, viewport.unwrap_or_default());
    view! {
        <div
            class=join_class("reveal", class)
            data-reveal=spec.to_attr()
            data-reveal-state=Phase::Hidden.as_str()
            style=variant.style(Phase::Hidden)
        >
            {children()}
        </div>
    }
}

/// Block that is visible while in view and fades back out when it leaves.
#[component]
pub fn InView(
    /// Hidden and visible states of the block
    variant: Variant,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <ScrollReveal variant=variant viewport=Viewport::repeating() class=class>
            {children()}
        </ScrollReveal>
    }
}

/// Container whose [`StaggerChild`]ren reveal one after another.
///
/// Observed with a `-100px` viewport margin and no minimum visible area, so
/// the group starts as soon as any of it is well inside the screen.
#[component]
pub fn StaggerGroup(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let viewport = Viewport {
        threshold: 0.0,
        ..Viewport::with_margin(STAGGER_MARGIN)
    };
    view! {
        <ScrollReveal
            variant=STAGGER_CONTAINER
            viewport=viewport
            class=class
        >
            {children()}
        </ScrollReveal>
    }
}

/// Viewport margin of stagger groups.
pub const STAGGER_MARGIN: &str = "-100px";

/// Child `index` of a stagger group whose container uses `parent`.
///
/// Children are not observed themselves; the client reveals them together
/// with the nearest enclosing reveal block.
#[component]
pub fn StaggerChild(
    /// Variant of the enclosing group, source of the per-child step
    parent: Variant,
    /// Hidden and visible states of the child
    variant: Variant,
    /// Position in the group, `0` first
    index: usize,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let variant = parent.stagger_child(variant, index);
    let variant_json = serde_json::to_string(&variant).unwrap_or_else(|_| "{}".to_string());
    view! {
        <div
            class=join_class("reveal-child", class)
            data-reveal-child=variant_json
            data-reveal-state=Phase::Hidden.as_str()
            style=variant.style(Phase::Hidden)
        >
            {children()}
        </div>
    }
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}
