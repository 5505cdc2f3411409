//! Inline SVG line icons.
//!
//! Outline glyphs on a 24px grid, stroked with `currentColor` so they pick
//! up the surrounding text color and hover transitions.

use leptos::prelude::*;

use crate::content::IconKind;

/// Renders an inline stroked SVG icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Search class="icon-lg" /> }
/// ```
#[component]
pub fn Icon(
    /// Which glyph to draw
    kind: IconKind,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {icon_paths(kind)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for a glyph, one entry per stroke.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::ArrowRight => ICON_ARROW_RIGHT,
        IconKind::Search => ICON_SEARCH,
        IconKind::FileText => ICON_FILE_TEXT,
        IconKind::Settings => ICON_SETTINGS,
        IconKind::TrendingUp => ICON_TRENDING_UP,
        IconKind::Mail => ICON_MAIL,
        IconKind::Globe => ICON_GLOBE,
        IconKind::MapPin => ICON_MAP_PIN,
    }
}

const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "M12 5l7 7-7 7"];

const ICON_SEARCH: &[&str] = &[
    "M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0",
    "M21 21l-4.3-4.3",
];

const ICON_FILE_TEXT: &[&str] = &[
    "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
    "M14 2v4a2 2 0 0 0 2 2h4",
    "M10 9H8",
    "M16 13H8",
    "M16 17H8",
];

const ICON_SETTINGS: &[&str] = &[
    "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
    "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
];

const ICON_TRENDING_UP: &[&str] = &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"];

const ICON_MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

const ICON_GLOBE: &[&str] = &[
    "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
    "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
    "M2 12h20",
];

const ICON_MAP_PIN: &[&str] = &[
    "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
    "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
];
