//! Scroll reveal: a one-way hidden → visible switch per block.
//!
//! [`Reveal`] is the state machine, independent of any DOM. The server
//! renders every block in [`Phase::Hidden`]; the browser client feeds
//! [`ViewportSample`]s from an `IntersectionObserver` into one `Reveal` per
//! block and applies the returned phase changes.
//!
//! ```rust
//! use nit_site::reveal::{Reveal, Viewport, ViewportSample};
//! use nit_site::motion::Phase;
//!
//! let mut reveal = Reveal::new(Viewport::default());
//! assert_eq!(reveal.observe(ViewportSample::entering(0.5)), Some(Phase::Visible));
//! assert_eq!(reveal.observe(ViewportSample::leaving()), None);
//! assert_eq!(reveal.observe(ViewportSample::entering(1.0)), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::motion::{Phase, Variant};

pub use crate::motion::Phase as RevealPhase;

/// Attribute carrying the JSON [`RevealSpec`] of a block.
pub const REVEAL_ATTR: &str = "data-reveal";
/// Attribute carrying the current [`Phase`] name of a block.
pub const STATE_ATTR: &str = "data-reveal-state";
/// Attribute carrying the JSON [`Variant`] of a stagger child.
pub const CHILD_ATTR: &str = "data-reveal-child";

/// Viewport observation options of a block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Fraction of the block that must be visible to count as in view.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"-100px"`.
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
    /// Reveal once and stop observing, or follow the block in and out.
    #[serde(default = "default_once")]
    pub once: bool,
}

fn default_root_margin() -> String {
    "0px".to_string()
}

fn default_once() -> bool {
    true
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: default_root_margin(),
            once: true,
        }
    }
}

impl Viewport {
    /// Default viewport with a different root margin.
    pub fn with_margin(margin: impl Into<String>) -> Self {
        Self {
            root_margin: margin.into(),
            ..Self::default()
        }
    }

    /// Viewport that follows the block in and out of view.
    pub fn repeating() -> Self {
        Self {
            threshold: 0.0,
            once: false,
            ..Self::default()
        }
    }

    /// Key grouping blocks that can share one observer.
    pub fn observer_key(&self) -> String {
        format!("{}|{}", self.threshold, self.root_margin)
    }
}

/// One intersection reading for a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSample {
    /// Whether any part of the block intersects the (margin adjusted) viewport.
    pub intersecting: bool,
    /// Visible fraction of the block, `0.0..=1.0`.
    pub ratio: f64,
}

impl ViewportSample {
    /// Block is intersecting with `ratio` of its area visible.
    pub fn entering(ratio: f64) -> Self {
        Self {
            intersecting: true,
            ratio,
        }
    }

    /// Block is out of view.
    pub fn leaving() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Reveal state of one block.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    viewport: Viewport,
    phase: Phase,
}

impl Reveal {
    /// A block that has not been seen yet.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            phase: Phase::Hidden,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether later samples can still change the phase.
    pub fn is_settled(&self) -> bool {
        self.viewport.once && self.phase == Phase::Visible
    }

    /// Feed a sample; returns the new phase when it changed.
    pub fn observe(&mut self, sample: ViewportSample) -> Option<Phase> {
        if self.is_settled() {
            return None;
        }
        let in_view = sample.intersecting && sample.ratio >= self.viewport.threshold;
        let next = if in_view {
            Phase::Visible
        } else if self.viewport.once {
            self.phase
        } else {
            Phase::Hidden
        };
        if next == self.phase {
            return None;
        }
        self.phase = next;
        Some(next)
    }
}

/// Everything the client needs to drive one block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Animation between the hidden and visible phase.
    pub variant: Variant,
    /// When the block counts as in view.
    #[serde(default)]
    pub viewport: Viewport,
}

impl RevealSpec {
    /// Spec for `variant` observed with `viewport`.
    pub fn new(variant: Variant, viewport: Viewport) -> Self {
        Self { variant, viewport }
    }

    /// JSON for the [`REVEAL_ATTR`] attribute.
    pub fn to_attr(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse the [`REVEAL_ATTR`] attribute.
    pub fn from_attr(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Fresh state machine for this block.
    pub fn tracker(&self) -> Reveal {
        Reveal::new(self.viewport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{FADE_IN_LEFT, FADE_IN_UP};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden() {
        let reveal = Reveal::new(Viewport::default());
        assert_eq!(reveal.phase(), Phase::Hidden);
        assert!(!reveal.is_settled());
    }

    #[test]
    fn first_entry_reveals_exactly_once() {
        let mut reveal = Reveal::new(Viewport::default());
        let transitions: Vec<Phase> = [
            ViewportSample::entering(0.3),
            ViewportSample::leaving(),
            ViewportSample::entering(0.9),
            ViewportSample::leaving(),
        ]
        .into_iter()
        .filter_map(|sample| reveal.observe(sample))
        .collect();

        assert_eq!(transitions, vec![Phase::Visible]);
        assert_eq!(reveal.phase(), Phase::Visible);
        assert!(reveal.is_settled());
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut reveal = Reveal::new(Viewport::default());
        assert_eq!(reveal.observe(ViewportSample::entering(0.05)), None);
        assert_eq!(reveal.observe(ViewportSample::leaving()), None);
        assert_eq!(reveal.phase(), Phase::Hidden);
        assert_eq!(reveal.observe(ViewportSample::entering(0.1)), Some(Phase::Visible));
    }

    #[test]
    fn ratio_without_intersection_is_ignored() {
        let mut reveal = Reveal::new(Viewport::default());
        let stale = ViewportSample {
            intersecting: false,
            ratio: 0.5,
        };
        assert_eq!(reveal.observe(stale), None);
    }

    #[test]
    fn repeating_viewport_follows_the_block() {
        let mut reveal = Reveal::new(Viewport::repeating());
        assert_eq!(reveal.observe(ViewportSample::entering(0.01)), Some(Phase::Visible));
        assert_eq!(reveal.observe(ViewportSample::entering(0.5)), None);
        assert_eq!(reveal.observe(ViewportSample::leaving()), Some(Phase::Hidden));
        assert_eq!(reveal.observe(ViewportSample::entering(0.2)), Some(Phase::Visible));
        assert!(!reveal.is_settled());
    }

    #[test]
    fn spec_survives_attribute_encoding() {
        let spec = RevealSpec::new(FADE_IN_LEFT.with_delay(0.4), Viewport::with_margin("-100px"));
        let parsed = RevealSpec::from_attr(&spec.to_attr()).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn viewport_defaults_apply_when_missing() {
        let json = serde_json::json!({ "variant": FADE_IN_UP }).to_string();
        let spec = RevealSpec::from_attr(&json).unwrap();
        assert_eq!(spec.viewport, Viewport::default());
        assert_eq!(spec.viewport.threshold, 0.1);
    }

    #[test]
    fn observer_keys_group_by_threshold_and_margin() {
        assert_eq!(
            Viewport::default().observer_key(),
            Viewport {
                once: false,
                ..Viewport::default()
            }
            .observer_key()
        );
        assert_ne!(
            Viewport::default().observer_key(),
            Viewport::with_margin("-100px").observer_key()
        );
    }
}
