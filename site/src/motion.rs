//! Animation variants and their CSS rendering.
//!
//! A [`Variant`] pairs a `hidden` and a `visible` [`VisualState`] with the
//! [`Transition`] used when moving into the visible state. Variants are
//! plain data: the server renders the hidden state as an inline style and
//! embeds the variant as JSON, the client swaps in the visible style when
//! the element scrolls into view.
//!
//! # Example
//!
//! ```rust
//! use nit_site::motion::{FADE_IN_UP, Phase};
//!
//! let css = FADE_IN_UP.style(Phase::Hidden);
//! assert!(css.starts_with("opacity:0;"));
//! assert!(css.contains("translate3d(0px,30px,0px)"));
//! ```

use serde::{Deserialize, Serialize};

/// Which of the two states of a variant is being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Initial state, before the element has been seen.
    #[default]
    Hidden,
    /// Target state once the element is in view.
    Visible,
}

impl Phase {
    /// Name used in `data-reveal-state` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Visible => "visible",
        }
    }
}

/// Easing curve of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Decelerating curve.
    #[default]
    EaseOut,
    /// Symmetric acceleration and deceleration.
    EaseInOut,
    /// Circular deceleration, fast start with a long soft landing.
    CircOut,
}

impl Ease {
    /// CSS timing function for this curve.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "cubic-bezier(0,0,0.58,1)",
            Ease::EaseInOut => "cubic-bezier(0.42,0,0.58,1)",
            Ease::CircOut => "cubic-bezier(0,0.55,0.45,1)",
        }
    }
}

/// Timing of the move into the visible state. Durations are in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Seconds from start to settled.
    pub duration: f64,
    /// Seconds to wait before starting.
    #[serde(default)]
    pub delay: f64,
    /// Timing curve.
    #[serde(default)]
    pub ease: Ease,
    /// Extra delay added per child when the variant drives a stagger group.
    #[serde(default)]
    pub stagger_children: f64,
}

impl Transition {
    /// A transition with no delay and no stagger.
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
            stagger_children: 0.0,
        }
    }

    fn css(&self, delay: f64) -> String {
        let timing = format!("{}s {} {}s", num(self.duration), self.ease.css(), num(delay));
        format!("opacity {timing},transform {timing}")
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(0.3, Ease::EaseOut)
    }
}

/// Opacity, offset (px) and scale of an element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// `0.0` transparent to `1.0` opaque.
    pub opacity: f64,
    /// Horizontal offset in px.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset in px.
    #[serde(default)]
    pub y: f64,
    /// Uniform scale, `1.0` is natural size.
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl VisualState {
    /// Fully opaque, untransformed.
    pub const SETTLED: VisualState = VisualState::faded(1.0);

    /// Given opacity, untransformed.
    pub const fn faded(opacity: f64) -> Self {
        Self {
            opacity,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    /// Copy shifted by `(x, y)` pixels.
    pub const fn offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Copy scaled by `scale`.
    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    fn transform_css(&self) -> String {
        let moved = self.x != 0.0 || self.y != 0.0;
        let scaled = self.scale != 1.0;
        match (moved, scaled) {
            (false, false) => "none".to_string(),
            (true, false) => format!("translate3d({}px,{}px,0px)", num(self.x), num(self.y)),
            (false, true) => format!("scale({})", num(self.scale)),
            (true, true) => format!(
                "translate3d({}px,{}px,0px) scale({})",
                num(self.x),
                num(self.y),
                num(self.scale)
            ),
        }
    }
}

/// A named pair of visual states plus the transition between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// State before the reveal.
    pub hidden: VisualState,
    /// State after the reveal.
    pub visible: VisualState,
    /// How to get from one to the other.
    pub transition: Transition,
}

impl Variant {
    /// Visual state for `phase`.
    pub fn state(&self, phase: Phase) -> VisualState {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    /// Inline CSS declarations for `phase`.
    ///
    /// The delay only applies on the way in; falling back to hidden starts
    /// immediately.
    pub fn style(&self, phase: Phase) -> String {
        let state = self.state(phase);
        let delay = match phase {
            Phase::Hidden => 0.0,
            Phase::Visible => self.transition.delay,
        };
        format!(
            "opacity:{};transform:{};transition:{}",
            num(state.opacity),
            state.transform_css(),
            self.transition.css(delay)
        )
    }

    /// Same variant with the visible transition starting `delay` seconds later.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.transition.delay = delay;
        self
    }

    /// Same variant with a different visible transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Variant for child `index` of a stagger group driven by `self`.
    ///
    /// The child keeps its own states and timing; its delay grows by the
    /// container's stagger step per position.
    pub fn stagger_child(&self, child: Variant, index: usize) -> Variant {
        let offset = self.transition.delay + self.transition.stagger_children * index as f64;
        child.with_delay(child.transition.delay + offset)
    }
}

const CIRC_OUT_08: Transition = Transition::new(0.8, Ease::CircOut);

/// Rise 30px while fading in.
pub const FADE_IN_UP: Variant = Variant {
    hidden: VisualState::faded(0.0).offset(0.0, 30.0),
    visible: VisualState::SETTLED,
    transition: CIRC_OUT_08,
};

/// Slide in from the left while fading in.
pub const FADE_IN_RIGHT: Variant = Variant {
    hidden: VisualState::faded(0.0).offset(-30.0, 0.0),
    visible: VisualState::SETTLED,
    transition: CIRC_OUT_08,
};

/// Slide in from the right while fading in.
pub const FADE_IN_LEFT: Variant = Variant {
    hidden: VisualState::faded(0.0).offset(30.0, 0.0),
    visible: VisualState::SETTLED,
    transition: CIRC_OUT_08,
};

/// Container that fades in and releases its children 0.2s apart.
pub const STAGGER_CONTAINER: Variant = Variant {
    hidden: VisualState::faded(0.0),
    visible: VisualState::SETTLED,
    transition: Transition {
        duration: 0.3,
        delay: 0.0,
        ease: Ease::EaseOut,
        stagger_children: 0.2,
    },
};

/// The four shared presets by name.
pub const PRESETS: [(&str, Variant); 4] = [
    ("fadeInUp", FADE_IN_UP),
    ("fadeInRight", FADE_IN_RIGHT),
    ("fadeInLeft", FADE_IN_LEFT),
    ("staggerContainer", STAGGER_CONTAINER),
];

/// Look up a preset by its name.
pub fn preset(name: &str) -> Option<Variant> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, variant)| *variant)
}

/// Format a number for CSS: at most three decimals, no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
