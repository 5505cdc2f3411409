//! Browser client for the landing page scroll reveal.
//!
//! The server renders every reveal block hidden, with its variant and
//! viewport options in a `data-reveal` attribute. This module observes the
//! blocks with `IntersectionObserver`, drives one [`Reveal`] per block and
//! writes the resulting phase back as inline styles.
//!
//! One observer is created per distinct viewport (threshold and root
//! margin). Blocks that reveal once are unobserved as soon as they settle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use nit_site::motion::{Phase, Variant};
use nit_site::reveal::{
    CHILD_ATTR, REVEAL_ATTR, Reveal, RevealSpec, STATE_ATTR, Viewport, ViewportSample,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Inline style of a block whose variant could not be read.
const SETTLED_STYLE: &str = "opacity:1;transform:none";

thread_local! {
    static OBSERVERS: RefCell<Vec<IntersectionObserver>> = const { RefCell::new(Vec::new()) };
}

/// Install the panic hook and start observing reveal blocks.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = document()?;
    if let Err(err) = observe_blocks(&document) {
        warn(&format!("scroll reveal unavailable, showing everything: {err:?}"));
        return reveal_all();
    }
    Ok(())
}

/// Force every block and stagger child into its visible state.
#[wasm_bindgen]
pub fn reveal_all() -> Result<(), JsValue> {
    let document = document()?;

    for element in select(&document, &attr_selector(REVEAL_ATTR)) {
        match read_spec(&element) {
            Ok(spec) => apply(&element, &spec.variant, Phase::Visible),
            Err(_) => settle(&element),
        }
    }
    // Children outside any block, or whose block failed to parse
    for child in select(&document, &attr_selector(CHILD_ATTR)) {
        apply_child(&child, Phase::Visible);
    }
    Ok(())
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("nit-site-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Observation
// ============================================================================

struct Block {
    element: Element,
    variant: Variant,
    reveal: Reveal,
}

fn observe_blocks(document: &Document) -> Result<(), JsValue> {
    let mut specs = Vec::new();
    let mut elements = Vec::new();

    for element in select(document, &attr_selector(REVEAL_ATTR)) {
        match read_spec(&element) {
            Ok(spec) => {
                specs.push(spec);
                elements.push(element);
            }
            Err(err) => {
                warn(&format!("unreadable {REVEAL_ATTR} attribute, revealing block: {err}"));
                settle(&element);
            }
        }
    }

    for (viewport, members) in observer_groups(&specs) {
        let blocks: Vec<Block> = members
            .into_iter()
            .map(|idx| Block {
                element: elements[idx].clone(),
                variant: specs[idx].variant,
                reveal: specs[idx].tracker(),
            })
            .collect();
        observe_group(&viewport, blocks)?;
    }

    Ok(())
}

fn observe_group(viewport: &Viewport, blocks: Vec<Block>) -> Result<(), JsValue> {
    let targets: Vec<Element> = blocks.iter().map(|b| b.element.clone()).collect();
    let blocks = Rc::new(RefCell::new(blocks));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut blocks = blocks.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(block) = blocks.iter_mut().find(|b| b.element == target) else {
                    continue;
                };

                let sample = ViewportSample {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if on_sample(block, sample) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(viewport.threshold));
    init.set_root_margin(&viewport.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    OBSERVERS.with(|all| all.borrow_mut().push(observer));
    Ok(())
}

/// Feed one reading to a block and write any phase change.
///
/// Returns `true` once the block will never change again and can be
/// unobserved.
fn on_sample(block: &mut Block, sample: ViewportSample) -> bool {
    if let Some(phase) = block.reveal.observe(sample) {
        apply(&block.element, &block.variant, phase);
    }
    block.reveal.is_settled()
}

/// Blocks sharing a viewport, in document order of the first member.
pub fn observer_groups(specs: &[RevealSpec]) -> Vec<(Viewport, Vec<usize>)> {
    let mut groups: Vec<(Viewport, Vec<usize>)> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for (idx, spec) in specs.iter().enumerate() {
        let key = spec.viewport.observer_key();
        match by_key.get(&key) {
            Some(&group) => groups[group].1.push(idx),
            None => {
                by_key.insert(key, groups.len());
                groups.push((spec.viewport.clone(), vec![idx]));
            }
        }
    }
    groups
}

// ============================================================================
// DOM writes
// ============================================================================

/// Write `phase` of `variant` to a block and its stagger children.
fn apply(element: &Element, variant: &Variant, phase: Phase) {
    let _ = element.set_attribute("style", &variant.style(phase));
    let _ = element.set_attribute(STATE_ATTR, phase.as_str());

    for child in select_within(element, &attr_selector(CHILD_ATTR)) {
        if owning_block(&child).as_ref() == Some(element) {
            apply_child(&child, phase);
        }
    }
}

fn apply_child(child: &Element, phase: Phase) {
    let variant = child
        .get_attribute(CHILD_ATTR)
        .and_then(|raw| parse_child(&raw).ok());
    match variant {
        Some(variant) => {
            let _ = child.set_attribute("style", &variant.style(phase));
            let _ = child.set_attribute(STATE_ATTR, phase.as_str());
        }
        None => settle(child),
    }
}

/// Show an element without animating it.
fn settle(element: &Element) {
    let _ = element.set_attribute("style", SETTLED_STYLE);
    let _ = element.set_attribute(STATE_ATTR, Phase::Visible.as_str());
    for child in select_within(element, &attr_selector(CHILD_ATTR)) {
        let _ = child.set_attribute("style", SETTLED_STYLE);
        let _ = child.set_attribute(STATE_ATTR, Phase::Visible.as_str());
    }
}

fn owning_block(child: &Element) -> Option<Element> {
    child.closest(&attr_selector(REVEAL_ATTR)).ok().flatten()
}

// ============================================================================
// Helpers
// ============================================================================

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn read_spec(element: &Element) -> Result<RevealSpec, String> {
    let raw = element
        .get_attribute(REVEAL_ATTR)
        .ok_or_else(|| format!("missing {REVEAL_ATTR}"))?;
    parse_block(&raw)
}

/// Parse a block's `data-reveal` payload.
pub fn parse_block(raw: &str) -> Result<RevealSpec, String> {
    RevealSpec::from_attr(raw).map_err(|e| format!("Failed to parse reveal spec: {}", e))
}

/// Parse a stagger child's `data-reveal-child` payload.
pub fn parse_child(raw: &str) -> Result<Variant, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse child variant: {}", e))
}

/// CSS selector matching elements that carry `attr`.
pub fn attr_selector(attr: &str) -> String {
    format!("[{attr}]")
}

fn select(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => nodes(&list),
        Err(_) => Vec::new(),
    }
}

fn select_within(element: &Element, selector: &str) -> Vec<Element> {
    match element.query_selector_all(selector) {
        Ok(list) => nodes(&list),
        Err(_) => Vec::new(),
    }
}

fn nodes(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[nit-site] {message}")));
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use nit_site::motion::{FADE_IN_LEFT, FADE_IN_UP, STAGGER_CONTAINER};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn doc() -> Document {
        document().unwrap()
    }

    fn block(spec: &RevealSpec) -> Element {
        let el = doc().create_element("div").unwrap();
        el.set_attribute(REVEAL_ATTR, &spec.to_attr()).unwrap();
        el.set_attribute(STATE_ATTR, Phase::Hidden.as_str()).unwrap();
        el.set_attribute("style", &spec.variant.style(Phase::Hidden)).unwrap();
        el
    }

    fn child(variant: &Variant) -> Element {
        let el = doc().create_element("div").unwrap();
        el.set_attribute(CHILD_ATTR, &serde_json::to_string(variant).unwrap())
            .unwrap();
        el.set_attribute(STATE_ATTR, Phase::Hidden.as_str()).unwrap();
        el.set_attribute("style", &variant.style(Phase::Hidden)).unwrap();
        el
    }

    /// Attach `el` to the live document so selectors see it.
    fn mount(el: &Element) {
        doc().body().unwrap().append_child(el).unwrap();
    }

    fn state(el: &Element) -> Option<String> {
        el.get_attribute(STATE_ATTR)
    }

    fn style(el: &Element) -> Option<String> {
        el.get_attribute("style")
    }

    #[wasm_bindgen_test]
    fn apply_writes_only_owned_children() {
        let outer = block(&RevealSpec::new(STAGGER_CONTAINER, Viewport::default()));
        let owned = STAGGER_CONTAINER.stagger_child(FADE_IN_UP, 1);
        let owned_el = child(&owned);
        outer.append_child(&owned_el).unwrap();

        let inner = block(&RevealSpec::new(STAGGER_CONTAINER, Viewport::default()));
        let nested = STAGGER_CONTAINER.stagger_child(FADE_IN_UP, 0);
        let nested_el = child(&nested);
        inner.append_child(&nested_el).unwrap();
        outer.append_child(&inner).unwrap();
        mount(&outer);

        apply(&outer, &STAGGER_CONTAINER, Phase::Visible);

        assert_eq!(state(&outer).as_deref(), Some("visible"));
        assert_eq!(style(&outer), Some(STAGGER_CONTAINER.style(Phase::Visible)));
        assert_eq!(state(&owned_el).as_deref(), Some("visible"));
        assert_eq!(style(&owned_el), Some(owned.style(Phase::Visible)));

        assert_eq!(state(&inner).as_deref(), Some("hidden"));
        assert_eq!(state(&nested_el).as_deref(), Some("hidden"));
        assert_eq!(style(&nested_el), Some(nested.style(Phase::Hidden)));

        outer.remove();
    }

    #[wasm_bindgen_test]
    fn once_block_settles_after_first_entry() {
        let spec = RevealSpec::new(FADE_IN_LEFT, Viewport::default());
        let element = block(&spec);
        mount(&element);
        let mut tracked = Block {
            element: element.clone(),
            variant: spec.variant,
            reveal: spec.tracker(),
        };

        assert!(!on_sample(&mut tracked, ViewportSample::entering(0.05)));
        assert_eq!(state(&element).as_deref(), Some("hidden"));

        assert!(on_sample(&mut tracked, ViewportSample::entering(0.5)));
        assert_eq!(state(&element).as_deref(), Some("visible"));
        assert_eq!(style(&element), Some(FADE_IN_LEFT.style(Phase::Visible)));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn repeating_block_keeps_observing() {
        let spec = RevealSpec::new(FADE_IN_UP, Viewport::repeating());
        let element = block(&spec);
        mount(&element);
        let mut tracked = Block {
            element: element.clone(),
            variant: spec.variant,
            reveal: spec.tracker(),
        };

        assert!(!on_sample(&mut tracked, ViewportSample::entering(0.3)));
        assert_eq!(state(&element).as_deref(), Some("visible"));
        assert!(!on_sample(&mut tracked, ViewportSample::leaving()));
        assert_eq!(state(&element).as_deref(), Some("hidden"));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn malformed_block_is_shown_immediately() {
        let element = doc().create_element("div").unwrap();
        element.set_attribute(REVEAL_ATTR, "{not json").unwrap();
        element.set_attribute(STATE_ATTR, "hidden").unwrap();
        element.set_attribute("style", "opacity:0").unwrap();
        let inner = child(&FADE_IN_UP);
        element.append_child(&inner).unwrap();
        mount(&element);

        observe_blocks(&doc()).unwrap();

        assert_eq!(state(&element).as_deref(), Some("visible"));
        assert_eq!(style(&element).as_deref(), Some(SETTLED_STYLE));
        assert_eq!(state(&inner).as_deref(), Some("visible"));
        assert_eq!(style(&inner).as_deref(), Some(SETTLED_STYLE));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn reveal_all_shows_blocks_and_children() {
        let spec = RevealSpec::new(STAGGER_CONTAINER, Viewport::with_margin("-100px"));
        let element = block(&spec);
        let variant = STAGGER_CONTAINER.stagger_child(FADE_IN_UP, 2);
        let child_el = child(&variant);
        element.append_child(&child_el).unwrap();

        let broken_child = doc().create_element("div").unwrap();
        broken_child.set_attribute(CHILD_ATTR, "[]").unwrap();
        element.append_child(&broken_child).unwrap();
        mount(&element);

        reveal_all().unwrap();

        assert_eq!(state(&element).as_deref(), Some("visible"));
        assert_eq!(style(&element), Some(STAGGER_CONTAINER.style(Phase::Visible)));
        assert_eq!(state(&child_el).as_deref(), Some("visible"));
        assert_eq!(style(&child_el), Some(variant.style(Phase::Visible)));
        assert_eq!(style(&broken_child).as_deref(), Some(SETTLED_STYLE));

        element.remove();
    }
}
