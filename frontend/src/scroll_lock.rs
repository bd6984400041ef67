use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Element whose inline style the lock touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// `<html>`
    Root,
    /// `<body>`
    Body,
}

/// The bits of the page a scroll lock needs to read and write.
pub trait ScrollHost {
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn root_client_width(&self) -> f64;
    /// Current inline value, empty string when unset.
    fn style(&self, target: StyleTarget, prop: &str) -> String;
    /// Setting an empty value clears the inline property.
    fn set_style(&mut self, target: StyleTarget, prop: &str, value: &str);
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);
}

const LOCKED_STYLES: [(StyleTarget, &str, &str); 8] = [
    (StyleTarget::Root, "overflow", "hidden"),
    (StyleTarget::Body, "overflow", "hidden"),
    (StyleTarget::Body, "position", "fixed"),
    (StyleTarget::Body, "left", "0"),
    (StyleTarget::Body, "right", "0"),
    (StyleTarget::Body, "width", "100%"),
    (StyleTarget::Body, "touch-action", "none"),
    (StyleTarget::Body, "overscroll-behavior", "none"),
];

struct Snapshot {
    scroll_y: f64,
    saved: Vec<(StyleTarget, &'static str, String)>,
}

/// Freezes the page under an overlay.
///
/// `acquire` pins the body at the current offset and pads out the vanished
/// scrollbar; `release` puts every touched property back and returns to the
/// captured offset. Dropping a held lock releases it.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    held: Option<Snapshot>,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self { host, held: None }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.held.is_some()
    }

    #[cfg(test)]
    pub fn captured_offset(&self) -> Option<f64> {
        self.held.as_ref().map(|snapshot| snapshot.scroll_y)
    }

    /// Returns false if the lock was already held; nothing is re-captured.
    pub fn acquire(&mut self) -> bool {
        if self.held.is_some() {
            return false;
        }

        let scroll_y = self.host.scroll_y();
        let scrollbar_width = (self.host.viewport_width() - self.host.root_client_width()).max(0.0);

        let mut locked: Vec<(StyleTarget, &'static str, String)> = LOCKED_STYLES
            .iter()
            .map(|(target, prop, value)| (*target, *prop, value.to_string()))
            .collect();
        locked.push((StyleTarget::Body, "top", format!("-{}px", scroll_y)));
        if scrollbar_width > 0.0 {
            locked.push((StyleTarget::Body, "padding-right", format!("{}px", scrollbar_width)));
        }

        let saved = locked
            .iter()
            .map(|(target, prop, _)| (*target, *prop, self.host.style(*target, prop)))
            .collect();

        for (target, prop, value) in &locked {
            self.host.set_style(*target, prop, value);
        }

        debug!("scroll lock acquired at {}px (scrollbar {}px)", scroll_y, scrollbar_width);
        self.held = Some(Snapshot { scroll_y, saved });
        true
    }

    /// Returns false if there was nothing to release.
    pub fn release(&mut self) -> bool {
        let snapshot = match self.held.take() {
            Some(snapshot) => snapshot,
            None => return false,
        };

        for (target, prop, value) in snapshot.saved.iter().rev() {
            self.host.set_style(*target, prop, value);
        }
        // Styles first: scrolling while the body is still fixed is a no-op.
        // Instant, since the stylesheet asks for smooth scrolling and an
        // animated restore would glide in from the top and could be
        // captured half-way by a quick reopen.
        self.host.scroll_to(snapshot.scroll_y, ScrollBehavior::Instant);

        debug!("scroll lock released, back to {}px", snapshot.scroll_y);
        true
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// `ScrollHost` over the live `window`/`document`.
pub struct DomScrollHost;

impl DomScrollHost {
    fn element(target: StyleTarget) -> Option<HtmlElement> {
        let document = window()?.document()?;
        match target {
            StyleTarget::Root => document.document_element()?.dyn_into::<HtmlElement>().ok(),
            StyleTarget::Body => document.body(),
        }
    }
}

impl ScrollHost for DomScrollHost {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn root_client_width(&self) -> f64 {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.client_width() as f64)
            .unwrap_or(0.0)
    }

    fn style(&self, target: StyleTarget, prop: &str) -> String {
        Self::element(target)
            .and_then(|el| el.style().get_property_value(prop).ok())
            .unwrap_or_default()
    }

    fn set_style(&mut self, target: StyleTarget, prop: &str, value: &str) {
        let Some(el) = Self::element(target) else {
            debug!("no {:?} element, skipping {}", target, prop);
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(prop).map(|_| ())
        } else {
            style.set_property(prop, value)
        };
        if let Err(e) = result {
            debug!("could not set {} on {:?}: {:?}", prop, target, e);
        }
    }

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_left(0.0);
            options.set_top(y);
            options.set_behavior(behavior);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// One effect run for `locked`; the returned destructor is what yew calls
/// when `locked` changes or the component unmounts.
fn lock_effect<H: ScrollHost + 'static>(lock: Rc<RefCell<ScrollLock<H>>>, locked: bool) -> impl FnOnce() + 'static {
    if locked {
        lock.borrow_mut().acquire();
    }
    move || {
        lock.borrow_mut().release();
    }
}

/// Keeps the page frozen for as long as `locked` is true.
///
/// The effect destructor runs both when `locked` flips and when the
/// component unmounts, so the body styles are always put back.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    let lock = use_mut_ref(|| ScrollLock::new(DomScrollHost));

    use_effect_with_deps(move |locked| lock_effect(lock, *locked), locked);
}
