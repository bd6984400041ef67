use web_sys::{window, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn is_scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

fn window_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Reads the offset now and compares it; used both at mount and on scroll.
fn scrolled_now(read_offset: impl Fn() -> f64, threshold: f64) -> bool {
    is_scrolled_past(read_offset(), threshold)
}

/// True while the window is scrolled further than `threshold`.
///
/// The initial value is read on mount so a reload halfway down the page
/// starts in the scrolled state without waiting for a scroll event.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| scrolled_now(window_offset, threshold));

    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            scrolled.set(scrolled_now(window_offset, threshold));
        });
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_THRESHOLD;
    use std::cell::Cell;

    #[test]
    fn flag_flips_strictly_above_threshold() {
        assert!(!is_scrolled_past(0.0, SCROLL_THRESHOLD));
        assert!(!is_scrolled_past(50.0, SCROLL_THRESHOLD));
        assert!(is_scrolled_past(50.5, SCROLL_THRESHOLD));
        assert!(is_scrolled_past(1200.0, SCROLL_THRESHOLD));
    }

    #[test]
    fn mount_reads_the_current_offset_without_a_scroll_event() {
        // A reload restored halfway down the page.
        let reads = Cell::new(0);
        let restored = || {
            reads.set(reads.get() + 1);
            640.0
        };
        assert!(scrolled_now(restored, SCROLL_THRESHOLD));
        assert_eq!(reads.get(), 1);

        assert!(!scrolled_now(|| 0.0, SCROLL_THRESHOLD));
    }

    #[test]
    fn flag_follows_the_last_offset_only() {
        let offset = Cell::new(0.0);
        let mut flags = Vec::new();
        for next in [0.0, 80.0, 30.0, 51.0, 50.0] {
            offset.set(next);
            flags.push(scrolled_now(|| offset.get(), SCROLL_THRESHOLD));
        }
        assert_eq!(flags, vec![false, true, false, true, false]);
    }
}
