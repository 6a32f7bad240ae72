//! Staggered reveal-once support: delay tables as data, a latch that
//! guarantees an animation starts at most once per mount, and a hook wiring
//! the latch to an `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// A cascading delay table: item `i` starts at `base_ms + i * step_ms`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stagger {
    pub base_ms: u64,
    pub step_ms: u64,
}

impl Stagger {
    pub const fn delay_ms(&self, index: usize) -> u64 {
        self.base_ms + self.step_ms * index as u64
    }
}

/// Hero name groups: 200ms, 350ms, 500ms, 650ms.
pub const NAME_STAGGER: Stagger = Stagger { base_ms: 200, step_ms: 150 };
/// Service tiles: 100ms, 200ms, 300ms, 400ms.
pub const SERVICE_STAGGER: Stagger = Stagger { base_ms: 100, step_ms: 100 };

/// Margin pulled in from the viewport edge before a reveal counts as visible.
const REVEAL_ROOT_MARGIN: &str = "-50px";

/// Once-per-mount latch. `observe` reports whether the reveal should start
/// now; after the first `true` it never fires again, no matter how often the
/// element re-enters the viewport.
#[derive(Default, Debug)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

/// True once `node` has entered the viewport; stays true for the life of the
/// mounted component. The observer disconnects after the first hit.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut latch = RevealLatch::new();
                let callback =
                    Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if latch.observe(entry.is_intersecting()) {
                                    revealed.set(true);
                                    observer.disconnect();
                                }
                            }
                        },
                    );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(REVEAL_ROOT_MARGIN);
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        // Scrolled out and back in: no second start
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn latch_ignores_non_intersecting_entries() {
        let mut latch = RevealLatch::new();
        for _ in 0..5 {
            assert!(!latch.observe(false));
        }
        assert!(latch.observe(true));
    }

    #[test]
    fn stagger_tables_cascade() {
        assert_eq!(NAME_STAGGER.delay_ms(0), 200);
        assert_eq!(NAME_STAGGER.delay_ms(1), 350);
        assert_eq!(NAME_STAGGER.delay_ms(3), 650);
        assert_eq!(SERVICE_STAGGER.delay_ms(0), 100);
        assert_eq!(SERVICE_STAGGER.delay_ms(3), 400);
    }
}
