//! Shared scroll store. One window scroll listener lives in
//! [`ScrollProvider`]; every interested component reads the sampled state
//! through context instead of registering its own listener.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Offset past which the navbar switches to its compact preset. Strictly
/// greater-than: an offset of exactly 50 is still "at the top".
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct ScrollState {
    /// Vertical scroll offset in CSS pixels.
    pub offset: f64,
    /// Fraction of the total scrollable height already scrolled, in [0, 1].
    pub progress: f64,
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// `max` is the scrollable height (document height minus viewport). A page
/// that cannot scroll reports 0 progress.
pub fn scroll_progress(offset: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (offset / max).clamp(0.0, 1.0)
    }
}

fn sample(win: &web_sys::Window) -> ScrollState {
    let offset = win.scroll_y().unwrap_or(0.0);
    let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let total = win
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollState {
        offset,
        progress: scroll_progress(offset, total - viewport),
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let state = state.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                state.set(sample(&win));
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial sample so consumers do not wait for the first event
                    state.set(sample(&window));
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollState> context={*state}>
            { for props.children.iter() }
        </ContextProvider<ScrollState>>
    }
}

#[hook]
pub fn use_scroll() -> ScrollState {
    use_context::<ScrollState>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_is_a_strict_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn progress_hits_both_endpoints_exactly() {
        assert_eq!(scroll_progress(0.0, 2000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 2000.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let max = 1234.0;
        let mut last = 0.0;
        let mut offset = 0.0;
        while offset <= max {
            let p = scroll_progress(offset, max);
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
            offset += 7.0;
        }
        // Overscroll (rubber-banding) stays clamped
        assert_eq!(scroll_progress(max + 500.0, max), 1.0);
        assert_eq!(scroll_progress(-10.0, max), 0.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(100.0, -50.0), 0.0);
    }
}
