//! Fixed header. The visual preset flips on the shared scroll state; on
//! narrow viewports a burger toggle drives the overlay menu.

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{anchor_href, BRAND, NAV_ITEMS};
use crate::scroll::{is_scrolled, use_scroll};

/// Overlay exit transition length. The `Closing` state lives exactly this
/// long before the overlay unmounts.
pub const MENU_EXIT_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuState {
    Closed,
    Open,
    Closing,
}

impl MenuState {
    /// Burger tap: anything not fully open opens, open starts the exit.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closing,
            MenuState::Closed | MenuState::Closing => MenuState::Open,
        }
    }

    /// Item selection: close if open, otherwise leave the state alone.
    pub fn dismissed(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closing,
            other => other,
        }
    }

    /// Exit transition finished.
    pub fn settled(self) -> Self {
        match self {
            MenuState::Closing => MenuState::Closed,
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The overlay stays mounted through `Closing` so the exit can play.
    pub fn overlay_mounted(self) -> bool {
        self != MenuState::Closed
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(|| MenuState::Closed);
    let scroll = use_scroll();
    let scrolled = is_scrolled(scroll.offset);

    // Unmount the overlay once the exit transition has played. Dropping the
    // timeout cancels it if the state changes again or the navbar unmounts.
    {
        let menu = menu.clone();
        use_effect_with_deps(
            {
                let menu = menu.clone();
                move |state: &MenuState| {
                    let timeout = (*state == MenuState::Closing).then(|| {
                        let next = state.settled();
                        Timeout::new(MENU_EXIT_MS, move || menu.set(next))
                    });
                    move || drop(timeout)
                }
            },
            *menu,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    // No prevent_default here: the browser still has to follow the anchor.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).dismissed());
        })
    };

    let overlay = if (*menu).overlay_mounted() {
        let closing = *menu == MenuState::Closing;
        html! {
            <div class={classes!("menu-overlay", closing.then(|| "closing"))}>
                { for NAV_ITEMS.iter().map(|item| {
                    html! {
                        <a
                            href={anchor_href(item.label)}
                            class="menu-overlay-link"
                            onclick={close_menu.clone()}
                        >
                            { item.label }
                        </a>
                    }
                }) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <nav class={classes!("navbar", scrolled.then(|| "scrolled"))}>
            <div class="navbar-inner">
                <div class="navbar-brand">{ BRAND }</div>

                <div class="navbar-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={anchor_href(item.label)} class="navbar-link">
                            { item.label }
                            <span class="navbar-link-underline" aria-hidden="true"></span>
                        </a>
                    }) }
                </div>

                <button
                    class={classes!("burger", (*menu).is_open().then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            { overlay }

            <style>{ NAVBAR_CSS }</style>
        </nav>
    }
}

const NAVBAR_CSS: &str = r#"
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    padding: 2rem 0;
    background: transparent;
    transition: background 0.5s ease, padding 0.5s ease, box-shadow 0.5s ease;
}

.navbar.scrolled {
    background: rgba(10, 35, 30, 0.95);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    padding: 1rem 0;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
}

.navbar-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.navbar-brand {
    font-family: var(--serif);
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: 0.08em;
    color: var(--paper);
    cursor: default;
}

.navbar-links {
    display: flex;
    gap: 2rem;
    font-family: var(--sans);
    font-size: 0.7rem;
    font-weight: 500;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.navbar-link {
    position: relative;
    color: rgba(242, 240, 233, 0.8);
    text-decoration: none;
    transition: color 0.3s ease;
    padding-bottom: 0.5rem;
}

.navbar-link:hover {
    color: var(--accent);
}

.navbar-link-underline {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 0;
    height: 2px;
    background: var(--accent);
    transition: width 0.3s ease;
}

.navbar-link:hover .navbar-link-underline {
    width: 100%;
}

.burger {
    display: none;
    flex-direction: column;
    justify-content: center;
    gap: 5px;
    width: 30px;
    height: 30px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0;
}

.burger span {
    display: block;
    width: 100%;
    height: 2px;
    background: var(--paper);
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.burger:hover span {
    background: var(--accent);
}

.burger.open span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.burger.open span:nth-child(2) {
    opacity: 0;
}

.burger.open span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

.menu-overlay {
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    padding: 2rem;
    background: var(--dark);
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    overflow: hidden;
    animation: menu-enter 0.3s ease forwards;
}

.menu-overlay.closing {
    animation: menu-exit 0.3s ease forwards;
}

@keyframes menu-enter {
    from { opacity: 0; transform: translateY(-0.5rem); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes menu-exit {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-0.5rem); }
}

.menu-overlay-link {
    font-family: var(--serif);
    font-size: 1.5rem;
    color: var(--paper);
    text-decoration: none;
    transition: color 0.3s ease;
}

.menu-overlay-link:hover {
    color: var(--accent);
}

@media (max-width: 768px) {
    .navbar-links {
        display: none;
    }

    .burger {
        display: flex;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_from_closed() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert!(MenuState::Closed.toggled().is_open());
    }

    #[test]
    fn toggle_from_open_starts_the_exit() {
        let state = MenuState::Open.toggled();
        assert_eq!(state, MenuState::Closing);
        assert!(!state.is_open());
        assert!(state.overlay_mounted());
    }

    #[test]
    fn selecting_an_item_closes_an_open_menu() {
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closing);
        assert_eq!(MenuState::Closing.dismissed(), MenuState::Closing);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }

    #[test]
    fn exit_settles_to_closed() {
        assert_eq!(MenuState::Closing.settled(), MenuState::Closed);
        assert_eq!(MenuState::Open.settled(), MenuState::Open);
        assert!(!MenuState::Closing.settled().overlay_mounted());
    }

    #[test]
    fn reopening_mid_exit_works() {
        assert_eq!(MenuState::Closing.toggled(), MenuState::Open);
    }
}
