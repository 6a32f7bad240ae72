use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod reveal;
mod scroll;

mod components {
    pub mod contact;
    pub mod hero;
    pub mod icons;
    pub mod navbar;
    pub mod service_card;
}

mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use pages::home::Home;
use scroll::{use_scroll, ScrollProvider};

/// Global token declarations plus the page-wide base rules.
#[function_component(GlobalStyle)]
fn global_style() -> Html {
    let css = format!("{}\n{}", config::css_variables(), BASE_CSS);
    html! { <style>{ css }</style> }
}

const BASE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--paper);
    color: var(--text);
    font-family: var(--sans);
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--accent);
    color: white;
}

.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    background: var(--accent);
    transform-origin: left;
    z-index: 60;
}
"#;

/// Decorative top bar sized by the page scroll fraction.
#[function_component(ProgressBar)]
fn progress_bar() -> Html {
    let scroll = use_scroll();
    html! {
        <div
            class="scroll-progress"
            style={format!("transform: scaleX({:.4});", scroll.progress)}
        ></div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ScrollProvider>
            <GlobalStyle />
            <ProgressBar />
            <Navbar />
            <Home />
        </ScrollProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
