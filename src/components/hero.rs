//! Full-viewport hero. The entrance sequence is one-shot CSS animation:
//! the subtitle spreads its letter-spacing, the name groups slide up out of
//! blur on the stagger table, the call-to-action and scroll hint follow.
//! Only the background blob loops.

use yew::prelude::*;

use crate::components::icons;
use crate::content::{NAME_PARTS, SECTION_AREE};
use crate::reveal::NAME_STAGGER;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-blob" aria-hidden="true"></div>

            <div class="hero-content">
                <div class="hero-rule" aria-hidden="true"></div>

                <p class="hero-subtitle">{ "Eccellenza Legale & Strategica" }</p>

                <h1 class="hero-name">
                    { for NAME_PARTS.iter().enumerate().map(|(i, part)| html! {
                        <span
                            class="hero-name-part"
                            style={format!("animation-delay: {}ms;", NAME_STAGGER.delay_ms(i))}
                        >
                            { *part }
                        </span>
                    }) }
                </h1>

                <div class="hero-cta">
                    <a href={format!("#{SECTION_AREE}")} class="hero-cta-link">
                        <span>{ "Esplora lo Studio" }</span>
                        { icons::arrow_right(14) }
                    </a>
                </div>
            </div>

            <div class="hero-scroll-hint" aria-hidden="true"></div>

            <style>{ HERO_CSS }</style>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    position: relative;
    height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    background: var(--dark);
    overflow: hidden;
    padding: 0 1rem;
}

.hero-blob {
    position: absolute;
    top: -20%;
    right: -10%;
    width: 80vw;
    height: 80vw;
    background: #1a4038;
    border-radius: 50%;
    filter: blur(150px);
    animation: hero-pulse 15s ease-in-out infinite;
    pointer-events: none;
}

@keyframes hero-pulse {
    0%, 100% { transform: scale(1); opacity: 0.15; }
    50% { transform: scale(1.1); opacity: 0.25; }
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
}

.hero-rule {
    position: absolute;
    top: -8rem;
    left: 50%;
    transform: translateX(-50%);
    width: 1px;
    height: 5rem;
    background: linear-gradient(to bottom, transparent, rgba(188, 93, 46, 0.5));
}

.hero-subtitle {
    font-family: var(--sans);
    font-size: 0.8rem;
    font-weight: 500;
    text-transform: uppercase;
    color: var(--accent);
    margin: 0 0 2rem;
    animation: hero-spread 1.5s ease-out both;
}

@keyframes hero-spread {
    from { opacity: 0; letter-spacing: 0; }
    to { opacity: 1; letter-spacing: 0.4em; }
}

.hero-name {
    font-family: var(--serif);
    font-weight: 700;
    font-size: clamp(3rem, 10vw, 8rem);
    line-height: 1.1;
    color: var(--paper);
    margin: 0;
}

.hero-name-part {
    display: inline-block;
    margin-right: 0.35em;
    cursor: default;
    transition: color 0.7s ease;
    animation: hero-rise 1s cubic-bezier(0.22, 1, 0.36, 1) both;
}

.hero-name-part:last-child {
    margin-right: 0;
}

.hero-name-part:hover {
    color: var(--accent);
}

@keyframes hero-rise {
    from { opacity: 0; transform: translateY(80px); filter: blur(10px); }
    to { opacity: 1; transform: translateY(0); filter: blur(0); }
}

.hero-cta {
    margin-top: 4rem;
    display: flex;
    justify-content: center;
    animation: hero-fade-up 1s ease both;
    animation-delay: 1.8s;
}

.hero-cta-link {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border: 1px solid rgba(242, 240, 233, 0.2);
    border-radius: 2px;
    color: var(--paper);
    text-decoration: none;
    font-family: var(--sans);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    transition: background 0.5s ease, border-color 0.5s ease;
}

.hero-cta-link:hover {
    background: var(--accent);
    border-color: var(--accent);
}

.hero-cta-link svg {
    transition: transform 0.3s ease;
}

.hero-cta-link:hover svg {
    transform: translateX(0.5rem);
}

@keyframes hero-fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.hero-scroll-hint {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    width: 1px;
    height: 3rem;
    background: linear-gradient(
        to bottom,
        rgba(242, 240, 233, 0),
        rgba(242, 240, 233, 0.5),
        rgba(242, 240, 233, 0)
    );
    animation: hero-fade-in 1s ease both;
    animation-delay: 2.5s;
}

@keyframes hero-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;
