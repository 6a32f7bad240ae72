//! Page body: hero, biography, services grid, method, contacts, footer.
//! Section ids come from the same constants the navbar slugs its anchors
//! from, so every nav link has exactly one matching section.

use chrono::{Datelike, Utc};
use log::info;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::contact::ContactForm;
use crate::components::hero::Hero;
use crate::components::service_card::ServiceCard;
use crate::content::{
    FIRM_ADDRESS, FIRM_EMAIL, FIRM_NAME, FIRM_PHONE, FIRM_VAT, PORTRAIT_URL, SECTION_AREE,
    SECTION_CHI_SONO, SECTION_CONTATTI, SECTION_METODO, SERVICE_ENTRIES,
};
use crate::reveal::use_reveal_once;

#[function_component(Home)]
pub fn home() -> Html {
    let portrait = use_node_ref();
    let portrait_visible = use_reveal_once(portrait.clone());
    let vision = use_node_ref();
    let vision_visible = use_reveal_once(vision.clone());

    // Land at the top on initial mount
    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        info!("Rendering home page");
        || ()
    });

    let year = Utc::now().year();

    html! {
        <main class="home">
            <Hero />

            // CHI SONO
            <section id={SECTION_CHI_SONO} class="bio-section">
                <div class="bio-layout">
                    <div
                        ref={portrait}
                        class={classes!("bio-portrait", portrait_visible.then(|| "revealed"))}
                    >
                        <div class="bio-portrait-frame" aria-hidden="true"></div>
                        <div class="bio-portrait-photo">
                            <img src={PORTRAIT_URL} alt="Avvocato" />
                            <div class="bio-portrait-overlay">
                                <p>{ "Tullio Gesuè Rizzi Ulmo" }</p>
                            </div>
                        </div>
                    </div>

                    <div
                        ref={vision}
                        class={classes!("bio-text", vision_visible.then(|| "revealed"))}
                    >
                        <h2 class="section-kicker">{ "La Visione" }</h2>
                        <h3 class="bio-heading">
                            { "Il diritto come " }
                            <br />
                            <span class="bio-heading-accent">{ "architettura" }</span>
                            { " sociale." }
                        </h3>
                        <div class="bio-copy">
                            <p>
                                { "In un mondo dove la complessità è la norma, la chiarezza è \
                                   l'unica vera forma di potere. Lo Studio Rizzi Ulmo non si \
                                   limita ad applicare la legge; la interpreta per costruire \
                                   strutture difensive e strategiche inattaccabili." }
                            </p>
                            <p>
                                { "Ogni cliente è un partner, ogni caso è un'opera unica. \
                                   Dall'alta finanza alla tutela dei patrimoni familiari, il \
                                   nostro approccio unisce la solennità della tradizione \
                                   giuridica con il dinamismo necessario per operare nei \
                                   mercati moderni." }
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            // AREE DI PRATICA
            <section id={SECTION_AREE} class="services-section">
                <div class="services-grid">
                    <div class="services-intro">
                        <h2>{ "Aree di" }<br />{ "Eccellenza" }</h2>
                        <div class="services-intro-rule" aria-hidden="true"></div>
                        <p>
                            { "Un approccio multidisciplinare per gestire la complessità a \
                               360 gradi. Clicca sulle schede per approfondire." }
                        </p>
                    </div>

                    { for SERVICE_ENTRIES.iter().map(|entry| html! {
                        <ServiceCard
                            icon={entry.icon}
                            title={entry.title}
                            description={entry.description}
                            delay_ms={entry.delay_ms}
                        />
                    }) }

                    <div class="services-bespoke">
                        <h3>{ "Consulenza Dedicata" }</h3>
                        <p>{ "Per esigenze specifiche che richiedono un approccio su misura." }</p>
                        <a href={format!("#{SECTION_CONTATTI}")}>{ "Contattaci" }</a>
                    </div>
                </div>
            </section>

            // METODO
            <section id={SECTION_METODO} class="method-section">
                <h2 class="section-kicker">{ "Il Metodo" }</h2>
                <h3 class="method-heading">{ "Tre fasi, una disciplina." }</h3>
                <div class="method-grid">
                    <div class="method-step">
                        <span class="method-step-index">{ "01" }</span>
                        <h4>{ "Ascolto" }</h4>
                        <p>
                            { "Ogni incarico comincia da un'analisi riservata del contesto: \
                               fatti, documenti, rapporti di forza." }
                        </p>
                    </div>
                    <div class="method-step">
                        <span class="method-step-index">{ "02" }</span>
                        <h4>{ "Strategia" }</h4>
                        <p>
                            { "Definiamo l'architettura difensiva e negoziale prima di ogni \
                               atto: nessuna mossa senza disegno complessivo." }
                        </p>
                    </div>
                    <div class="method-step">
                        <span class="method-step-index">{ "03" }</span>
                        <h4>{ "Esecuzione" }</h4>
                        <p>
                            { "Conduzione diretta in giudizio e al tavolo, con un solo \
                               interlocutore responsabile dall'inizio alla fine." }
                        </p>
                    </div>
                </div>
            </section>

            // CONTATTI
            <section id={SECTION_CONTATTI} class="contact-section">
                <div class="contact-layout">
                    <div class="contact-details">
                        <h2>{ "Il Dialogo." }</h2>
                        <div class="contact-blocks">
                            <div class="contact-block">
                                <span class="contact-block-index">{ "01" }</span>
                                <div>
                                    <h4>{ "Sede Principale" }</h4>
                                    <p>{ FIRM_ADDRESS[0] }<br />{ FIRM_ADDRESS[1] }</p>
                                </div>
                            </div>
                            <div class="contact-block">
                                <span class="contact-block-index">{ "02" }</span>
                                <div>
                                    <h4>{ "Contatti Diretti" }</h4>
                                    <p>{ FIRM_EMAIL }<br />{ FIRM_PHONE }</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{ format!("© {} {} — {}", year, FIRM_NAME, FIRM_VAT) }</p>
            </footer>

            <style>{ HOME_CSS }</style>
        </main>
    }
}

const HOME_CSS: &str = r#"
.home {
    background: var(--paper);
    overflow-x: hidden;
}

.section-kicker {
    font-family: var(--sans);
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--accent);
    margin: 0 0 1.5rem;
}

/* --- chi sono --- */

.bio-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 8rem 1.5rem;
}

.bio-layout {
    display: flex;
    flex-direction: column;
    gap: 5rem;
    align-items: center;
}

.bio-portrait {
    position: relative;
    width: 100%;
    max-width: 420px;
    opacity: 0;
}

.bio-portrait.revealed {
    animation: bio-scale-in 1s ease both;
}

@keyframes bio-scale-in {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: scale(1); }
}

.bio-portrait-frame {
    position: absolute;
    top: -1.5rem;
    left: -1.5rem;
    width: 100%;
    height: 100%;
    border: 1px solid rgba(188, 93, 46, 0.3);
}

.bio-portrait-photo {
    position: relative;
    aspect-ratio: 3 / 4;
    background: #d4d4d4;
    overflow: hidden;
    filter: grayscale(1) contrast(1.25);
}

.bio-portrait-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.bio-portrait-overlay {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    padding: 2rem;
    background: linear-gradient(to top, rgba(10, 35, 30, 0.8), transparent);
}

.bio-portrait-overlay p {
    font-family: var(--serif);
    font-style: italic;
    font-size: 1.25rem;
    color: white;
    margin: 0;
}

.bio-text {
    opacity: 0;
}

.bio-text.revealed {
    animation: bio-slide-in 0.8s ease both;
}

@keyframes bio-slide-in {
    from { opacity: 0; transform: translateX(50px); }
    to { opacity: 1; transform: translateX(0); }
}

.bio-heading {
    font-family: var(--serif);
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    line-height: 1.2;
    color: var(--dark);
    margin: 0 0 2.5rem;
}

.bio-heading-accent {
    font-style: italic;
    color: var(--accent);
}

.bio-copy {
    border-left: 2px solid rgba(188, 93, 46, 0.2);
    padding-left: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.bio-copy p {
    font-family: var(--sans);
    font-weight: 300;
    font-size: 1.1rem;
    line-height: 2;
    color: rgba(44, 44, 44, 0.8);
    margin: 0;
}

/* --- aree di pratica --- */

.services-section {
    background: #EAE8E0;
    border-top: 1px solid rgba(10, 35, 30, 0.05);
}

.services-grid {
    display: grid;
    grid-template-columns: 1fr;
}

.services-intro {
    padding: 3.5rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
}

.services-intro h2 {
    font-family: var(--serif);
    font-size: 2.25rem;
    color: var(--dark);
    margin: 0 0 1rem;
}

.services-intro-rule {
    width: 3rem;
    height: 4px;
    background: var(--accent);
    margin-bottom: 1.5rem;
}

.services-intro p {
    font-family: var(--sans);
    font-size: 0.9rem;
    line-height: 1.7;
    color: rgba(44, 44, 44, 0.6);
    margin: 0;
}

.service-card {
    position: relative;
    background: white;
    border-right: 1px solid rgba(10, 35, 30, 0.1);
    border-bottom: 1px solid rgba(10, 35, 30, 0.1);
    padding: 3.5rem;
    overflow: hidden;
    transition: background 0.5s ease;
    opacity: 0;
}

.service-card.revealed {
    animation: card-reveal 0.8s ease-out both;
}

@keyframes card-reveal {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

.service-card:hover {
    background: var(--dark);
}

.service-card-watermark {
    position: absolute;
    top: 0;
    right: 0;
    padding: 1rem;
    opacity: 0.1;
    transition: opacity 0.3s ease;
    color: var(--text);
}

.service-card:hover .service-card-watermark {
    opacity: 0.05;
    color: var(--paper);
}

.service-card-body {
    position: relative;
    z-index: 10;
}

.service-card-icon {
    color: var(--accent);
    margin-bottom: 2rem;
}

.service-card-title {
    font-family: var(--serif);
    font-size: 1.5rem;
    color: var(--dark);
    margin: 0 0 1.5rem;
    transition: color 0.5s ease;
}

.service-card:hover .service-card-title {
    color: var(--paper);
}

.service-card-desc {
    font-family: var(--sans);
    font-size: 0.95rem;
    line-height: 1.7;
    color: rgba(44, 44, 44, 0.7);
    margin: 0;
    transition: color 0.5s ease;
}

.service-card:hover .service-card-desc {
    color: rgba(242, 240, 233, 0.7);
}

.service-card-more {
    margin-top: 2rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--accent);
    font-family: var(--sans);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    opacity: 0;
    transform: translateY(1rem);
    transition: opacity 0.5s ease, transform 0.5s ease;
}

.service-card:hover .service-card-more {
    opacity: 1;
    transform: translateY(0);
}

.services-bespoke {
    background: var(--dark);
    padding: 3.5rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: flex-start;
    color: var(--paper);
}

.services-bespoke h3 {
    font-family: var(--serif);
    font-size: 1.9rem;
    margin: 0 0 1.5rem;
}

.services-bespoke p {
    font-family: var(--sans);
    font-weight: 300;
    line-height: 1.7;
    opacity: 0.7;
    margin: 0 0 2rem;
}

.services-bespoke a {
    padding: 0.75rem 1.5rem;
    border: 1px solid rgba(242, 240, 233, 0.3);
    color: var(--paper);
    text-decoration: none;
    font-family: var(--sans);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.services-bespoke a:hover {
    background: var(--accent);
    border-color: var(--accent);
}

/* --- metodo --- */

.method-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 8rem 1.5rem;
    text-align: center;
}

.method-heading {
    font-family: var(--serif);
    font-size: clamp(2rem, 4vw, 3rem);
    color: var(--dark);
    margin: 0 0 4rem;
}

.method-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    text-align: left;
}

.method-step {
    border-top: 2px solid rgba(188, 93, 46, 0.2);
    padding-top: 2rem;
}

.method-step-index {
    font-family: var(--sans);
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.2em;
    color: var(--accent);
}

.method-step h4 {
    font-family: var(--serif);
    font-size: 1.4rem;
    color: var(--dark);
    margin: 1rem 0;
}

.method-step p {
    font-family: var(--sans);
    font-size: 0.95rem;
    line-height: 1.8;
    color: rgba(44, 44, 44, 0.7);
    margin: 0;
}

/* --- contatti --- */

.contact-section {
    background: var(--dark);
    color: var(--paper);
    padding: 8rem 0;
    position: relative;
    overflow: hidden;
}

.contact-layout {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 5rem;
}

.contact-details h2 {
    font-family: var(--serif);
    font-size: clamp(3rem, 7vw, 4.5rem);
    margin: 0 0 3rem;
}

.contact-blocks {
    display: flex;
    flex-direction: column;
    gap: 2.5rem;
}

.contact-block {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
}

.contact-block-index {
    font-family: var(--sans);
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.2em;
    color: var(--accent);
    margin-top: 0.25rem;
}

.contact-block h4 {
    font-family: var(--serif);
    font-size: 1.25rem;
    margin: 0 0 0.5rem;
}

.contact-block p {
    font-family: var(--sans);
    font-weight: 300;
    opacity: 0.6;
    line-height: 1.7;
    margin: 0;
}

/* --- footer --- */

.footer {
    background: #05120F;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    padding: 3rem 1.5rem;
    text-align: center;
}

.footer p {
    font-family: var(--sans);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: rgba(255, 255, 255, 0.2);
    margin: 0;
}

/* --- wide viewports --- */

@media (min-width: 768px) {
    .services-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .bio-layout {
        flex-direction: row;
        align-items: center;
    }

    .bio-portrait {
        width: 41%;
    }

    .bio-text {
        width: 59%;
    }

    .services-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .method-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .contact-layout {
        grid-template-columns: 1fr 1fr;
    }
}
"#;
