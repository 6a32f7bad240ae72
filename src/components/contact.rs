//! Uncontrolled contact form. No handler, validation or network call: the
//! fields only do native browser editing, and submission stays an external
//! collaborator this site does not define.

use yew::prelude::*;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    html! {
        <div class="contact-panel">
            <form class="contact-form">
                <div class="contact-form-row">
                    <div class="contact-field">
                        <label for="nome">{ "Nome" }</label>
                        <input id="nome" name="nome" type="text" />
                    </div>
                    <div class="contact-field">
                        <label for="cognome">{ "Cognome" }</label>
                        <input id="cognome" name="cognome" type="text" />
                    </div>
                </div>

                <div class="contact-field">
                    <label for="email">{ "Email" }</label>
                    <input id="email" name="email" type="email" />
                </div>

                <div class="contact-field">
                    <label for="oggetto">{ "Oggetto" }</label>
                    <textarea id="oggetto" name="oggetto" rows="3"></textarea>
                </div>

                <button type="submit" class="contact-submit">{ "Invia Messaggio" }</button>
            </form>

            <style>{ CONTACT_CSS }</style>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
.contact-panel {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(4px);
    -webkit-backdrop-filter: blur(4px);
    border: 1px solid rgba(255, 255, 255, 0.05);
    padding: 3rem 2rem;
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.contact-form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.contact-field {
    display: flex;
    flex-direction: column;
}

.contact-field label {
    font-family: var(--sans);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--accent);
    margin-bottom: 0.75rem;
}

.contact-field input,
.contact-field textarea {
    background: transparent;
    border: none;
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
    padding: 0.5rem 0;
    color: var(--paper);
    font-family: var(--sans);
    font-size: 1rem;
    outline: none;
    resize: none;
    transition: border-color 0.3s ease;
}

.contact-field input:focus,
.contact-field textarea:focus {
    border-color: var(--accent);
}

.contact-submit {
    width: 100%;
    background: var(--accent);
    color: white;
    border: none;
    padding: 1rem;
    font-family: var(--sans);
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    cursor: pointer;
    transition: background 0.3s ease, color 0.3s ease;
}

.contact-submit:hover {
    background: white;
    color: var(--dark);
}

@media (max-width: 768px) {
    .contact-form-row {
        grid-template-columns: 1fr;
    }
}
"#;
