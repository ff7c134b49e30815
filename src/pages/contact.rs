use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::components::button::{BrandButton, Variant};

/// How long the contact form shows its sending state. Nothing is transmitted.
const SENDING_MS: u32 = 1_200;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form_ref = use_node_ref();
    let sending = use_state(|| false);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if !form.check_validity() {
                form.report_validity();
                return;
            }
            info!("Contact request accepted locally");
            sending.set(true);
            let sending = sending.clone();
            Timeout::new(SENDING_MS, move || sending.set(false)).forget();
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#".contact-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: grid;
                    align-items: start;
                    gap: 2.5rem;
                }
                .contact-kicker {
                    margin-bottom: 0.75rem;
                    font-size: 1.125rem;
                    color: rgba(40, 25, 0, 0.6);
                }
                .contact-section h2 {
                    font-family: 'Dela Gothic One', sans-serif;
                    color: #281900;
                    font-size: 1.875rem;
                    letter-spacing: 0.05em;
                    line-height: 1.2;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form .field { background: #F3EFEB; }
                .contact-hint {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: rgba(40, 25, 0, 0.4);
                }
                .contact-form .brand-button { min-width: 220px; }
                .spinner.dark { border-color: #281900; border-top-color: transparent; }
                @media (min-width: 768px) {
                    .contact-section { grid-template-columns: 1fr 1fr; gap: 4rem; padding: 4rem 1rem; }
                    .contact-section h2 { font-size: 2.25rem; }
                }"#}
            </style>
            <div>
                <p class="contact-kicker">{"Contact Us Today"}</p>
                <h2>
                    {"Drop A Request Or"}<br />{"Feedback About Our"}<br />{"Services."}
                </h2>
            </div>

            <form ref={form_ref} class="contact-form" onsubmit={onsubmit} novalidate=true>
                <input type="email" name="email" class="field" required=true placeholder="Email address" />
                <input type="text" name="fullName" class="field" required=true minlength="2" placeholder="Full name" />
                <div>
                    <textarea name="message" class="field" required=true minlength="10" rows="6" placeholder="Message" />
                    <p class="contact-hint">{"* Minimum 10 characters."}</p>
                </div>
                <div>
                    <BrandButton
                        button_type="submit"
                        variant={Variant::Secondary}
                        disabled={*sending}
                        right={
                            if *sending {
                                html! { <span class="spinner dark"></span> }
                            } else {
                                html! { <span>{"➤"}</span> }
                            }
                        }
                    >
                        { if *sending { "Sending..." } else { "Send Message" } }
                    </BrandButton>
                </div>
            </form>
        </section>
    }
}
