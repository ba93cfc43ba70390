use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastView};
use crate::{config, relay};

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let sending = sending.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
                toast.set(Some(Toast::error(
                    "Missing information",
                    "Please fill in your name, email and message.",
                )));
                return;
            }
            sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match relay::send_contact_message(&name, &email, &phone, &message).await {
                    Ok(()) => {
                        toast.set(Some(Toast::success(
                            "Message sent!",
                            "Thank you for reaching out. We'll respond shortly.",
                        )));
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        message.set(String::new());
                    }
                    Err(err) => {
                        warn!("contact message failed: {}", err);
                        toast.set(Some(Toast::error(
                            "Something went wrong",
                            "We couldn't send your message. Please try again.",
                        )));
                    }
                }
                sending.set(false);
            });
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <section class="contact" id="contact">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">
                        {"Get In "}<span class="accent">{"Touch"}</span>
                    </h2>
                    <p class="section-lede">
                        {"Ready to transform your space? Let's start a conversation about your design dreams."}
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="info-card">
                            <div class="info-icon">{"📞"}</div>
                            <div>
                                <h3>{"Phone"}</h3>
                                <p>{config::STUDIO_PHONE}</p>
                            </div>
                        </div>
                        <div class="info-card">
                            <div class="info-icon">{"✉️"}</div>
                            <div>
                                <h3>{"Email"}</h3>
                                <p>{config::STUDIO_EMAIL}</p>
                            </div>
                        </div>
                        <div class="info-card">
                            <div class="info-icon">{"📍"}</div>
                            <div>
                                <h3>{"Location"}</h3>
                                <p>{config::STUDIO_ADDRESS}</p>
                            </div>
                        </div>
                        <div class="hours-card">
                            <h3>{"Office Hours"}</h3>
                            <p><span>{"Monday - Friday:"}</span><span class="hours">{"9:00 AM - 6:00 PM"}</span></p>
                            <p><span>{"Saturday:"}</span><span class="hours">{"Closed"}</span></p>
                            <p><span>{"Sunday:"}</span><span class="hours">{"Closed"}</span></p>
                        </div>
                    </div>
                    <form class="contact-form" {onsubmit}>
                        <label for="contact-name">{"Your Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Jane Doe"
                            value={(*name).clone()}
                            oninput={input_setter(&name)}
                        />
                        <label for="contact-email">{"Email Address"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="jane@example.com"
                            value={(*email).clone()}
                            oninput={input_setter(&email)}
                        />
                        <label for="contact-phone">{"Phone Number (Optional)"}</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            placeholder="(555) 123-4567"
                            value={(*phone).clone()}
                            oninput={input_setter(&phone)}
                        />
                        <label for="contact-message">{"Your Message"}</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            placeholder="Tell us about your project..."
                            value={(*message).clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="send-button" disabled={*sending}>
                            if *sending {
                                {"Sending..."}
                            } else {
                                {"Send Message"}
                            }
                        </button>
                    </form>
                </div>
            </div>
            <ToastView toast={(*toast).clone()} on_dismiss={dismiss_toast} />
            <style>
                {r#"
                    .contact {
                        padding: 6rem 0;
                        background: #F5F1E8;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.75rem;
                    }
                    .info-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .info-icon {
                        background: #D4A574;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.2rem;
                        flex-shrink: 0;
                    }
                    .info-card h3 {
                        font-size: 1.2rem;
                        font-weight: 500;
                        color: #4A4238;
                        margin: 0 0 0.25rem 0;
                    }
                    .info-card p {
                        color: #8B7E74;
                        margin: 0;
                    }
                    .hours-card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 10px;
                        box-shadow: 0 6px 14px rgba(74, 66, 56, 0.1);
                        margin-top: 0.5rem;
                    }
                    .hours-card h3 {
                        font-family: var(--font-heading);
                        font-size: 1.4rem;
                        font-weight: 500;
                        color: #4A4238;
                        margin: 0 0 1rem 0;
                    }
                    .hours-card p {
                        display: flex;
                        justify-content: space-between;
                        color: #8B7E74;
                        margin: 0.5rem 0;
                    }
                    .hours-card .hours {
                        font-weight: 500;
                    }
                    .contact-form {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 10px;
                        box-shadow: 0 10px 22px rgba(74, 66, 56, 0.12);
                        display: flex;
                        flex-direction: column;
                    }
                    .contact-form label {
                        color: #4A4238;
                        font-weight: 500;
                        margin-bottom: 0.4rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        border: 1px solid #E8DCC8;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        font-size: 1rem;
                        font-family: inherit;
                        margin-bottom: 1.25rem;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #D4A574;
                    }
                    .send-button {
                        background: #D4A574;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem;
                        font-size: 1.1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .send-button:hover {
                        background: #C9A069;
                    }
                    .send-button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
