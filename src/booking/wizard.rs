use chrono::Local;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::booking::rules::{self, BookingForm, WizardStep};
use crate::components::toast::{Toast, ToastView};
use crate::relay;

#[derive(Properties, PartialEq)]
pub struct BookingWizardProps {
    pub on_close: Callback<()>,
}

fn field_setter(
    form: &UseStateHandle<BookingForm>,
    apply: fn(&mut BookingForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(BookingWizard)]
pub fn booking_wizard(props: &BookingWizardProps) -> Html {
    let step = use_state(|| WizardStep::Contact);
    let form = use_state(BookingForm::default);
    let submitting = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    let now = Local::now().naive_local();

    let on_name = field_setter(&form, |f, v| f.name = v);
    let on_email = field_setter(&form, |f, v| f.email = v);
    let on_phone = field_setter(&form, |f, v| f.phone = v);

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    // Weekend picks are bounced to the next weekday; changing the date
    // always clears the chosen slot since the slot list changes with it.
    let on_date = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.time.clear();
            match rules::parse_date(&input.value()) {
                Some(picked) if !rules::is_bookable(picked) => {
                    let moved = rules::next_bookable(picked);
                    next.date = moved.format(rules::DATE_FORMAT).to_string();
                    toast.set(Some(Toast::error(
                        "Weekends are closed",
                        "We've moved your call to the next weekday.",
                    )));
                }
                _ => {
                    next.date = input.value();
                }
            }
            form.set(next);
        })
    };

    let on_continue = {
        let step = step.clone();
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| match *step {
            WizardStep::Contact => {
                if form.contact_complete() {
                    step.set(WizardStep::Schedule);
                } else {
                    toast.set(Some(Toast::error(
                        "Missing information",
                        "Please fill in your name, email and phone.",
                    )));
                }
            }
            WizardStep::Schedule => {
                if form.schedule_complete() {
                    step.set(WizardStep::Confirm);
                } else {
                    toast.set(Some(Toast::error(
                        "Missing information",
                        "Please select a date and time.",
                    )));
                }
            }
            _ => {}
        })
    };

    let back_to = |target: WizardStep| {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(target))
    };

    let on_confirm = {
        let step = step.clone();
        let form = form.clone();
        let toast = toast.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            submitting.set(true);

            let step = step.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let snapshot = (*form).clone();
            spawn_local(async move {
                // Best effort only. A failed notification never blocks the
                // booking, and nothing is retried.
                let mut email_ok = true;
                if let Err(err) = relay::send_booking_notification(&snapshot).await {
                    warn!("booking notification failed: {}", err);
                    email_ok = false;
                    toast.set(Some(Toast::error(
                        "Email didn't go through",
                        "We couldn't send the confirmation email, but your booking still stands.",
                    )));
                }

                match rules::calendar_event_url(&snapshot) {
                    Some(url) => {
                        let opened = web_sys::window()
                            .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok().flatten());
                        if opened.is_none() {
                            toast.set(Some(Toast::error(
                                "Popup blocked",
                                "Allow popups for this site to add the call to your calendar.",
                            )));
                        } else if email_ok {
                            toast.set(Some(Toast::success(
                                "Booking confirmed!",
                                "Your discovery call has been scheduled.",
                            )));
                        }
                    }
                    None => warn!("calendar link skipped: unparseable date or time"),
                }

                submitting.set(false);
                step.set(WizardStep::Done);
            });
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let progress = html! {
        <div class="wizard-progress">
            { for WizardStep::ALL.iter().map(|s| {
                let reached = step.index() >= s.index();
                let passed = step.index() > s.index();
                html! {
                    <div class={classes!("progress-segment", reached.then(|| "reached"))}>
                        <div class="progress-dot">
                            { if passed { "✓".to_string() } else { s.index().to_string() } }
                        </div>
                        <span class="progress-label">{s.label()}</span>
                    </div>
                }
            }) }
        </div>
    };

    let (heading, sub) = match *step {
        WizardStep::Contact => ("Your Information", "Tell us about yourself"),
        WizardStep::Schedule => (
            "Select Date & Time",
            "Choose a convenient time for your 15-minute discovery call",
        ),
        WizardStep::Confirm => ("Confirm Booking", "Review your booking details"),
        WizardStep::Done => ("Booking Confirmed!", "We look forward to speaking with you"),
    };

    let body = match *step {
        WizardStep::Contact => html! {
            <div class="wizard-fields">
                <label for="booking-name">{"Full Name *"}</label>
                <input
                    id="booking-name"
                    type="text"
                    placeholder="Jane Doe"
                    value={form.name.clone()}
                    oninput={on_name}
                />
                <label for="booking-email">{"Email Address *"}</label>
                <input
                    id="booking-email"
                    type="email"
                    placeholder="jane@example.com"
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <label for="booking-phone">{"Phone Number *"}</label>
                <input
                    id="booking-phone"
                    type="tel"
                    placeholder="+1 (555) 123-4567"
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
                <button class="wizard-button" onclick={on_continue.clone()}>{"Continue"}</button>
            </div>
        },
        WizardStep::Schedule => {
            let slots = rules::parse_date(&form.date)
                .map(|date| rules::available_slots(date, now))
                .unwrap_or_default();
            html! {
                <div class="wizard-fields">
                    <label for="booking-date">{"Select Date *"}</label>
                    <input
                        id="booking-date"
                        type="date"
                        min={now.date().format(rules::DATE_FORMAT).to_string()}
                        value={form.date.clone()}
                        onchange={on_date}
                    />
                    <label>{"Select Time *"}</label>
                    if form.date.is_empty() {
                        <p class="slot-hint">{"Pick a date to see available times."}</p>
                    } else if slots.is_empty() {
                        <p class="slot-hint">{"No slots left on this day. Please pick another date."}</p>
                    } else {
                        <div class="slot-grid">
                            { for slots.iter().map(|slot| {
                                let label = rules::slot_label(*slot);
                                let selected = form.time == label;
                                let onclick = {
                                    let form = form.clone();
                                    let label = label.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*form).clone();
                                        next.time = label.clone();
                                        form.set(next);
                                    })
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("slot-button", selected.then(|| "selected"))}
                                        {onclick}
                                    >
                                        {label}
                                    </button>
                                }
                            }) }
                        </div>
                    }
                    <label for="booking-message">{"Additional Message (Optional)"}</label>
                    <textarea
                        id="booking-message"
                        rows="3"
                        placeholder="Tell us briefly about your project..."
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <div class="wizard-button-row">
                        <button class="wizard-button outline" onclick={back_to(WizardStep::Contact)}>{"Back"}</button>
                        <button class="wizard-button" onclick={on_continue}>{"Continue"}</button>
                    </div>
                </div>
            }
        }
        WizardStep::Confirm => {
            let when = form
                .start_datetime()
                .map(|start| start.format("%A, %B %-d, %Y at %H:%M").to_string())
                .unwrap_or_default();
            html! {
                <div class="wizard-fields">
                    <div class="confirm-card">
                        <p class="confirm-label">{"Name"}</p>
                        <p class="confirm-value">{&form.name}</p>
                        <p class="confirm-label">{"Email"}</p>
                        <p class="confirm-value">{&form.email}</p>
                        <p class="confirm-label">{"Phone"}</p>
                        <p class="confirm-value">{&form.phone}</p>
                        <p class="confirm-label">{"Date & Time"}</p>
                        <p class="confirm-value">{when}</p>
                        if !form.message.trim().is_empty() {
                            <p class="confirm-label">{"Message"}</p>
                            <p class="confirm-value">{&form.message}</p>
                        }
                    </div>
                    <div class="wizard-button-row">
                        <button class="wizard-button outline" onclick={back_to(WizardStep::Schedule)}>{"Back"}</button>
                        <button class="wizard-button" onclick={on_confirm} disabled={*submitting}>
                            if *submitting {
                                {"Booking..."}
                            } else {
                                {"Confirm Booking"}
                            }
                        </button>
                    </div>
                </div>
            }
        }
        WizardStep::Done => html! {
            <div class="wizard-done">
                <div class="done-badge">{"✓"}</div>
                <p>
                    {"Your discovery call has been added to your calendar. We've sent a confirmation email with all the details."}
                </p>
                <a
                    class="whatsapp-link"
                    href={rules::whatsapp_booking_link(&form)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Prefer WhatsApp? Message us"}
                </a>
                <button class="wizard-button" onclick={close}>{"Close"}</button>
            </div>
        },
    };

    html! {
        <div class="booking-wizard">
            {progress}
            <h2 class="wizard-heading">{heading}</h2>
            <p class="wizard-sub">{sub}</p>
            {body}
            <ToastView toast={(*toast).clone()} on_dismiss={dismiss_toast} />
            <style>
                {r#"
                    .booking-wizard {
                        padding: 2.5rem 2rem 2rem;
                    }
                    .wizard-progress {
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .progress-segment {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.4rem;
                    }
                    .progress-dot {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 500;
                        background: #E8DCC8;
                        color: #8B7E74;
                        transition: all 0.3s ease;
                    }
                    .progress-segment.reached .progress-dot {
                        background: #D4A574;
                        color: #fff;
                    }
                    .progress-label {
                        font-size: 0.8rem;
                        font-weight: 500;
                        color: #8B7E74;
                    }
                    .progress-segment.reached .progress-label {
                        color: #D4A574;
                    }
                    .wizard-heading {
                        font-family: var(--font-heading);
                        font-size: 2rem;
                        font-weight: 500;
                        color: #4A4238;
                        margin: 0 0 0.25rem 0;
                    }
                    .wizard-sub {
                        color: #8B7E74;
                        margin: 0 0 1.5rem 0;
                    }
                    .wizard-fields {
                        display: flex;
                        flex-direction: column;
                    }
                    .wizard-fields label {
                        color: #4A4238;
                        font-weight: 500;
                        margin-bottom: 0.4rem;
                    }
                    .wizard-fields input,
                    .wizard-fields textarea {
                        border: 1px solid #E8DCC8;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        font-size: 1rem;
                        font-family: inherit;
                        margin-bottom: 1.25rem;
                        transition: border-color 0.3s ease;
                    }
                    .wizard-fields input:focus,
                    .wizard-fields textarea:focus {
                        outline: none;
                        border-color: #D4A574;
                    }
                    .slot-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.6rem;
                        margin-bottom: 1.25rem;
                    }
                    .slot-button {
                        padding: 0.7rem;
                        border: 2px solid #E8DCC8;
                        border-radius: 8px;
                        background: #fff;
                        color: #4A4238;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .slot-button:hover {
                        border-color: #D4A574;
                    }
                    .slot-button.selected {
                        border-color: #D4A574;
                        background: #D4A574;
                        color: #fff;
                    }
                    .slot-hint {
                        color: #8B7E74;
                        font-style: italic;
                        margin: 0 0 1.25rem 0;
                    }
                    .wizard-button {
                        background: #D4A574;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 1.5rem;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .wizard-button:hover {
                        background: #C9A069;
                    }
                    .wizard-button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .wizard-button.outline {
                        background: #fff;
                        color: #4A4238;
                        border: 1px solid #E8DCC8;
                    }
                    .wizard-button.outline:hover {
                        background: #F5F1E8;
                    }
                    .wizard-button-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .wizard-button-row .wizard-button {
                        flex: 1;
                    }
                    .confirm-card {
                        background: #F5F1E8;
                        border-radius: 10px;
                        padding: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .confirm-label {
                        font-size: 0.85rem;
                        color: #8B7E74;
                        margin: 0.75rem 0 0.1rem;
                    }
                    .confirm-label:first-child {
                        margin-top: 0;
                    }
                    .confirm-value {
                        color: #4A4238;
                        font-weight: 500;
                        margin: 0;
                    }
                    .wizard-done {
                        text-align: center;
                        padding: 1.5rem 0;
                    }
                    .done-badge {
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        background: #E8F3E4;
                        color: #4C8C42;
                        font-size: 2.2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1.5rem;
                    }
                    .wizard-done p {
                        color: #8B7E74;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .whatsapp-link {
                        display: inline-block;
                        color: #4C8C42;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                        text-decoration: none;
                    }
                    .whatsapp-link:hover {
                        text-decoration: underline;
                    }
                    .wizard-done .wizard-button {
                        display: block;
                        margin: 0 auto;
                        min-width: 140px;
                    }
                    @media (max-width: 560px) {
                        .wizard-progress {
                            gap: 1rem;
                        }
                        .slot-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
