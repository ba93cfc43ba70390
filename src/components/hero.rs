use web_sys::MouseEvent;
use yew::prelude::*;

use crate::booking::wizard::BookingWizard;
use crate::scroll_to_section;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1564078516393-cf04bd966897?crop=entropy&cs=srgb&fm=jpg&q=85";

#[function_component(Hero)]
pub fn hero() -> Html {
    let booking_open = use_state(|| false);

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(true))
    };

    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };

    let close_on_overlay = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(false))
    };

    let scroll_to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <section class="hero" id="home">
            <div class="hero-backdrop" style={format!("background-image: url({})", HERO_IMAGE)}>
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"Designs with "}<span class="accent">{"Joy"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Transforming spaces into timeless sanctuaries that reflect your unique style and inspire joy."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={open_booking}>
                        {"📅 Book a Call"}
                    </button>
                    <button class="hero-cta secondary" onclick={scroll_to_contact}>
                        {"📞 Get in Touch"}
                    </button>
                </div>
            </div>
            if *booking_open {
                <div class="modal-overlay" onclick={close_on_overlay}>
                    <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="modal-close" onclick={close_booking.clone().reform(|_: MouseEvent| ())}>
                            {"×"}
                        </button>
                        <BookingWizard on_close={close_booking} />
                    </div>
                </div>
            }
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right,
                            rgba(0, 0, 0, 0.6),
                            rgba(0, 0, 0, 0.4),
                            transparent
                        );
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        width: 100%;
                    }
                    .hero-title {
                        font-family: var(--font-heading);
                        font-size: clamp(3.5rem, 8vw, 6rem);
                        font-weight: 300;
                        color: #fff;
                        margin: 0 0 1.5rem 0;
                        line-height: 1.1;
                    }
                    .hero-title .accent {
                        color: #D4A574;
                        font-weight: 500;
                    }
                    .hero-subtitle {
                        font-size: 1.35rem;
                        color: rgba(255, 255, 255, 0.9);
                        font-weight: 300;
                        line-height: 1.6;
                        max-width: 600px;
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-cta {
                        background: #D4A574;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 1.1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 500;
                        cursor: pointer;
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.25);
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .hero-cta:hover {
                        background: #C9A069;
                        transform: translateY(-2px);
                    }
                    .hero-cta.secondary {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(6px);
                        border: 2px solid #fff;
                    }
                    .hero-cta.secondary:hover {
                        background: #fff;
                        color: #4A4238;
                    }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.55);
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }
                    .modal-content {
                        position: relative;
                        background: #fff;
                        border-radius: 14px;
                        max-width: 640px;
                        width: 100%;
                        max-height: 90vh;
                        overflow-y: auto;
                    }
                    .modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.8rem;
                        line-height: 1;
                        color: #8B7E74;
                        cursor: pointer;
                        z-index: 1;
                    }
                    .modal-close:hover {
                        color: #4A4238;
                    }
                    @media (max-width: 768px) {
                        .hero-subtitle {
                            font-size: 1.15rem;
                        }
                        .modal-content {
                            max-height: 95vh;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
