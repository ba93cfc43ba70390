use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::services::Services;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Hero />
            <About />
            <Services />
            <Gallery />
            <Contact />
            <Footer />
            <style>
                {r#"
                    :root {
                        --font-heading: 'Playfair Display', serif;
                    }
                    .home-page {
                        font-family: 'Inter', sans-serif;
                        color: #4A4238;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title {
                        font-family: var(--font-heading);
                        font-size: clamp(2.5rem, 5vw, 3.5rem);
                        font-weight: 300;
                        color: #4A4238;
                        margin: 0 0 1rem 0;
                    }
                    .section-title .accent {
                        color: #D4A574;
                        font-weight: 500;
                    }
                    .section-lede {
                        font-size: 1.2rem;
                        color: #8B7E74;
                        max-width: 620px;
                        margin: 0 auto;
                    }
                "#}
            </style>
        </div>
    }
}
