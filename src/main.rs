use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod relay;
mod booking {
    pub mod rules;
    pub mod wizard;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let mut options = web_sys::ScrollIntoViewOptions::new();
            options.behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |label: &'static str, id: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(id);
        });
        html! {
            <button class="nav-link" {onclick}>{label}</button>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button
                    class="nav-logo"
                    onclick={Callback::from(|_: MouseEvent| scroll_to_section("home"))}
                >
                    {"Designs with "}<span class="accent">{"Joy"}</span>
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { section_link("About", "about") }
                    { section_link("Services", "services") }
                    { section_link("Gallery", "gallery") }
                    { section_link("Contact", "contact") }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.5s ease;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 10px rgba(74, 66, 56, 0.12);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-heading, 'Playfair Display', serif);
                        font-size: 1.5rem;
                        font-weight: 600;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #fff;
                    }
                    .top-nav.scrolled .nav-logo {
                        color: #4A4238;
                    }
                    .nav-logo .accent {
                        color: #D4A574;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        color: #fff;
                        transition: color 0.3s ease;
                    }
                    .top-nav.scrolled .nav-link {
                        color: #4A4238;
                    }
                    .nav-link:hover {
                        color: #D4A574;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled .burger-menu span {
                        background: #4A4238;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 1rem;
                            padding: 1rem 1.5rem 1.5rem;
                            background: rgba(255, 255, 255, 0.97);
                            box-shadow: 0 8px 16px rgba(74, 66, 56, 0.15);
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            color: #4A4238;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
