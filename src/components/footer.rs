use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll_to_section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let quick_links = [
        ("About", "about"),
        ("Services", "services"),
        ("Gallery", "gallery"),
        ("Contact", "contact"),
    ];

    html! {
        <footer class="footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">
                            {"Designs with "}<span class="accent">{"Joy"}</span>
                        </h3>
                        <p class="footer-blurb">
                            {"Creating beautiful, functional spaces that bring joy to everyday living."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            { for quick_links.iter().map(|(label, id)| {
                                let id = *id;
                                let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
                                html! {
                                    <li><button {onclick}>{label}</button></li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Follow Us"}</h4>
                        <div class="social-row">
                            <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"📷"}</a>
                            <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"👍"}</a>
                            <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"💼"}</a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Designs with Joy. All rights reserved."}</p>
                    <p>{"Made with ❤️ for beautiful spaces"}</p>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        background: #4A4238;
                        color: #fff;
                        padding: 3rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-brand {
                        font-family: var(--font-heading);
                        font-size: 1.8rem;
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }
                    .footer-brand .accent {
                        color: #D4A574;
                    }
                    .footer-blurb {
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.7;
                        margin: 0;
                    }
                    .footer h4 {
                        font-size: 1.2rem;
                        margin: 0 0 1rem 0;
                    }
                    .footer-links {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1rem;
                        padding: 0;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .footer-links button:hover {
                        color: #D4A574;
                    }
                    .social-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-row a {
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                        text-decoration: none;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .social-row a:hover {
                        background: #D4A574;
                        transform: scale(1.1);
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .footer-bottom p {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                        margin: 0;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
