use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let filter = use_state(|| "All");

    let projects: Vec<_> = content::GALLERY_PROJECTS
        .iter()
        .filter(|project| *filter == "All" || project.category == *filter)
        .collect();

    html! {
        <section class="gallery" id="gallery">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">
                        {"Our "}<span class="accent">{"Portfolio"}</span>
                    </h2>
                    <p class="section-lede">
                        {"Explore our recent projects and get inspired by the spaces we've transformed."}
                    </p>
                    <div class="filter-row">
                        { for content::GALLERY_CATEGORIES.iter().map(|category| {
                            let onclick = {
                                let filter = filter.clone();
                                let category = *category;
                                Callback::from(move |_: MouseEvent| filter.set(category))
                            };
                            let active = *filter == *category;
                            html! {
                                <button
                                    class={classes!("filter-button", active.then(|| "active"))}
                                    {onclick}
                                >
                                    {category}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="gallery-grid">
                    { for projects.iter().map(|project| html! {
                        <div class="gallery-card" key={project.id}>
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="gallery-overlay">
                                <div class="gallery-caption">
                                    <p class="gallery-category">{project.category}</p>
                                    <h3 class="gallery-title">{project.title}</h3>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .gallery {
                        padding: 6rem 0;
                        background: #fff;
                    }
                    .filter-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .filter-button {
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 999px;
                        background: #F5F1E8;
                        color: #4A4238;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .filter-button:hover {
                        background: #E8DCC8;
                    }
                    .filter-button.active {
                        background: #D4A574;
                        color: #fff;
                        box-shadow: 0 4px 10px rgba(74, 66, 56, 0.18);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .gallery-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 10px;
                        aspect-ratio: 4 / 3;
                        box-shadow: 0 8px 18px rgba(74, 66, 56, 0.12);
                    }
                    .gallery-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .gallery-card:hover img {
                        transform: scale(1.08);
                    }
                    .gallery-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top,
                            rgba(0, 0, 0, 0.7),
                            rgba(0, 0, 0, 0.2),
                            transparent
                        );
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-card:hover .gallery-overlay {
                        opacity: 1;
                    }
                    .gallery-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                    }
                    .gallery-category {
                        color: #D4A574;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin: 0 0 0.25rem 0;
                    }
                    .gallery-title {
                        font-family: var(--font-heading);
                        color: #fff;
                        font-size: 1.4rem;
                        font-weight: 500;
                        margin: 0;
                    }
                    @media (max-width: 968px) {
                        .gallery-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
