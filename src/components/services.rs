use yew::prelude::*;

use crate::content;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services" id="services">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">
                        {"Our "}<span class="accent">{"Services"}</span>
                    </h2>
                    <p class="section-lede">
                        {"Comprehensive interior design solutions tailored to your unique needs and vision."}
                    </p>
                </div>
                <div class="service-grid">
                    { for content::SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.id}>
                            <div class="service-icon">{service.icon}</div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .services {
                        padding: 6rem 0;
                        background: #F5F1E8;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 10px;
                        box-shadow: 0 4px 12px rgba(74, 66, 56, 0.08);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 14px 28px rgba(74, 66, 56, 0.14);
                    }
                    .service-icon {
                        background: #F5F1E8;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.8rem;
                        margin-bottom: 1.5rem;
                        transition: background 0.3s ease;
                    }
                    .service-card:hover .service-icon {
                        background: #E8DCC8;
                    }
                    .service-title {
                        font-family: var(--font-heading);
                        font-size: 1.5rem;
                        font-weight: 500;
                        color: #4A4238;
                        margin: 0 0 0.75rem 0;
                    }
                    .service-description {
                        color: #8B7E74;
                        line-height: 1.7;
                        margin: 0;
                    }
                    @media (max-width: 968px) {
                        .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .service-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
