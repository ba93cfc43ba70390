use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let stats = [
        ("👥", "200+", "Happy Clients"),
        ("🏆", "15+", "Years Experience"),
        ("❤️", "500+", "Projects Completed"),
    ];

    html! {
        <section class="about" id="about">
            <div class="section-inner">
                <div class="about-grid">
                    <div class="about-copy">
                        <h2 class="section-title">
                            {"Creating Spaces That"}
                            <span class="accent-block">{"Tell Your Story"}</span>
                        </h2>
                        <p>
                            {"Welcome to Designs with Joy, where every space is thoughtfully crafted to reflect your personality and enhance your lifestyle. With over 15 years of experience in interior design, I believe that beautiful spaces should bring comfort, functionality, and above all, joy."}
                        </p>
                        <p>
                            {"My approach combines timeless elegance with modern sensibilities, creating interiors that are both sophisticated and welcoming. From initial concept to final styling, I work closely with each client to bring their vision to life."}
                        </p>
                        <p>
                            {"Whether you're redesigning a single room or transforming your entire home, I'm here to guide you through every step of the journey."}
                        </p>
                    </div>
                    <div class="about-stats">
                        { for stats.iter().map(|(icon, value, label)| html! {
                            <div class="stat-card">
                                <div class="stat-icon">{icon}</div>
                                <div>
                                    <div class="stat-value">{value}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                        background: #fff;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-copy p {
                        font-size: 1.1rem;
                        color: #8B7E74;
                        line-height: 1.75;
                        margin-bottom: 1.25rem;
                    }
                    .accent-block {
                        display: block;
                        color: #D4A574;
                        font-weight: 500;
                    }
                    .about-stats {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .stat-card {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        background: #F5F1E8;
                        border-radius: 10px;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .stat-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 12px 24px rgba(74, 66, 56, 0.12);
                    }
                    .stat-icon {
                        background: #D4A574;
                        border-radius: 50%;
                        width: 64px;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                        flex-shrink: 0;
                    }
                    .stat-value {
                        font-family: var(--font-heading);
                        font-size: 2.2rem;
                        font-weight: 600;
                        color: #4A4238;
                    }
                    .stat-label {
                        color: #8B7E74;
                        font-weight: 500;
                    }
                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                            gap: 2.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
