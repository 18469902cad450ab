use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::contact::Contact;
use crate::pages::journey::Journey;
use crate::pages::opportunities::Opportunities;
use crate::pages::partnership::Partnership;
use crate::pages::programs::Programs;
use crate::pages::stories::SuccessStories;

struct Stat {
    value: &'static str,
    label: &'static str,
    test_id: &'static str,
}

const HERO_STATS: [Stat; 3] = [
    Stat { value: "500+", label: "Students Placed", test_id: "stat-students" },
    Stat { value: "95%", label: "Success Rate", test_id: "stat-success" },
    Stat { value: "50+", label: "Partner Hospitals", test_id: "stat-hospitals" },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" data-testid="hero-section">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1d4ed8 0%, #2563eb 45%, #f97316 100%);
                        color: #fff;
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem 4rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-kicker {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        font-size: 1.1rem;
                        opacity: 0.9;
                    }
                    .hero-kicker::before {
                        content: '';
                        width: 3rem;
                        height: 4px;
                        background: #fff;
                        border-radius: 2px;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title .accent {
                        display: block;
                        background: linear-gradient(45deg, #fdba74, #fb923c);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-description {
                        font-size: 1.25rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                        opacity: 0.9;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-btn {
                        padding: 0.9rem 1.75rem;
                        border-radius: 10px;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .hero-btn.primary {
                        background: #fff;
                        color: #1d4ed8;
                        box-shadow: 0 0 24px rgba(249, 115, 22, 0.45);
                    }
                    .hero-btn.secondary {
                        border: 2px solid #fff;
                        color: #fff;
                    }
                    .hero-btn.secondary:hover {
                        background: #fff;
                        color: #1d4ed8;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        text-align: center;
                    }
                    .hero-stat-value {
                        font-size: 1.9rem;
                        font-weight: 700;
                    }
                    .hero-stat-label {
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                    .hero-media {
                        position: relative;
                    }
                    .hero-media img.main {
                        width: 100%;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                    }
                    .hero-media img.inset {
                        position: absolute;
                        left: -3rem;
                        bottom: -3rem;
                        width: 12rem;
                        height: 9rem;
                        object-fit: cover;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
                    }
                    @media (max-width: 960px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-title {
                            font-size: 2.5rem;
                        }
                        .hero-media img.inset {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="hero-grid">
                <div>
                    <div class="hero-kicker">{"Partnership Announcement"}</div>
                    <h1 class="hero-title" data-testid="hero-title">
                        {"Transforming Nursing"}
                        <span class="accent">{"Education"}</span>
                        {"for Global Excellence"}
                    </h1>
                    <p class="hero-description" data-testid="hero-description">
                        {"CVS Educational Institution partners with StudyWings to create unprecedented pathways for nursing professionals seeking world-class opportunities in Germany's healthcare system."}
                    </p>
                    <div class="hero-actions">
                        <a href="#partnership" class="hero-btn primary" data-testid="hero-explore-btn">{"Explore Partnership →"}</a>
                        <a href="#success-stories" class="hero-btn secondary" data-testid="hero-watch-btn">{"Watch Success Stories"}</a>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div data-testid={stat.test_id}>
                                <div class="hero-stat-value">{ stat.value }</div>
                                <div class="hero-stat-label">{ stat.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="hero-media">
                    <img
                        class="main"
                        src="https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                        alt="Modern nursing education facilities"
                        data-testid="hero-main-image"
                    />
                    <img
                        class="inset"
                        src="https://images.unsplash.com/photo-1521791136064-7986c2920216?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300"
                        alt="Professional collaboration handshake"
                        data-testid="hero-collaboration-image"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1f2937;
                        background: #ffffff;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    .section {
                        padding: 5rem 1.5rem;
                    }
                    .section.alt {
                        background: #f8fafc;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .section-subtitle {
                        max-width: 720px;
                        margin: 0 auto;
                        font-size: 1.15rem;
                        color: #6b7280;
                        line-height: 1.6;
                    }
                    .card {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        padding: 2rem;
                    }
                "#}
            </style>
            <Hero />
            <Partnership />
            <Programs />
            <Journey />
            <Opportunities />
            <SuccessStories />
            <Contact />
            <Footer />
        </div>
    }
}
