use yew::prelude::*;

struct Highlight {
    title: &'static str,
    description: &'static str,
    detail: &'static str,
    test_id: &'static str,
}

struct Partner {
    name: &'static str,
    badge: &'static str,
    tagline: &'static str,
    credentials: &'static str,
    image: &'static str,
    image_alt: &'static str,
    accent: &'static str,
    highlights: [Highlight; 3],
    figures: [(&'static str, &'static str); 2],
    test_id: &'static str,
}

const PARTNERS: [Partner; 2] = [
    Partner {
        name: "CVS Educational Institution",
        badge: "ACCREDITED",
        tagline: "Premier Nursing Education",
        credentials: "15+ Years of Excellence • 1000+ Successful Graduates",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300",
        image_alt: "Nursing students studying together in modern classroom",
        accent: "orange",
        highlights: [
            Highlight {
                title: "GNM Program",
                description: "3-year General Nursing & Midwifery diploma with extensive clinical rotations",
                detail: "36 months • Clinical rotations included",
                test_id: "cvs-gnm",
            },
            Highlight {
                title: "ANM Program",
                description: "2-year Auxiliary Nurse Midwifery certification program",
                detail: "24 months • Practical training focus",
                test_id: "cvs-anm",
            },
            Highlight {
                title: "Clinical Excellence",
                description: "State-of-the-art simulation labs and premier hospital partnerships",
                detail: "Advanced simulation labs • Top hospital partnerships",
                test_id: "cvs-excellence",
            },
        ],
        figures: [("1000+", "Successful Graduates"), ("15+", "Years Excellence")],
        test_id: "cvs-card",
    },
    Partner {
        name: "StudyWings",
        badge: "CERTIFIED",
        tagline: "International Education Specialists",
        credentials: "ICEF Certified • 500+ Successful Placements in Germany",
        image: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300",
        image_alt: "Students in Germany pursuing international education",
        accent: "blue",
        highlights: [
            Highlight {
                title: "German Language Training",
                description: "Comprehensive A1-B2 level courses with certified instructors",
                detail: "95% pass rate • Online & offline classes",
                test_id: "studywings-language",
            },
            Highlight {
                title: "Visa & Documentation",
                description: "Complete legal support for German work visa and credential recognition",
                detail: "100% legal compliance • Expert guidance",
                test_id: "studywings-visa",
            },
            Highlight {
                title: "Job Placement",
                description: "Direct connections with 50+ German hospitals and healthcare facilities",
                detail: "50+ partner hospitals • €2,700-3,200 starting salary",
                test_id: "studywings-placement",
            },
        ],
        figures: [("500+", "Germany Placements"), ("95%", "Success Rate")],
        test_id: "studywings-card",
    },
];

fn partner_card(partner: &Partner) -> Html {
    html! {
        <div class={classes!("card", "partner-card", partner.accent)} data-testid={partner.test_id}>
            <span class="premium-badge">{ partner.badge }</span>
            <h3 class="partner-name">{ partner.name }</h3>
            <p class="partner-tagline">{ partner.tagline }</p>
            <p class="partner-credentials">{ partner.credentials }</p>
            <img class="partner-image" src={partner.image} alt={partner.image_alt} />
            <div class="partner-highlights">
                { for partner.highlights.iter().map(|h| html! {
                    <div class="partner-highlight" data-testid={h.test_id}>
                        <span class="check">{"✓"}</span>
                        <div>
                            <h4>{ h.title }</h4>
                            <p>{ h.description }</p>
                            <small>{ h.detail }</small>
                        </div>
                    </div>
                }) }
            </div>
            <div class="partner-figures">
                { for partner.figures.iter().map(|(value, label)| html! {
                    <div>
                        <div class="figure-value">{ *value }</div>
                        <div class="figure-label">{ *label }</div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Partnership)]
pub fn partnership() -> Html {
    html! {
        <section id="partnership" class="section" data-testid="partnership-section">
            <style>
                {r#"
                    .partner-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                    }
                    .partner-card {
                        position: relative;
                    }
                    .premium-badge {
                        position: absolute;
                        top: -0.6rem;
                        right: -0.6rem;
                        padding: 0.3rem 0.8rem;
                        border-radius: 999px;
                        font-size: 0.7rem;
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        color: #fff;
                        background: linear-gradient(45deg, #f97316, #ef4444);
                    }
                    .partner-name {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .partner-card.orange .partner-tagline { color: #ea580c; font-weight: 600; }
                    .partner-card.blue .partner-tagline { color: #2563eb; font-weight: 600; }
                    .partner-credentials {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .partner-image {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 0.75rem;
                        margin: 1rem 0 1.5rem;
                    }
                    .partner-highlight {
                        display: flex;
                        gap: 0.75rem;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        border-radius: 0.5rem;
                    }
                    .partner-card.orange .partner-highlight { background: #fff7ed; border-left: 4px solid #f97316; }
                    .partner-card.blue .partner-highlight { background: #eff6ff; border-left: 4px solid #3b82f6; }
                    .partner-highlight h4 {
                        margin: 0 0 0.25rem;
                        font-size: 1.1rem;
                    }
                    .partner-highlight p {
                        margin: 0 0 0.5rem;
                        color: #4b5563;
                    }
                    .partner-highlight .check {
                        flex-shrink: 0;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: #f97316;
                    }
                    .partner-card.blue .partner-highlight .check { background: #3b82f6; }
                    .partner-figures {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        text-align: center;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        color: #fff;
                    }
                    .partner-card.orange .partner-figures { background: linear-gradient(90deg, #f97316, #ef4444); }
                    .partner-card.blue .partner-figures { background: linear-gradient(90deg, #3b82f6, #06b6d4); }
                    .figure-value {
                        font-size: 1.9rem;
                        font-weight: 700;
                    }
                    .figure-label {
                        font-size: 0.85rem;
                        opacity: 0.85;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="partnership-title">{"A Partnership Built for Excellence"}</h2>
                    <p class="section-subtitle" data-testid="partnership-description">
                        {"Combining CVS Educational Institution's nursing education expertise with StudyWings' international placement excellence to create unparalleled opportunities for aspiring healthcare professionals."}
                    </p>
                </div>
                <div class="partner-grid">
                    { for PARTNERS.iter().map(partner_card) }
                </div>
            </div>
        </section>
    }
}
