use yew::prelude::*;

const SALARY_TIERS: [(&str, &str); 3] = [
    ("Entry Level", "€2,700"),
    ("Experienced", "€3,200+"),
    ("Specialized", "€4,000+"),
];

struct Opportunity {
    title: &'static str,
    description: &'static str,
    items: [&'static str; 4],
    test_id: &'static str,
}

const OPPORTUNITIES: [Opportunity; 2] = [
    Opportunity {
        title: "Comprehensive Benefits",
        description: "Full healthcare coverage, paid vacation, pension plans, and professional development support.",
        items: ["Health Insurance", "30 Days Paid Leave", "Pension Benefits", "Career Development"],
        test_id: "opportunity-benefits",
    },
    Opportunity {
        title: "Career Growth",
        description: "Clear advancement pathways with opportunities for specialization and leadership roles.",
        items: [
            "Specialization Options",
            "Leadership Training",
            "Continuing Education",
            "Research Opportunities",
        ],
        test_id: "opportunity-growth",
    },
];

#[function_component(Opportunities)]
pub fn opportunities() -> Html {
    html! {
        <section id="opportunities" class="section alt" data-testid="opportunities-section">
            <style>
                {r#"
                    .opportunity-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .salary-tier {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.6rem 0;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .salary-tier strong {
                        color: #16a34a;
                    }
                    .opportunity-items {
                        list-style: none;
                        padding: 0;
                    }
                    .opportunity-items li {
                        padding: 0.35rem 0;
                    }
                    .opportunity-items li::before {
                        content: '•';
                        color: #f97316;
                        margin-right: 0.6rem;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="opportunities-title">{"Germany Healthcare Opportunities"}</h2>
                    <p class="section-subtitle" data-testid="opportunities-description">
                        {"Discover exceptional career opportunities in Germany's world-renowned healthcare system."}
                    </p>
                </div>
                <div class="opportunity-grid">
                    <div class="card" data-testid="opportunity-salary">
                        <h3>{"Competitive Salaries"}</h3>
                        <p>{"Starting salaries of €2,700-3,200 per month with excellent growth opportunities and comprehensive benefits."}</p>
                        { for SALARY_TIERS.iter().map(|(tier, amount)| html! {
                            <div class="salary-tier">
                                <span>{ *tier }</span>
                                <strong>{ *amount }</strong>
                            </div>
                        }) }
                    </div>
                    { for OPPORTUNITIES.iter().map(|opportunity| html! {
                        <div class="card" data-testid={opportunity.test_id}>
                            <h3>{ opportunity.title }</h3>
                            <p>{ opportunity.description }</p>
                            <ul class="opportunity-items">
                                { for opportunity.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
