use yew::prelude::*;

struct Program {
    title: &'static str,
    kind: &'static str,
    summary: &'static str,
    points: [&'static str; 4],
    salary: &'static str,
    test_id: &'static str,
}

const PROGRAMS: [Program; 2] = [
    Program {
        title: "General Nursing & Midwifery (GNM)",
        kind: "3-Year Diploma Program",
        summary: "Comprehensive nursing education with extensive clinical training and midwifery specialization.",
        points: [
            "36 months comprehensive training",
            "Clinical rotations in leading hospitals",
            "Midwifery specialization included",
            "International certification pathway",
        ],
        salary: "€2,700 - €3,200",
        test_id: "gnm-program-card",
    },
    Program {
        title: "Auxiliary Nurse Midwifery (ANM)",
        kind: "2-Year Certificate Program",
        summary: "Focused practical training program for immediate healthcare workforce entry.",
        points: [
            "24 months intensive training",
            "Hands-on practical focus",
            "Community health specialization",
            "Fast-track to employment",
        ],
        salary: "€2,400 - €2,800",
        test_id: "anm-program-card",
    },
];

#[function_component(Programs)]
pub fn programs() -> Html {
    html! {
        <section id="programs" class="section alt" data-testid="programs-section">
            <style>
                {r#"
                    .program-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .program-kind {
                        color: #2563eb;
                        font-weight: 600;
                    }
                    .program-points {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }
                    .program-points li {
                        padding: 0.4rem 0;
                    }
                    .program-points li::before {
                        content: '✓';
                        color: #16a34a;
                        margin-right: 0.6rem;
                    }
                    .program-salary {
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: #eff6ff;
                        text-align: center;
                    }
                    .program-salary strong {
                        display: block;
                        font-size: 1.5rem;
                        color: #1d4ed8;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="programs-title">{"Our Nursing Programs"}</h2>
                    <p class="section-subtitle" data-testid="programs-description">
                        {"Comprehensive nursing education programs designed to prepare you for international healthcare careers."}
                    </p>
                </div>
                <div class="program-grid">
                    { for PROGRAMS.iter().map(|program| html! {
                        <div class="card" data-testid={program.test_id}>
                            <h3>{ program.title }</h3>
                            <p class="program-kind">{ program.kind }</p>
                            <p>{ program.summary }</p>
                            <ul class="program-points">
                                { for program.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                            </ul>
                            <div class="program-salary">
                                <strong>{ program.salary }</strong>
                                <span>{"Starting salary in Germany"}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
