use yew::prelude::*;

struct Step {
    title: &'static str,
    duration: &'static str,
    description: &'static str,
}

// Ordered: enrolment through first shift in a German hospital.
const STEPS: [Step; 5] = [
    Step {
        title: "Enroll at CVS",
        duration: "Month 0",
        description: "Join the GNM or ANM program and start building clinical skills in our simulation labs and partner hospitals.",
    },
    Step {
        title: "Learn German",
        duration: "During your studies",
        description: "StudyWings language coaches take you from A1 to B2 with certified instructors, online and offline.",
    },
    Step {
        title: "Credential Recognition",
        duration: "Final semester",
        description: "We prepare and translate your documents and guide you through the German recognition process.",
    },
    Step {
        title: "Visa & Relocation",
        duration: "After graduation",
        description: "Complete legal support for your work visa, plus help with housing and arrival in Germany.",
    },
    Step {
        title: "Start Your Career",
        duration: "Day one in Germany",
        description: "Begin work at one of 50+ partner hospitals with a starting salary of €2,700-3,200 per month.",
    },
];

#[function_component(Journey)]
pub fn journey() -> Html {
    html! {
        <section id="journey" class="section" data-testid="journey-section">
            <style>
                {r#"
                    .journey-steps {
                        position: relative;
                        max-width: 820px;
                        margin: 0 auto;
                        list-style: none;
                        padding: 0;
                    }
                    .journey-steps::before {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 1.5rem;
                        width: 3px;
                        background: linear-gradient(#2563eb, #f97316);
                    }
                    .journey-step {
                        position: relative;
                        padding: 0 0 2.5rem 4.5rem;
                    }
                    .journey-number {
                        position: absolute;
                        left: 0;
                        top: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(135deg, #2563eb, #f97316);
                    }
                    .journey-step h3 {
                        margin: 0.2rem 0 0.25rem;
                    }
                    .journey-duration {
                        font-size: 0.85rem;
                        color: #ea580c;
                        font-weight: 600;
                    }
                    .journey-step p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="journey-title">{"Your Journey to Germany"}</h2>
                    <p class="section-subtitle">
                        {"Five clear steps from your first day of nursing school to your first shift in a German hospital."}
                    </p>
                </div>
                <ol class="journey-steps">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <li class="journey-step" data-testid={format!("journey-step-{}", i + 1)}>
                            <span class="journey-number">{ (i + 1).to_string() }</span>
                            <h3>{ step.title }</h3>
                            <span class="journey-duration">{ step.duration }</span>
                            <p>{ step.description }</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
