use yew::prelude::*;

struct Story {
    name: &'static str,
    cohort: &'static str,
    hospital: &'static str,
    photo: &'static str,
    quote: &'static str,
    position: &'static str,
    salary: &'static str,
}

const STORIES: [Story; 3] = [
    Story {
        name: "Priya Sharma",
        cohort: "GNM Graduate 2022",
        hospital: "Berlin University Hospital",
        photo: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100&q=80",
        quote: "The partnership between CVS and StudyWings transformed my career. I'm now working in one of Germany's top hospitals with excellent salary and benefits. The support throughout the journey was exceptional.",
        position: "ICU Nurse",
        salary: "€3,100/month",
    },
    Story {
        name: "Raj Patel",
        cohort: "ANM Graduate 2023",
        hospital: "Munich General Hospital",
        photo: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100&q=80",
        quote: "From a small town in India to working in Munich's prestigious hospital. The German language training and visa support made the impossible possible. Forever grateful to this partnership.",
        position: "Emergency Nurse",
        salary: "€2,800/month",
    },
    Story {
        name: "Anita Reddy",
        cohort: "GNM Graduate 2021",
        hospital: "Frankfurt Medical Center",
        photo: "https://images.unsplash.com/photo-1594824505341-ec2779e51b79?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100&q=80",
        quote: "The comprehensive training at CVS combined with StudyWings' placement support helped me secure my dream job. Germany offers incredible growth opportunities for healthcare professionals.",
        position: "Senior Nurse",
        salary: "€3,400/month",
    },
];

#[function_component(SuccessStories)]
pub fn success_stories() -> Html {
    html! {
        <section id="success-stories" class="section" data-testid="success-stories-section">
            <style>
                {r#"
                    .story-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .story-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .story-header img {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .story-header h3 {
                        margin: 0;
                    }
                    .story-meta {
                        margin: 0;
                        font-size: 0.85rem;
                        color: #6b7280;
                    }
                    .story-hospital {
                        margin: 0;
                        font-size: 0.85rem;
                        color: #2563eb;
                    }
                    .story-quote {
                        font-style: italic;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .story-outcome {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(37, 99, 235, 0.08);
                    }
                    .story-outcome strong {
                        color: #1d4ed8;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="success-stories-title">{"Success Stories"}</h2>
                    <p class="section-subtitle" data-testid="success-stories-description">
                        {"Hear from our graduates who are now thriving in Germany's healthcare system."}
                    </p>
                </div>
                <div class="story-grid">
                    { for STORIES.iter().enumerate().map(|(i, story)| html! {
                        <div class="card" data-testid={format!("success-story-{}", i + 1)}>
                            <div class="story-header">
                                <img src={story.photo} alt={story.name} />
                                <div>
                                    <h3>{ story.name }</h3>
                                    <p class="story-meta">{ story.cohort }</p>
                                    <p class="story-hospital">{ story.hospital }</p>
                                </div>
                            </div>
                            <p class="story-quote">{ format!("\"{}\"", story.quote) }</p>
                            <div class="story-outcome">
                                <strong>{ format!("Current Position: {}", story.position) }</strong>
                                <div>{ format!("Salary: {}", story.salary) }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
