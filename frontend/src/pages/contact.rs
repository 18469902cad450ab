use yew::prelude::*;

use crate::components::inquiry_form::InquiryForm;

const OFFICE_HOURS: [(&str, &str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM", "hours-weekdays"),
    ("Saturday", "10:00 AM - 4:00 PM", "hours-saturday"),
    ("Sunday", "Closed", "hours-sunday"),
];

fn contact_line(label: &str, lines: &[&str], test_id: &'static str) -> Html {
    html! {
        <div class="contact-line" data-testid={test_id}>
            <p class="contact-label">{ label.to_string() }</p>
            { for lines.iter().map(|line| html! { <p class="contact-value">{ line.to_string() }</p> }) }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section alt" data-testid="contact-section">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 3rem;
                    }
                    .contact-side {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .inquiry-form .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-item {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1.25rem;
                    }
                    .form-item label {
                        font-weight: 600;
                        margin-bottom: 0.4rem;
                    }
                    .form-item input,
                    .form-item select,
                    .form-item textarea {
                        padding: 0.7rem 0.9rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                    }
                    .form-item.invalid input,
                    .form-item.invalid select {
                        border-color: #dc2626;
                    }
                    .form-item.invalid > label {
                        color: #dc2626;
                    }
                    .form-message {
                        margin: 0.35rem 0 0;
                        font-size: 0.85rem;
                        color: #dc2626;
                    }
                    .interest-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.6rem;
                    }
                    .interest-option {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 400 !important;
                    }
                    .submit-btn {
                        width: 100%;
                        padding: 0.9rem;
                        border: none;
                        border-radius: 0.6rem;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #fff;
                        background: linear-gradient(90deg, #f97316, #ef4444);
                        cursor: pointer;
                    }
                    .submit-btn:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .contact-label {
                        margin: 0;
                        font-weight: 600;
                    }
                    .contact-value {
                        margin: 0.15rem 0 0;
                        color: #4b5563;
                    }
                    .contact-line {
                        margin-bottom: 1rem;
                    }
                    .hours-row {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.4rem 0;
                    }
                    .hours-row .closed {
                        color: #dc2626;
                    }
                    @media (max-width: 960px) {
                        .contact-grid,
                        .inquiry-form .form-row,
                        .interest-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title" data-testid="contact-title">{"Ready to Transform Your Nursing Career?"}</h2>
                    <p class="section-subtitle" data-testid="contact-description">
                        {"Take the first step towards your German healthcare career. Schedule a free consultation with our experts today."}
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="card" data-testid="contact-form-card">
                        <h3>{"Schedule Free Consultation"}</h3>
                        <InquiryForm />
                    </div>
                    <div class="contact-side">
                        <div class="card" data-testid="cvs-contact-card">
                            <h3>{"CVS Educational Institution"}</h3>
                            { contact_line("Address", &["CVS Campus, Medical District, [Your City], India"], "cvs-address") }
                            { contact_line("Phone", &["+91 XXXXX XXXXX"], "cvs-phone") }
                            { contact_line("Email", &["admissions@cvseducation.edu"], "cvs-email") }
                        </div>
                        <div class="card" data-testid="studywings-contact-card">
                            <h3>{"StudyWings"}</h3>
                            { contact_line(
                                "India Office",
                                &["Plot No 172, Kothapalem Layout, Tiruchanur, Tirupati - 517503, Andhra Pradesh (AP), India"],
                                "studywings-address",
                            ) }
                            { contact_line(
                                "Phone Numbers",
                                &["Germany: +49 15778 550360", "India: +91 90632 45377", "India: +91 91604 08999"],
                                "studywings-phones",
                            ) }
                            <div class="contact-line" data-testid="studywings-website">
                                <p class="contact-label">{"Website"}</p>
                                <a href="https://www.studywings-oee.com/" target="_blank" rel="noopener noreferrer">
                                    {"www.studywings-oee.com"}
                                </a>
                            </div>
                        </div>
                        <div class="card" data-testid="office-hours-card">
                            <h3>{"Office Hours"}</h3>
                            { for OFFICE_HOURS.iter().map(|(days, hours, test_id)| html! {
                                <div class="hours-row" data-testid={*test_id}>
                                    <span>{ *days }</span>
                                    <span class={classes!((*hours == "Closed").then(|| "closed"))}>{ *hours }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
