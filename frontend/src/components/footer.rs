use yew::prelude::*;

const QUICK_LINKS: [(&str, &str, &str); 6] = [
    ("#partnership", "Partnership Details", "footer-link-partnership"),
    ("#programs", "Nursing Programs", "footer-link-programs"),
    ("#journey", "Your Journey", "footer-link-journey"),
    ("#opportunities", "Germany Opportunities", "footer-link-opportunities"),
    ("#success-stories", "Success Stories", "footer-link-success"),
    ("#contact", "Contact Us", "footer-link-contact"),
];

const SERVICES: [(&str, &str); 5] = [
    ("GNM Programs", "footer-service-gnm"),
    ("ANM Programs", "footer-service-anm"),
    ("German Language Training", "footer-service-language"),
    ("Visa Assistance", "footer-service-visa"),
    ("Career Counseling", "footer-service-counseling"),
];

const SOCIAL: [(&str, &str); 4] = [
    ("Facebook", "social-facebook"),
    ("Instagram", "social-instagram"),
    ("LinkedIn", "social-linkedin"),
    ("YouTube", "social-youtube"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" data-testid="footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 1.5rem 2rem;
                        background: #0f172a;
                        color: #cbd5e1;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .footer-social {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .footer-social a {
                        padding: 0.4rem 0.7rem;
                        border-radius: 0.5rem;
                        background: #2563eb;
                        color: #fff;
                        font-size: 0.8rem;
                        text-decoration: none;
                    }
                    .site-footer h3 {
                        color: #fff;
                        margin-top: 0;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                    }
                    .site-footer li {
                        padding: 0.35rem 0;
                    }
                    .site-footer li a {
                        color: #cbd5e1;
                        text-decoration: none;
                    }
                    .site-footer li a:hover {
                        color: #fb923c;
                    }
                    .footer-copyright {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                        text-align: center;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand" data-testid="footer-logo">{"CVS × StudyWings"}</div>
                    <p data-testid="footer-description">
                        {"Transforming nursing careers through world-class education and international opportunities. Your pathway to excellence in German healthcare starts here."}
                    </p>
                    <div class="footer-social" data-testid="footer-social">
                        { for SOCIAL.iter().map(|(name, test_id)| html! {
                            <a href="#" aria-label={*name} data-testid={*test_id}>{ *name }</a>
                        }) }
                    </div>
                </div>
                <div data-testid="footer-quick-links">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(href, label, test_id)| html! {
                            <li><a href={*href} data-testid={*test_id}>{ *label }</a></li>
                        }) }
                    </ul>
                </div>
                <div data-testid="footer-services">
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|(label, test_id)| html! {
                            <li><a href="#contact" data-testid={*test_id}>{ *label }</a></li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-copyright" data-testid="footer-copyright">
                <p>{"© 2024 CVS Educational Institution × StudyWings Partnership. All rights reserved."}</p>
            </div>
        </footer>
    }
}
