use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod form_state;
mod submit;
mod components {
    pub mod footer;
    pub mod inquiry_form;
    pub mod notification;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod journey;
    pub mod opportunities;
    pub mod partnership;
    pub mod programs;
    pub mod stories;
}

use form_state::MobileMenu;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("#partnership", "Partnership", "partnership"),
    ("#programs", "Programs", "programs"),
    ("#journey", "Journey", "journey"),
    ("#opportunities", "Opportunities", "opportunities"),
    ("#success-stories", "Success Stories", "success"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MobileMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    // Anchor navigation still happens; only the menu closes.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.close());
        })
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 0 rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 4rem;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #1f2937;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #2563eb;
                        color: #fff;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #6b7280;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #2563eb;
                    }
                    .nav-contact-button {
                        padding: 0.5rem 1.1rem;
                        border-radius: 0.5rem;
                        background: #2563eb;
                        color: #fff;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #1f2937;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-right {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1.5rem;
                            background: #fff;
                            border-top: 1px solid #e5e7eb;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"🎓"}</span>
                    {"CVS × StudyWings"}
                </Link<Route>>
                <div class="nav-right">
                    { for NAV_LINKS.iter().map(|(href, label, id)| html! {
                        <a href={*href} class="nav-link" data-testid={format!("nav-{}", id)}>{ *label }</a>
                    }) }
                    <a href="#contact" class="nav-contact-button" data-testid="nav-contact-btn">{"Contact"}</a>
                </div>
                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if menu.is_open() { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu.is_open().to_string()}
                    data-testid="mobile-menu-toggle"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if menu.is_open() {
                <div class="mobile-menu open" data-testid="mobile-menu">
                    { for NAV_LINKS.iter().map(|(href, label, id)| html! {
                        <a
                            href={*href}
                            class="nav-link"
                            onclick={close_menu.clone()}
                            data-testid={format!("mobile-nav-{}", id)}
                        >
                            { *label }
                        </a>
                    }) }
                    <a href="#contact" class="nav-contact-button" onclick={close_menu.clone()} data-testid="mobile-nav-contact-btn">
                        {"Contact"}
                    </a>
                </div>
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
