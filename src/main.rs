use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use web_sys::{window, KeyboardEvent, MouseEvent};

mod config;
mod content;
mod error;
mod hooks;
mod contact {
    pub mod email;
    pub mod validation;
}
mod utils {
    pub mod cycle;
    pub mod debounce;
    pub mod dom;
    pub mod frame;
    pub mod observer;
    pub mod tween;
}
mod components {
    pub mod back_to_top;
    pub mod carousel;
    pub mod contact_form;
    pub mod counter;
    pub mod lightbox;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::back_to_top::BackToTop;
use content::{BRAND, SECTIONS};
use hooks::use_window_scroll;
use pages::{home::Home, not_found::NotFound};
use utils::dom::{active_section, scroll_to_section, section_offsets};

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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);
    let scroll_y = use_window_scroll(config::SCROLL_DEBOUNCE_MS);
    let is_scrolled = scroll_y > config::NAV_SCROLLED_THRESHOLD_PX;

    // Scroll-spy, recomputed whenever the debounced offset moves
    {
        let active = active.setter();
        use_effect_with_deps(
            move |scroll_y| {
                let ids: Vec<&'static str> = content::section_ids();
                let offsets = section_offsets(&ids);
                active.set(active_section(&offsets, *scroll_y, config::SCROLL_SPY_OFFSET_PX));
                || ()
            },
            scroll_y,
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = SECTIONS.iter().map(|section| {
        let id = section.id;
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                if let Err(err) = scroll_to_section(id) {
                    // Not on the home page; let the router take us there
                    debug!("{}; navigating to /#{}", err, id);
                    if let Some(window) = window() {
                        let _ = window.location().set_href(&format!("/#{}", id));
                    }
                }
            })
        };
        html! {
            <a
                href={format!("#{}", id)}
                class={classes!("nav-link", (*active == Some(id)).then(|| "active"))}
                {onclick}
            >
                { section.label }
            </a>
        }
    });

    let menu_class = if *menu_open {
        "nav-right open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { BRAND }
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 950;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.92);
                        backdrop-filter: blur(10px);
                        padding: 0.75rem 2rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #bbb;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #7EB2FF;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(26, 26, 26, 0.97);
                            padding: 0 2rem;
                            max-height: 0;
                            overflow: hidden;
                            transition: max-height 0.3s ease, padding 0.3s ease;
                        }
                        .nav-right.open {
                            max-height: 420px;
                            padding: 1rem 2rem 1.5rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <BackToTop />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // A missing logger only costs us diagnostics
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
