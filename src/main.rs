use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod reference;
mod components {
    pub mod button;
    pub mod coming_soon;
    pub mod footer;
    pub mod picker;
    pub mod success_dialog;
    pub mod toast;
}
mod forms {
    pub mod models;
    pub mod register;
    pub mod register_form;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod register;
    pub mod resources;
}

use components::footer::Footer;
use components::toast::ToastProvider;
use pages::{
    about::About,
    home::Home,
    not_found::NotFound,
    register::{BusinessRegister, CreatorRegister},
    resources::Resources,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/resources")]
    Resources,
    #[at("/register/creator")]
    RegisterCreator,
    #[at("/register/business")]
    RegisterBusiness,
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
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Resources => {
            info!("Rendering Resources page");
            html! { <Resources /> }
        },
        Route::RegisterCreator => {
            info!("Rendering Creator registration page");
            html! { <CreatorRegister /> }
        },
        Route::RegisterBusiness => {
            info!("Rendering Business registration page");
            html! { <BusinessRegister /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

const TABS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("About Us", Route::About),
    ("Resources", Route::Resources),
];

/// Root only matches itself; other tabs also match their sub-paths.
pub fn is_tab_active(path: &str, target: &str) -> bool {
    path == target || (target != "/" && path.starts_with(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .as_ref()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 8);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            menu_open.set(false);
            || ()
        }, path.clone());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let tabs = |mobile: bool| -> Html {
        html! {
            <ul class={if mobile { "nav-tabs-mobile" } else { "nav-tabs" }}>
                { for TABS.iter().map(|(label, route)| {
                    let active = is_tab_active(&path, &route.to_path());
                    html! {
                        <li key={*label}>
                            <Link<Route> to={route.clone()} classes={classes!("nav-tab", active.then_some("active"))}>
                                { *label }
                            </Link<Route>>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    let chat = html! {
        <a href="/#contact" class="nav-chat">
            <span>{"Chat With Us"}</span>
            <img src="/images/chat.png" alt="" />
        </a>
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/images/logo.png" alt="Jali" />
                </Link<Route>>

                <nav class="nav-desktop">{ tabs(false) }</nav>
                <div class="nav-desktop">{ chat.clone() }</div>

                <button class="burger-menu" aria-label="Toggle menu" aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={classes!("nav-mobile", (*menu_open).then_some("mobile-menu-open"))}>
                { tabs(true) }
                <div class="nav-mobile-chat">{ chat }</div>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="app-shell">
                    <Nav />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </ToastProvider>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_tab_only_matches_the_root() {
        assert!(is_tab_active("/", "/"));
        assert!(!is_tab_active("/about", "/"));
    }

    #[test]
    fn nested_paths_keep_their_tab_active() {
        assert!(is_tab_active("/resources", "/resources"));
        assert!(is_tab_active("/resources/guides", "/resources"));
        assert!(!is_tab_active("/register/creator", "/about"));
    }

    #[test]
    fn tabs_point_at_their_routes() {
        let paths: Vec<String> = TABS.iter().map(|(_, route)| route.to_path()).collect();
        assert_eq!(paths, ["/", "/about", "/resources"]);
    }
}
