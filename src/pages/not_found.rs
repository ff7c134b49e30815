use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

use crate::components::button::{BrandButton, Variant};
use crate::components::coming_soon::CONTACT_MAILTO;
use crate::Route;

/// Client-side target for the search box, or `None` when there is nothing to
/// search for.
pub fn search_href(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("/search?q={}", urlencoding::encode(query)))
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("Page not found | Jali".to_string());
    let navigator = use_navigator();
    let query = use_state(String::new);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(href) = search_href(&query) else {
                return;
            };
            info!("Searching for {:?}", *query);
            // Same history the router listens to, so no page reload
            BrowserHistory::new().push(href);
        })
    };

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <section class="soft-page">
            <div class="soft-blob blue"></div>
            <div class="soft-blob orange"></div>
            <div class="soft-page-inner">
                <div class="soft-chip">
                    <span class="soft-chip-dot"></span>
                    <span>{"404"}</span>
                </div>
                <h1>{"Page not found"}</h1>
                <p class="soft-lead">
                    {"The link may be broken or the page might have moved. Try searching or head back home."}
                </p>

                <form class="soft-form" role="search" onsubmit={on_search}>
                    <div class="soft-form-row">
                        <input
                            type="search"
                            placeholder="Search Jali…"
                            aria-label="Search"
                            value={(*query).clone()}
                            oninput={on_input}
                        />
                        <BrandButton button_type="submit" right={html! { <span>{"🔎"}</span> }}>
                            {"Search"}
                        </BrandButton>
                    </div>
                </form>

                <div class="soft-actions">
                    <BrandButton to={Route::Home} right={html! { <span>{"🏠"}</span> }}>{"Go Home"}</BrandButton>
                    <BrandButton variant={Variant::Secondary} onclick={go_back} right={html! { <span>{"↩︎"}</span> }}>
                        {"Go Back"}
                    </BrandButton>
                    <BrandButton variant={Variant::Secondary} href={CONTACT_MAILTO} right={html! { <span>{"✉️"}</span> }}>
                        {"Contact Us"}
                    </BrandButton>
                </div>

                <div class="soft-links">
                    {"Try: "}
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    {" · "}
                    <Link<Route> to={Route::Resources}>{"Resources"}</Link<Route>>
                    {" · "}
                    <Link<Route> to={Route::RegisterCreator}>{"Creators"}</Link<Route>>
                    {" · "}
                    <Link<Route> to={Route::RegisterBusiness}>{"Businesses"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_do_not_navigate() {
        assert_eq!(search_href(""), None);
        assert_eq!(search_href("   "), None);
    }

    #[test]
    fn search_target_is_an_in_app_path() {
        let href = search_href("fashion").unwrap_or_default();
        assert!(href.starts_with("/search?q="));
        assert!(!href.contains("://"));
    }

    #[test]
    fn queries_are_url_encoded() {
        assert_eq!(search_href("brand deals").as_deref(), Some("/search?q=brand%20deals"));
        assert_eq!(search_href("a&b").as_deref(), Some("/search?q=a%26b"));
    }
}
