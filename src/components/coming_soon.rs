use yew::prelude::*;

use crate::components::button::{BrandButton, Variant};
use crate::Route;

pub const CONTACT_MAILTO: &str = "mailto:jali@gmail.com";

/// Bounds an optional progress figure to a percentage.
pub fn clamp_progress(progress: Option<i32>) -> Option<u8> {
    progress.map(|p| p.clamp(0, 100) as u8)
}

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    #[prop_or(AttrValue::from("This page is in development"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("We’re crafting something great. Check back soon!"))]
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::from("Launching soon"))]
    pub eta: AttrValue,
    #[prop_or(true)]
    pub show_notify: bool,
    /// Replaces the default Go Home / Contact Us pair.
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub progress: Option<i32>,
}

#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    let progress = clamp_progress(props.progress);

    let actions = props.actions.clone().unwrap_or_else(|| {
        html! {
            <>
                <BrandButton to={Route::Home} right={html! { <span>{"🏠"}</span> }}>
                    {"Go Home"}
                </BrandButton>
                <BrandButton variant={Variant::Secondary} href={CONTACT_MAILTO} right={html! { <span>{"✉️"}</span> }}>
                    {"Contact Us"}
                </BrandButton>
            </>
        }
    });

    html! {
        <section class="soft-page">
            <div class="soft-blob blue"></div>
            <div class="soft-blob orange"></div>
            <div class="soft-page-inner">
                <div class="soft-chip">
                    <span class="soft-chip-bar"></span>
                    <span>{"In Development"}</span>
                </div>
                <h1>{ props.title.clone() }</h1>
                <p class="soft-lead">{ props.subtitle.clone() }</p>

                if let Some(percent) = progress {
                    <div class="progress">
                        <div class="progress-labels">
                            <span>{"Progress"}</span>
                            <span>{ format!("{}%", percent) }</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-bar" style={format!("width: {}%;", percent)}></div>
                        </div>
                    </div>
                }

                <div class="soft-actions">{ actions }</div>

                if props.show_notify {
                    <form class="soft-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="soft-form-row">
                            <input type="email" required=true placeholder="Get notified, enter your email" />
                            <BrandButton button_type="submit" right={html! { <span>{"🚀"}</span> }}>
                                {"Notify Me"}
                            </BrandButton>
                        </div>
                        <div class="soft-form-eta">{ props.eta.clone() }</div>
                    </form>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_a_percentage() {
        assert_eq!(clamp_progress(Some(40)), Some(40));
        assert_eq!(clamp_progress(Some(-5)), Some(0));
        assert_eq!(clamp_progress(Some(250)), Some(100));
    }

    #[test]
    fn missing_progress_hides_the_bar() {
        assert_eq!(clamp_progress(None), None);
    }
}
