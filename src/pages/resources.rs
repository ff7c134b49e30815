use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::coming_soon::ComingSoon;

#[function_component(Resources)]
pub fn resources() -> Html {
    use_title("Resources | Jali".to_string());

    html! {
        <ComingSoon
            title="Resources are coming soon"
            subtitle="Guides, templates, and best practices for creators and businesses."
            eta="First drop rolling out soon"
            progress={Some(40)}
        />
    }
}
