use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::HttpRegistrationApi;
use crate::forms::models::RegistrationKind;
use crate::forms::register_form::{ApiHandle, RegisterForm};

#[hook]
fn use_registration_api() -> ApiHandle {
    let api = use_memo(|_| ApiHandle(Rc::new(HttpRegistrationApi::from_config())), ());
    (*api).clone()
}

#[function_component(CreatorRegister)]
pub fn creator_register() -> Html {
    use_title("Join as a Creator | Jali".to_string());
    let api = use_registration_api();

    html! { <RegisterForm kind={RegistrationKind::Creator} api={api} /> }
}

#[function_component(BusinessRegister)]
pub fn business_register() -> Html {
    use_title("Register as a Brand | Jali".to_string());
    let api = use_registration_api();

    html! { <RegisterForm kind={RegistrationKind::Business} api={api} /> }
}
