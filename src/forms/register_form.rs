use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::api::{RegistrationApi, SubmitError, SubmitOutcome};
use crate::components::button::{BrandButton, Variant};
use crate::components::picker::{CountryPicker, NichePicker};
use crate::components::success_dialog::SuccessDialog;
use crate::components::toast::{LogNotifier, ToastHandle};
use crate::forms::models::{Field, RegistrationKind, ABOUT_MIN_LENGTH};
use crate::forms::register::{RegisterState, SubmitBlocked, SUCCESS_DETAILS};

/// CSS selector of the element that takes focus for the server field `name`.
/// Pickers focus their visible button; everything else its named input.
pub fn focus_selector(name: &str) -> String {
    match Field::from_name(name) {
        Some(field @ (Field::Country | Field::Niche)) => format!("#{}", field.name()),
        _ => format!("[name=\"{}\"]", name),
    }
}

/// Shared handle to the submission adapter. Equality is identity.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<dyn RegistrationApi>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub kind: RegistrationKind,
    pub api: ApiHandle,
}

pub enum RegisterMsg {
    SetField(Field, String),
    Select(Field, Option<String>),
    Submit,
    Finished(Result<SubmitOutcome, SubmitError>),
    CloseSuccess,
}

pub struct RegisterForm {
    state: RegisterState,
    form_ref: NodeRef,
    toasts: Option<ToastHandle>,
}

impl Component for RegisterForm {
    type Message = RegisterMsg;
    type Properties = RegisterFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let toasts = ctx
            .link()
            .context::<ToastHandle>(Callback::noop())
            .map(|(handle, _)| handle);

        Self {
            state: RegisterState::new(ctx.props().kind),
            form_ref: NodeRef::default(),
            toasts,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegisterMsg::SetField(field, value) => {
                self.state.set_field(field, value);
                true
            }
            RegisterMsg::Select(field, value) => {
                self.state.select(field, value);
                true
            }
            RegisterMsg::Submit => match self.state.begin_submit() {
                Ok(payload) => {
                    info!("Submitting {:?} registration", payload.kind);
                    let api = ctx.props().api.0.clone();
                    ctx.link().send_future(async move {
                        RegisterMsg::Finished(api.submit(&payload).await)
                    });
                    true
                }
                Err(SubmitBlocked::Invalid(violations)) => {
                    info!("Registration blocked by {} constraint(s)", violations.len());
                    if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                        form.report_validity();
                    }
                    false
                }
                Err(SubmitBlocked::InFlight) => false,
            },
            RegisterMsg::Finished(result) => {
                let focus = match &self.toasts {
                    Some(handle) => self.state.finish(result, handle),
                    None => self.state.finish(result, &LogNotifier),
                };
                if let Some(field) = focus {
                    self.focus_field(&field);
                }
                true
            }
            RegisterMsg::CloseSuccess => {
                self.state.close_success();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let kind = self.state.kind;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            RegisterMsg::Submit
        });
        let select = |field: Field| link.callback(move |value: Option<String>| RegisterMsg::Select(field, value));

        html! {
            <>
                <section class="register-section">
                    <style>
                        {r#".register-section {
                            max-width: 48rem;
                            margin: 0 auto;
                            padding: 2.5rem 1rem;
                        }
                        .register-card {
                            border-radius: 28px;
                            background: #F7F2EC;
                            padding: 1.5rem;
                            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                            animation: fadeUp 0.4s ease-out both;
                        }
                        .register-card h2 {
                            font-weight: 800;
                            color: #281900;
                            font-size: 1.5rem;
                            line-height: 1.2;
                            margin: 1.25rem 0 1.5rem;
                        }
                        .register-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                        }
                        .register-row {
                            display: grid;
                            grid-template-columns: 1fr;
                            gap: 1rem;
                        }
                        .field-error {
                            margin-top: 0.25rem;
                            font-size: 0.875rem;
                            color: #DC2626;
                        }
                        .spinner {
                            display: inline-block;
                            width: 1rem;
                            height: 1rem;
                            border: 2px solid #fff;
                            border-top-color: transparent;
                            border-radius: 50%;
                            animation: spin 1s linear infinite;
                        }
                        @media (min-width: 768px) {
                            .register-card { border-radius: 36px; padding: 2.5rem; }
                            .register-card h2 { font-size: 1.875rem; }
                            .register-row { grid-template-columns: 1fr 1fr; }
                        }"#}
                    </style>
                    <div class="register-card">
                        <BrandButton class="badge" right={html! { <img src={kind.icon()} alt="" class="icon" /> }}>
                            { kind.badge() }
                        </BrandButton>

                        <h2>{"Kindly, Fill the Form to"}<br />{"Complete Your Registration"}</h2>

                        <form ref={self.form_ref.clone()} class="register-form" onsubmit={onsubmit} novalidate=true>
                            { self.text_input(ctx, Field::FirstName, "text", "First Name") }
                            { self.text_input(ctx, Field::LastName, "text", "Last Name") }
                            <div class="register-row">
                                { self.text_input(ctx, Field::Email, "email", "Email") }
                                { self.text_input(ctx, Field::Phone, "tel", "Phone Number") }
                            </div>
                            <div>
                                <CountryPicker
                                    id={Field::Country.name()}
                                    required=true
                                    value={self.state.fields.country.clone()}
                                    on_change={select(Field::Country)}
                                    invalid={self.state.error_for(Field::Country).is_some()}
                                />
                                { self.error_line(Field::Country) }
                            </div>
                            <div>
                                <NichePicker
                                    id={Field::Niche.name()}
                                    required=true
                                    value={self.state.fields.niche.clone()}
                                    on_change={select(Field::Niche)}
                                    invalid={self.state.error_for(Field::Niche).is_some()}
                                />
                                { self.error_line(Field::Niche) }
                            </div>
                            { self.text_input(ctx, Field::Instagram, "text", "Input your Instagram Link") }
                            { self.text_input(ctx, Field::Tiktok, "text", "Input your Tiktok Link") }
                            <div>
                                <textarea
                                    name={Field::About.name()}
                                    class={self.field_classes(Field::About)}
                                    required=true
                                    minlength={ABOUT_MIN_LENGTH.to_string()}
                                    rows="6"
                                    placeholder="Tell us a bit about yourself"
                                    value={self.state.fields.about.clone()}
                                    aria-invalid={self.state.error_for(Field::About).is_some().to_string()}
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        RegisterMsg::SetField(Field::About, input.value())
                                    })}
                                />
                                { self.error_line(Field::About) }
                            </div>
                            <div class="register-submit">
                                <BrandButton
                                    button_type="submit"
                                    variant={Variant::Primary}
                                    disabled={self.state.submitting}
                                    right={
                                        if self.state.submitting {
                                            html! { <span class="spinner"></span> }
                                        } else {
                                            html! { <span>{"➤"}</span> }
                                        }
                                    }
                                >
                                    { if self.state.submitting { "Submitting..." } else { "Register" } }
                                </BrandButton>
                            </div>
                        </form>
                    </div>
                </section>

                <SuccessDialog
                    open={self.state.success_open}
                    on_close={link.callback(|_| RegisterMsg::CloseSuccess)}
                    title={self.state.dialog_title()}
                    subtitle={Some(AttrValue::from(self.state.dialog_subtitle()))}
                    details={Some(AttrValue::from(SUCCESS_DETAILS))}
                    cta_text="Okay"
                />
            </>
        }
    }
}

impl RegisterForm {
    fn field_classes(&self, field: Field) -> Classes {
        classes!("field", self.state.error_for(field).map(|_| "invalid"))
    }

    fn error_line(&self, field: Field) -> Html {
        match self.state.error_for(field) {
            Some(message) => html! { <p class="field-error">{ message }</p> },
            None => html! {},
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, input_type: &'static str, placeholder: &'static str) -> Html {
        html! {
            <div>
                <input
                    type={input_type}
                    name={field.name()}
                    class={self.field_classes(field)}
                    required={field.required()}
                    placeholder={placeholder}
                    value={self.state.fields.get(field).to_string()}
                    aria-invalid={self.state.error_for(field).is_some().to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        RegisterMsg::SetField(field, input.value())
                    })}
                />
                { self.error_line(field) }
            </div>
        }
    }

    /// Scrolls the input named `field` to the middle of the viewport and focuses it.
    fn focus_field(&self, field: &str) {
        let Some(form) = self.form_ref.cast::<HtmlFormElement>() else {
            return;
        };
        let selector = focus_selector(field);
        let Ok(Some(element)) = form.query_selector(&selector) else {
            return;
        };
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            let _ = element.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickers_focus_their_visible_button() {
        assert_eq!(focus_selector("country"), "#country");
        assert_eq!(focus_selector("niche"), "#niche");
    }

    #[test]
    fn other_fields_focus_the_named_input() {
        assert_eq!(focus_selector("email"), "[name=\"email\"]");
        assert_eq!(focus_selector("firstName"), "[name=\"firstName\"]");
        assert_eq!(focus_selector("unexpected"), "[name=\"unexpected\"]");
    }
}
