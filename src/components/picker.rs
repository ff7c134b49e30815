use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::reference::{filter_options, load_country_options, niche_options, HttpCountrySource, PickerOption};

/// Text for the empty selection. The loading variant wins only while loading.
pub fn shown_placeholder(
    loading: bool,
    placeholder: &AttrValue,
    loading_placeholder: Option<&AttrValue>,
) -> AttrValue {
    match (loading_placeholder, loading) {
        (Some(text), true) => text.clone(),
        _ => placeholder.clone(),
    }
}

/// Runs `apply` only while the owning component is still mounted.
pub fn apply_if_mounted<T>(mounted: &Cell<bool>, value: T, apply: impl FnOnce(T)) -> bool {
    if !mounted.get() {
        return false;
    }
    apply(value);
    true
}

#[derive(Properties, PartialEq)]
pub struct ReferencePickerProps {
    /// Doubles as the `name` of the hidden input native validation checks.
    pub id: AttrValue,
    pub options: Vec<PickerOption>,
    pub value: AttrValue,
    pub on_change: Callback<Option<String>>,
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub loading_placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub invalid: bool,
}

#[function_component(ReferencePicker)]
pub fn reference_picker(props: &ReferencePickerProps) -> Html {
    let open = use_state(|| false);
    let query = use_state(String::new);

    let empty_label =
        shown_placeholder(props.loading, &props.placeholder, props.loading_placeholder.as_ref());
    let current = props.options.iter().find(|o| o.value == props.value.as_str());
    let visible = filter_options(&props.options, &query);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };

    let on_query = {
        let query = query.clone();
        let open = open.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            open.set(true);
        })
    };

    let choose = |value: Option<String>| {
        let on_change = props.on_change.clone();
        let open = open.clone();
        let query = query.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(value.clone());
            query.set(String::new());
            open.set(false);
        })
    };

    html! {
        <div class={classes!("picker", props.invalid.then_some("invalid"))}>
            // Hidden input so the browser's `required` check covers the picker
            <input
                type="text"
                class="sr-only"
                name={props.id.clone()}
                value={props.value.clone()}
                required={props.required}
                tabindex="-1"
                aria-hidden="true"
            />
            <button type="button" id={props.id.clone()} class="picker-button field"
                aria-haspopup="listbox" aria-expanded={(*open).to_string()} aria-invalid={props.invalid.to_string()}
                onclick={toggle}>
                <span class={classes!("picker-value", props.value.is_empty().then_some("placeholder"))}>
                    { if props.value.is_empty() { empty_label.to_string() } else { props.value.to_string() } }
                </span>
                {
                    if let Some(src) = current.and_then(|o| o.image.clone()) {
                        html! { <img class="picker-flag" src={src} alt="" /> }
                    } else {
                        html! { <span class="picker-chevron">{"▾"}</span> }
                    }
                }
            </button>
            if *open {
                <div class="picker-panel">
                    <input
                        type="search"
                        class="picker-search"
                        placeholder="Search..."
                        value={(*query).clone()}
                        oninput={on_query}
                    />
                    <ul class="picker-options" role="listbox">
                        <li role="option" class="picker-option muted" onclick={choose(None)}>
                            { empty_label.clone() }
                        </li>
                        { for visible.iter().map(|option| {
                            let selected = option.value == props.value.as_str();
                            html! {
                                <li key={option.key.clone()} role="option" aria-selected={selected.to_string()}
                                    class={classes!("picker-option", selected.then_some("selected"))}
                                    onclick={choose(Some(option.value.clone()))}>
                                    if let Some(src) = option.image.clone() {
                                        <img class="picker-flag" src={src} alt="" loading="lazy" />
                                    }
                                    <span>{ &option.label }</span>
                                    if selected {
                                        <span class="picker-check">{"✓"}</span>
                                    }
                                </li>
                            }
                        }) }
                        if visible.is_empty() && !props.loading {
                            <li class="picker-empty">{"No matches"}</li>
                        }
                    </ul>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectionProps {
    pub id: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<Option<String>>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub invalid: bool,
}

#[function_component(CountryPicker)]
pub fn country_picker(props: &SelectionProps) -> Html {
    let options = use_state(Vec::<PickerOption>::new);
    let loading = use_state(|| true);

    {
        let options = options.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                let still_mounted = mounted.clone();
                spawn_local(async move {
                    let loaded = load_country_options(&HttpCountrySource::default()).await;
                    apply_if_mounted(&still_mounted, loaded, |loaded| {
                        options.set(loaded);
                        loading.set(false);
                    });
                });
                move || mounted.set(false)
            },
            (),
        );
    }

    html! {
        <ReferencePicker
            id={props.id.clone()}
            options={(*options).clone()}
            value={props.value.clone()}
            on_change={props.on_change.clone()}
            placeholder="Country"
            loading={*loading}
            loading_placeholder={Some(AttrValue::from("Loading countries..."))}
            required={props.required}
            invalid={props.invalid}
        />
    }
}

#[function_component(NichePicker)]
pub fn niche_picker(props: &SelectionProps) -> Html {
    let options = use_memo(|_| niche_options(), ());

    html! {
        <ReferencePicker
            id={props.id.clone()}
            options={(*options).clone()}
            value={props.value.clone()}
            on_change={props.on_change.clone()}
            placeholder="Select Your Niche"
            required={props.required}
            invalid={props.invalid}
        />
    }
}
