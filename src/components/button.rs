use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

pub fn button_classes(variant: Variant, large: bool, disabled: bool, extra: Classes) -> Classes {
    let mut classes = classes!(
        "brand-button",
        match variant {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
        },
        large.then_some("large"),
        disabled.then_some("disabled"),
    );
    classes.push(extra);
    classes
}

#[derive(Properties, PartialEq)]
pub struct BrandButtonProps {
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub large: bool,
    /// Renders a router link.
    #[prop_or_default]
    pub to: Option<Route>,
    /// Renders a plain anchor when `to` is absent.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub new_tab: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::from("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    /// Icon shown after the label.
    #[prop_or_default]
    pub right: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BrandButton)]
pub fn brand_button(props: &BrandButtonProps) -> Html {
    let classes = button_classes(props.variant, props.large, props.disabled, props.class.clone());
    let content = html! {
        <>
            <span class="brand-button-label">{ for props.children.iter() }</span>
            if let Some(right) = props.right.clone() {
                <span class="brand-button-icon">{ right }</span>
            }
        </>
    };
    let tab_index = props.disabled.then_some("-1");
    let aria_disabled = props.disabled.then_some("true");

    if let Some(route) = props.to.clone() {
        return html! {
            <Link<Route> to={route} classes={classes}>{ content }</Link<Route>>
        };
    }

    if let Some(href) = props.href.clone() {
        let (target, rel) = if props.new_tab {
            (Some("_blank"), Some("noopener noreferrer"))
        } else {
            (None, None)
        };
        return html! {
            <a href={href} class={classes} target={target} rel={rel}
                tabindex={tab_index} aria-disabled={aria_disabled}>
                { content }
            </a>
        };
    }

    let onclick = props.onclick.clone();
    html! {
        <button type={props.button_type.clone()} class={classes} disabled={props.disabled}
            onclick={Callback::from(move |e: MouseEvent| {
                if let Some(onclick) = &onclick {
                    onclick.emit(e);
                }
            })}>
            { content }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_the_default_variant() {
        let classes = button_classes(Variant::default(), false, false, Classes::new());
        assert!(classes.contains("brand-button"));
        assert!(classes.contains("primary"));
        assert!(!classes.contains("large"));
    }

    #[test]
    fn modifiers_and_extra_classes_are_appended() {
        let classes = button_classes(Variant::Secondary, true, true, classes!("w-full"));
        for class in ["secondary", "large", "disabled", "w-full"] {
            assert!(classes.contains(class), "missing {class}");
        }
        assert!(!classes.contains("primary"));
    }
}
