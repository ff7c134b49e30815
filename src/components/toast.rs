use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Sink for user-facing feedback. The registration form reports through this
/// instead of reaching for a global.
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: String);

    fn success(&self, message: String) {
        self.notify(ToastLevel::Success, message);
    }

    fn error(&self, message: String) {
        self.notify(ToastLevel::Error, message);
    }
}

/// Used when a component renders outside a `ToastProvider`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: ToastLevel, message: String) {
        match level {
            ToastLevel::Success => log::info!("{}", message),
            ToastLevel::Error => log::warn!("{}", message),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<(ToastLevel, String)>,
}

impl Notifier for ToastHandle {
    fn notify(&self, level: ToastLevel, message: String) {
        self.push.emit((level, message));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl ToastList {
    fn apply(mut self, action: ToastAction) -> Self {
        match action {
            ToastAction::Push(toast) => self.toasts.push(toast),
            ToastAction::Dismiss(id) => self.toasts.retain(|t| t.id != id),
        }
        self
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let handle = {
        let dispatcher = list.dispatcher();
        use_memo(
            move |_| {
                ToastHandle {
                    push: Callback::from(move |(level, message): (ToastLevel, String)| {
                        let id = {
                            let mut next = next_id.borrow_mut();
                            let id = *next;
                            *next = next.wrapping_add(1);
                            id
                        };
                        dispatcher.dispatch(ToastAction::Push(Toast { id, level, message }));
                        let dispatcher = dispatcher.clone();
                        Timeout::new(DISMISS_AFTER_MS, move || {
                            dispatcher.dispatch(ToastAction::Dismiss(id));
                        })
                        .forget();
                    }),
                }
            },
            (),
        )
    };

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                <style>
                    {r#".toast-stack {
                        position: fixed;
                        top: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        z-index: 60;
                    }
                    .toast {
                        min-width: 260px;
                        max-width: 90vw;
                        padding: 0.75rem 1.25rem;
                        border-radius: 14px;
                        background: #fff;
                        color: #281900;
                        font-weight: 600;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                        border-left: 6px solid #14D699;
                        cursor: pointer;
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast.error {
                        border-left-color: #E5484D;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-8px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }"#}
                </style>
                { for list.toasts.iter().map(|toast| {
                    let dispatcher = list.dispatcher();
                    let id = toast.id;
                    let level_class = match toast.level {
                        ToastLevel::Success => "success",
                        ToastLevel::Error => "error",
                    };
                    html! {
                        <div key={id} class={classes!("toast", level_class)} role="status"
                            onclick={Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))}>
                            { &toast.message }
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, level: ToastLevel, message: &str) -> Toast {
        Toast { id, level, message: message.into() }
    }

    #[test]
    fn pushed_toasts_stack_in_order() {
        let list = ToastList::default()
            .apply(ToastAction::Push(toast(0, ToastLevel::Success, "one")))
            .apply(ToastAction::Push(toast(1, ToastLevel::Error, "two")));
        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(list.toasts[1].level, ToastLevel::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = ToastList::default()
            .apply(ToastAction::Push(toast(0, ToastLevel::Success, "one")))
            .apply(ToastAction::Push(toast(1, ToastLevel::Error, "two")))
            .apply(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "two");

        let unchanged = list.clone().apply(ToastAction::Dismiss(42));
        assert_eq!(unchanged, list);
    }
}
