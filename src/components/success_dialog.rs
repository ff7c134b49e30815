use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SuccessDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub details: Option<AttrValue>,
    #[prop_or(AttrValue::from("Great!"))]
    pub cta_text: AttrValue,
}

/// Confirmation modal. Visibility belongs to the parent; both the backdrop and
/// the single button ask it to close.
#[function_component(SuccessDialog)]
pub fn success_dialog(props: &SuccessDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="dialog-root" role="dialog" aria-modal="true" aria-labelledby="success-dialog-title">
            <style>
                {r#".dialog-root {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .dialog-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(2px);
                    animation: dialogFade 0.2s ease-out;
                }
                .dialog-panel {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    border-radius: 24px;
                    background: #fff;
                    padding: 2rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: dialogPop 0.2s ease-out;
                }
                .dialog-check {
                    margin: 0 auto 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: #ECFDF5;
                    color: #059669;
                    animation: dialogCheck 0.35s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .dialog-panel h2 {
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 800;
                    color: #281900;
                }
                .dialog-subtitle {
                    margin-top: 0.5rem;
                    text-align: center;
                    color: #525252;
                }
                .dialog-details {
                    margin-top: 1rem;
                    border-radius: 16px;
                    background: #FAFAFA;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #404040;
                }
                .dialog-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: center;
                }
                .dialog-cta {
                    border: none;
                    border-radius: 16px;
                    background: #187DD0;
                    padding: 0.75rem 1.25rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .dialog-cta:hover { opacity: 0.95; }
                @keyframes dialogFade { from { opacity: 0; } to { opacity: 1; } }
                @keyframes dialogPop {
                    from { opacity: 0; transform: translateY(1rem) scale(0.95); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                @keyframes dialogCheck {
                    from { opacity: 0; transform: scale(0.6); }
                    to { opacity: 1; transform: scale(1); }
                }"#}
            </style>
            <div class="dialog-backdrop" onclick={close.clone()}></div>
            <div class="dialog-panel">
                <div class="dialog-check">
                    <svg viewBox="0 0 24 24" width="32" height="32">
                        <path fill="currentColor" d="M9.5 16.2 5.8 12.5l1.4-1.4 2.3 2.3 6.3-6.3 1.4 1.4z" />
                    </svg>
                </div>
                <h2 id="success-dialog-title">{ props.title.clone() }</h2>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class="dialog-subtitle">{ subtitle }</p>
                }
                if let Some(details) = props.details.clone() {
                    <p class="dialog-details">{ details }</p>
                }
                <div class="dialog-actions">
                    <button type="button" class="dialog-cta" onclick={close}>
                        { props.cta_text.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
