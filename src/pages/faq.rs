use yew::prelude::*;
use web_sys::MouseEvent;

const FAQS: [(&str, &str); 5] = [
    (
        "What makes Jali different?",
        "We focus on connection, fairness, and growth. We help creators and brands work together transparently, not transactionally.",
    ),
    (
        "Is the Creators Label free to join?",
        "Yes. Joining is free. We review applications to make sure there’s a good fit, then provide tools, training and opportunities.",
    ),
    (
        "Do you work with all kind of business?",
        "We partner with businesses of all sizes that value creativity, fair terms, and long-term collaboration.",
    ),
    (
        "Can new creators join the Label?",
        "Absolutely. If you’re serious about improving your craft and working professionally with brands, we’ll help you grow.",
    ),
    (
        "Can small businesses or startups register?",
        "Yes. Many of our best partnerships start with SMEs and startups. We’ll help you find the right creators for your goals.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    #[prop_or_default]
    default_open: bool,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let default_open = props.default_open;
    let is_open = use_state(move || default_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button type="button" class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                if *is_open {
                    <span class="faq-minus"></span>
                } else {
                    <span class="faq-plus"><span></span><span></span></span>
                }
                <span class="question-text">{ props.question.clone() }</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="faq-section">
            <style>
                {r#".faq-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3.5rem 1rem;
                }
                .faq-section h2 {
                    text-align: center;
                    font-family: 'Dela Gothic One', sans-serif;
                    color: #281900;
                    font-size: 1.875rem;
                    letter-spacing: 0.05em;
                    line-height: 1.2;
                }
                .faq-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.25rem;
                }
                .faq-item {
                    border-radius: 16px;
                    border: 1px solid #E9E1D8;
                    background: #F3EFEB;
                }
                .faq-item.open { border-color: #E5DDD3; }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    gap: 1.25rem;
                    padding: 1.25rem 1.5rem;
                    text-align: left;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .question-text {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #281900;
                }
                .faq-minus {
                    display: inline-block;
                    flex-shrink: 0;
                    height: 0.25rem;
                    width: 1.5rem;
                    border-radius: 9999px;
                    background: #14D699;
                }
                .faq-plus {
                    position: relative;
                    display: inline-block;
                    flex-shrink: 0;
                    height: 1.5rem;
                    width: 1.5rem;
                }
                .faq-plus span {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    transform: translate(-50%, -50%);
                    border-radius: 9999px;
                    background: #281900;
                }
                .faq-plus span:first-child { height: 2px; width: 1.5rem; }
                .faq-plus span:last-child { height: 1.5rem; width: 2px; }
                .faq-answer {
                    padding: 0.25rem 1.5rem 1.5rem;
                    color: rgba(40, 25, 0, 0.6);
                    line-height: 1.7;
                    animation: fadeUp 0.25s ease-in-out;
                }
                @media (min-width: 768px) {
                    .faq-section { padding: 5rem 1rem; }
                    .faq-section h2 { font-size: 3rem; }
                    .faq-grid { grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                    .question-text { font-size: 1.25rem; }
                    .faq-answer { font-size: 1.125rem; }
                }"#}
            </style>
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-grid">
                { for FAQS.iter().enumerate().map(|(i, (question, answer))| html! {
                    <FaqItem key={i} question={*question} default_open={i == 0}>
                        { *answer }
                    </FaqItem>
                }) }
            </div>
        </section>
    }
}
