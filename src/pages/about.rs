use yew::prelude::*;
use yew_hooks::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    use_title("About Us | Jali".to_string());

    html! {
        <section class="about-page">
            <style>
                {r#".about-page {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                    animation: fadeUp 0.5s ease-out both;
                }
                .about-page h1 {
                    font-family: 'Dela Gothic One', sans-serif;
                    color: #281900;
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .about-page p {
                    max-width: 48rem;
                    color: rgba(40, 25, 0, 0.8);
                }
                @media (min-width: 768px) {
                    .about-page h1 { font-size: 3.75rem; }
                }"#}
            </style>
            <h1>{"About Us"}</h1>
            <p>{"We connect creators and brands through a curated label experience."}</p>
        </section>
    }
}
