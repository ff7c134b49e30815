use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{BrandButton, Variant};
use crate::Route;

const SOCIALS: [(&str, &str, &str); 5] = [
    ("Facebook", "https://facebook.com", "/images/social/facebook.svg"),
    ("X", "https://x.com", "/images/social/x.svg"),
    ("Instagram", "https://instagram.com", "/images/social/instagram.svg"),
    ("LinkedIn", "https://linkedin.com", "/images/social/linkedin.svg"),
    ("YouTube", "https://youtube.com", "/images/social/youtube.svg"),
];

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {} Jali | All Rights Reserved", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#".site-footer {
                    border-top: 1px solid rgba(40, 25, 0, 0.1);
                    background: #FBF7F2;
                    padding: 0 1rem;
                }
                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1.25rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .footer-top, .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .footer-logo img { width: 10rem; }
                .footer-ctas { display: flex; flex-direction: column; gap: 1rem; }
                .footer-bottom { align-items: center; }
                .footer-copy { text-align: center; color: rgba(40, 25, 0, 0.7); font-size: 0.875rem; }
                .footer-socials { display: flex; align-items: center; gap: 1.25rem; }
                .footer-socials a:hover { opacity: 0.7; }
                .footer-socials img { width: 1.1rem; height: 1.1rem; }
                @media (min-width: 768px) {
                    .site-footer { padding: 0; }
                    .footer-inner { padding: 2.5rem 0; gap: 4rem; }
                    .footer-top, .footer-bottom { flex-direction: row; align-items: center; justify-content: space-between; }
                    .footer-logo img { width: 201px; }
                    .footer-ctas { flex-direction: row; align-items: center; }
                    .footer-copy { font-size: 1rem; }
                }"#}
            </style>
            <div class="footer-inner">
                <div class="footer-top">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src="/images/logo.png" alt="Jali" />
                    </Link<Route>>
                    <div class="footer-ctas">
                        <BrandButton to={Route::RegisterCreator}
                            right={html! { <img class="icon" src="/images/emoji.png" alt="" /> }}>
                            {"Join as a Creator"}
                        </BrandButton>
                        <BrandButton variant={Variant::Secondary} to={Route::RegisterBusiness}
                            right={html! { <img class="icon" src="/images/briefcase.png" alt="" /> }}>
                            {"Register as a Brand"}
                        </BrandButton>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copy">{ copyright_line(year) }</p>
                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|(label, href, icon)| html! {
                            <a key={*label} href={*href} aria-label={*label} target="_blank" rel="noopener noreferrer">
                                <img src={*icon} alt="" />
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_given_year() {
        assert_eq!(copyright_line(2026), "Copyright © 2026 Jali | All Rights Reserved");
    }
}
