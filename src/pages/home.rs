use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::{BrandButton, Variant};
use crate::pages::contact::ContactSection;
use crate::pages::faq::FaqSection;
use crate::Route;

/// (radius px, size px, orbit seconds, delay seconds, reverse)
const ORBITS: [(u32, u32, u32, f32, bool); 12] = [
    (140, 52, 52, 0.2, false),
    (180, 48, 58, 1.1, true),
    (220, 44, 46, 0.6, false),
    (260, 50, 64, 0.9, true),
    (300, 46, 54, 0.4, false),
    (340, 42, 70, 1.7, true),
    (380, 48, 60, 1.3, false),
    (420, 44, 66, 0.8, true),
    (460, 46, 72, 1.9, false),
    (500, 42, 62, 0.5, true),
    (540, 44, 68, 1.5, false),
    (580, 46, 76, 1.0, true),
];

const RING_SCALES: [f32; 5] = [0.28, 0.48, 0.68, 0.88, 1.1];

fn creator_icon() -> Html {
    html! { <img class="icon" src="/images/emoji.png" alt="" /> }
}

fn brand_icon() -> Html {
    html! { <img class="icon" src="/images/briefcase.png" alt="" /> }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title("Jali Creators Label".to_string());

    html! {
        <>
            <Hero />
            <WhyWork />
            <WhyJoin />
            <WhatYouGet />
            <ContactSection />
            <FaqSection />
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#".hero {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2rem 1rem 0;
                }
                .hero-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 32px;
                    background: #F2EDE7;
                    padding: 2.5rem 1.25rem;
                }
                .hero-blob {
                    position: absolute;
                    width: 6rem;
                    pointer-events: none;
                    user-select: none;
                }
                .hero-blob.red { top: -1.5rem; right: -1rem; }
                .hero-blob.yellow { bottom: 0; left: -1rem; }
                .hero-ring {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    border: 1px solid rgba(40, 25, 0, 0.1);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-content h1 {
                    font-family: 'Dela Gothic One', sans-serif;
                    color: #281900;
                    font-size: 2.25rem;
                    line-height: 1.15;
                    letter-spacing: 0.05em;
                }
                .hero-content p {
                    margin-top: 1.25rem;
                    color: rgba(40, 25, 0, 0.7);
                    font-size: 1.125rem;
                }
                .hero-actions {
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-orbits {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .orbit {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .orbit-arm { transform: translateX(var(--r)); }
                .orbit-avatar {
                    border-radius: 9999px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    outline: 2px solid rgba(255, 255, 255, 0.6);
                    animation: bob 3.2s ease-in-out infinite;
                }
                .orbit-avatar img { width: 100%; height: 100%; object-fit: cover; }
                @keyframes orbit { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                @keyframes orbit-rev { from { transform: rotate(360deg); } to { transform: rotate(0deg); } }
                @keyframes bob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }
                @media (min-width: 640px) {
                    .hero-actions { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .hero-card { border-radius: 48px; padding: 3rem; }
                    .hero-blob { width: 13rem; }
                    .hero-blob.yellow { bottom: -2.5rem; left: -3.5rem; }
                    .hero-content { margin-top: 3rem; }
                    .hero-content p { font-size: 1.5rem; }
                    .hero-actions { margin-top: 3rem; gap: 1.5rem; }
                }
                @media (min-width: 1024px) {
                    .hero-content h1 { font-size: 3.75rem; }
                }
                @media (max-width: 1024px) {
                    .orbit-arm { transform: translateX(calc(var(--r) * .62)); }
                }
                @media (max-width: 640px) {
                    .orbit-arm { transform: translateX(calc(var(--r) * .50)); }
                }"#}
            </style>
            <div class="hero-card">
                <img class="hero-blob red" src="/images/red.png" alt="" loading="lazy" />
                <img class="hero-blob yellow" src="/images/yellow.png" alt="" loading="lazy" />
                <div class="hero-rings">
                    { for RING_SCALES.iter().map(|scale| html! {
                        <div class="hero-ring" style={format!("transform: scale({});", scale)}></div>
                    }) }
                </div>

                <div class="hero-content">
                    <h1>
                        <span class="block">{"We Make Creators"}</span>
                        <span class="block">{"& Brands Grow Together"}</span>
                    </h1>
                    <p>{"Jali Creators Label built to empower collaboration, creativity, and fair growth."}</p>
                    <div class="hero-actions">
                        <BrandButton to={Route::RegisterCreator} right={creator_icon()}>
                            {"Join as a Creator"}
                        </BrandButton>
                        <BrandButton variant={Variant::Secondary} to={Route::RegisterBusiness} right={brand_icon()}>
                            {"Register as a Brand"}
                        </BrandButton>
                    </div>
                </div>

                <div class="hero-orbits">
                    { for ORBITS.iter().enumerate().map(|(i, (radius, size, duration, delay, reverse))| {
                        let spin = format!(
                            "animation: {} {}s linear infinite; animation-delay: {}s;",
                            if *reverse { "orbit-rev" } else { "orbit" },
                            duration,
                            delay,
                        );
                        html! {
                            <div class="orbit" style={spin}>
                                <div class="orbit-arm" style={format!("--r: {}px;", radius)}>
                                    <div class="orbit-avatar"
                                        style={format!("width: {size}px; height: {size}px; animation-delay: {delay}s;")}>
                                        <img src={format!("/images/avatars/{}.png", i + 1)} alt="" loading="lazy" />
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct InfoCardProps {
    tone: &'static str,
    image: &'static str,
    title: &'static str,
    body: &'static str,
}

#[function_component(InfoCard)]
fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <article class={classes!("info-card", props.tone)}>
            <div class="pill-image">
                <img src={props.image} alt="" loading="lazy" />
                <div class="pill-shade"></div>
            </div>
            <h3>
                { for props.title.split('\n').map(|line| html! { <span class="block">{ line }</span> }) }
            </h3>
            { for props.body.split("\n\n").map(|para| html! { <p>{ para }</p> }) }
        </article>
    }
}

#[function_component(WhyWork)]
fn why_work() -> Html {
    html! {
        <section class="why-work">
            <style>
                {r#".why-work {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2.5rem 1rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .info-card {
                    border-radius: 36px;
                    padding: 1.5rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .info-card:hover { transform: translateY(-6px); }
                .info-card.blue { background: #187DD0; }
                .info-card.orange { background: #EB8715; }
                .info-card h3 {
                    font-family: 'Dela Gothic One', sans-serif;
                    font-size: 1.5rem;
                    line-height: 1.2;
                }
                .info-card p { line-height: 1.6; opacity: 0.95; }
                .pill-image {
                    position: relative;
                    max-width: 520px;
                    height: 5rem;
                    overflow: hidden;
                    border-radius: 16px;
                }
                .pill-image img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .pill-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.45); }
                @media (min-width: 768px) {
                    .why-work { grid-template-columns: 1fr 1fr; gap: 2.5rem; padding: 3.5rem 1rem; }
                    .info-card { padding: 2rem; }
                    .info-card h3 { font-size: 1.875rem; }
                    .pill-image { height: 6rem; }
                }"#}
            </style>
            <InfoCard
                tone="blue"
                image="/images/pic1.png"
                title={"Why Work With\nOur Creators"}
                body={"Our creators are not just content makers, they’re culture shapers and storytellers trained by the Jali Creator Label.\n\nEach one is vetted, trained, and supported to deliver stories that inspire, influence, and convert."}
            />
            <InfoCard
                tone="orange"
                image="/images/pic2.png"
                title={"Why Work With\nOur Businesses"}
                body={"The businesses registered under Jali share our commitment to creativity, fairness, and mutual growth.\n\nThey believe in creators, respecting intellectual property, and building long-term partnerships."}
            />
        </section>
    }
}

#[function_component(WhyJoin)]
fn why_join() -> Html {
    html! {
        <section class="why-join">
            <style>
                {r#".why-join {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3.5rem 1rem;
                    display: grid;
                    align-items: center;
                    gap: 2.5rem;
                }
                .why-join-image {
                    border-radius: 48px;
                    overflow: hidden;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    animation: fadeUp 0.5s ease-out both;
                }
                .why-join-image img { width: 100%; height: auto; object-fit: cover; display: block; }
                .why-join-copy {
                    text-align: center;
                    animation: fadeUp 0.5s ease-out 0.1s both;
                }
                .why-join-copy h2 {
                    font-family: 'Dela Gothic One', sans-serif;
                    color: #281900;
                    font-size: 2.25rem;
                    line-height: 1.15;
                    letter-spacing: 0.05em;
                }
                .why-join-copy p {
                    margin: 1.5rem auto 0;
                    max-width: 36rem;
                    color: rgba(40, 25, 0, 0.7);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .why-join-copy .brand-button { margin-top: 2rem; }
                @media (min-width: 768px) {
                    .why-join { grid-template-columns: 1fr 1fr; gap: 3.5rem; }
                    .why-join-image { order: 2; }
                    .why-join-copy { order: 1; text-align: left; }
                    .why-join-copy h2 { font-size: 3rem; }
                    .why-join-copy p { margin-left: 0; font-size: 1.25rem; }
                }"#}
            </style>
            <div class="why-join-image">
                <img src="/images/cards-on-wall.png" alt="Sticky notes on a planning board" loading="lazy" />
            </div>
            <div class="why-join-copy">
                <h2>{"Why Join Our"}<br />{"Creators Label?"}</h2>
                <p>
                    {"We build bridges that grow both sides. We do this in a space built on trust, transparency, and collaboration."}
                </p>
                <p>
                    {"Whether you’re a creator looking to grow your career or a business seeking visibility, we give you the systems, partnerships, and support to make real growth happen."}
                </p>
                <BrandButton variant={Variant::Secondary} to={Route::About} right={html! { <span>{"›"}</span> }}>
                    {"More About Us"}
                </BrandButton>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    tone: &'static str,
    label: &'static str,
    blurb: &'static str,
    bullets: [&'static str; 4],
    image: &'static str,
}

#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    html! {
        <article class={classes!("benefit-card", props.tone)}>
            <div class="benefit-pattern"></div>
            <div class="benefit-layout">
                <div>
                    <span class="benefit-label">{ props.label.to_uppercase() }</span>
                    <h3>{"What You Get From Joining Our Label"}</h3>
                    <p>{ props.blurb }</p>
                    <ul>
                        { for props.bullets.iter().map(|b| html! { <li>{ *b }</li> }) }
                    </ul>
                </div>
                <div class="benefit-image">
                    <img src={props.image} alt="" loading="lazy" />
                </div>
            </div>
        </article>
    }
}

#[function_component(WhatYouGet)]
fn what_you_get() -> Html {
    html! {
        <section class="what-you-get">
            <style>
                {r#".what-you-get {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .benefit-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 36px;
                    color: #F2EDE7;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .benefit-card:hover { transform: translateY(-6px); }
                .benefit-card.blue { background-color: #187DD0; }
                .benefit-card.orange { background-color: #EB8715; }
                .benefit-pattern {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background-image: url('/images/pattern.png');
                    background-size: cover;
                    background-position: center;
                }
                .benefit-layout {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 1.5rem;
                }
                .benefit-label {
                    display: inline-block;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.15);
                    padding: 0.25rem 0.75rem;
                    font-size: 11px;
                    font-weight: 800;
                    letter-spacing: 0.05em;
                }
                .benefit-card h3 {
                    margin-top: 1rem;
                    font-family: 'Dela Gothic One', sans-serif;
                    font-size: 1.5rem;
                    line-height: 1.2;
                }
                .benefit-card p { margin-top: 0.75rem; max-width: 42rem; line-height: 1.6; }
                .benefit-card ul {
                    margin-top: 1.25rem;
                    display: grid;
                    gap: 0.5rem 2.5rem;
                    list-style: none;
                    padding: 0;
                }
                .benefit-card li { position: relative; padding-left: 1.25rem; }
                .benefit-card li::before {
                    content: '';
                    position: absolute;
                    left: 0;
                    top: 0.55rem;
                    width: 6px;
                    height: 6px;
                    border-radius: 9999px;
                    background: #fff;
                }
                .benefit-image {
                    height: 220px;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                }
                .benefit-image img {
                    max-height: 100%;
                    width: auto;
                    mix-blend-mode: screen;
                    filter: drop-shadow(0 8px 24px rgba(0, 0, 0, 0.25));
                    pointer-events: none;
                    user-select: none;
                }
                @media (min-width: 640px) {
                    .benefit-card ul { grid-template-columns: 1fr 1fr; }
                    .benefit-layout { padding: 2rem; }
                    .benefit-card h3 { font-size: 1.875rem; }
                }
                @media (min-width: 768px) {
                    .benefit-layout { grid-template-columns: 1fr 420px; gap: 2.5rem; padding: 2.5rem; }
                    .benefit-card h3 { font-size: 2.25rem; }
                    .benefit-image { height: 280px; }
                }"#}
            </style>
            <BenefitCard
                tone="blue"
                label="For Creators"
                blurb="Jali helps creators turn content into career growth. From mentorship to brand deals, we give you the tools and partnerships to grow sustainably."
                bullets={[
                    "Brand campaigns",
                    "Good payments",
                    "Training, Growth tools, & strategy support",
                    "A community that pushes you higher",
                ]}
                image="/images/emoji.png"
            />
            <BenefitCard
                tone="orange"
                label="For Businesses"
                blurb="We help brands find creators who get it. No bots, no random collabs, just creators who fit your message, voice, and goals."
                bullets={[
                    "Access to vetted, professional creators",
                    "Custom campaign planning & strategy",
                    "Authentic storytelling that converts",
                    "Transparent results & analytics",
                ]}
                image="/images/briefcase.png"
            />
        </section>
    }
}
