use chrono::Datelike;
use log::debug;
use yew::prelude::*;

use crate::components::carousel::TestimonialCarousel;
use crate::components::contact_form::ContactFormSection;
use crate::components::counter::Counter;
use crate::components::lightbox::Gallery;
use crate::components::reveal::{Reveal, RevealAnimation};
use crate::content::{self, BRAND, GALLERY, SERVICES, STATS, TESTIMONIALS};
use crate::utils::dom::scroll_to_section;

#[function_component(Home)]
pub fn home() -> Html {
    // Honour a #section in the URL once the sections exist
    use_effect_with_deps(
        |_| {
            if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
                let id = hash.trim_start_matches('#');
                if !id.is_empty() {
                    if let Err(e) = scroll_to_section(id) {
                        debug!("initial anchor ignored: {}", e);
                    }
                }
            }
            || ()
        },
        (),
    );

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = scroll_to_section("contact") {
            debug!("contact link: {}", e);
        }
    });

    let services = SERVICES.iter().enumerate().map(|(i, service)| {
        html! {
            <Reveal animation={RevealAnimation::FadeUp} delay_ms={i as u32 * 100} class="service-card">
                <div class="service-icon">{ service.icon }</div>
                <h3>{ service.title }</h3>
                <p>{ service.blurb }</p>
            </Reveal>
        }
    });

    let stats = STATS.iter().map(|stat| {
        html! {
            <div class="stat">
                <Counter target={stat.target.to_string()} suffix={stat.suffix} />
                <p>{ stat.label }</p>
            </div>
        }
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header id="home" class="hero">
                <div class="hero-background"></div>
                <Reveal animation={RevealAnimation::Fade} duration_ms={1000} class="hero-content">
                    <h1>{"Marketing that earns its keep."}</h1>
                    <p class="hero-subtitle">
                        {"Brightline is a small studio of strategists, designers and writers helping independent brands grow without the agency bloat."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta" onclick={to_contact.clone()}>{"Start a project"}</a>
                        <a href="#gallery" class="faq-link">{"See our work"}</a>
                    </div>
                </Reveal>
            </header>

            <section id="about" class="about-section">
                <Reveal animation={RevealAnimation::FadeRight}>
                    <h2>{"Who we are"}</h2>
                </Reveal>
                <Reveal animation={RevealAnimation::FadeLeft} delay_ms={150}>
                    <p>
                        {"We started Brightline in 2016 after too many years watching good products lose to louder ones. "}
                        {"Today we're twelve people across two cities, and every client works directly with the people doing the work."}
                    </p>
                </Reveal>
            </section>

            <section id="services" class="services-section">
                <Reveal><h2>{"What we do"}</h2></Reveal>
                <div class="services-grid">
                    { for services }
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div class="stats-grid">
                    { for stats }
                </div>
            </section>

            <section id="gallery" class="gallery-section">
                <Reveal><h2>{"Recent work"}</h2></Reveal>
                <Reveal animation={RevealAnimation::ZoomIn}>
                    <Gallery images={GALLERY.to_vec()} />
                </Reveal>
            </section>

            <section id="testimonials" class="testimonials-section">
                <Reveal animation={RevealAnimation::FadeDown}><h2>{"What clients say"}</h2></Reveal>
                <TestimonialCarousel testimonials={TESTIMONIALS.to_vec()} />
            </section>

            <section id="contact" class="contact-section">
                <Reveal><h2>{"Tell us about your project"}</h2></Reveal>
                <Reveal animation={RevealAnimation::FadeUp} delay_ms={100}>
                    <ContactFormSection />
                </Reveal>
            </section>

            <footer class="site-footer">
                <p>{ format!("© {} {} Studio. All rights reserved.", year, BRAND) }</p>
                <p class="footer-links">
                    { for content::SECTIONS.iter().skip(1).map(|s| html! {
                        <a href={format!("#{}", s.id)}>{ s.label }</a>
                    }) }
                </p>
            </footer>

            <style>
                {r#"
                    .landing-page section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        scroll-margin-top: 80px;
                    }
                    .landing-page h2 {
                        font-size: 2.5rem;
                        margin-bottom: 1.5rem;
                        text-align: center;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        text-align: center;
                        padding: 0 2rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 30% 20%, rgba(30, 144, 255, 0.25), transparent 60%), #1a1a1a;
                        z-index: -1;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #bbb;
                        max-width: 640px;
                        margin: 0 auto 2rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                    }
                    .faq-link {
                        color: #7EB2FF;
                    }
                    .about-section p {
                        font-size: 1.2rem;
                        line-height: 1.8;
                        color: #ccc;
                        text-align: center;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .service-icon {
                        font-size: 2rem;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat .counter {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #7EB2FF;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat .counter.counted {
                        color: #fff;
                        transition: color 0.6s ease;
                    }
                    .stat p {
                        color: #999;
                    }
                    .site-footer {
                        text-align: center;
                        padding: 3rem 2rem;
                        color: #777;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .footer-links a {
                        color: #999;
                        margin: 0 0.75rem;
                    }

                    .reveal {
                        opacity: 0;
                        transition-property: opacity, transform;
                        transition-timing-function: ease-out;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .reveal[data-reveal="fade-up"]:not(.revealed) { transform: translateY(40px); }
                    .reveal[data-reveal="fade-down"]:not(.revealed) { transform: translateY(-40px); }
                    .reveal[data-reveal="fade-left"]:not(.revealed) { transform: translateX(40px); }
                    .reveal[data-reveal="fade-right"]:not(.revealed) { transform: translateX(-40px); }
                    .reveal[data-reveal="zoom-in"]:not(.revealed) { transform: scale(0.9); }

                    @media (prefers-reduced-motion: reduce) {
                        .reveal, .reveal:not(.revealed) {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
