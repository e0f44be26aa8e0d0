use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, Window};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config::{INITIAL_CHECK_DELAY_MS, REVEAL_SELECTOR};
use crate::listeners::throttled_scroll;
use crate::viewport::should_reveal;

const SERVICES: &[(&str, &str, &str)] = &[
    ("🌍", "Overseas Placement", "Verified openings with trusted employers across the Gulf, Europe and Southeast Asia."),
    ("🏢", "Domestic Recruitment", "Permanent and contract roles with growing companies close to home."),
    ("📄", "Resume Building", "Professionally written CVs that get past screening and in front of hiring managers."),
    ("🎤", "Interview Preparation", "Mock interviews and coaching tailored to the role you are applying for."),
    ("🛂", "Visa & Documentation", "End-to-end help with work permits, attestation and travel paperwork."),
];

const FEATURES: &[(&str, &str)] = &[
    ("Licensed & Trusted", "A registered recruitment agency with a transparent, fee-upfront policy."),
    ("Personal Guidance", "One consultant follows your application from first call to first day."),
    ("Wide Network", "Long-standing relationships with employers in over a dozen countries."),
];

const CONTACT_ITEMS: &[(&str, &str, &str)] = &[
    ("📍", "Visit Us", "2nd Floor, Main Road, Hyderabad"),
    ("📞", "Call Us", "+91 98765 43210"),
    ("✉️", "Email Us", "info@vrisaconsultancy.com"),
];

fn reveal_targets(document: &Document) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn hide_reveal_targets(document: &Document) {
    for element in reveal_targets(document) {
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
    }
}

fn reveal_in_view(window: &Window) {
    let Some(document) = window.document() else { return };
    let Some(viewport_height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    for element in reveal_targets(&document) {
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let style = element.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    }
}

fn mark_page_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
        let _ = body.style().set_property("opacity", "1");
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut listener = None;
            let mut initial_check = None;
            if let Some(window) = window() {
                if let Some(document) = window.document() {
                    hide_reveal_targets(&document);
                }
                listener = throttled_scroll(&window, {
                    let window = window.clone();
                    move || reveal_in_view(&window)
                });
                initial_check = Some(Timeout::new(INITIAL_CHECK_DELAY_MS, move || {
                    reveal_in_view(&window);
                    if let Some(document) = window.document() {
                        mark_page_loaded(&document);
                    }
                    debug!("Initial reveal check done");
                }));
            }
            move || {
                drop(initial_check);
                drop(listener);
            }
        },
        (),
    );

    html! {
        <main>
            <section id="home" class="hero">
                <div class="container hero__content">
                    <h1 class="hero__title">{"Your Next Career Move Starts Here"}</h1>
                    <p class="hero__subtitle">
                        {"Vrisa Job Consultancy connects skilled professionals with the right employers, at home and abroad."}
                    </p>
                    <a href="#contact" class="btn btn--primary btn--lg">{"Get in Touch"}</a>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">{"Our Services"}</h2>
                    <div class="services__grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="service-card">
                                <div class="service-card__icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title">{"Why Choose Us"}</h2>
                    <div class="about__features">
                        { for FEATURES.iter().map(|(title, text)| html! {
                            <div class="feature-item">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container contact__grid">
                    <div class="contact__info">
                        <h2 class="section-title">{"Contact Us"}</h2>
                        { for CONTACT_ITEMS.iter().map(|(icon, title, text)| html! {
                            <div class="contact-item">
                                <span class="contact-item__icon">{*icon}</span>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© Vrisa Job Consultancy. All rights reserved."}</p>
                </div>
            </footer>
        </main>
    }
}
