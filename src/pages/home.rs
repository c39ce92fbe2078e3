use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::contact::{ContactForm, PlanChoice};
use crate::components::reveal::Reveal;
use crate::config;
use crate::dom;

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter Plan",
        price: "$249",
        blurb: "A polished one-page site to get you online fast.",
        features: &[
            "Single landing page",
            "Mobile-first layout",
            "Contact form setup",
        ],
        featured: false,
    },
    Plan {
        name: "Pro Plan",
        price: "$649",
        blurb: "A multi-page site for growing businesses.",
        features: &[
            "Up to five pages",
            "Custom branding & copy polish",
            "Basic SEO and analytics",
            "One month of support",
        ],
        featured: true,
    },
    Plan {
        name: "Premium Plan",
        price: "$1,299",
        blurb: "Everything in Pro plus e-commerce and ongoing care.",
        features: &[
            "Online store or booking flow",
            "Content management handover",
            "Three months of support",
        ],
        featured: false,
    },
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    name: AttrValue,
    price: AttrValue,
    blurb: AttrValue,
    features: Vec<AttrValue>,
    #[prop_or_default]
    featured: bool,
    on_select: Callback<String>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // Plan label lives in the data attribute; visible button text is
            // the fallback.
            let label = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|button| {
                    button
                        .get_attribute("data-plan")
                        .or_else(|| button.text_content())
                })
                .map(|label| label.trim().to_string())
                .unwrap_or_default();
            if !label.is_empty() {
                on_select.emit(label);
            }
        })
    };

    html! {
        <div class={classes!("plan-card", props.featured.then_some("plan-featured"))}>
            <h3 class="plan-name">{ props.name.clone() }</h3>
            <p class="plan-price">{ props.price.clone() }</p>
            <p class="plan-blurb">{ props.blurb.clone() }</p>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
            </ul>
            <button
                type="button"
                class="btn btn-primary select-plan"
                data-plan={props.name.clone()}
                {onclick}
            >
                {"Select plan"}
            </button>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let selected_plan = use_state(|| None::<PlanChoice>);

    let on_select_plan = {
        let selected_plan = selected_plan.clone();
        Callback::from(move |label: String| {
            let seq = selected_plan
                .as_ref()
                .map_or(0, |choice: &PlanChoice| choice.seq)
                + 1;
            selected_plan.set(Some(PlanChoice { label, seq }));
        })
    };

    let scroll_cta = |target: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::scroll_to_section(target);
        })
    };

    html! {
        <main>
            <Reveal id="top" class="hero">
                <h1>{"Shumba Creations"}</h1>
                <p class="hero-tagline">
                    {"Websites, branding and online stores for small businesses that want to look anything but small."}
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="#pricing" data-scroll="true" onclick={scroll_cta("pricing")}>
                        {"See pricing"}
                    </a>
                    <a class="btn btn-outline" href="#contact" data-scroll="true" onclick={scroll_cta("contact")}>
                        {"Get in touch"}
                    </a>
                </div>
            </Reveal>

            <Reveal id="services" class="section">
                <h2>{"What we do"}</h2>
                <div class="service-grid">
                    <div class="service-card">
                        <h3>{"Web design"}</h3>
                        <p>{"Fast, mobile-first sites designed around your customers, not templates."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Branding"}</h3>
                        <p>{"Logos, colors and voice that stay consistent from storefront to social."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"E-commerce"}</h3>
                        <p>{"Simple stores and booking flows your team can actually run themselves."}</p>
                    </div>
                </div>
            </Reveal>

            <Reveal id="pricing" class="section">
                <h2>{"Pricing"}</h2>
                <p class="section-lead">{"Pick a plan and we prefill the contact form for you."}</p>
                <div class="plan-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <PlanCard
                            name={plan.name}
                            price={plan.price}
                            blurb={plan.blurb}
                            features={plan.features.iter().map(|f| AttrValue::from(*f)).collect::<Vec<_>>()}
                            featured={plan.featured}
                            on_select={on_select_plan.clone()}
                        />
                    }) }
                </div>
            </Reveal>

            <Reveal id="contact" class="section">
                <h2>{"Contact us"}</h2>
                <p class="section-lead">
                    {"Tell us about your project and we will get back within one working day."}
                </p>
                <ContactForm selected_plan={(*selected_plan).clone()} />
            </Reveal>

            <footer class="site-footer">
                <p>{"© 2024 Shumba Creations"}</p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
            </footer>

            <style>
                {r#"
                main {
                    color: #111827;
                }
                .hero {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: flex-start;
                    gap: 1.25rem;
                    padding: 6rem 1.5rem 4rem;
                    max-width: 960px;
                    margin: 0 auto;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin: 0;
                }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 36rem;
                    margin: 0;
                }
                .hero-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .section h2 {
                    font-size: 2rem;
                    margin: 0 0 0.5rem;
                }
                .section-lead {
                    color: #4b5563;
                    margin: 0 0 2rem;
                }
                .hero, .section {
                    opacity: 0;
                    transform: translateY(18px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .hero.in-view, .section.in-view {
                    opacity: 1;
                    transform: none;
                }
                .service-grid, .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.25rem;
                }
                .service-card, .plan-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    background: #fff;
                }
                .plan-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .plan-featured {
                    border-color: #2563eb;
                    box-shadow: 0 8px 24px rgba(37, 99, 235, 0.12);
                }
                .plan-name {
                    margin: 0;
                }
                .plan-price {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 0;
                }
                .plan-blurb {
                    color: #4b5563;
                    margin: 0;
                }
                .plan-features {
                    margin: 0 0 1rem;
                    padding-left: 1.1rem;
                    color: #374151;
                }
                .plan-features li {
                    margin: 0.25rem 0;
                }
                .plan-card .select-plan {
                    margin-top: auto;
                }
                .btn {
                    display: inline-block;
                    padding: 0.65rem 1.25rem;
                    border-radius: 8px;
                    border: 1px solid transparent;
                    font: inherit;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.15s ease-out;
                }
                .btn:hover {
                    transform: scale(1.05);
                }
                .btn-primary {
                    background: #2563eb;
                    color: #fff;
                }
                .btn-outline {
                    background: transparent;
                    color: #2563eb;
                    border-color: #2563eb;
                }
                .site-footer {
                    border-top: 1px solid #e5e7eb;
                    padding: 2rem 1.5rem;
                    max-width: 960px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    color: #6b7280;
                }
                .site-footer a {
                    color: inherit;
                }
                @media (max-width: 640px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .site-footer {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </main>
    }
}
