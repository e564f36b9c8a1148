use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::config;
use crate::dom;
use crate::hooks::reveal::{use_reveal, RevealTarget};
use crate::pages::about::{SectionQuery, PRICING_SECTION};
use crate::state::visibility::RevealId;
use crate::Route;

const WHY: RevealId = RevealId("why");
const SERVICES: RevealId = RevealId("services");
const VISIT_TITLE: RevealId = RevealId("visit-title");
const VISIT_ADDRESS: RevealId = RevealId("visit-address");
const VISIT_MAP: RevealId = RevealId("visit-map");

const REASONS: [(&str, &str); 4] = [
    ("Accurate Measurement", "Digital scales ensure you get exactly what you pay for"),
    ("Quality Gas", "Premium LPG from certified suppliers"),
    ("Fair Pricing", "Transparent pricing with no hidden fees"),
    ("Safety First", "Trained staff and proper equipment handling"),
];

fn services() -> [(&'static str, String); 4] {
    [
        ("LPG Refilling", format!("All cylinder sizes ({})", config::REFILL_SIZES)),
        ("Cylinder Exchange", "Safe exchange program with proper inspection".to_string()),
        ("Home Delivery", "Prompt delivery within Aba and surrounding areas".to_string()),
        ("Safety Checks", "Free safety inspection of your gas setup".to_string()),
    ]
}

/// `delay-N` class for the Nth item of a staggered grid; the first has none.
fn stagger_class(index: usize) -> Option<String> {
    (index > 0).then(|| format!("delay-{}", index.min(3)))
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    use_mount(dom::scroll_to_top);

    let why_ref = use_node_ref();
    let services_ref = use_node_ref();
    let visit_title_ref = use_node_ref();
    let visit_address_ref = use_node_ref();
    let visit_map_ref = use_node_ref();

    let visible = use_reveal(vec![
        RevealTarget::new(WHY, &why_ref),
        RevealTarget::new(SERVICES, &services_ref),
        RevealTarget::new(VISIT_TITLE, &visit_title_ref),
        RevealTarget::new(VISIT_ADDRESS, &visit_address_ref),
        RevealTarget::new(VISIT_MAP, &visit_map_ref),
    ]);

    let go_to_contact = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
        })
    };

    let go_to_prices = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            let query = SectionQuery {
                section: PRICING_SECTION.to_string(),
            };
            if let Err(e) = navigator.push_with_query(&Route::About, &query) {
                log::warn!("could not open price list: {:?}", e);
                navigator.push(&Route::About);
            }
        }
    });

    html! {
        <main>
            <section class="hero">
                <div class="container hero__content">
                    <h1 class="animate-on-load">{"Accurate Gas. Honest Weight."}</h1>
                    <p class="animate-on-load delay-1">
                        {"High-quality cooking gas measured accurately with modern equipment. We ensure you get exactly what you pay for, every single time."}
                    </p>
                    <div class="hero__actions animate-on-load delay-2">
                        <button class="btn btn--primary btn--full" onclick={go_to_contact.clone()}>
                            {"Get Directions"}
                        </button>
                        <button class="btn btn--secondary btn--full" onclick={go_to_prices}>
                            {"Today's Price"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="why">
                <div class="container">
                    <h2 ref={why_ref} class={classes!("reveal", visible.class(WHY))}>
                        {"Why Choose Homanol"}
                    </h2>
                    <div class="why__grid">
                        { for REASONS.iter().enumerate().map(|(i, (title, body))| html! {
                            <div
                                key={*title}
                                class={classes!("why__item", "reveal", stagger_class(i), visible.class(WHY))}
                            >
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="price">
                <div class="container">
                    <div ref={services_ref} class={classes!("price__card", "reveal", visible.class(SERVICES))}>
                        <h2>{"Our Services"}</h2>
                        <div class="services-list">
                            { for services().into_iter().map(|(title, body)| html! {
                                <div key={title} class="service-item">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="map">
                <div class="container">
                    <h2 ref={visit_title_ref} class={classes!("reveal", visible.class(VISIT_TITLE))}>
                        {"Visit Us Today"}
                    </h2>
                    <p ref={visit_address_ref} class={classes!("reveal", visible.class(VISIT_ADDRESS))}>
                        {config::ADDRESS}
                    </p>
                    <div ref={visit_map_ref} class={classes!("map__embed", "reveal", visible.class(VISIT_MAP))}>
                        <div class="map-placeholder">
                            <p>{"📍 Our Location"}</p>
                            <p>{"Open: Mon-Sat 7AM-8PM"}</p>
                            <button class="btn btn--primary btn--small" onclick={go_to_contact}>
                                {"Get Directions"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .hero {
                    background: linear-gradient(135deg, #1f2933 0%, #3e4c59 100%);
                    color: #ffffff;
                    padding: 4rem 0 3.5rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 2.2rem;
                    line-height: 1.2;
                    margin: 0 0 1rem;
                }
                .hero p {
                    color: #e4e7eb;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }
                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 420px;
                    margin: 0 auto;
                }
                @media (min-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .hero__actions {
                        flex-direction: row;
                    }
                }
                .why, .price, .map {
                    padding: 3rem 0;
                }
                .why h2, .map h2 {
                    text-align: center;
                }
                .why__grid {
                    display: grid;
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .why__grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .why__item {
                    background: #f5f7fa;
                    border-radius: 12px;
                    padding: 1.25rem;
                }
                .why__item h3 {
                    margin-top: 0;
                    color: #e4572e;
                }
                .price {
                    background: #f5f7fa;
                }
                .price__card {
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
                }
                .services-list {
                    display: grid;
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .services-list {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                .service-item h3 {
                    margin-bottom: 0.25rem;
                }
                .map p {
                    text-align: center;
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_has_no_delay() {
        assert_eq!(stagger_class(0), None);
        assert_eq!(stagger_class(1).as_deref(), Some("delay-1"));
        assert_eq!(stagger_class(3).as_deref(), Some("delay-3"));
        assert_eq!(stagger_class(7).as_deref(), Some("delay-3"));
    }

    #[test]
    fn refill_service_lists_sizes() {
        let (title, body) = &services()[0];
        assert_eq!(*title, "LPG Refilling");
        assert_eq!(body, "All cylinder sizes (3kg, 5kg, 6kg, 12.5kg, 25kg, 50kg)");
    }
}
