use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::config;
use crate::dom;
use crate::hooks::reveal::{use_reveal, RevealTarget};
use crate::state::visibility::RevealId;

/// Element id of the price list; `?section=pricing` scrolls to it.
pub const PRICING_SECTION: &str = "pricing";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionQuery {
    pub section: String,
}

const TITLE: RevealId = RevealId("about-title");
const STORY: RevealId = RevealId("story");
const MISSION: RevealId = RevealId("mission");
const VALUES: RevealId = RevealId("values");
const PRICING: RevealId = RevealId("pricing");

const VALUE_CARDS: [(&str, &str); 4] = [
    ("Accuracy", "Digital weighing for precise measurement"),
    ("Transparency", "Clear pricing and honest service"),
    ("Safety", "Proper handling and trained staff"),
    ("Quality", "Certified gas from trusted suppliers"),
];

/// Rows of the price table: the per-kg rate, then each cylinder size.
pub fn price_rows() -> Vec<(String, String)> {
    let mut rows = vec![("Gas per KG".to_string(), config::format_naira(config::PRICE_PER_KG))];
    rows.extend(config::PRICED_CYLINDERS_KG.iter().map(|kg| {
        (
            format!("{} Cylinder", config::format_kg(*kg)),
            config::format_naira(config::cylinder_price(*kg)),
        )
    }));
    rows
}

#[function_component(About)]
pub fn about() -> Html {
    use_mount(dom::scroll_to_top);

    let requested_section = use_location()
        .and_then(|location| location.query::<SectionQuery>().ok())
        .map(|query| query.section);

    use_effect_with_deps(
        move |section| {
            if section.as_deref() == Some(PRICING_SECTION) {
                if let Err(e) = dom::scroll_to_id(PRICING_SECTION) {
                    log::warn!("could not scroll to price list: {}", e);
                }
            }
            || ()
        },
        requested_section,
    );

    let title_ref = use_node_ref();
    let story_ref = use_node_ref();
    let mission_ref = use_node_ref();
    let values_ref = use_node_ref();
    let pricing_ref = use_node_ref();

    let visible = use_reveal(vec![
        RevealTarget::new(TITLE, &title_ref),
        RevealTarget::new(STORY, &story_ref),
        RevealTarget::new(MISSION, &mission_ref),
        RevealTarget::new(VALUES, &values_ref),
        RevealTarget::new(PRICING, &pricing_ref),
    ]);

    html! {
        <main class="page">
            <div class="container">
                <h1 ref={title_ref} class={classes!("reveal", visible.class(TITLE))}>{"About Homanol"}</h1>

                <div class="page__content">
                    <section ref={story_ref} class={classes!("page__section", "reveal", visible.class(STORY))}>
                        <h2>{"Our Story"}</h2>
                        <p>
                            {format!("Founded in {}, {} has been serving the Aba community with reliable and safe cooking gas solutions. What started as a small family business has grown into one of the most trusted gas plants in the region.", config::FOUNDED_YEAR, config::BUSINESS_NAME)}
                        </p>
                        <p>
                            {"Our commitment to accuracy and transparency has earned us the trust of thousands of households and businesses. We believe in building relationships based on honesty and quality service."}
                        </p>
                    </section>

                    <section ref={mission_ref} class={classes!("page__section", "reveal", visible.class(MISSION))}>
                        <h2>{"Our Mission"}</h2>
                        <p>
                            {"To provide every customer with accurately measured, high-quality cooking gas using modern technology, ensuring safety, fairness, and complete transparency in every transaction."}
                        </p>
                    </section>

                    <section ref={values_ref} class={classes!("page__section", "reveal", visible.class(VALUES))}>
                        <h2>{"What We Stand For"}</h2>
                        <div class="values-grid">
                            { for VALUE_CARDS.iter().map(|(title, body)| html! {
                                <div key={*title} class="value-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section
                        ref={pricing_ref}
                        id={PRICING_SECTION}
                        class={classes!("page__section", "reveal", visible.class(PRICING))}
                    >
                        <h2>{"Pricing & Transparency"}</h2>
                        <div class="pricing-card">
                            <div class="pricing-header">
                                <h3>{"Today's Gas Prices"}</h3>
                                <p>{"Updated daily | No hidden charges"}</p>
                            </div>
                            <div class="pricing-list">
                                { for price_rows().into_iter().map(|(item, price)| html! {
                                    <div key={item.clone()} class="price-item">
                                        <span>{item}</span>
                                        <span class="price">{price}</span>
                                    </div>
                                }) }
                            </div>
                            <p class="pricing-note">
                                <em>{"We weigh cylinders in front of customers and provide detailed receipts."}</em>
                            </p>
                        </div>
                    </section>
                </div>
            </div>
            <style>
                {r#"
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .values-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .value-card {
                    background: #f5f7fa;
                    border-radius: 12px;
                    padding: 1rem;
                }
                .value-card h3 {
                    margin: 0 0 0.25rem;
                    color: #e4572e;
                }
                .pricing-card {
                    border: 2px solid #e4572e;
                    border-radius: 16px;
                    overflow: hidden;
                    max-width: 520px;
                }
                .pricing-header {
                    background: #e4572e;
                    color: #ffffff;
                    padding: 1rem 1.5rem;
                }
                .pricing-header h3, .pricing-header p {
                    margin: 0;
                }
                .pricing-list {
                    padding: 0.5rem 1.5rem;
                }
                .price-item {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid #e4e7eb;
                }
                .price-item:last-child {
                    border-bottom: none;
                }
                .price {
                    font-weight: 700;
                }
                .pricing-note {
                    padding: 0 1.5rem 1rem;
                    color: #52606d;
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
    fn price_table() {
        let rows = price_rows();
        let expected = [
            ("Gas per KG", "₦1,050"),
            ("3kg Cylinder", "₦3,150"),
            ("5kg Cylinder", "₦5,250"),
            ("12.5kg Cylinder", "₦13,125"),
            ("25kg Cylinder", "₦26,250"),
        ];
        assert_eq!(rows.len(), expected.len());
        for ((item, price), (want_item, want_price)) in rows.iter().zip(expected) {
            assert_eq!(item, want_item);
            assert_eq!(price, want_price);
        }
    }

    #[test]
    fn section_query_serializes_to_section_param() {
        let query = SectionQuery { section: PRICING_SECTION.to_string() };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"section":"pricing"}"#);
    }
}
