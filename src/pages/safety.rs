use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config;
use crate::dom;
use crate::hooks::reveal::{use_reveal, RevealTarget};
use crate::state::visibility::RevealId;

const INTRO: RevealId = RevealId("safety-intro");
const DOS: RevealId = RevealId("safety-dos");
const DONTS: RevealId = RevealId("safety-donts");
const EMERGENCY: RevealId = RevealId("emergency");
const OFFER: RevealId = RevealId("safety-offer");

struct Tip {
    title: &'static str,
    detail: &'static str,
}

const DOS_TIPS: [Tip; 5] = [
    Tip { title: "Keep Upright", detail: "Store cylinders upright at all times" },
    Tip { title: "Ventilation", detail: "Store in well-ventilated areas" },
    Tip { title: "Regular Checks", detail: "Check for leaks using soap solution" },
    Tip { title: "Proper Equipment", detail: "Use approved regulators and hoses" },
    Tip { title: "Turn Off", detail: "Turn off cylinder valve when not in use" },
];

const DONTS_TIPS: [Tip; 5] = [
    Tip { title: "No Enclosed Spaces", detail: "Don't store in enclosed areas" },
    Tip { title: "No Damaged Equipment", detail: "Don't use damaged cylinders or accessories" },
    Tip { title: "No Open Flames", detail: "Don't use flames to check for leaks" },
    Tip { title: "No Direct Sunlight", detail: "Don't expose to direct sunlight" },
    Tip { title: "No Self-Repairs", detail: "Don't attempt to repair cylinders yourself" },
];

fn emergency_steps() -> [String; 5] {
    [
        "Turn off the cylinder valve immediately".to_string(),
        "Extinguish all flames (no smoking, no electrical switches)".to_string(),
        "Open doors and windows for ventilation".to_string(),
        format!("Call our emergency line: {}", config::EMERGENCY_PHONE_DISPLAY),
        "Do not use the gas until inspected by professionals".to_string(),
    ]
}

/// Inline style staggering list items by 0.1s each.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}

/// Renders `tips`, counting stagger positions on from `first_index` so
/// consecutive lists keep one running sequence.
fn tip_list(tips: &[Tip], first_index: usize) -> Html {
    html! {
        <div class="safety-list">
            { for tips.iter().enumerate().map(|(i, tip)| html! {
                <div key={tip.title} class="safety-item" style={stagger_style(first_index + i)}>
                    <h3>{tip.title}</h3>
                    <p>{tip.detail}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(Safety)]
pub fn safety() -> Html {
    use_mount(dom::scroll_to_top);

    let intro_ref = use_node_ref();
    let dos_ref = use_node_ref();
    let donts_ref = use_node_ref();
    let emergency_ref = use_node_ref();
    let offer_ref = use_node_ref();

    let visible = use_reveal(vec![
        RevealTarget::new(INTRO, &intro_ref),
        RevealTarget::new(DOS, &dos_ref),
        RevealTarget::new(DONTS, &donts_ref),
        RevealTarget::new(EMERGENCY, &emergency_ref),
        RevealTarget::new(OFFER, &offer_ref),
    ]);

    let schedule_inspection = Callback::from(|_: MouseEvent| {
        let href = config::tel_href(config::PHONE_E164);
        if let Err(e) = dom::window().and_then(|w| Ok(w.location().set_href(&href)?)) {
            log::warn!("could not open dialer: {}", e);
        }
    });

    html! {
        <main class="page">
            <div class="container">
                <h1>{"Gas Safety Guidelines"}</h1>

                <div class="page__content">
                    <section ref={intro_ref} class={classes!("page__section", "safety-intro", "reveal", visible.class(INTRO))}>
                        <h2>{"Safety First, Always"}</h2>
                        <p>
                            {"LPG is safe when handled properly. Follow these essential guidelines to ensure the safe use of cooking gas in your home or business."}
                        </p>
                    </section>

                    <section ref={dos_ref} class={classes!("page__section", "safety-dos", "reveal", visible.class(DOS))}>
                        <h2>{"✅ Safety Do's"}</h2>
                        { tip_list(&DOS_TIPS, 0) }
                    </section>

                    <section ref={donts_ref} class={classes!("page__section", "safety-donts", "reveal", visible.class(DONTS))}>
                        <h2>{"❌ Safety Don'ts"}</h2>
                        { tip_list(&DONTS_TIPS, DOS_TIPS.len()) }
                    </section>

                    <section ref={emergency_ref} class={classes!("page__section", "emergency", "reveal", visible.class(EMERGENCY))}>
                        <h2>{"🚨 Emergency Procedures"}</h2>
                        <p>{"If you suspect a gas leak:"}</p>
                        <ol class="emergency-steps">
                            { for emergency_steps().into_iter().map(|step| html! { <li>{step}</li> }) }
                        </ol>
                    </section>

                    <section ref={offer_ref} class={classes!("page__section", "safety-offer", "reveal", visible.class(OFFER))}>
                        <div class="safety-card">
                            <h2>{"Free Safety Inspection"}</h2>
                            <p>{"We offer free safety inspections of your gas setup. Contact us to schedule a visit from our trained technicians."}</p>
                            <button class="btn btn--primary" onclick={schedule_inspection}>
                                {"Schedule Inspection"}
                            </button>
                        </div>
                    </section>
                </div>
            </div>
            <style>
                {r#"
                .safety-list {
                    display: grid;
                    gap: 0.75rem;
                }
                .safety-item {
                    border-left: 4px solid #3ebd93;
                    background: #f5f7fa;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    animation: fadeUp 0.5s ease both;
                }
                .safety-donts .safety-item {
                    border-left-color: #e12d39;
                }
                .safety-item h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.05rem;
                }
                .safety-item p {
                    margin: 0;
                }
                .emergency {
                    background: #ffe3e3;
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .emergency-steps li {
                    margin-bottom: 0.5rem;
                }
                .safety-card {
                    background: #1f2933;
                    color: #ffffff;
                    border-radius: 16px;
                    padding: 2rem;
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
    fn stagger_steps_by_a_tenth_of_a_second() {
        assert_eq!(stagger_style(0), "animation-delay: 0.0s");
        assert_eq!(stagger_style(1), "animation-delay: 0.1s");
        assert_eq!(stagger_style(4), "animation-delay: 0.4s");
    }

    #[test]
    fn donts_continue_the_dos_stagger() {
        let first_dont = DOS_TIPS.len();
        assert_eq!(stagger_style(first_dont), "animation-delay: 0.5s");
        assert_eq!(stagger_style(first_dont + DONTS_TIPS.len() - 1), "animation-delay: 0.9s");
    }

    #[test]
    fn emergency_line_is_listed() {
        assert!(emergency_steps()[3].ends_with("+234 803 999 4567"));
    }
}
