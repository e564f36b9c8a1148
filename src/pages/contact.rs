use std::str::FromStr;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::{use_mount, use_unmount};

use crate::config;
use crate::dom;
use crate::hooks::reveal::{use_reveal, RevealTarget};
use crate::state::contact::{
    ContactAction, ContactField, ContactFormData, ServiceKind, ACKNOWLEDGEMENT,
};
use crate::state::visibility::RevealId;

const NOTICE_MILLIS: u32 = 5_000;

const VISIT: RevealId = RevealId("contact-visit");
const FORM: RevealId = RevealId("contact-form");
const MAP: RevealId = RevealId("contact-map");
const ACTIONS: RevealId = RevealId("contact-actions");

/// Option value the service select must switch to, if it shows something
/// other than `service`.
fn select_update(shown: &str, service: ServiceKind) -> Option<&'static str> {
    (shown != service.value()).then(|| service.value())
}

fn sync_select(select: &HtmlSelectElement, service: ServiceKind) {
    if let Some(value) = select_update(&select.value(), service) {
        select.set_value(value);
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_mount(dom::scroll_to_top);

    let form = use_reducer(ContactFormData::default);
    let notice = use_state(|| false);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    {
        let notice_timer = notice_timer.clone();
        use_unmount(move || {
            notice_timer.borrow_mut().take();
        });
    }

    // Options stop following their `selected` attribute once the user has
    // picked one, so the select's value is pushed from state instead.
    let service_ref = use_node_ref();
    {
        let service_ref = service_ref.clone();
        use_effect_with_deps(
            move |service: &ServiceKind| {
                if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                    sync_select(&select, *service);
                }
                || ()
            },
            form.service,
        );
    }

    let visit_ref = use_node_ref();
    let form_ref = use_node_ref();
    let map_ref = use_node_ref();
    let actions_ref = use_node_ref();

    let visible = use_reveal(vec![
        RevealTarget::new(VISIT, &visit_ref),
        RevealTarget::new(FORM, &form_ref),
        RevealTarget::new(MAP, &map_ref),
        RevealTarget::new(ACTIONS, &actions_ref),
    ]);

    let on_text = |field: ContactField| {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.dispatch(ContactAction::Text(field, value));
        })
    };

    let on_service = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match ServiceKind::from_str(&select.value()) {
                Ok(service) => form.dispatch(ContactAction::Service(service)),
                Err(e) => log::warn!("ignoring service selection: {}", e),
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut data = (*form).clone();
            match data.submit() {
                Ok(sent) => {
                    // Nothing is delivered anywhere yet; the request only reaches the log
                    match serde_json::to_string(&sent) {
                        Ok(json) => log::info!("contact request received: {}", json),
                        Err(e) => log::warn!("could not serialize contact request: {}", e),
                    }
                    form.dispatch(ContactAction::Reset);
                    notice.set(true);

                    let hide = {
                        let notice = notice.clone();
                        Timeout::new(NOTICE_MILLIS, move || notice.set(false))
                    };
                    // Replacing the old timer cancels it
                    *notice_timer.borrow_mut() = Some(hide);
                }
                Err(missing) => {
                    let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                    log::warn!("contact form submitted without {}", names.join(", "));
                }
            }
        })
    };

    html! {
        <main class="page">
            <div class="container">
                <h1>{"Contact & Location"}</h1>

                <div class="contact-content">
                    <section ref={visit_ref} class={classes!("contact-section", "reveal", visible.class(VISIT))}>
                        <h2>{"Visit Our Plant"}</h2>
                        <div class="contact-info">
                            <div class="info-item">
                                <h3>{"📍 Address"}</h3>
                                <p>{config::ADDRESS}</p>
                                <p><em>{config::ADDRESS_LANDMARK}</em></p>
                            </div>

                            <div class="info-item">
                                <h3>{"📞 Contact"}</h3>
                                <p><strong>{"Phone: "}</strong>{config::PHONE_DISPLAY}</p>
                                <p><strong>{"WhatsApp: "}</strong>{config::PHONE_DISPLAY}</p>
                                <p><strong>{"Email: "}</strong>{config::EMAIL}</p>
                                <p><strong>{"Emergency: "}</strong>{format!("{} (24/7)", config::EMERGENCY_PHONE_DISPLAY)}</p>
                            </div>

                            <div class="info-item">
                                <h3>{"⏰ Business Hours"}</h3>
                                <p><strong>{"Monday - Saturday: "}</strong>{config::HOURS_WEEKDAYS}</p>
                                <p><strong>{"Sundays & Holidays: "}</strong>{config::HOURS_SUNDAYS}</p>
                                <p><strong>{"Emergency Service: "}</strong>{"Available 24/7"}</p>
                            </div>
                        </div>
                    </section>

                    <section ref={form_ref} class={classes!("contact-section", "reveal", visible.class(FORM))}>
                        <h2>{"Quick Contact Form"}</h2>
                        {
                            if *notice {
                                html! { <div class="form-notice" role="status">{ACKNOWLEDGEMENT}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-group">
                                <label for="name">{"Full Name *"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    value={form.name.clone()}
                                    oninput={on_text(ContactField::Name)}
                                    required={true}
                                    placeholder="Enter your name"
                                />
                            </div>

                            <div class="form-group">
                                <label for="phone">{"Phone Number *"}</label>
                                <input
                                    type="tel"
                                    id="phone"
                                    name="phone"
                                    value={form.phone.clone()}
                                    oninput={on_text(ContactField::Phone)}
                                    required={true}
                                    placeholder="0803 123 4567"
                                />
                            </div>

                            <div class="form-group">
                                <label for="service">{"Service Needed"}</label>
                                <select ref={service_ref} id="service" name="service" onchange={on_service}>
                                    { for ServiceKind::ALL.into_iter().map(|kind| html! {
                                        <option
                                            key={kind.value()}
                                            value={kind.value()}
                                            selected={kind == form.service}
                                        >
                                            {kind.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="form-group">
                                <label for="message">{"Message"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    value={form.message.clone()}
                                    oninput={on_text(ContactField::Message)}
                                    rows="4"
                                    placeholder="Your message or special instructions..."
                                ></textarea>
                            </div>

                            <button type="submit" class="btn btn--primary">
                                {"Send Message"}
                            </button>
                        </form>
                    </section>

                    <section ref={map_ref} class={classes!("contact-section", "reveal", visible.class(MAP))}>
                        <h2>{"Location Map"}</h2>
                        <div class="map__embed">
                            <div class="map-placeholder">
                                <h3>{format!("📍 {}", config::BUSINESS_NAME)}</h3>
                                <p>{config::SHORT_ADDRESS}</p>
                                <p>{format!("Coordinates: {}", config::COORDINATES)}</p>
                                <div class="direction-buttons">
                                    <a
                                        href={config::maps_href(config::MAPS_QUERY)}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="btn btn--primary btn--small"
                                    >
                                        {"Open in Google Maps"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    </section>

                    <section ref={actions_ref} class={classes!("contact-section", "reveal", visible.class(ACTIONS))}>
                        <div class="quick-actions">
                            <h2>{"Quick Actions"}</h2>
                            <div class="action-buttons">
                                <a href={config::tel_href(config::PHONE_E164)} class="action-btn call-btn">
                                    {"📞 Call Now"}
                                </a>
                                <a
                                    href={config::whatsapp_href(config::PHONE_E164)}
                                    class="action-btn whatsapp-btn"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"💬 WhatsApp"}
                                </a>
                                <a href={config::mailto_href(config::EMAIL)} class="action-btn email-btn">
                                    {"✉️ Email Us"}
                                </a>
                            </div>
                        </div>
                    </section>
                </div>
            </div>
            <style>
                {r#"
                .contact-content {
                    display: grid;
                    gap: 2.5rem;
                }
                .contact-info {
                    display: grid;
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .contact-info {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .info-item {
                    background: #f5f7fa;
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                }
                .info-item p {
                    margin: 0.25rem 0;
                }
                .form-notice {
                    background: #e3f9e5;
                    border: 1px solid #3ebd93;
                    color: #014d40;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                }
                .contact-form {
                    display: grid;
                    gap: 1rem;
                    max-width: 560px;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .form-group label {
                    font-weight: 600;
                }
                .form-group input, .form-group select, .form-group textarea {
                    font: inherit;
                    padding: 0.75rem;
                    border: 1px solid #cbd2d9;
                    border-radius: 8px;
                }
                .action-buttons {
                    display: grid;
                    gap: 0.75rem;
                }
                @media (min-width: 768px) {
                    .action-buttons {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .action-btn {
                    display: block;
                    text-align: center;
                    padding: 0.9rem;
                    border-radius: 8px;
                    color: #ffffff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .call-btn {
                    background: #e4572e;
                }
                .whatsapp-btn {
                    background: #25d366;
                }
                .email-btn {
                    background: #3e4c59;
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
    fn select_follows_reset_after_manual_pick() {
        let mut form = ContactFormData::default();
        form.set_text(ContactField::Name, "Jane Doe".into());
        form.set_text(ContactField::Phone, "08031234567".into());
        form.set_service(ServiceKind::Delivery);
        let shown = ServiceKind::Delivery.value();

        let sent = form.submit().expect("required fields are filled");
        assert_eq!(sent.service, ServiceKind::Delivery);
        assert_eq!(select_update(shown, form.service), Some("refill"));
    }

    #[test]
    fn select_left_alone_when_in_step() {
        for kind in ServiceKind::ALL {
            assert_eq!(select_update(kind.value(), kind), None);
        }
    }
}
