use yew::prelude::*;

use crate::config;

/// Call and WhatsApp buttons pinned to the bottom of small screens.
#[function_component(MobileCta)]
pub fn mobile_cta() -> Html {
    html! {
        <div class="mobile-cta">
            <a href={config::tel_href(config::PHONE_E164)} class="cta-button cta-call" aria-label="Call us">
                <span>{"📞"}</span>
                <span class="cta-button__text">{"Call Now"}</span>
            </a>
            <a
                href={config::whatsapp_href(config::PHONE_E164)}
                class="cta-button cta-whatsapp"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
            >
                <span>{"💬"}</span>
                <span class="cta-button__text">{"WhatsApp"}</span>
            </a>
        </div>
    }
}
