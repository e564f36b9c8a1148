use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const PIN_ICON: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";
const MAIL_ICON: &str = "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z";
const PHONE_ICON: &str = "M6.62 10.79c1.44 2.83 3.76 5.14 6.59 6.59l2.2-2.2c.27-.27.67-.36 1.02-.24 1.12.37 2.33.57 3.57.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1-9.39 0-17-7.61-17-17 0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.45.57 3.57.11.35.03.74-.25 1.02l-2.2 2.2z";

fn icon(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d={path} />
        </svg>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer__content">
                    <div class="footer__section">
                        <h3>{config::BUSINESS_NAME}</h3>
                        <p>{format!("Providing accurate, safe, and reliable cooking gas solutions since {}. Your trusted partner for quality LPG services.", config::FOUNDED_YEAR)}</p>
                        <p>
                            <strong>{"Mon-Sat:"}</strong>{" "}{config::HOURS_WEEKDAYS}<br/>
                            <strong>{"Sundays:"}</strong>{" "}{config::HOURS_SUNDAYS}
                        </p>
                    </div>

                    <div class="footer__section">
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer__links">
                            <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Safety}>{"Safety Tips"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div class="footer__section">
                        <h3>{"Contact Info"}</h3>
                        <ul class="footer__contact">
                            <li>
                                {icon(PIN_ICON)}
                                <span>{config::ADDRESS}</span>
                            </li>
                            <li>
                                {icon(MAIL_ICON)}
                                <a href={config::mailto_href(config::EMAIL)}>{config::EMAIL}</a>
                            </li>
                            <li>
                                {icon(PHONE_ICON)}
                                <a href={config::tel_href(config::PHONE_E164)}>{config::PHONE_DISPLAY}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>{format!("© {} {}. All rights reserved. | Safety First, Always.", current_year, config::BUSINESS_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
