use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod styles;
mod state {
    pub mod contact;
    pub mod menu;
    pub mod scroll;
    pub mod visibility;
}
mod hooks {
    pub mod outside_click;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod mobile_cta;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod safety;
}

use components::{footer::Footer, header::Header, mobile_cta::MobileCta};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    safety::Safety,
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/safety")]
    Safety,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { route: Route::Home, label: "Home" },
    NavItem { route: Route::About, label: "About" },
    NavItem { route: Route::Safety, label: "Safety" },
    NavItem { route: Route::Contact, label: "Contact" },
];

/// Routes match whole paths, so `/` is only active on the home page.
pub fn is_active(current: Option<&Route>, target: &Route) -> bool {
    current == Some(target)
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Safety => {
            info!("Rendering Safety page");
            html! { <Safety /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <MobileCta />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    styles::install();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_four_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/safety"), Some(Route::Safety));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/about/team"), Some(Route::NotFound));
    }

    #[test]
    fn paths_round_trip() {
        for item in NAV_ITEMS.iter() {
            assert_eq!(Route::recognize(&item.route.to_path()), Some(item.route.clone()));
        }
    }

    fn active_labels(path: &str) -> Vec<&'static str> {
        let current = Route::recognize(path);
        NAV_ITEMS
            .iter()
            .filter(|item| is_active(current.as_ref(), &item.route))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn only_the_current_link_is_active() {
        assert_eq!(active_labels("/about"), vec!["About"]);
        assert_eq!(active_labels("/contact"), vec!["Contact"]);
    }

    #[test]
    fn home_link_uses_exact_match() {
        assert_eq!(active_labels("/"), vec!["Home"]);
        assert!(!active_labels("/safety").contains(&"Home"));
    }

    #[test]
    fn nothing_active_on_unknown_path() {
        assert!(active_labels("/nope").is_empty());
    }
}
