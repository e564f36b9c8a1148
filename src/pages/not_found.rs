use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::dom;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_mount(dom::scroll_to_top);

    html! {
        <main class="page not-found">
            <div class="container">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn btn--primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found {
                    text-align: center;
                    min-height: 50vh;
                }
                "#}
            </style>
        </main>
    }
}
