use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom::BodyScrollLock;
use crate::hooks::outside_click::use_outside_click;
use crate::hooks::scroll::use_scrolled;
use crate::state::menu::{MenuAction, MenuController};
use crate::{is_active, Route, NAV_ITEMS};

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_scrolled();
    let controller = use_mut_ref(|| MenuController::new(BodyScrollLock));
    let force_update = use_force_update();
    let current = use_route::<Route>();
    let mobile_menu_ref = use_node_ref();
    let menu_btn_ref = use_node_ref();

    let dispatch = {
        let controller = controller.clone();
        Callback::from(move |action: MenuAction| {
            let changed = controller.borrow_mut().dispatch(action);
            if changed {
                force_update.force_update();
            }
        })
    };

    // Header teardown must never leave the page scroll-locked
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| move || controller.borrow_mut().dispose(),
            (),
        );
    }

    let menu_open = controller.borrow().state().is_open();

    use_outside_click(
        mobile_menu_ref.clone(),
        menu_btn_ref.clone(),
        menu_open,
        dispatch.reform(|_| MenuAction::Dismiss),
    );

    let toggle_menu = dispatch.reform(|_: MouseEvent| MenuAction::Toggle);
    let dismiss = dispatch.reform(|_: MouseEvent| MenuAction::Dismiss);
    let link_activated = dispatch.reform(|_: MouseEvent| MenuAction::LinkActivated);

    let nav_link = |route: &Route, label: &'static str| {
        let classes = classes!(is_active(current.as_ref(), route).then_some("active"));
        html! {
            <div key={label} onclick={link_activated.clone()}>
                <Link<Route> to={route.clone()} classes={classes}>
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <header class={classes!("header", scrolled.then_some("header--scrolled"))}>
            <div class="container header__inner">
                <Link<Route> to={Route::Home} classes="logo">
                    {"HOMANOL"}
                </Link<Route>>

                <nav class="nav">
                    { for NAV_ITEMS.iter().map(|item| nav_link(&item.route, item.label)) }
                </nav>

                <button
                    ref={menu_btn_ref}
                    class={classes!("mobile-menu-btn", menu_open.then_some("active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div
                    class={classes!("mobile-nav-overlay", menu_open.then_some("active"))}
                    onclick={dismiss}
                ></div>

                <nav
                    ref={mobile_menu_ref}
                    class={classes!("mobile-nav", menu_open.then_some("active"))}
                >
                    <ul class="mobile-nav__links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>{ nav_link(&item.route, item.label) }</li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
