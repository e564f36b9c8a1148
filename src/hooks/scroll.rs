use std::cell::RefCell;
use std::rc::Rc;

use web_sys::EventTarget;
use yew::prelude::*;

use crate::dom::{self, Listener};
use crate::state::scroll::ScrollTracker;

/// True while the window is scrolled past the header threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
                let check = move || match dom::scroll_offset() {
                    Ok(offset) => {
                        if let Some(value) = tracker.borrow_mut().observe(offset) {
                            scrolled.set(value);
                        }
                    }
                    Err(e) => log::warn!("could not read scroll offset: {}", e),
                };

                // Initial check, the page may load already scrolled
                check();

                let listener = dom::window().and_then(|window| {
                    let target: EventTarget = window.into();
                    Listener::add(target, "scroll", move |_| check())
                });
                if let Err(ref e) = listener {
                    log::warn!("scroll tracking disabled: {}", e);
                }

                move || drop(listener)
            },
            (),
        );
    }

    *scrolled
}
