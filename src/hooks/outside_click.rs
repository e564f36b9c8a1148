use wasm_bindgen::JsCast;
use web_sys::{EventTarget, Node};
use yew::prelude::*;

use crate::dom::{self, Listener};

/// Decides whether a pointer-down should close the active surface.
///
/// `containment` holds one entry per region: `Some(true)` if the region holds
/// the event target, `None` if the region is not attached right now.
pub fn should_close(is_active: bool, containment: &[Option<bool>]) -> bool {
    is_active && !containment.iter().any(|inside| *inside == Some(true))
}

fn region_contains(region: &NodeRef, target: Option<&Node>) -> Option<bool> {
    let node = region.get()?;
    Some(target.map_or(false, |target| node.contains(Some(target))))
}

/// Calls `on_close` for document `mousedown` events landing outside both
/// `active` and `trigger`. Listens only while `is_active` is true.
#[hook]
pub fn use_outside_click(active: NodeRef, trigger: NodeRef, is_active: bool, on_close: Callback<()>) {
    use_effect_with_deps(
        move |is_active| {
            let listener = if *is_active {
                let registered = dom::document().and_then(|document| {
                    let target: EventTarget = document.into();
                    Listener::add(target, "mousedown", move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let containment = [
                            region_contains(&active, target.as_ref()),
                            region_contains(&trigger, target.as_ref()),
                        ];
                        if should_close(true, &containment) {
                            on_close.emit(());
                        }
                    })
                });
                match registered {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::warn!("outside click detection disabled: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            move || drop(listener)
        },
        is_active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_active_region_keeps_open() {
        assert!(!should_close(true, &[Some(true), Some(false)]));
    }

    #[test]
    fn inside_trigger_keeps_open() {
        assert!(!should_close(true, &[Some(false), Some(true)]));
    }

    #[test]
    fn elsewhere_closes() {
        assert!(should_close(true, &[Some(false), Some(false)]));
    }

    #[test]
    fn inactive_never_closes() {
        assert!(!should_close(false, &[Some(false), Some(false)]));
        assert!(!should_close(false, &[None, None]));
    }

    #[test]
    fn detached_region_never_contains() {
        assert!(should_close(true, &[None, Some(false)]));
        assert!(should_close(true, &[None, None]));
        assert!(!should_close(true, &[None, Some(true)]));
    }
}
