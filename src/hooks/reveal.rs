use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;
use crate::state::visibility::{
    OneShotWatch, RevealConfig, RevealId, VisibilityAction, VisibilitySet,
};

/// An element a page wants faded in, paired with the id it is tracked under.
#[derive(Clone, PartialEq)]
pub struct RevealTarget {
    pub id: RevealId,
    pub node: NodeRef,
}

impl RevealTarget {
    pub fn new(id: RevealId, node: &NodeRef) -> Self {
        Self {
            id,
            node: node.clone(),
        }
    }
}

/// Keeps an `IntersectionObserver` and its callback alive; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn start(
        elements: Vec<(RevealId, Element)>,
        config: RevealConfig,
        dispatcher: UseReducerDispatcher<VisibilitySet>,
    ) -> Result<Self, DomError> {
        let mut watch = OneShotWatch::new(elements.iter().map(|(id, _)| *id));
        let elements = Rc::new(elements);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
            let elements = elements.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !config.qualifies(entry.is_intersecting(), entry.intersection_ratio()) {
                        continue;
                    }
                    let target = entry.target();
                    let Some((id, _)) = elements.iter().find(|(_, el)| *el == target) else {
                        continue;
                    };
                    if watch.fire(*id) {
                        observer.unobserve(&target);
                        log::debug!("revealed {}", id.0);
                        dispatcher.dispatch(VisibilityAction::Reveal(*id));
                    }
                    if watch.is_done() {
                        observer.disconnect();
                        break;
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for (_, element) in elements.iter() {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Fades in `targets` as they scroll into view, once each.
///
/// Targets are read after the first render. Only those the observer ends up
/// watching are hidden until they scroll in; a target whose node is not
/// mounted by then, or every target when `IntersectionObserver` is missing,
/// stays plain visible content.
#[hook]
pub fn use_reveal(targets: Vec<RevealTarget>) -> UseReducerHandle<VisibilitySet> {
    let visible = use_reducer(VisibilitySet::default);

    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let elements: Vec<(RevealId, Element)> = targets
                    .iter()
                    .filter_map(|target| target.node.cast::<Element>().map(|el| (target.id, el)))
                    .collect();
                let ids: Vec<RevealId> = elements.iter().map(|(id, _)| *id).collect();

                if ids.len() < targets.len() {
                    log::debug!("{} reveal targets not mounted, left as is", targets.len() - ids.len());
                }

                let observer =
                    match RevealObserver::start(elements, RevealConfig::default(), dispatcher.clone()) {
                        Ok(observer) => {
                            // Only watched elements start hidden
                            dispatcher.dispatch(VisibilityAction::Arm(ids));
                            Some(observer)
                        }
                        Err(e) => {
                            log::warn!("reveal animations disabled: {}", e);
                            None
                        }
                    };

                move || drop(observer)
            },
            (),
        );
    }

    visible
}
