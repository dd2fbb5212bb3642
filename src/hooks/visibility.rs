use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::engine::VisibilityTrigger;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObserverHandle {
    fn observe(
        element: &Element,
        trigger: VisibilityTrigger,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let threshold = trigger.threshold();
        let trigger = Rc::new(RefCell::new(trigger));
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let fired = trigger
                        .borrow_mut()
                        .observe(entry.is_intersecting(), entry.intersection_ratio());
                    if fired {
                        observer.disconnect();
                        on_visible();
                        return;
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One-shot "has been seen" flag for the element behind `node`.
///
/// The observer is created on the first render where `node` is attached and
/// disconnected as soon as the trigger fires. If the browser refuses to
/// create an observer the content is shown straight away.
#[hook]
pub fn use_visibility(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    let handle = use_mut_ref(|| None::<ObserverHandle>);

    {
        let visible = visible.clone();
        let handle = handle.clone();
        use_effect(move || {
            if !*visible && handle.borrow().is_none() {
                if let Some(element) = node.cast::<Element>() {
                    let trigger = VisibilityTrigger::new(threshold).unwrap_or_else(|e| {
                        log::warn!("{}, using default threshold", e);
                        VisibilityTrigger::default()
                    });
                    let setter = visible.setter();
                    match ObserverHandle::observe(&element, trigger, move || setter.set(true)) {
                        Ok(observer) => *handle.borrow_mut() = Some(observer),
                        Err(e) => {
                            gloo_console::warn!("IntersectionObserver unavailable", e);
                            visible.set(true);
                        }
                    }
                }
            }
            || ()
        });
    }

    use_unmount(move || {
        handle.borrow_mut().take();
    });

    *visible
}
