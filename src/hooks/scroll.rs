//! Window scroll/resize binding for the shared [`ScrollBus`].

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::engine::{MotionPreference, ScrollBus, ScrollSample, Subscription};

const EVENTS: [&str; 2] = ["scroll", "resize"];

struct WindowListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
    attached: bool,
}

impl WindowListener {
    fn set_attached(&mut self, attached: bool) {
        if self.attached == attached {
            return;
        }
        let target = self.callback.as_ref().unchecked_ref();
        for event in EVENTS {
            let result = if attached {
                self.window.add_event_listener_with_callback(event, target)
            } else {
                self.window.remove_event_listener_with_callback(event, target)
            };
            if let Err(e) = result {
                gloo_console::warn!(format!("{} listener: {:?}", event, e));
                return;
            }
        }
        self.attached = attached;
    }
}

#[derive(Default)]
struct WindowScroll {
    bus: ScrollBus,
    // The closure stays allocated after detaching; a subscriber may drop
    // the last subscription from inside the callback itself.
    listener: RefCell<Option<WindowListener>>,
}

thread_local! {
    static WINDOW_SCROLL: WindowScroll = WindowScroll::default();
}

/// Current scroll and viewport metrics, straight from the window.
pub fn read_window_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let metric = |value: Result<wasm_bindgen::JsValue, _>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Some(ScrollSample {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        viewport_height: metric(window.inner_height()),
        viewport_width: metric(window.inner_width()),
    })
}

fn attach(scroll: &WindowScroll) {
    let mut slot = scroll.listener.borrow_mut();
    if slot.is_none() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::wrap(Box::new(|| {
            if let Some(sample) = read_window_sample() {
                WINDOW_SCROLL.with(|scroll| scroll.bus.publish(sample));
            }
        }) as Box<dyn FnMut()>);
        *slot = Some(WindowListener {
            window,
            callback,
            attached: false,
        });
    }
    let newly_attached = match slot.as_mut() {
        Some(listener) if !listener.attached => {
            listener.set_attached(true);
            listener.attached
        }
        _ => false,
    };
    drop(slot);
    if newly_attached {
        if let Some(sample) = read_window_sample() {
            scroll.bus.publish(sample);
        }
    }
}

/// Subscription to window scroll samples. The DOM listeners are attached
/// while at least one of these is alive.
#[must_use = "dropping the subscription unsubscribes"]
pub struct WindowSubscription {
    inner: Option<Subscription>,
}

impl Drop for WindowSubscription {
    fn drop(&mut self) {
        drop(self.inner.take());
        // Thread-local may already be gone during teardown.
        let _ = WINDOW_SCROLL.try_with(|scroll| {
            if scroll.bus.subscriber_count() == 0 {
                if let Some(listener) = scroll.listener.borrow_mut().as_mut() {
                    listener.set_attached(false);
                }
            }
        });
    }
}

/// Subscribe to window scroll/resize. `listener` immediately receives the
/// current sample, then one per event.
pub fn subscribe_window_scroll(listener: impl Fn(ScrollSample) + 'static) -> WindowSubscription {
    WINDOW_SCROLL.with(|scroll| {
        attach(scroll);
        WindowSubscription {
            inner: Some(scroll.bus.subscribe(listener)),
        }
    })
}

pub fn scroll_window_to(top: f64, motion: MotionPreference) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(if motion.is_reduced() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scroll so the element with `id` sits at the top of the viewport.
pub fn scroll_to_section(id: &str, motion: MotionPreference) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("scroll target #{} not found", id);
        return;
    };
    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
    scroll_window_to(top, motion);
}
