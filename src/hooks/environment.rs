use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MediaQueryList};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::engine::{Breakpoint, MotionPreference};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Visitor-level settings every section reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiteEnvironment {
    pub motion: MotionPreference,
    pub breakpoint: Breakpoint,
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query().map(|query| query.matches()).unwrap_or(false)
}

/// Tracks `prefers-reduced-motion`, including changes while the page is open.
#[hook]
pub fn use_reduced_motion() -> MotionPreference {
    let reduced = use_state_eq(prefers_reduced_motion);

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let listener = reduced_motion_query().map(|query| {
                    let watched = query.clone();
                    let callback = Closure::wrap(Box::new(move |_: Event| {
                        reduced.set(watched.matches());
                    }) as Box<dyn FnMut(Event)>);
                    if let Err(e) = query
                        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                    {
                        gloo_console::warn!("reduced-motion listener", e);
                    }
                    (query, callback)
                });

                move || {
                    if let Some((query, callback)) = listener {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    MotionPreference::from_reduced_flag(*reduced)
}

#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let (width, _) = use_window_size();
    Breakpoint::from_width(width)
}

/// Environment provided by the app root, or defaults outside of it.
#[hook]
pub fn use_environment() -> SiteEnvironment {
    use_context::<SiteEnvironment>().unwrap_or_default()
}
