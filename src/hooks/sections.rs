use yew::prelude::*;

use super::scroll::subscribe_window_scroll;
use crate::engine::sections::{is_scrolled, SectionBounds, SectionTracker};
use crate::engine::ScrollSample;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageScroll {
    pub active_section: Option<String>,
    pub scrolled: bool,
}

fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: id.clone(),
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Header state: which of `section_ids` is under the viewport midline, and
/// whether the page has scrolled at all.
#[hook]
pub fn use_page_scroll(section_ids: Vec<String>) -> PageScroll {
    let state = use_state_eq(PageScroll::default);
    let tracker = use_mut_ref(|| {
        section_ids
            .first()
            .map(|id| SectionTracker::new(id.clone()))
            .unwrap_or_default()
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |ids: &Vec<String>| {
                let ids = ids.clone();
                let subscription = subscribe_window_scroll(move |sample: ScrollSample| {
                    let active_section = {
                        let mut tracker = tracker.borrow_mut();
                        tracker.update(&section_bounds(&ids), sample.viewport_height);
                        tracker.active().map(str::to_string)
                    };
                    state.set(PageScroll {
                        active_section,
                        scrolled: is_scrolled(sample.scroll_top),
                    });
                });
                move || drop(subscription)
            },
            section_ids,
        );
    }

    (*state).clone()
}
