use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_unmount;

use super::scroll::{read_window_sample, scroll_window_to, subscribe_window_scroll};
use super::visibility::use_visibility;
use crate::config::SectionConfig;
use crate::engine::visibility::DEFAULT_THRESHOLD;
use crate::engine::{
    Liveness, MotionPreference, PinnedSectionDriver, ScrollSample, SectionFrame, SectionGeometry,
};

pub struct PinnedSection {
    pub frame: SectionFrame,
    /// Smooth-scroll to the rest position of a zone (dot navigation).
    pub go_to_zone: Callback<usize>,
}

fn measure(element: &Element, scroll_top: f64) -> SectionGeometry {
    let rect = element.get_bounding_client_rect();
    SectionGeometry::new(rect.top() + scroll_top, rect.height())
}

/// Drive a pinned zone section from the window scroll position.
///
/// `node` must point at the tall outer container. Its geometry is measured on
/// every tick so layout shifts above the section are picked up. The
/// transition timeline is built once the container first becomes visible.
#[hook]
pub fn use_pinned_section(
    node: NodeRef,
    config: SectionConfig,
    motion: MotionPreference,
) -> PinnedSection {
    let frame = use_state_eq(|| SectionFrame::at_rest(0));
    let driver = use_mut_ref(|| PinnedSectionDriver::new(config.mapper, config.style, motion));
    let liveness = use_memo(|_| Liveness::new(), ());
    let visible = use_visibility(node.clone(), DEFAULT_THRESHOLD);

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |motion| {
                driver.borrow_mut().set_motion(*motion);
                || ()
            },
            motion,
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    driver.borrow_mut().arm();
                }
                || ()
            },
            visible,
        );
    }

    {
        let driver = driver.clone();
        let frame = frame.clone();
        let node = node.clone();
        let liveness = (*liveness).clone();
        use_effect_with_deps(
            move |_| {
                let tick = liveness.guard(move |sample: ScrollSample| {
                    let next = {
                        let mut driver = driver.borrow_mut();
                        if let Some(element) = node.cast::<Element>() {
                            driver.set_geometry(measure(&element, sample.scroll_top));
                        }
                        driver.on_scroll(sample)
                    };
                    if let Some(next) = next {
                        frame.set(next);
                    }
                });
                let subscription = subscribe_window_scroll(tick);
                move || drop(subscription)
            },
            (),
        );
    }

    let go_to_zone = {
        let driver = driver.clone();
        Callback::from(move |zone: usize| {
            let Some(sample) = read_window_sample() else {
                return;
            };
            let target = driver
                .borrow()
                .scroll_target_for_zone(zone, sample.viewport_height);
            match target {
                Some(top) => scroll_window_to(top, motion),
                None => log::debug!("zone {} requested before layout", zone),
            }
        })
    };

    use_unmount(move || {
        liveness.kill();
        driver.borrow_mut().dispose();
    });

    PinnedSection {
        frame: *frame,
        go_to_zone,
    }
}
