use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::environment::use_environment;
use crate::engine::preload::{
    PreloadPhase, PreloadSequence, HANDOFF_DELAY_MS, REDUCED_MOTION_HANDOFF_MS,
    SKIP_BUTTON_DELAY_MS,
};
use crate::engine::MotionPreference;

const FRAME_MS: u32 = 16;

#[derive(Clone, PartialEq)]
pub struct PreloadView {
    pub sequence: PreloadSequence,
    pub phase: PreloadPhase,
    pub elapsed_ms: f64,
    pub motion: MotionPreference,
    pub show_skip: bool,
    pub skip: Callback<()>,
}

/// Clock for the intro overlay. `on_complete` fires once, a short grace
/// period after the sequence completes or is skipped.
#[hook]
pub fn use_preload(char_count: usize, on_complete: Callback<()>) -> PreloadView {
    let env = use_environment();
    let sequence = use_mut_ref(|| PreloadSequence::new(env.breakpoint, char_count));
    let phase = use_state_eq(|| PreloadPhase::Initial);
    let elapsed = use_state_eq(|| 0.0_f64);
    let show_skip = use_state_eq(|| false);
    let complete = *phase == PreloadPhase::Complete;

    {
        let sequence = sequence.clone();
        let phase = phase.clone();
        let elapsed = elapsed.clone();
        let motion = env.motion;
        use_effect_with_deps(
            move |&complete| {
                let clock = (!complete).then(|| {
                    let started = Utc::now();
                    Interval::new(FRAME_MS, move || {
                        let ms = (Utc::now() - started).num_milliseconds() as f64;
                        let next = sequence.borrow_mut().advance(ms, motion);
                        elapsed.set(ms);
                        phase.set(next);
                    })
                });
                move || drop(clock)
            },
            complete,
        );
    }

    {
        let show_skip = show_skip.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = Timeout::new(SKIP_BUTTON_DELAY_MS, move || show_skip.set(true));
                move || drop(reveal)
            },
            (),
        );
    }

    {
        let reduced = env.motion.is_reduced();
        use_effect_with_deps(
            move |&(complete, reduced)| {
                let handoff = complete.then(|| {
                    let delay = if reduced {
                        REDUCED_MOTION_HANDOFF_MS
                    } else {
                        HANDOFF_DELAY_MS
                    };
                    log::debug!("preload complete, handing off in {}ms", delay);
                    Timeout::new(delay, move || on_complete.emit(()))
                });
                move || drop(handoff)
            },
            (complete, reduced),
        );
    }

    let skip = {
        let sequence = sequence.clone();
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            sequence.borrow_mut().skip();
            phase.set(PreloadPhase::Complete);
        })
    };

    let sequence = sequence.borrow().clone();
    PreloadView {
        sequence,
        phase: *phase,
        elapsed_ms: *elapsed,
        motion: env.motion,
        show_skip: *show_skip && !complete,
        skip,
    }
}
