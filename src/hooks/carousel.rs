use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config::{self, SWAP_LOCK_MS};
use crate::content::CarouselSection;
use crate::engine::{CarouselAction, CarouselState, Liveness, MotionPreference};

#[derive(Debug, Clone, PartialEq)]
struct CarouselModel(Option<CarouselState>);

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(state) = self.0.as_ref() else {
            return self;
        };
        let mut next = state.clone();
        if next.apply(action) {
            Rc::new(Self(Some(next)))
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub state: CarouselState,
    pub next: Callback<()>,
    pub prev: Callback<()>,
    pub go_to: Callback<usize>,
}

/// Auto-advancing carousel for `section`, `None` when it has no slides.
///
/// Every manual step bumps the state's timer epoch, which restarts the
/// interval, so auto-advance resumes one full interval after a click.
#[hook]
pub fn use_carousel(section: CarouselSection, motion: MotionPreference) -> Option<CarouselHandle> {
    let interval_ms = section.interval_ms;
    let model = use_reducer_eq(move || {
        let state = config::carousel_state(&section)
            .map(|state| state.with_motion(motion))
            .map_err(|e| log::warn!("carousel #{}: {}", section.id, e))
            .ok();
        CarouselModel(state)
    });
    let liveness = use_memo(|_| Liveness::new(), ());

    {
        let dispatcher = model.dispatcher();
        use_effect_with_deps(
            move |&motion| {
                dispatcher.dispatch(CarouselAction::Motion(motion));
                || ()
            },
            motion,
        );
    }

    let epoch = model.0.as_ref().map(CarouselState::timer_epoch);
    let pages = model.0.as_ref().map_or(0, CarouselState::page_count);
    let animating = model.0.as_ref().is_some_and(CarouselState::is_animating);

    {
        let dispatcher = model.dispatcher();
        let liveness = (*liveness).clone();
        use_effect_with_deps(
            move |&(epoch, pages, interval_ms)| {
                let timer = (epoch.is_some() && pages > 1 && interval_ms > 0).then(|| {
                    let tick = liveness.guard(move |()| dispatcher.dispatch(CarouselAction::Tick));
                    Interval::new(interval_ms, move || tick(()))
                });
                move || drop(timer)
            },
            (epoch, pages, interval_ms),
        );
    }

    {
        let dispatcher = model.dispatcher();
        let liveness = (*liveness).clone();
        use_effect_with_deps(
            move |&(animating, motion)| {
                let commit = animating.then(|| {
                    let commit = liveness.guard(move |()| dispatcher.dispatch(CarouselAction::Commit));
                    Timeout::new(motion.duration_ms(SWAP_LOCK_MS), move || commit(()))
                });
                move || drop(commit)
            },
            (animating, motion),
        );
    }

    {
        let dispatcher = model.dispatcher();
        yew_hooks::use_unmount(move || {
            liveness.kill();
            dispatcher.dispatch(CarouselAction::Dispose);
        });
    }

    let state = model.0.clone()?;
    let dispatch = |action: CarouselAction| {
        let dispatcher = model.dispatcher();
        move |_: ()| dispatcher.dispatch(action)
    };
    let go_to = {
        let dispatcher = model.dispatcher();
        Callback::from(move |page: usize| dispatcher.dispatch(CarouselAction::GoTo(page)))
    };

    Some(CarouselHandle {
        state,
        next: Callback::from(dispatch(CarouselAction::Next)),
        prev: Callback::from(dispatch(CarouselAction::Prev)),
        go_to,
    })
}
