//! Auto-advancing carousel state.
//!
//! Policy for manual controls: any manual step resets the auto-advance timer.
//! The state carries a `timer_epoch` that bumps on every manual step; the
//! timer owner restarts its interval whenever the epoch changes, so the next
//! automatic advance is always one full interval after the last click.
//!
//! The swap lock only applies under full motion. With reduced motion every
//! step lands on its page in the same `apply` call.

use super::error::EngineError;
use super::motion::MotionPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// Timer fired.
    Tick,
    Next,
    Prev,
    GoTo(usize),
    /// Swap-lock timer fired; apply the pending step.
    Commit,
    /// The reduced-motion preference changed.
    Motion(MotionPreference),
    Dispose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    slides: usize,
    per_page: usize,
    current: usize,
    pending: Option<usize>,
    swap_lock: bool,
    motion: MotionPreference,
    timer_epoch: u64,
    disposed: bool,
}

impl CarouselState {
    pub fn new(slides: usize, per_page: usize) -> Result<Self, EngineError> {
        if slides == 0 || per_page == 0 {
            return Err(EngineError::EmptyCarousel);
        }
        Ok(Self {
            slides,
            per_page,
            current: 0,
            pending: None,
            swap_lock: false,
            motion: MotionPreference::Full,
            timer_epoch: 0,
            disposed: false,
        })
    }

    /// Defer page changes until [`CarouselAction::Commit`], ignoring further
    /// requests while one is pending.
    pub fn with_swap_lock(mut self) -> Self {
        self.swap_lock = true;
        self
    }

    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    pub fn page_count(&self) -> usize {
        self.slides.div_ceil(self.per_page)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Slide indices shown on the current page.
    pub fn visible_slides(&self) -> std::ops::Range<usize> {
        let start = self.current * self.per_page;
        start..(start + self.per_page).min(self.slides)
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn step(&self, forward: bool) -> usize {
        let pages = self.page_count();
        if forward {
            (self.current + 1) % pages
        } else {
            (self.current + pages - 1) % pages
        }
    }

    fn request(&mut self, target: usize) {
        if self.swap_lock && !self.motion.is_reduced() {
            if self.pending.is_none() {
                self.pending = Some(target);
            }
        } else {
            self.current = target;
        }
    }

    /// Apply `action`. Returns whether anything changed.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        if self.disposed {
            return false;
        }
        let before = self.clone();
        match action {
            CarouselAction::Tick => {
                if self.pending.is_none() {
                    let target = self.step(true);
                    self.request(target);
                }
            }
            CarouselAction::Next | CarouselAction::Prev | CarouselAction::GoTo(_) => {
                if self.pending.is_some() {
                    return false;
                }
                let target = match action {
                    CarouselAction::Next => self.step(true),
                    CarouselAction::Prev => self.step(false),
                    CarouselAction::GoTo(page) => page.min(self.page_count() - 1),
                    _ => self.current,
                };
                self.request(target);
                self.timer_epoch += 1;
            }
            CarouselAction::Commit => {
                if let Some(target) = self.pending.take() {
                    self.current = target;
                }
            }
            CarouselAction::Motion(motion) => {
                self.motion = motion;
                if motion.is_reduced() {
                    if let Some(target) = self.pending.take() {
                        self.current = target;
                    }
                }
            }
            CarouselAction::Dispose => {
                self.pending = None;
                self.disposed = true;
            }
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_empty() {
        assert!(matches!(CarouselState::new(0, 1), Err(EngineError::EmptyCarousel)));
    }

    #[test]
    fn ticks_wrap_around() {
        let mut carousel = CarouselState::new(3, 1).unwrap();
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                carousel.apply(CarouselAction::Tick);
                carousel.current()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut carousel = CarouselState::new(5, 1).unwrap();
        carousel.apply(CarouselAction::Prev);
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn manual_steps_reset_the_timer_but_ticks_do_not() {
        let mut carousel = CarouselState::new(4, 1).unwrap();
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.timer_epoch(), 0);
        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::GoTo(0));
        assert_eq!(carousel.timer_epoch(), 2);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn pages_group_slides() {
        let mut posts = CarouselState::new(5, 3).unwrap();
        assert_eq!(posts.page_count(), 2);
        assert_eq!(posts.visible_slides(), 0..3);
        posts.apply(CarouselAction::Next);
        assert_eq!(posts.visible_slides(), 3..5);
        posts.apply(CarouselAction::Next);
        assert_eq!(posts.current(), 0);
        posts.apply(CarouselAction::GoTo(99));
        assert_eq!(posts.current(), 1);
    }

    #[test]
    fn swap_lock_defers_and_drops_extra_clicks() {
        let mut cases = CarouselState::new(3, 1).unwrap().with_swap_lock();
        assert!(cases.apply(CarouselAction::Next));
        assert!(cases.is_animating());
        assert_eq!(cases.current(), 0);

        assert!(!cases.apply(CarouselAction::Next));
        cases.apply(CarouselAction::Tick);
        cases.apply(CarouselAction::Commit);
        assert_eq!(cases.current(), 1);
        assert!(!cases.is_animating());
    }

    #[test]
    fn reduced_motion_swaps_without_waiting() {
        let mut cases = CarouselState::new(3, 1)
            .unwrap()
            .with_swap_lock()
            .with_motion(MotionPreference::Reduced);
        assert!(cases.apply(CarouselAction::Next));
        assert_eq!(cases.current(), 1);
        assert!(!cases.is_animating());
        cases.apply(CarouselAction::Tick);
        assert_eq!(cases.current(), 2);
    }

    #[test]
    fn switching_to_reduced_motion_lands_the_pending_swap() {
        let mut cases = CarouselState::new(3, 1).unwrap().with_swap_lock();
        cases.apply(CarouselAction::Next);
        assert!(cases.is_animating());
        assert!(cases.apply(CarouselAction::Motion(MotionPreference::Reduced)));
        assert_eq!(cases.current(), 1);
        assert!(!cases.is_animating());

        cases.apply(CarouselAction::Motion(MotionPreference::Full));
        cases.apply(CarouselAction::Prev);
        assert!(cases.is_animating());
        assert_eq!(cases.current(), 1);
    }

    #[test]
    fn stale_timer_after_dispose_changes_nothing() {
        let mut carousel = CarouselState::new(3, 1).unwrap().with_swap_lock();
        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Dispose);
        let frozen = carousel.clone();
        assert!(!carousel.apply(CarouselAction::Tick));
        assert!(!carousel.apply(CarouselAction::Commit));
        assert_eq!(carousel, frozen);
        assert_eq!(carousel.current(), 0);
    }
}
