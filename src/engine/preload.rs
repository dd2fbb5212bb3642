//! Intro overlay played once before the page is shown.
//!
//! Characters pop in one after another, the typography block rises off the
//! top and the overlay fades away. The visitor can skip at any point.

use super::breakpoint::Breakpoint;
use super::motion::MotionPreference;
use super::timeline::{Easing, EntranceTimeline, Layer, Pose, Property};

pub const SKIP_BUTTON_DELAY_MS: u32 = 2000;
pub const HANDOFF_DELAY_MS: u32 = 300;
pub const REDUCED_MOTION_HANDOFF_MS: u32 = 500;

const CHAR_IN_MS: f64 = 800.0;
const RISE_DELAY_MS: f64 = 500.0;
const OVERLAY_FADE_MS: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreloadPhase {
    Initial,
    Rising,
    Complete,
}

/// Breakpoint-dependent rise parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseProfile {
    pub final_y: f64,
    pub rise_ms: f64,
    pub stagger_ms: f64,
}

impl RiseProfile {
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        match breakpoint {
            Breakpoint::Mobile => Self {
                final_y: -300.0,
                rise_ms: 1500.0,
                stagger_ms: 30.0,
            },
            Breakpoint::Tablet => Self {
                final_y: -400.0,
                rise_ms: 2000.0,
                stagger_ms: 50.0,
            },
            Breakpoint::Desktop => Self {
                final_y: -500.0,
                rise_ms: 2000.0,
                stagger_ms: 50.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreloadSequence {
    timeline: EntranceTimeline,
    profile: RiseProfile,
    rise_start_ms: f64,
    phase: PreloadPhase,
}

impl PreloadSequence {
    pub fn new(breakpoint: Breakpoint, char_count: usize) -> Self {
        let profile = RiseProfile::for_breakpoint(breakpoint);
        let chars_done = CHAR_IN_MS + profile.stagger_ms * char_count.saturating_sub(1) as f64;
        let rise_start_ms = chars_done + RISE_DELAY_MS;
        let rise_end = rise_start_ms + profile.rise_ms;

        let timeline = EntranceTimeline::new()
            .to(Layer::Heading, Property::TranslateY, (50.0, 0.0), 0.0, CHAR_IN_MS, Easing::BackOut(1.7))
            .to(Layer::Heading, Property::Opacity, (0.0, 1.0), 0.0, CHAR_IN_MS, Easing::BackOut(1.7))
            .to(
                Layer::Body,
                Property::TranslateY,
                (0.0, profile.final_y),
                rise_start_ms,
                profile.rise_ms,
                Easing::Power3InOut,
            )
            .to(
                Layer::Overlay,
                Property::Opacity,
                (1.0, 0.0),
                rise_end + 100.0,
                OVERLAY_FADE_MS,
                Easing::Power2Out,
            );

        Self {
            timeline,
            profile,
            rise_start_ms,
            phase: PreloadPhase::Initial,
        }
    }

    pub fn profile(&self) -> RiseProfile {
        self.profile
    }

    pub fn phase(&self) -> PreloadPhase {
        self.phase
    }

    pub fn duration_ms(&self) -> f64 {
        self.timeline.duration_ms()
    }

    /// Move to the phase for `elapsed_ms`. Phases only go forward.
    pub fn advance(&mut self, elapsed_ms: f64, motion: MotionPreference) -> PreloadPhase {
        let target = if self.timeline.is_complete(elapsed_ms, motion) {
            PreloadPhase::Complete
        } else if elapsed_ms >= self.rise_start_ms {
            PreloadPhase::Rising
        } else {
            PreloadPhase::Initial
        };
        self.phase = self.phase.max(target);
        self.phase
    }

    pub fn skip(&mut self) {
        self.phase = PreloadPhase::Complete;
    }

    /// Pose of the `index`-th character, staggered behind the first.
    pub fn char_pose(&self, index: usize, elapsed_ms: f64, motion: MotionPreference) -> Pose {
        let local = elapsed_ms - self.profile.stagger_ms * index as f64;
        self.timeline.sample(Layer::Heading, local, motion)
    }

    pub fn typography_pose(&self, elapsed_ms: f64, motion: MotionPreference) -> Pose {
        self.timeline.sample(Layer::Body, elapsed_ms, motion)
    }

    pub fn overlay_pose(&self, elapsed_ms: f64, motion: MotionPreference) -> Pose {
        if self.phase == PreloadPhase::Complete {
            return Pose {
                opacity: 0.0,
                ..Pose::IDENTITY
            };
        }
        self.timeline.sample(Layer::Overlay, elapsed_ms, motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_move_forward_with_time() {
        let mut intro = PreloadSequence::new(Breakpoint::Desktop, 10);
        // 800 + 9 * 50 + 500
        assert_eq!(intro.advance(0.0, MotionPreference::Full), PreloadPhase::Initial);
        assert_eq!(intro.advance(1749.0, MotionPreference::Full), PreloadPhase::Initial);
        assert_eq!(intro.advance(1750.0, MotionPreference::Full), PreloadPhase::Rising);
        assert_eq!(intro.advance(10.0, MotionPreference::Full), PreloadPhase::Rising);
        let end = intro.duration_ms();
        assert_eq!(end, 1750.0 + 2000.0 + 100.0 + 600.0);
        assert_eq!(intro.advance(end, MotionPreference::Full), PreloadPhase::Complete);
    }

    #[test]
    fn skip_is_terminal() {
        let mut intro = PreloadSequence::new(Breakpoint::Mobile, 3);
        intro.skip();
        assert_eq!(intro.advance(0.0, MotionPreference::Full), PreloadPhase::Complete);
        assert_eq!(intro.overlay_pose(0.0, MotionPreference::Full).opacity, 0.0);
    }

    #[test]
    fn reduced_motion_completes_immediately() {
        let mut intro = PreloadSequence::new(Breakpoint::Tablet, 12);
        assert_eq!(intro.advance(0.0, MotionPreference::Reduced), PreloadPhase::Complete);
        let chars = intro.char_pose(11, 0.0, MotionPreference::Reduced);
        assert_eq!(chars.opacity, 1.0);
        assert_eq!(chars.translate_y, 0.0);
    }

    #[test]
    fn characters_are_staggered() {
        let intro = PreloadSequence::new(Breakpoint::Desktop, 5);
        let first = intro.char_pose(0, 100.0, MotionPreference::Full);
        let fourth = intro.char_pose(3, 100.0, MotionPreference::Full);
        assert!(first.opacity > 0.0);
        assert_eq!(fourth.opacity, 0.0);
        assert_eq!(fourth.translate_y, 50.0);
    }

    #[test]
    fn rise_depends_on_breakpoint() {
        let mobile = PreloadSequence::new(Breakpoint::Mobile, 1);
        let desktop = PreloadSequence::new(Breakpoint::Desktop, 1);
        assert_eq!(mobile.profile().final_y, -300.0);
        let end = desktop.duration_ms();
        assert_eq!(desktop.typography_pose(end, MotionPreference::Full).translate_y, -500.0);
    }
}
