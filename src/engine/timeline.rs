//! Scrubbable exit/enter timelines and time-driven entrance timelines.
//!
//! A [`TransitionTimeline`] is never played; its playhead is set directly from
//! the zone transition progress. The first half animates the outgoing card
//! out, the second half animates the incoming card in, and both ends of the
//! playhead are the resting pose.

use serde::Deserialize;

use super::motion::MotionPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotation,
}

/// Independently posed part of a card. Layers are staggered against each
/// other to get the rolling text reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Card,
    Heading,
    Body,
    Overlay,
}

impl Layer {
    const ALL: [Layer; 4] = [Layer::Card, Layer::Heading, Layer::Body, Layer::Overlay];

    fn index(self) -> usize {
        match self {
            Layer::Card => 0,
            Layer::Heading => 1,
            Layer::Body => 2,
            Layer::Overlay => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Power2Out,
    Power3InOut,
    BackOut(f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

/// Visual state of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
            Property::Rotation => self.rotation = value,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Pose::IDENTITY
    }

    /// Inline CSS for the pose.
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return "opacity: 1; transform: none;".to_string();
        }
        format!(
            "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}) rotate({:.2}deg);",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotation
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}

/// One animated property change. `start`/`end` are positions on whatever
/// axis the owning timeline uses (half-local playhead or milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub layer: Layer,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub end: f64,
    pub easing: Easing,
}

impl Tween {
    fn value_at(&self, position: f64) -> f64 {
        if position <= self.start {
            return self.from;
        }
        if position >= self.end || self.end <= self.start {
            return self.to;
        }
        let t = self.easing.apply((position - self.start) / (self.end - self.start));
        self.from + (self.to - self.from) * t
    }
}

fn sample_tweens(tweens: &[Tween], position: f64) -> [Pose; 4] {
    let mut poses = [Pose::IDENTITY; 4];
    for tween in tweens {
        poses[tween.layer.index()].set(tween.property, tween.value_at(position));
    }
    poses
}

/// Which card's content a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub side: Side,
    poses: [Pose; 4],
}

impl Frame {
    pub fn settled() -> Self {
        Self {
            side: Side::Incoming,
            poses: [Pose::IDENTITY; 4],
        }
    }

    pub fn pose(&self, layer: Layer) -> Pose {
        self.poses[layer.index()]
    }

    pub fn is_settled(&self) -> bool {
        Layer::ALL.iter().all(|layer| self.pose(*layer).is_identity())
    }
}

/// Fixed structure a section's zone transition is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionStyle {
    Fade,
    #[default]
    Slide,
    Rise,
    Zoom,
    Tilt,
}

impl TransitionStyle {
    /// Card property offset when fully out: `(property, value)` pairs.
    fn out_pose(self) -> &'static [(Property, f64)] {
        match self {
            TransitionStyle::Fade => &[],
            TransitionStyle::Slide => &[(Property::TranslateX, -80.0)],
            TransitionStyle::Rise => &[(Property::TranslateY, -60.0)],
            TransitionStyle::Zoom => &[(Property::Scale, 0.85)],
            TransitionStyle::Tilt => &[(Property::Rotation, -6.0), (Property::TranslateY, -30.0)],
        }
    }

    fn in_pose(self) -> &'static [(Property, f64)] {
        match self {
            TransitionStyle::Fade => &[],
            TransitionStyle::Slide => &[(Property::TranslateX, 80.0)],
            TransitionStyle::Rise => &[(Property::TranslateY, 60.0)],
            TransitionStyle::Zoom => &[(Property::Scale, 1.1)],
            TransitionStyle::Tilt => &[(Property::Rotation, 6.0), (Property::TranslateY, 30.0)],
        }
    }
}

fn identity_value(property: Property) -> f64 {
    match property {
        Property::Opacity | Property::Scale => 1.0,
        Property::TranslateX | Property::TranslateY | Property::Rotation => 0.0,
    }
}

// Stagger slots on the half-local axis, in layer order.
const EXIT_SLOTS: [(Layer, f64, f64); 3] = [
    (Layer::Heading, 0.0, 0.7),
    (Layer::Body, 0.15, 0.85),
    (Layer::Card, 0.3, 1.0),
];
const ENTER_SLOTS: [(Layer, f64, f64); 3] = [
    (Layer::Card, 0.0, 0.7),
    (Layer::Heading, 0.15, 0.85),
    (Layer::Body, 0.3, 1.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTimeline {
    exit: Vec<Tween>,
    enter: Vec<Tween>,
    playhead: f64,
    disposed: bool,
}

impl TransitionTimeline {
    pub fn build(style: TransitionStyle) -> Self {
        let mut exit = Vec::new();
        for (layer, start, end) in EXIT_SLOTS {
            exit.push(Tween {
                layer,
                property: Property::Opacity,
                from: 1.0,
                to: 0.0,
                start,
                end,
                easing: Easing::Power2Out,
            });
            // Text layers drift a little; the card carries the style's motion.
            let offsets: &[(Property, f64)] = if layer == Layer::Card {
                style.out_pose()
            } else {
                &[(Property::TranslateY, -16.0)]
            };
            for &(property, to) in offsets {
                exit.push(Tween {
                    layer,
                    property,
                    from: identity_value(property),
                    to,
                    start,
                    end,
                    easing: Easing::Power2Out,
                });
            }
        }

        let mut enter = Vec::new();
        for (layer, start, end) in ENTER_SLOTS {
            enter.push(Tween {
                layer,
                property: Property::Opacity,
                from: 0.0,
                to: 1.0,
                start,
                end,
                easing: Easing::Power2Out,
            });
            let offsets: &[(Property, f64)] = if layer == Layer::Card {
                style.in_pose()
            } else {
                &[(Property::TranslateY, 16.0)]
            };
            for &(property, from) in offsets {
                enter.push(Tween {
                    layer,
                    property,
                    from,
                    to: identity_value(property),
                    start,
                    end,
                    easing: Easing::Power3InOut,
                });
            }
        }

        Self {
            exit,
            enter,
            playhead: 0.0,
            disposed: false,
        }
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the timeline. Later seeks are no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.exit.clear();
        self.enter.clear();
    }

    /// Move the playhead to `progress` and return the pose there.
    ///
    /// Below 0.5 the frame belongs to the outgoing card, from 0.5 on to the
    /// incoming one. Under reduced motion every layer snaps to rest.
    pub fn seek(&mut self, progress: f64, motion: MotionPreference) -> Option<Frame> {
        if self.disposed {
            return None;
        }
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.playhead = progress;

        let side = if progress < 0.5 {
            Side::Outgoing
        } else {
            Side::Incoming
        };
        if motion.is_reduced() {
            return Some(Frame {
                side,
                poses: [Pose::IDENTITY; 4],
            });
        }
        let poses = match side {
            Side::Outgoing => sample_tweens(&self.exit, progress / 0.5),
            Side::Incoming => sample_tweens(&self.enter, (progress - 0.5) / 0.5),
        };
        Some(Frame { side, poses })
    }
}

/// Auto-playing one-shot timeline on a millisecond axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntranceTimeline {
    tweens: Vec<Tween>,
}

impl EntranceTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tween running from `start_ms` for `duration_ms`.
    pub fn to(
        mut self,
        layer: Layer,
        property: Property,
        (from, to): (f64, f64),
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        self.tweens.push(Tween {
            layer,
            property,
            from,
            to,
            start: start_ms,
            end: start_ms + duration_ms.max(0.0),
            easing,
        });
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.tweens.iter().map(|t| t.end).fold(0.0, f64::max)
    }

    pub fn is_complete(&self, elapsed_ms: f64, motion: MotionPreference) -> bool {
        motion.is_reduced() || elapsed_ms >= self.duration_ms()
    }

    /// Pose of `layer` at `elapsed_ms`. Reduced motion jumps to the end.
    pub fn sample(&self, layer: Layer, elapsed_ms: f64, motion: MotionPreference) -> Pose {
        let position = if motion.is_reduced() || !elapsed_ms.is_finite() {
            self.duration_ms()
        } else {
            elapsed_ms
        };
        sample_tweens(&self.tweens, position)[layer.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Power2Out,
            Easing::Power3InOut,
            Easing::BackOut(1.7),
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?}");
        }
        assert!(Easing::BackOut(1.7).apply(0.7) > 1.0);
    }

    #[test]
    fn both_ends_are_resting_pose() {
        for style in [
            TransitionStyle::Fade,
            TransitionStyle::Slide,
            TransitionStyle::Rise,
            TransitionStyle::Zoom,
            TransitionStyle::Tilt,
        ] {
            let mut timeline = TransitionTimeline::build(style);
            assert!(timeline.seek(0.0, MotionPreference::Full).unwrap().is_settled());
            assert!(timeline.seek(1.0, MotionPreference::Full).unwrap().is_settled());
        }
    }

    #[test]
    fn sides_split_at_midpoint() {
        let mut timeline = TransitionTimeline::build(TransitionStyle::Slide);
        assert_eq!(timeline.seek(0.49, MotionPreference::Full).unwrap().side, Side::Outgoing);
        let at_mid = timeline.seek(0.5, MotionPreference::Full).unwrap();
        assert_eq!(at_mid.side, Side::Incoming);
        // incoming card starts fully hidden and offset
        assert_eq!(at_mid.pose(Layer::Card).opacity, 0.0);
        assert_eq!(at_mid.pose(Layer::Card).translate_x, 80.0);
    }

    #[test]
    fn exit_half_fades_out_old_content() {
        let mut timeline = TransitionTimeline::build(TransitionStyle::Rise);
        let nearly_out = timeline.seek(0.499, MotionPreference::Full).unwrap();
        assert!(nearly_out.pose(Layer::Heading).opacity < 0.01);
        assert!(nearly_out.pose(Layer::Card).translate_y < -50.0);
    }

    #[test]
    fn text_layers_are_staggered() {
        let mut timeline = TransitionTimeline::build(TransitionStyle::Fade);
        let frame = timeline.seek(0.6, MotionPreference::Full).unwrap();
        // card leads, heading follows, body trails
        let card = frame.pose(Layer::Card).opacity;
        let heading = frame.pose(Layer::Heading).opacity;
        let body = frame.pose(Layer::Body).opacity;
        assert!(card > heading && heading >= body, "{card} {heading} {body}");
        assert_eq!(body, 0.0);
    }

    #[test]
    fn reduced_motion_settles_in_one_seek() {
        let mut timeline = TransitionTimeline::build(TransitionStyle::Tilt);
        for p in [0.1, 0.3, 0.5, 0.7] {
            let frame = timeline.seek(p, MotionPreference::Reduced).unwrap();
            assert!(frame.is_settled());
        }
    }

    #[test]
    fn disposed_timeline_ignores_seeks() {
        let mut timeline = TransitionTimeline::build(TransitionStyle::Zoom);
        timeline.seek(0.3, MotionPreference::Full);
        timeline.dispose();
        assert!(timeline.seek(0.7, MotionPreference::Full).is_none());
        assert_eq!(timeline.playhead(), 0.3);
    }

    #[test]
    fn entrance_timeline_plays_by_time() {
        let timeline = EntranceTimeline::new()
            .to(Layer::Heading, Property::Opacity, (0.0, 1.0), 0.0, 800.0, Easing::Linear)
            .to(Layer::Overlay, Property::Opacity, (1.0, 0.0), 800.0, 600.0, Easing::Linear);
        assert_eq!(timeline.duration_ms(), 1400.0);
        assert_eq!(timeline.sample(Layer::Heading, 400.0, MotionPreference::Full).opacity, 0.5);
        assert_eq!(timeline.sample(Layer::Overlay, 400.0, MotionPreference::Full).opacity, 1.0);
        assert!(!timeline.is_complete(1000.0, MotionPreference::Full));
        assert!(timeline.is_complete(0.0, MotionPreference::Reduced));
        assert_eq!(timeline.sample(Layer::Overlay, 0.0, MotionPreference::Reduced).opacity, 0.0);
    }

    #[test]
    fn pose_css() {
        assert_eq!(Pose::IDENTITY.to_css(), "opacity: 1; transform: none;");
        let pose = Pose {
            opacity: 0.5,
            translate_x: 10.0,
            ..Pose::IDENTITY
        };
        assert_eq!(
            pose.to_css(),
            "opacity: 0.500; transform: translate3d(10.00px, 0.00px, 0) scale(1.000) rotate(0.00deg);"
        );
    }
}
