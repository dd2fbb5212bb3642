use super::motion::MotionPreference;
use super::progress::{scroll_offset_for, scroll_progress, SectionGeometry};
use super::scroll_bus::ScrollSample;
use super::timeline::{Frame, TransitionStyle, TransitionTimeline};
use super::zones::{ZoneMapper, ZoneState};

/// What a pinned section renders after one scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFrame {
    pub progress: f64,
    pub zone: ZoneState,
    pub displayed_zone: usize,
    pub frame: Frame,
}

impl SectionFrame {
    pub fn at_rest(zone: usize) -> Self {
        Self {
            progress: 0.0,
            zone: ZoneState {
                active_zone: zone,
                next_zone: zone,
                ..ZoneState::default()
            },
            displayed_zone: zone,
            frame: Frame::settled(),
        }
    }
}

/// Per-section orchestration: scroll sample → progress → zone → timeline
/// scrub → content swap, always in that order within a tick.
///
/// The timeline is only built once the section has been armed (it became
/// visible). Until then, and after disposal, the section renders its
/// settled pose.
#[derive(Debug)]
pub struct PinnedSectionDriver {
    mapper: ZoneMapper,
    style: TransitionStyle,
    motion: MotionPreference,
    geometry: Option<SectionGeometry>,
    timeline: Option<TransitionTimeline>,
    displayed_zone: usize,
    disposed: bool,
}

impl PinnedSectionDriver {
    pub fn new(mapper: ZoneMapper, style: TransitionStyle, motion: MotionPreference) -> Self {
        Self {
            mapper,
            style,
            motion,
            geometry: None,
            timeline: None,
            displayed_zone: 0,
            disposed: false,
        }
    }

    pub fn mapper(&self) -> ZoneMapper {
        self.mapper
    }

    pub fn displayed_zone(&self) -> usize {
        self.displayed_zone
    }

    pub fn is_armed(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn set_motion(&mut self, motion: MotionPreference) {
        self.motion = motion;
    }

    pub fn set_geometry(&mut self, geometry: SectionGeometry) {
        if !self.disposed {
            self.geometry = Some(geometry);
        }
    }

    /// Build the transition timeline. Idempotent.
    pub fn arm(&mut self) {
        if !self.disposed && self.timeline.is_none() {
            log::debug!("arming {:?} timeline for {} zones", self.style, self.mapper.zone_count());
            self.timeline = Some(TransitionTimeline::build(self.style));
        }
    }

    /// Process one scroll tick. `None` when there is nothing to render yet
    /// (no geometry) or the driver has been disposed.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Option<SectionFrame> {
        if self.disposed {
            return None;
        }
        let geometry = self.geometry?;

        let progress = scroll_progress(sample.scroll_top, geometry, sample.viewport_height);
        let zone = self.mapper.calculate_card_zone(progress);
        let frame = match self.timeline.as_mut() {
            Some(timeline) => timeline
                .seek(zone.transition_progress, self.motion)
                .unwrap_or_else(Frame::settled),
            None => Frame::settled(),
        };
        let displayed_zone = zone.displayed_zone();
        self.displayed_zone = displayed_zone;

        Some(SectionFrame {
            progress,
            zone,
            displayed_zone,
            frame,
        })
    }

    /// Page offset that centers `zone`, or `None` before geometry is known.
    pub fn scroll_target_for_zone(&self, zone: usize, viewport_height: f64) -> Option<f64> {
        if self.disposed {
            return None;
        }
        let geometry = self.geometry?;
        let progress = self.mapper.zone_center_progress(zone);
        Some(scroll_offset_for(progress, geometry, viewport_height))
    }

    /// Release the timeline and stop reacting to ticks.
    pub fn dispose(&mut self) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.dispose();
        }
        self.timeline = None;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::timeline::{Layer, Side};

    const VH: f64 = 800.0;

    fn driver(zones: usize) -> PinnedSectionDriver {
        let mut driver = PinnedSectionDriver::new(
            ZoneMapper::new(zones).unwrap(),
            TransitionStyle::Slide,
            MotionPreference::Full,
        );
        // 4 zones → 5 viewports tall, 4 viewports of scroll
        driver.set_geometry(SectionGeometry::new(1000.0, (zones as f64 + 1.0) * VH));
        driver
    }

    fn at(scroll_top: f64) -> ScrollSample {
        ScrollSample {
            scroll_top,
            viewport_height: VH,
            viewport_width: 1280.0,
        }
    }

    #[test]
    fn no_frame_without_geometry() {
        let mut driver = PinnedSectionDriver::new(
            ZoneMapper::new(3).unwrap(),
            TransitionStyle::Fade,
            MotionPreference::Full,
        );
        assert!(driver.on_scroll(at(0.0)).is_none());
    }

    #[test]
    fn unarmed_driver_renders_settled_content() {
        let mut driver = driver(4);
        // middle of zone 0's window
        let frame = driver.on_scroll(at(1000.0 + 0.125 * 3200.0)).unwrap();
        assert!(frame.zone.in_transition);
        assert!((frame.zone.transition_progress - 0.5).abs() < 1e-9);
        assert!(frame.frame.is_settled());
    }

    #[test]
    fn content_swap_tracks_timeline_side() {
        let mut driver = driver(4);
        driver.arm();
        // scroll through the whole section in small steps
        let mut top = 1000.0;
        while top <= 4200.0 {
            let frame = driver.on_scroll(at(top)).unwrap();
            if frame.zone.in_transition {
                let expected = match frame.frame.side {
                    Side::Outgoing => frame.zone.active_zone,
                    Side::Incoming => frame.zone.next_zone,
                };
                assert_eq!(frame.displayed_zone, expected, "at {top}");
            }
            top += 7.0;
        }
    }

    #[test]
    fn scrolling_back_restores_identical_frames() {
        let mut driver = driver(4);
        driver.arm();
        let there = driver.on_scroll(at(1900.0)).unwrap();
        driver.on_scroll(at(3800.0));
        driver.on_scroll(at(200.0));
        let back = driver.on_scroll(at(1900.0)).unwrap();
        assert_eq!(there, back);
    }

    #[test]
    fn dot_navigation_targets_zone_centers() {
        let mut driver = driver(4);
        driver.arm();
        for zone in 0..4 {
            let target = driver.scroll_target_for_zone(zone, VH).unwrap();
            let frame = driver.on_scroll(at(target)).unwrap();
            assert_eq!(frame.displayed_zone, zone);
            assert!(frame.frame.pose(Layer::Heading).is_identity());
        }
    }

    #[test]
    fn stale_tick_after_dispose_is_ignored() {
        let mut driver = driver(4);
        driver.arm();
        driver.on_scroll(at(2100.0));
        let shown = driver.displayed_zone();

        driver.dispose();
        assert!(driver.on_scroll(at(4000.0)).is_none());
        assert_eq!(driver.displayed_zone(), shown);
        assert!(driver.scroll_target_for_zone(1, VH).is_none());

        driver.arm();
        driver.set_geometry(SectionGeometry::new(0.0, 10.0));
        assert!(!driver.is_armed());
        assert!(driver.on_scroll(at(0.0)).is_none());
    }

    #[test]
    fn reduced_motion_frames_are_settled() {
        let mut driver = driver(4);
        driver.set_motion(MotionPreference::Reduced);
        driver.arm();
        let frame = driver.on_scroll(at(1000.0 + 0.1 * 3200.0)).unwrap();
        assert!(frame.zone.in_transition);
        assert!(frame.frame.is_settled());
    }
}
