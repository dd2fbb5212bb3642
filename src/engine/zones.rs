//! Progress → zone mapping for pinned multi-card sections.
//!
//! Each zone owns an equal slice of progress. The middle of that slice is a
//! transition window towards the next zone; either side of the window the
//! section holds on one card. Everything here is a pure function of progress,
//! so scrolling back over a range replays exactly the same states.

use serde::Deserialize;

use super::error::EngineError;

pub const TRANSITION_START: f64 = 0.15;
pub const TRANSITION_END: f64 = 0.85;

/// Sub-range of local zone progress during which a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "(f64, f64)")]
pub struct TransitionWindow {
    start: f64,
    end: f64,
}

impl TransitionWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, EngineError> {
        let valid = start.is_finite() && end.is_finite() && 0.0 <= start && start < end && end <= 1.0;
        if !valid {
            return Err(EngineError::InvalidTransitionWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    fn contains(&self, local: f64) -> bool {
        self.start <= local && local <= self.end
    }

    fn normalize(&self, local: f64) -> f64 {
        ((local - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self {
            start: TRANSITION_START,
            end: TRANSITION_END,
        }
    }
}

impl TryFrom<(f64, f64)> for TransitionWindow {
    type Error = EngineError;

    fn try_from((start, end): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneState {
    pub active_zone: usize,
    pub next_zone: usize,
    pub zone_local_progress: f64,
    pub in_transition: bool,
    pub transition_progress: f64,
}

impl ZoneState {
    /// Zone whose content is on screen. The swap happens exactly at the
    /// midpoint of the transition so the exit half always shows the old card
    /// and the enter half the new one.
    pub fn displayed_zone(&self) -> usize {
        if self.in_transition && self.transition_progress >= 0.5 {
            self.next_zone
        } else {
            self.active_zone
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMapper {
    zone_count: usize,
    window: TransitionWindow,
}

impl ZoneMapper {
    pub fn new(zone_count: usize) -> Result<Self, EngineError> {
        Self::with_window(zone_count, TransitionWindow::default())
    }

    pub fn with_window(zone_count: usize, window: TransitionWindow) -> Result<Self, EngineError> {
        if zone_count == 0 {
            return Err(EngineError::NoZones);
        }
        Ok(Self { zone_count, window })
    }

    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    pub fn window(&self) -> TransitionWindow {
        self.window
    }

    fn zone_size(&self) -> f64 {
        1.0 / self.zone_count as f64
    }

    fn last_zone(&self) -> usize {
        self.zone_count - 1
    }

    /// Map section progress to the zone state.
    pub fn calculate_card_zone(&self, progress: f64) -> ZoneState {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let zone_size = self.zone_size();
        let raw_zone = (progress / zone_size).floor() as usize;
        let zone = raw_zone.min(self.last_zone());
        let local = ((progress - zone as f64 * zone_size) / zone_size).clamp(0.0, 1.0);

        if zone == self.last_zone() {
            return ZoneState {
                active_zone: zone,
                next_zone: zone,
                zone_local_progress: local,
                in_transition: false,
                transition_progress: 1.0,
            };
        }

        if self.window.contains(local) {
            return ZoneState {
                active_zone: zone,
                next_zone: zone + 1,
                zone_local_progress: local,
                in_transition: true,
                transition_progress: self.window.normalize(local),
            };
        }

        let past_window = local > 0.5;
        let held = (zone + usize::from(past_window)).min(self.last_zone());
        ZoneState {
            active_zone: held,
            next_zone: held,
            zone_local_progress: local,
            in_transition: false,
            transition_progress: if past_window { 1.0 } else { 0.0 },
        }
    }

    /// Progress at which `zone` is centered in its slice (clamped to a valid
    /// zone). Dot navigation scrolls here.
    pub fn zone_center_progress(&self, zone: usize) -> f64 {
        let zone = zone.min(self.last_zone());
        if self.zone_count == 1 {
            return 0.0;
        }
        if zone == self.last_zone() {
            return 1.0;
        }
        // The midpoint of a slice sits inside the transition window, where
        // the old card is still displayed for the first half. Aim just
        // before the window instead so the zone is shown at rest.
        let local = (self.window.start / 2.0).max(0.0);
        (zone as f64 + local) * self.zone_size()
    }
}
