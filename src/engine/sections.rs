//! Which page section is "current", for the header progress navigation.

/// Viewport-relative bounds of one section, as from `getBoundingClientRect`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Header switches to its solid style once the page has moved.
pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionTracker {
    active: Option<String>,
}

impl SectionTracker {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            active: Some(initial.into()),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Pick the first section (in document order) that straddles the
    /// viewport midline. Keeps the previous answer when none does, e.g. in
    /// the gap between two sections. Returns whether the active id changed.
    pub fn update(&mut self, sections: &[SectionBounds], viewport_height: f64) -> bool {
        let midline = viewport_height / 2.0;
        let hit = sections
            .iter()
            .find(|s| s.top <= midline && s.bottom >= midline)
            .map(|s| s.id.as_str());
        match hit {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            bottom,
        }
    }

    #[test]
    fn midline_picks_section() {
        let mut tracker = SectionTracker::new("hero");
        let layout = [
            bounds("hero", -900.0, -100.0),
            bounds("story", -100.0, 700.0),
            bounds("what-we-do", 700.0, 3000.0),
        ];
        assert!(tracker.update(&layout, 800.0));
        assert_eq!(tracker.active(), Some("story"));
        assert!(!tracker.update(&layout, 800.0));
    }

    #[test]
    fn gap_keeps_previous() {
        let mut tracker = SectionTracker::new("story");
        let gap = [bounds("story", -800.0, 300.0), bounds("what-we-do", 500.0, 900.0)];
        assert!(!tracker.update(&gap, 800.0));
        assert_eq!(tracker.active(), Some("story"));
    }

    #[test]
    fn scrolled_flag() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }
}
