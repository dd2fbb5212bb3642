//! Scroll offset ↔ normalized progress within a pinned section.

/// Document-space position of a pinned section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Distance the page scrolls while the section stays pinned.
    pub fn scrollable(&self, viewport_height: f64) -> f64 {
        self.height - viewport_height
    }
}

/// Progress in `[0, 1]` through a pinned section.
///
/// 0 before the section is reached, 1 once it has been scrolled past. When
/// the section is no taller than the viewport (or any input is not finite)
/// there is nothing to scrub, so the result snaps to 0 or 1 depending on
/// which side of the section top we are.
pub fn scroll_progress(scroll_top: f64, geometry: SectionGeometry, viewport_height: f64) -> f64 {
    let past_top = scroll_top - geometry.top;
    let scrollable = geometry.scrollable(viewport_height);
    if !past_top.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        // NaN comparisons are false, so a garbage offset lands on 0.
        return if past_top >= 0.0 { 1.0 } else { 0.0 };
    }
    (past_top / scrollable).clamp(0.0, 1.0)
}

/// Inverse of [`scroll_progress`]: the page offset at which the section
/// reports `progress`.
pub fn scroll_offset_for(progress: f64, geometry: SectionGeometry, viewport_height: f64) -> f64 {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let scrollable = geometry.scrollable(viewport_height).max(0.0);
    geometry.top + progress * scrollable
}

/// Container height giving every zone one viewport of scroll distance.
pub fn pinned_height(zone_count: usize, viewport_height: f64) -> f64 {
    (zone_count.max(1) as f64 + 1.0) * viewport_height.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    #[test]
    fn clamps_both_ends() {
        let geometry = SectionGeometry::new(1000.0, 4000.0);
        assert_eq!(scroll_progress(0.0, geometry, VH), 0.0);
        assert_eq!(scroll_progress(1000.0, geometry, VH), 0.0);
        assert_eq!(scroll_progress(2600.0, geometry, VH), 0.5);
        assert_eq!(scroll_progress(4200.0, geometry, VH), 1.0);
        assert_eq!(scroll_progress(99_999.0, geometry, VH), 1.0);
    }

    #[test]
    fn degenerate_geometry_never_produces_nan() {
        let flat = SectionGeometry::new(500.0, VH);
        assert_eq!(scroll_progress(100.0, flat, VH), 0.0);
        assert_eq!(scroll_progress(500.0, flat, VH), 1.0);

        let short = SectionGeometry::new(500.0, 10.0);
        assert_eq!(scroll_progress(900.0, short, VH), 1.0);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let p = scroll_progress(bad, SectionGeometry::new(0.0, 4000.0), VH);
            assert!(p.is_finite());
            let p = scroll_progress(10.0, SectionGeometry::new(0.0, bad), VH);
            assert!(p.is_finite());
        }
    }

    #[test]
    fn inverse_round_trips_inside_the_section() {
        let geometry = SectionGeometry::new(1200.0, 4800.0);
        for p in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let offset = scroll_offset_for(p, geometry, VH);
            assert!((scroll_progress(offset, geometry, VH) - p).abs() < 1e-9);
        }
        assert_eq!(scroll_offset_for(f64::NAN, geometry, VH), 1200.0);
    }

    #[test]
    fn pinned_height_scales_with_zones() {
        assert_eq!(pinned_height(4, VH), 4000.0);
        assert_eq!(pinned_height(0, VH), 1600.0);
    }
}
