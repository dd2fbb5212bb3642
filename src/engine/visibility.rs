use serde::Deserialize;

use super::error::EngineError;
use super::motion::MotionPreference;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_MS: u32 = 1000;

/// One-shot "has this section been seen" latch.
///
/// Fed with raw intersection reports; flips to visible the first time the
/// element is intersecting with a ratio at or above the threshold and never
/// flips back.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    visible: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Result<Self, EngineError> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(EngineError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            visible: false,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection report. Returns the latched visibility.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if !self.visible && is_intersecting && ratio >= self.threshold {
            self.visible = true;
        }
        self.visible
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            visible: false,
        }
    }
}

/// Hidden → shown style pair applied once a section becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealPreset {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl RevealPreset {
    fn hidden_transform(self) -> &'static str {
        match self {
            RevealPreset::FadeUp => "translate3d(0, 2rem, 0)",
            RevealPreset::FadeDown => "translate3d(0, -2rem, 0)",
            RevealPreset::FadeLeft => "translate3d(-3rem, 0, 0)",
            RevealPreset::FadeRight => "translate3d(3rem, 0, 0)",
            RevealPreset::ScaleIn => "scale(0.8)",
        }
    }

    /// Inline style for an element revealed with this preset.
    ///
    /// The shown state is always `opacity: 1; transform: none`, so a reveal
    /// that never animates still leaves the content legible.
    pub fn style(self, visible: bool, delay_ms: u32, motion: MotionPreference) -> String {
        let (opacity, transform) = if visible {
            ("1", "none")
        } else {
            ("0", self.hidden_transform())
        };
        let duration = motion.duration_ms(REVEAL_DURATION_MS);
        if duration == 0 {
            return format!("opacity: {opacity}; transform: {transform}; transition: none;");
        }
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;",
            delay = motion.delay_ms(delay_ms),
        )
    }
}

/// Per-element delays for a staggered reveal: `base, base + step, ...`.
pub fn stagger_delays(base_ms: u32, step_ms: u32, count: usize) -> Vec<u32> {
    (0..count)
        .map(|i| base_ms.saturating_add(step_ms.saturating_mul(i as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_never_reverts() {
        let mut trigger = VisibilityTrigger::new(0.1).unwrap();
        let seen: Vec<bool> = [(false, 0.0), (true, 0.4), (false, 0.0)]
            .into_iter()
            .map(|(hit, ratio)| trigger.observe(hit, ratio))
            .collect();
        assert_eq!(seen, vec![false, true, true]);
    }

    #[test]
    fn below_threshold_does_not_fire() {
        let mut trigger = VisibilityTrigger::new(0.5).unwrap();
        assert!(!trigger.observe(true, 0.2));
        assert!(trigger.observe(true, 0.5));
    }

    #[test]
    fn rejects_bad_threshold() {
        assert!(matches!(
            VisibilityTrigger::new(1.5),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(VisibilityTrigger::new(f64::NAN).is_err());
    }

    #[test]
    fn instances_are_independent() {
        let mut a = VisibilityTrigger::default();
        let b = VisibilityTrigger::default();
        a.observe(true, 1.0);
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }

    #[test]
    fn reveal_style_respects_reduced_motion() {
        let full = RevealPreset::FadeUp.style(false, 200, MotionPreference::Full);
        assert!(full.contains("opacity: 0"));
        assert!(full.contains("1000ms"));
        assert!(full.contains("200ms"));

        let reduced = RevealPreset::FadeUp.style(true, 200, MotionPreference::Reduced);
        assert_eq!(
            reduced,
            "opacity: 1; transform: none; transition: none;"
        );
    }

    #[test]
    fn stagger_steps() {
        assert_eq!(stagger_delays(200, 200, 4), vec![200, 400, 600, 800]);
        assert!(stagger_delays(0, 100, 0).is_empty());
    }
}
