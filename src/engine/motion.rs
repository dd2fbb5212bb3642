/// The user's `prefers-reduced-motion` setting.
///
/// Every animated path consults this. `Reduced` turns transitions into
/// single-tick state changes that still land on the correct final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }

    /// Duration to actually animate for. Zero under reduced motion.
    pub fn duration_ms(self, full_ms: u32) -> u32 {
        match self {
            Self::Full => full_ms,
            Self::Reduced => 0,
        }
    }

    /// Delay before an animation starts. Staggering is dropped under reduced
    /// motion so everything settles in the same tick.
    pub fn delay_ms(self, full_ms: u32) -> u32 {
        self.duration_ms(full_ms)
    }
}
