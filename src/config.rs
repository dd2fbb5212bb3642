use log::Level;

use crate::content::{CarouselSection, ZonedSection};
use crate::engine::{CarouselState, EngineError, TransitionStyle, ZoneMapper};

pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const SWAP_LOCK_MS: u32 = 300;
pub const HEADLINE_STAGGER_MS: u32 = 200;
pub const CARD_STAGGER_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Engine tick logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn play_preload() -> bool {
    false // Skip the intro overlay during development
}

#[cfg(not(debug_assertions))]
pub fn play_preload() -> bool {
    true
}

/// Everything a pinned zone section needs besides its copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionConfig {
    pub mapper: ZoneMapper,
    pub style: TransitionStyle,
}

impl SectionConfig {
    pub fn pinned(section: &ZonedSection) -> Result<Self, EngineError> {
        Ok(Self {
            mapper: ZoneMapper::with_window(section.cards.len(), section.window)?,
            style: section.transition,
        })
    }
}

pub fn carousel_state(section: &CarouselSection) -> Result<CarouselState, EngineError> {
    let state = CarouselState::new(section.slides.len(), section.per_page)?;
    Ok(if section.swap_lock {
        state.with_swap_lock()
    } else {
        state
    })
}
