//! Yew hooks that feed browser events into the engine.

pub mod carousel;
pub mod environment;
pub mod pinned;
pub mod preload;
pub mod scroll;
pub mod sections;
pub mod visibility;

pub use carousel::{use_carousel, CarouselHandle};
pub use environment::{use_breakpoint, use_environment, use_reduced_motion, SiteEnvironment};
pub use pinned::{use_pinned_section, PinnedSection};
pub use preload::{use_preload, PreloadView};
pub use scroll::{scroll_to_section, scroll_window_to, subscribe_window_scroll};
pub use sections::{use_page_scroll, PageScroll};
pub use visibility::use_visibility;
