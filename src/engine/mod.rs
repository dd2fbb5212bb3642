//! Scroll animation orchestration, independent of the DOM.
//!
//! The hooks in `crate::hooks` feed browser events in; components render the
//! state that comes out.

pub mod breakpoint;
pub mod carousel;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod preload;
pub mod progress;
pub mod scroll_bus;
pub mod sections;
pub mod timeline;
pub mod visibility;
pub mod zones;

pub use breakpoint::Breakpoint;
pub use carousel::{CarouselAction, CarouselState};
pub use driver::{PinnedSectionDriver, SectionFrame};
pub use error::EngineError;
pub use lifecycle::Liveness;
pub use motion::MotionPreference;
pub use progress::{scroll_offset_for, scroll_progress, SectionGeometry};
pub use scroll_bus::{ScrollBus, ScrollSample, Subscription};
pub use timeline::{Frame, Layer, Pose, TransitionStyle, TransitionTimeline};
pub use visibility::{RevealPreset, VisibilityTrigger};
pub use zones::{TransitionWindow, ZoneMapper, ZoneState};
