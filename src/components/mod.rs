pub mod cards;
pub mod carousel;
pub mod footer;
pub mod header;
pub mod newsletter;
pub mod pinned;
pub mod preload;
pub mod reveal;

pub use cards::CardGrid;
pub use carousel::{Carousel, CarouselVariant};
pub use footer::SiteFooter;
pub use header::Header;
pub use newsletter::NewsletterSignup;
pub use pinned::PinnedZoneSection;
pub use preload::PreloadOverlay;
pub use reveal::Reveal;
