//! Trait surfaces for the collaborators the manifest synthesizer calls into.
//!
//! Implementations live with whoever owns the capability: image decoding,
//! PDF rendering, and the content-type registry are all outside the core.

pub mod convert;
pub mod pages;
pub mod profile;

/// Frequently used collaborator traits.
pub mod prelude {
    pub use super::convert::ImageConverter;
    pub use super::pages::PageExtractor;
    pub use super::profile::{ContentProfileResolver, ResolvedMediaType};
}
