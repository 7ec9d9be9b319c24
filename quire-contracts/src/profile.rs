//! Content-type registry lookups.

use quire_model::MediaProfile;

/// Outcome of looking up a raw media type in the content-type registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMediaType {
    /// Reading profile content of this type is analyzed into.
    pub profile: MediaProfile,
    /// Media type advertised for downloads, when it differs from the raw one.
    pub export_type: Option<String>,
}

impl ResolvedMediaType {
    /// Pairs a profile with its optional download type.
    pub fn new(profile: MediaProfile, export_type: Option<String>) -> Self {
        Self {
            profile,
            export_type,
        }
    }
}

/// Static content-type registry. No I/O.
pub trait ContentProfileResolver: Send + Sync {
    /// `None` when the media type is not registered.
    fn resolve(&self, media_type: &str) -> Option<ResolvedMediaType>;
}

impl<T: ContentProfileResolver + ?Sized> ContentProfileResolver
    for std::sync::Arc<T>
{
    fn resolve(&self, media_type: &str) -> Option<ResolvedMediaType> {
        (**self).resolve(media_type)
    }
}
