//! Image format conversion capability.

/// Capability query for image format conversion.
///
/// Must be total: unknown or malformed content types answer `false`
/// instead of failing.
pub trait ImageConverter: Send + Sync {
    /// Whether an image of `from` content type can be re-encoded as `to`.
    fn can_convert(&self, from: &str, to: &str) -> bool;
}

impl<T: ImageConverter + ?Sized> ImageConverter for std::sync::Arc<T> {
    fn can_convert(&self, from: &str, to: &str) -> bool {
        (**self).can_convert(from, to)
    }
}
