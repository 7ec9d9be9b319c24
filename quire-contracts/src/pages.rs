//! Page lists produced on demand.

use quire_model::{Media, Page};

/// Produces the page sequence of media whose pages are not stored
/// statically, such as PDF documents rendered page by page.
///
/// Calls are single-shot: the synthesizer does not retry, and an error
/// aborts the manifest being built.
pub trait PageExtractor: Send + Sync {
    /// Pages of `media` in reading order.
    fn dynamic_pages(&self, media: &Media) -> anyhow::Result<Vec<Page>>;
}

impl<T: PageExtractor + ?Sized> PageExtractor for std::sync::Arc<T> {
    fn dynamic_pages(&self, media: &Media) -> anyhow::Result<Vec<Page>> {
        (**self).dynamic_pages(media)
    }
}
