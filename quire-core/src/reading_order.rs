//! Reading-order assembly for the DIVINA and PDF profiles.
//!
//! Page numbers in hrefs are 1-based while page indices are 0-based.

use quire_contracts::convert::ImageConverter;
use quire_model::{BookId, Page};

use crate::constants::{
    CONVERT_JPEG, CONVERT_PARAM, RECOMMENDED_IMAGE_TYPES, media_types, segments,
};
use crate::links::book_root;
use crate::manifest::WpLink;
use crate::uri::UriBuilder;

/// Whether clients should be offered a JPEG rendition of pages of this type.
///
/// The converter is only asked about types outside the recommended set.
pub fn offers_jpeg_alternate(
    media_type: &str,
    converter: &dyn ImageConverter,
) -> bool {
    !RECOMMENDED_IMAGE_TYPES.contains(&media_type)
        && converter.can_convert(media_type, media_types::JPEG)
}

fn page_root(pages_root: &UriBuilder, index: usize) -> UriBuilder {
    pages_root.with_segment((index + 1).to_string())
}

/// One link per page, each carrying an explicit (possibly empty)
/// `alternate` list.
pub fn divina_reading_order(
    api_root: &UriBuilder,
    book_id: &BookId,
    pages: &[Page],
    converter: &dyn ImageConverter,
) -> Vec<WpLink> {
    let pages_root = book_root(api_root, book_id).with_segment(segments::PAGES);

    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let href = page_root(&pages_root, index);
            let alternate = if offers_jpeg_alternate(&page.media_type, converter) {
                vec![
                    WpLink::new(
                        href.with_query(CONVERT_PARAM, CONVERT_JPEG).render(),
                        media_types::JPEG,
                    )
                    .with_size(page.width(), page.height()),
                ]
            } else {
                Vec::new()
            };

            WpLink::new(href.render(), page.media_type.as_str())
                .with_size(page.width(), page.height())
                .with_alternates(alternate)
        })
        .collect()
}

/// `page_count` links to the raw PDF pages. Page geometry is unknown
/// without rendering, so no dimensions are given.
pub fn pdf_reading_order(
    api_root: &UriBuilder,
    book_id: &BookId,
    page_count: u32,
) -> Vec<WpLink> {
    let pages_root = book_root(api_root, book_id).with_segment(segments::PAGES);

    (0..page_count as usize)
        .map(|index| {
            WpLink::new(
                page_root(&pages_root, index)
                    .with_segment(segments::RAW)
                    .render(),
                media_types::PDF,
            )
        })
        .collect()
}
