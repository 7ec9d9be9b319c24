//! Readium Web Publication manifest values and the builders that produce them.

mod base;
mod link;
mod metadata;
mod profile;

pub use link::{LinkRel, WpLink};
pub use metadata::{BelongsTo, ReadingProgression, SeriesEntry, WpMetadata};

use serde::Serialize;

use crate::error::Result;

/// A complete publication manifest, ready to be rendered as JSON.
///
/// Built fresh for each request; nothing in it is shared with other
/// manifests. Empty `images`, `readingOrder` and `resources` lists are left
/// out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationManifest {
    /// Declared media type. Not part of the document; the HTTP layer sends
    /// it as `Content-Type`.
    #[serde(skip)]
    pub media_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    pub metadata: WpMetadata,
    pub links: Vec<WpLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<WpLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reading_order: Vec<WpLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<WpLink>,
}

impl PublicationManifest {
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
