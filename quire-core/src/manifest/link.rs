use serde::Serialize;

/// Link relations used by the generated manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkRel {
    #[serde(rename = "self")]
    SelfLink,
    #[serde(rename = "http://opds-spec.org/acquisition")]
    Acquisition,
}

/// A Readium link object.
///
/// `alternate` is `None` when the link has no notion of alternates and
/// `Some(vec![])` when alternates were considered and none apply; the latter
/// is rendered as an explicit empty array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WpLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<LinkRel>,
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Vec<WpLink>>,
}

impl WpLink {
    pub fn new(href: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            rel: None,
            href: href.into(),
            media_type: media_type.into(),
            width: None,
            height: None,
            alternate: None,
        }
    }

    pub fn with_rel(mut self, rel: LinkRel) -> Self {
        self.rel = Some(rel);
        self
    }

    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_alternates(mut self, alternate: Vec<WpLink>) -> Self {
        self.alternate = Some(alternate);
        self
    }

    /// Alternates of this link; empty when none were attached.
    pub fn alternates(&self) -> &[WpLink] {
        self.alternate.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let link = WpLink::new("https://example.org/books/1/file", "application/pdf");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "href": "https://example.org/books/1/file",
                "type": "application/pdf",
            })
        );
    }

    #[test]
    fn rel_and_empty_alternates_are_rendered() {
        let link = WpLink::new("https://example.org/p/1", "image/png")
            .with_rel(LinkRel::Acquisition)
            .with_size(Some(10), Some(20))
            .with_alternates(Vec::new());
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "rel": "http://opds-spec.org/acquisition",
                "href": "https://example.org/p/1",
                "type": "image/png",
                "width": 10,
                "height": 20,
                "alternate": [],
            })
        );
        assert!(link.alternates().is_empty());
    }
}
