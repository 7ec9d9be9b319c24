use std::fmt::{self, Display};

use url::Url;

use crate::error::{ManifestError, Result};

/// Immutable URI builder rooted at a caller-supplied context path.
///
/// Every transformation returns a new builder, so a root can be shared and
/// extended per link without cloning ceremony at the call site. Segments
/// are percent-encoded individually; a `/` inside an id stays inside its
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriBuilder {
    url: Url,
}

impl UriBuilder {
    pub fn new(url: Url) -> Result<Self> {
        if url.cannot_be_a_base() {
            return Err(ManifestError::CannotBeABase {
                uri: url.to_string(),
            });
        }
        Ok(Self { url })
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Self::new(Url::parse(raw)?)
    }

    pub fn with_segment(&self, segment: impl AsRef<str>) -> Self {
        self.with_segments([segment])
    }

    pub fn with_segments<I>(&self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.url.clone();
        // Checked in `new`: the URL can always be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
        Self { url }
    }

    pub fn with_query(&self, key: &str, value: &str) -> Self {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair(key, value);
        Self { url }
    }

    pub fn render(&self) -> String {
        self.url.as_str().to_owned()
    }
}

impl Display for UriBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
