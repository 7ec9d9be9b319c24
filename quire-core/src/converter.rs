use std::collections::HashSet;

use quire_contracts::convert::ImageConverter;

use crate::constants::{RECOMMENDED_IMAGE_TYPES, media_types};

/// Conversion capability backed by fixed sets of readable and writable
/// content types. Content types are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct AllowListConverter {
    readable: HashSet<String>,
    writable: HashSet<String>,
}

impl AllowListConverter {
    pub fn new<R, W>(readable: R, writable: W) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        Self {
            readable: readable
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
            writable: writable
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Reads the recommended image types plus `extra_readable`, writes
    /// JPEG and PNG.
    pub fn with_extra_readable<R>(extra_readable: R) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let readable = RECOMMENDED_IMAGE_TYPES
            .iter()
            .map(|t| t.to_string())
            .chain(extra_readable.into_iter().map(|t| t.as_ref().to_string()));
        Self::new(readable, [media_types::JPEG, media_types::PNG])
    }
}

impl ImageConverter for AllowListConverter {
    fn can_convert(&self, from: &str, to: &str) -> bool {
        self.readable.contains(&from.to_ascii_lowercase())
            && self.writable.contains(&to.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_listed_sources_to_writable_targets() {
        let converter = AllowListConverter::with_extra_readable(["image/webp"]);

        assert!(converter.can_convert("image/webp", "image/jpeg"));
        assert!(converter.can_convert("IMAGE/WEBP", "image/jpeg"));
        assert!(converter.can_convert("image/gif", "image/png"));
        assert!(!converter.can_convert("image/jxl", "image/jpeg"));
        assert!(!converter.can_convert("image/webp", "image/webp"));
    }

    #[test]
    fn total_over_garbage_input() {
        let converter = AllowListConverter::default();
        assert!(!converter.can_convert("", ""));
        assert!(!converter.can_convert("not a type", "image/jpeg"));
    }
}
