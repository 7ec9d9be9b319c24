use std::{fs, path::Path};

use anyhow::{Context, bail};
use quire_contracts::pages::PageExtractor;
use quire_model::{BookSummary, Media, Page, SeriesMetadata};
use serde::Deserialize;

/// Records needed to render a manifest, as exported from a library.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub book: BookSummary,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub series: SeriesMetadata,
    /// Pages a PDF renderer would report for `media`.
    #[serde(default)]
    pub dynamic_pages: Option<Vec<Page>>,
}

impl Fixture {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid fixture {}", path.display()))
    }

    pub fn media(&self) -> anyhow::Result<&Media> {
        self.media
            .as_ref()
            .with_context(|| format!("fixture for book {} has no media", self.book.id))
    }

    pub fn page_extractor(&self) -> FixturePages {
        FixturePages {
            pages: self.dynamic_pages.clone(),
        }
    }
}

/// Page extractor replaying the pages recorded in a fixture.
#[derive(Debug, Clone, Default)]
pub struct FixturePages {
    pages: Option<Vec<Page>>,
}

impl FixturePages {
    pub fn new(pages: Option<Vec<Page>>) -> Self {
        Self { pages }
    }
}

impl PageExtractor for FixturePages {
    fn dynamic_pages(&self, media: &Media) -> anyhow::Result<Vec<Page>> {
        match &self.pages {
            Some(pages) => Ok(pages.clone()),
            None => bail!("no dynamic pages recorded for book {}", media.book_id),
        }
    }
}
