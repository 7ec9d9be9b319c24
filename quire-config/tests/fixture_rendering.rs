use std::{fs, sync::Arc};

use quire_config::{Fixture, ManifestConfig};
use quire_core::{ManifestError, UriBuilder, WebPubGenerator};
use serde_json::{Value, json};
use tempfile::tempdir;

const FIXTURE: &str = r#"{
  "book": {
    "id": "0B2M1F",
    "series_id": "0A9S",
    "series_title": "Moonlight Harbor",
    "last_modified": "2024-05-04T10:30:00",
    "metadata": {
      "title": "Moonlight Harbor, Vol. 2",
      "isbn": "",
      "authors": [
        { "name": "Jane", "role": "author" },
        { "name": "Ode", "role": "writer" }
      ],
      "number_sort": 2.0
    },
    "media": { "media_type": "application/pdf", "pages_count": 2 }
  },
  "media": {
    "book_id": "0B2M1F",
    "profile": "pdf",
    "media_type": "application/pdf",
    "page_count": 2
  },
  "series": { "language": "fr", "reading_direction": "LEFT_TO_RIGHT" }
}"#;

fn load_fixture(contents: &str) -> Fixture {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("book.json");
    fs::write(&path, contents).expect("write fixture");
    Fixture::load(&path).expect("load fixture")
}

fn generator_for(fixture: &Fixture) -> WebPubGenerator {
    let config = ManifestConfig {
        utc_offset_minutes: Some(0),
        ..ManifestConfig::default()
    };
    let root = UriBuilder::parse("http://localhost:25600/").unwrap();
    WebPubGenerator::new(
        config.generator_settings(&root),
        Arc::new(config.converter()),
        Arc::new(fixture.page_extractor()),
    )
}

#[test]
fn renders_pdf_manifest_from_fixture() {
    let fixture = load_fixture(FIXTURE);
    let generator = generator_for(&fixture);

    let manifest = generator
        .preferred_manifest(&fixture.book, fixture.media().unwrap(), &fixture.series)
        .unwrap();
    let value: Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

    assert_eq!(value["metadata"]["title"], "Moonlight Harbor, Vol. 2");
    assert!(value["metadata"].get("identifier").is_none());
    assert_eq!(value["metadata"]["language"], "fr");
    assert_eq!(value["metadata"]["readingProgression"], "ltr");
    assert_eq!(value["metadata"]["author"], json!(["Jane"]));
    assert_eq!(value["metadata"]["contributor"], json!(["Ode"]));
    assert_eq!(value["metadata"]["modified"], "2024-05-04T10:30:00+00:00");
    assert_eq!(
        value["readingOrder"][1]["href"],
        "http://localhost:25600/api/v1/books/0B2M1F/pages/2/raw"
    );
}

#[test]
fn divina_for_pdf_without_recorded_pages_fails() {
    let fixture = load_fixture(FIXTURE);
    let generator = generator_for(&fixture);

    let err = generator
        .divina_manifest(&fixture.book, fixture.media().unwrap(), &fixture.series)
        .unwrap_err();
    assert!(matches!(err, ManifestError::PageExtraction { .. }));
}

#[test]
fn divina_for_pdf_replays_recorded_pages() {
    let mut raw: Value = serde_json::from_str(FIXTURE).unwrap();
    raw["dynamic_pages"] = json!([
        { "media_type": "image/webp", "dimension": { "width": 595, "height": 842 } },
        { "media_type": "image/png" }
    ]);
    let fixture = load_fixture(&raw.to_string());
    let generator = generator_for(&fixture);

    let manifest = generator
        .divina_manifest(&fixture.book, fixture.media().unwrap(), &fixture.series)
        .unwrap();

    assert_eq!(manifest.reading_order.len(), 2);
    let first = &manifest.reading_order[0];
    assert_eq!(first.alternates().len(), 1);
    assert_eq!(
        first.alternates()[0].href,
        "http://localhost:25600/api/v1/books/0B2M1F/pages/1?convert=jpeg"
    );
    assert!(manifest.reading_order[1].alternates().is_empty());
}

#[test]
fn fixture_without_media_is_rejected_for_reading_manifests() {
    let mut raw: Value = serde_json::from_str(FIXTURE).unwrap();
    raw.as_object_mut().unwrap().remove("media");
    let fixture = load_fixture(&raw.to_string());

    assert!(fixture.media().is_err());
    let manifest = generator_for(&fixture).opds_publication(&fixture.book, true);
    assert_eq!(manifest.images.len(), 1);
}
