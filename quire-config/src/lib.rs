//! Configuration for the Quire manifest synthesizer.
//!
//! [`ManifestConfig`] carries the deployment knobs (route roots, thumbnail
//! encoding, server zone, conversion allow-list) and knows how to turn
//! itself into [`quire_core::GeneratorSettings`]. The `quire-manifest`
//! binary uses it to render manifests from JSON fixtures.

#![allow(missing_docs)]

pub mod error;
pub mod fixture;
pub mod models;

pub use error::ConfigLoadError;
pub use fixture::{Fixture, FixturePages};
pub use models::{ManifestConfig, ManifestConfigSource};
