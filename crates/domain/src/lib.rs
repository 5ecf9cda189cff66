//! # Domain
//!
//! Pure, filesystem-free rules of the metrics engine:
//!
//! - [`language`]: the static Language Profile Registry
//! - [`config`]: the Exclusion Policy that prunes directory subtrees
//! - [`classify`]: line, test-file and test-declaration classifiers
//! - [`model`]: per-category [`model::Stats`] and the serializable [`model::Report`]
//! - [`analytics`]: the Aggregator turning stats into a report
//!
//! Classification is lexical. Nothing here parses source code.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod config;
pub mod language;
pub mod model;
pub mod value_objects;

pub use analytics::{AggregateInput, Aggregator};
pub use classify::{DeclarationMatcher, count_significant, is_test_file};
pub use config::ExclusionPolicy;
pub use language::{DEFAULT_LANGUAGE, DeclarationRule, LanguageProfile, TestMarker, resolve, supported_keys};
pub use model::{Category, Report, Stats};
