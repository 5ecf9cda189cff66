//! Language Profile Registry.

mod profile;
mod registry;

pub use profile::{DeclarationRule, LanguageProfile, TestMarker};
pub use registry::{DEFAULT_LANGUAGE, profiles, resolve, supported_keys};
