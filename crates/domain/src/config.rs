pub mod exclusion;

pub use exclusion::{ALWAYS_EXCLUDED, ExclusionPolicy};
