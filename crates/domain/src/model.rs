pub mod report;
pub mod stats;

pub use report::Report;
pub use stats::{Category, Stats};
