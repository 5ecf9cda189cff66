pub mod aggregate;

pub use aggregate::{AggregateInput, Aggregator, coverage_ratio, human_size};
