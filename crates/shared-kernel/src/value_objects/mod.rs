// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_size;
pub mod counts;

pub use byte_size::ByteSize;
pub use counts::{FileCount, LineCount};
