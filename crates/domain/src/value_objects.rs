pub use source_metrics_shared_kernel::value_objects::{ByteSize, FileCount, LineCount};
