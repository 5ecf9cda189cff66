// crates/domain/src/model/report.rs
use serde::{Deserialize, Serialize};

/// Final result of one metrics query.
///
/// Serialized as a flat record. Field names are a published contract read by
/// downstream tooling; add fields, never rename or remove them. The `go_*`
/// fields predate multi-language support and mirror the source fields for Go
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub language: String,
    pub date: String,
    pub excluded_dirs: Vec<String>,

    pub source_files_loc: usize,
    pub source_files_count: usize,
    pub source_files_size_bytes: u64,
    pub source_files_size_human: String,
    pub source_avg_lines_per_file: f64,
    pub source_avg_size_bytes: u64,

    pub test_files_loc: usize,
    pub test_files_count: usize,
    pub test_files_size_bytes: u64,
    pub test_files_size_human: String,
    pub test_avg_lines_per_file: f64,
    pub test_avg_size_bytes: u64,

    pub total_loc: usize,
    pub total_files_count: usize,
    pub total_size_bytes: u64,
    pub total_size_human: String,
    pub avg_lines_per_file: f64,
    pub test_coverage_ratio: f64,

    pub package_count: usize,
    pub test_function_count: usize,

    pub go_files_loc: usize,
    pub go_files_count: usize,
    pub go_files_size_bytes: u64,
    pub go_files_size_human: String,
    pub go_avg_lines_per_file: f64,
    pub go_avg_size_bytes: u64,
}
