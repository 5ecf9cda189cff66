// crates/domain/src/analytics/aggregate.rs
use chrono::{Local, NaiveDate};

use crate::{
    language::LanguageProfile,
    model::{Report, Stats},
    value_objects::ByteSize,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the Aggregator needs from one query.
#[derive(Debug, Clone)]
pub struct AggregateInput<'a> {
    pub profile: &'a LanguageProfile,
    pub source: Stats,
    pub test: Stats,
    pub excluded_dirs: Vec<String>,
    pub test_function_count: usize,
    pub package_count: usize,
}

/// Derives averages, ratios and human-readable sizes, and assembles the [`Report`].
///
/// Never fails: every degenerate input collapses to zero values.
pub struct Aggregator;

impl Aggregator {
    /// Build a report stamped with today's local date.
    pub fn build(input: AggregateInput<'_>) -> Report {
        Self::build_on(input, Local::now().date_naive())
    }

    pub fn build_on(input: AggregateInput<'_>, date: NaiveDate) -> Report {
        let AggregateInput { profile, source, test, excluded_dirs, test_function_count, package_count } = input;
        let total = source + test;
        let legacy = if profile.key == "go" { source } else { Stats::default() };

        Report {
            language: profile.key.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            excluded_dirs,

            source_files_loc: source.lines.value(),
            source_files_count: source.files.value(),
            source_files_size_bytes: source.total_bytes.bytes(),
            source_files_size_human: source.total_bytes.to_human(),
            source_avg_lines_per_file: source.average_lines(),
            source_avg_size_bytes: source.average_bytes().bytes(),

            test_files_loc: test.lines.value(),
            test_files_count: test.files.value(),
            test_files_size_bytes: test.total_bytes.bytes(),
            test_files_size_human: test.total_bytes.to_human(),
            test_avg_lines_per_file: test.average_lines(),
            test_avg_size_bytes: test.average_bytes().bytes(),

            total_loc: total.lines.value(),
            total_files_count: total.files.value(),
            total_size_bytes: total.total_bytes.bytes(),
            total_size_human: total.total_bytes.to_human(),
            avg_lines_per_file: total.average_lines(),
            test_coverage_ratio: coverage_ratio(&source, &test),

            package_count,
            test_function_count,

            go_files_loc: legacy.lines.value(),
            go_files_count: legacy.files.value(),
            go_files_size_bytes: legacy.total_bytes.bytes(),
            go_files_size_human: legacy.total_bytes.to_human(),
            go_avg_lines_per_file: legacy.average_lines(),
            go_avg_size_bytes: legacy.average_bytes().bytes(),
        }
    }
}

/// Share of test lines among all counted lines, in percent.
pub fn coverage_ratio(source: &Stats, test: &Stats) -> f64 {
    let test_lines = test.lines.value();
    let all = test_lines + source.lines.value();
    if all == 0 {
        return 0.0;
    }
    test_lines as f64 / all as f64 * 100.0
}

/// Human form of a raw byte count, as used throughout the report.
pub fn human_size(bytes: u64) -> String {
    ByteSize::new(bytes).to_human()
}
