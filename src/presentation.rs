// src/presentation.rs
use std::io::{self, Write};

use source_metrics_core::{LanguageProfile, Report};

/// Write the report as markdown tables.
pub fn write_markdown<W: Write>(out: &mut W, report: &Report, profile: &LanguageProfile) -> io::Result<()> {
    writeln!(out, "# {} Lines of Code Statistics", profile.name)?;
    writeln!(out)?;
    writeln!(out, "| Type         | Total Lines | File Count | Total Size | Avg Size    | Date       |")?;
    writeln!(out, "|--------------|-------------|------------|------------|-------------|------------|")?;
    if profile.has_test_files() {
        category_row(
            out,
            "Test Files",
            report.test_files_loc,
            report.test_files_count,
            &report.test_files_size_human,
            report.test_avg_size_bytes,
            &report.date,
        )?;
        category_row(
            out,
            "Source Files",
            report.source_files_loc,
            report.source_files_count,
            &report.source_files_size_human,
            report.source_avg_size_bytes,
            &report.date,
        )?;
    } else {
        category_row(
            out,
            &format!("{} Files", profile.name),
            report.source_files_loc,
            report.source_files_count,
            &report.source_files_size_human,
            report.source_avg_size_bytes,
            &report.date,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out)?;
    writeln!(out, "| Metric                  | Value                                 |")?;
    writeln!(out, "|-------------------------|---------------------------------------|")?;
    summary_row(out, "Language", profile.name)?;
    summary_row(out, "Total Lines of Code", &with_commas(report.total_loc))?;
    summary_row(out, "Total Files", &report.total_files_count.to_string())?;
    summary_row(out, "Total Size", &report.total_size_human)?;
    summary_row(out, "Directory Count", &report.package_count.to_string())?;
    summary_row(out, "Average Lines per File", &format!("{:.1}", report.avg_lines_per_file))?;
    if profile.has_test_files() {
        let ratio = format!("{:.1}% (test LOC / total LOC)", report.test_coverage_ratio);
        summary_row(out, "Test Coverage Ratio", &ratio)?;
    }
    if profile.has_declaration_rules() {
        summary_row(out, "Test Function Count", &report.test_function_count.to_string())?;
    }
    Ok(())
}

fn category_row<W: Write>(
    out: &mut W,
    label: &str,
    lines: usize,
    files: usize,
    size: &str,
    avg_bytes: u64,
    date: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "| {label:<12} | {:<11} | {files:<10} | {size:<10} | {:<11} | {date} |",
        with_commas(lines),
        source_metrics_core::human_size(avg_bytes),
    )
}

fn summary_row<W: Write>(out: &mut W, metric: &str, value: &str) -> io::Result<()> {
    writeln!(out, "| {metric:<23} | {value:<37} |")
}

/// `1234567` -> `"1,234,567"`.
pub fn with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
