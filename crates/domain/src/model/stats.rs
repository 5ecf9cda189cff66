// crates/domain/src/model/stats.rs
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::value_objects::{ByteSize, FileCount, LineCount};

/// Which side of the test/source split a scan accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Source,
    Test,
}

impl Category {
    /// Whether a file with the given test classification belongs here.
    pub const fn admits(self, is_test: bool) -> bool {
        match self {
            Self::Source => !is_test,
            Self::Test => is_test,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Test => "test",
        }
    }
}

/// Per-category accumulator filled by a single scan.
///
/// Accumulation is commutative, so traversal order never changes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub lines: LineCount,
    pub files: FileCount,
    pub total_bytes: ByteSize,
}

impl Stats {
    /// Account for one file.
    pub fn record(&mut self, lines: LineCount, size: ByteSize) {
        self.lines += lines;
        self.files += 1;
        self.total_bytes += size;
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_zero()
    }

    pub fn average_lines(&self) -> f64 {
        self.lines.average_over(self.files)
    }

    pub fn average_bytes(&self) -> ByteSize {
        self.total_bytes.average_over(self.files)
    }
}

impl Add for Stats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            files: self.files + rhs.files,
            total_bytes: self.total_bytes + rhs.total_bytes,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
