// crates/shared-kernel/src/value_objects/byte_size.rs
use std::{
    fmt,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

use super::FileCount;

/// Total size in bytes of the files in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Integer mean size per file; zero when there are no files.
    pub fn average_over(self, files: FileCount) -> Self {
        match files.value() {
            0 => Self::ZERO,
            n => Self(self.0 / n as u64),
        }
    }

    /// Binary-prefix representation with one decimal place, e.g. `244.1 KB`.
    pub fn to_human(self) -> String {
        const UNIT: u64 = 1024;
        const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

        let bytes = self.0;
        if bytes < UNIT {
            return format!("{bytes} B");
        }

        let mut div = UNIT;
        let mut exp = 0;
        let mut n = bytes / UNIT;
        while n >= UNIT {
            div *= UNIT;
            exp += 1;
            n /= UNIT;
        }
        format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
    }
}

impl Add for ByteSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() { write!(f, "{}", self.to_human()) } else { write!(f, "{}", self.0) }
    }
}
