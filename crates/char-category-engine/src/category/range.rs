use std::fmt;

use super::set::CategorySet;

/// An inclusive code-point interval `[low, high]` with the tags declared for it.
///
/// `low <= high` always holds; [`Range::new`] refuses inverted bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    low: u32,
    high: u32,
    categories: CategorySet,
}

impl Range {
    /// Returns `None` when `low > high`.
    pub fn new(low: u32, high: u32, categories: CategorySet) -> Option<Self> {
        (low <= high).then_some(Range {
            low,
            high,
            categories,
        })
    }

    /// A range covering the single code point `cp`.
    pub fn point(cp: u32, categories: CategorySet) -> Self {
        Range {
            low: cp,
            high: cp,
            categories,
        }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Tags declared on this range. May be empty.
    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.low <= cp && cp <= self.high
    }

    /// Byte length of the longest prefix of `text` whose characters all fall
    /// inside this range.
    ///
    /// Scans whole code points, so the result is always a char boundary of
    /// `text` and can be used to slice it.
    pub fn containing_length(&self, text: &str) -> usize {
        text.char_indices()
            .find(|&(_, c)| !self.contains(c as u32))
            .map_or(text.len(), |(i, _)| i)
    }
}

/// Renders the range as a `char.def` data line.
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.low)?;
        if self.high != self.low {
            write!(f, "..0x{:04X}", self.high)?;
        }
        if self.categories.is_empty() {
            // keeps the line at two fields so it parses back
            f.write_str(" # no categories")
        } else {
            write!(f, " {}", self.categories)
        }
    }
}
