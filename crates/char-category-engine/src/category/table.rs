use std::fmt;
use std::sync::Arc;

use super::range::Range;

/// Mutable, append-only form of a [`CategoryTable`], used while a definition
/// source is being read.
#[derive(Debug, Default)]
pub struct CategoryTableBuilder {
    ranges: Vec<Range>,
}

impl CategoryTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: Range) {
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Freezes the collected ranges. Declaration order is kept.
    pub fn finish(self) -> CategoryTable {
        CategoryTable {
            ranges: self.ranges.into(),
        }
    }
}

/// An immutable, ordered list of ranges.
///
/// Clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    ranges: Arc<[Range]>,
}

impl CategoryTable {
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges containing `cp`, in declaration order.
    pub fn containing(&self, cp: u32) -> impl Iterator<Item = &Range> {
        self.ranges.iter().filter(move |r| r.contains(cp))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        CategoryTableBuilder::new().finish()
    }
}

impl FromIterator<Range> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        CategoryTable {
            ranges: iter.into_iter().collect(),
        }
    }
}

/// One `char.def` data line per range.
impl fmt::Display for CategoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for range in self.ranges.iter() {
            writeln!(f, "{range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategorySet, CategoryType};
    use pretty_assertions::assert_eq;

    #[test]
    fn finish_preserves_declaration_order() {
        let mut builder = CategoryTableBuilder::new();
        assert!(builder.is_empty());
        builder.push(Range::point(0x42, CategoryType::ALPHA.into()));
        builder.push(Range::point(0x41, CategoryType::ALPHA.into()));
        builder.push(Range::point(0x42, CategoryType::USER1.into()));
        assert_eq!(builder.len(), 3);

        let table = builder.finish();
        let lows: Vec<_> = table.ranges().iter().map(Range::low).collect();
        assert_eq!(lows, vec![0x42, 0x41, 0x42]);
    }

    #[test]
    fn containing_yields_every_overlapping_range() {
        let table: CategoryTable = [
            Range::new(0x00, 0x7F, CategorySet::new()).unwrap(),
            Range::new(0x30, 0x39, CategoryType::NUMERIC.into()).unwrap(),
            Range::new(0x80, 0xFF, CategoryType::SYMBOL.into()).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.containing(0x31).count(), 2);
        assert_eq!(table.containing(0x41).count(), 1);
        assert_eq!(table.containing(0x100).count(), 0);
    }

    #[test]
    fn clones_share_storage() {
        let table: CategoryTable = std::iter::once(Range::point(0x20, CategoryType::SPACE.into()))
            .collect();
        let copy = table.clone();
        assert!(std::ptr::eq(table.ranges(), copy.ranges()));
    }

    #[test]
    fn displays_one_line_per_range() {
        let table: CategoryTable = [
            Range::point(0x20, CategoryType::SPACE.into()),
            Range::new(0x41, 0x5A, CategoryType::ALPHA.into()).unwrap(),
        ]
        .into_iter()
        .collect();

        insta::assert_snapshot!(table.to_string().trim_end(), @r"
        0x0020 SPACE
        0x0041..0x005A ALPHA
        ");
    }

    #[test]
    fn default_is_empty() {
        assert!(CategoryTable::default().is_empty());
    }
}
