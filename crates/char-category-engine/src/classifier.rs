use std::io::BufRead;

use crate::category::{CategorySet, CategoryTable, CategoryTableBuilder, CategoryType, Range};
use crate::error::CategoryError;
use crate::parsing::read_definition;
use crate::resource::{DefaultResource, Resource};

/// Classifies characters against a loaded `char.def`.
///
/// Immutable once built; clones share the underlying table, and the value can
/// be shared across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCategory {
    table: CategoryTable,
}

impl CharacterCategory {
    /// Loads a classifier from `resource`. The stream is released before
    /// this returns, on success and on failure.
    pub fn load<R: Resource>(resource: R) -> Result<Self, CategoryError> {
        let locator = resource.locator();
        let classifier = resource.consume(|reader| Self::from_reader(reader))?;
        log::debug!(
            "loaded {} character ranges from {locator}",
            classifier.table.len()
        );
        Ok(classifier)
    }

    /// Loads the bundled default definition.
    pub fn load_default() -> Result<Self, CategoryError> {
        Self::load(DefaultResource)
    }

    /// Parses a definition from an already open stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CategoryError> {
        let mut builder = CategoryTableBuilder::new();
        read_definition(reader, &mut builder)?;
        Ok(Self::from_table(builder.finish()))
    }

    pub fn from_table(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// All ranges, in declaration order.
    pub fn ranges(&self) -> &[Range] {
        self.table.ranges()
    }

    /// Ranges containing `code_point`, in declaration order.
    pub fn ranges_containing(&self, code_point: impl Into<u32>) -> impl Iterator<Item = &Range> {
        self.table.containing(code_point.into())
    }

    /// Union of the tags of every range containing `code_point`, or
    /// `{DEFAULT}` when no range does.
    pub fn classify(&self, code_point: impl Into<u32>) -> CategorySet {
        let cp = code_point.into();
        let categories = self
            .table
            .containing(cp)
            .fold(CategorySet::new(), |acc, r| acc | r.categories());

        if categories.is_empty() {
            CategoryType::DEFAULT.into()
        } else {
            categories
        }
    }

    /// Byte length of the longest prefix of `text` lying entirely inside
    /// `range`.
    ///
    /// Only `range` itself is consulted, not the union of ranges that
    /// [`classify`](Self::classify) would see for each character.
    pub fn longest_run_within_single_range(&self, range: &Range, text: &str) -> usize {
        range.containing_length(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn load(source: &str) -> CharacterCategory {
        CharacterCategory::from_reader(source.as_bytes()).unwrap()
    }

    fn set(ts: &[CategoryType]) -> CategorySet {
        ts.iter().copied().collect()
    }

    #[test]
    fn uncovered_code_points_are_default() {
        let cc = load("0x0041..0x005A ALPHA\n");
        for cp in [0x00u32, 0x40, 0x5B, 0x3042, 0x10FFFF] {
            assert_eq!(cc.classify(cp), set(&[CategoryType::DEFAULT]), "U+{cp:04X}");
        }
    }

    #[test]
    fn empty_table_classifies_everything_as_default() {
        let cc = CharacterCategory::default();
        assert_eq!(cc.classify('a'), set(&[CategoryType::DEFAULT]));
    }

    #[test]
    fn single_range_gives_its_tags() {
        let cc = load("0x4E00 KANJINUMERIC KANJI\n");
        assert_eq!(
            cc.classify('一'),
            set(&[CategoryType::KANJI, CategoryType::KANJINUMERIC])
        );
    }

    #[test]
    fn overlapping_ranges_are_unioned() {
        let cc = load(
            "0x4E00..0x9FFF KANJI\n\
             0x4E00 KANJINUMERIC\n\
             0x4E00 KANJI\n",
        );
        assert_eq!(
            cc.classify(0x4E00u32),
            set(&[CategoryType::KANJI, CategoryType::KANJINUMERIC])
        );
        assert_eq!(cc.classify(0x4E01u32), set(&[CategoryType::KANJI]));
    }

    #[test]
    fn tagless_range_does_not_suppress_default() {
        let cc = load("0x0041 # reserved\n");
        assert_eq!(cc.ranges().len(), 1);
        assert_eq!(cc.classify('A'), set(&[CategoryType::DEFAULT]));
    }

    #[test]
    fn alpha_range_boundaries() {
        let cc = load("0x0041..0x005A ALPHA\n");
        for cp in 0x41..=0x5Au32 {
            assert!(cc.classify(cp).contains(CategoryType::ALPHA));
        }
        assert!(!cc.classify(0x40u32).contains(CategoryType::ALPHA));
        assert!(!cc.classify(0x5Bu32).contains(CategoryType::ALPHA));
    }

    #[test]
    fn char_and_u32_queries_agree() {
        let cc = CharacterCategory::load_default().unwrap();
        for c in ['a', 'Z', '5', ' ', 'あ', 'ア', '漢', 'Ω', 'Ж', '𠀋', '!'] {
            assert_eq!(cc.classify(c), cc.classify(c as u32), "{c}");
        }
    }

    #[rstest]
    #[case("123abc", 3)]
    #[case("", 0)]
    #[case("abc123", 0)]
    #[case("42", 2)]
    fn longest_run_over_digits(#[case] text: &str, #[case] expected: usize) {
        let cc = load("0x0030..0x0039 NUMERIC\n");
        let digits = &cc.ranges()[0];
        assert_eq!(cc.longest_run_within_single_range(digits, text), expected);
    }

    #[test]
    fn longest_run_ignores_other_ranges_with_same_tag() {
        let cc = load(
            "0x0030..0x0039 NUMERIC\n\
             0xFF10..0xFF19 NUMERIC\n",
        );
        let ascii_digits = &cc.ranges()[0];
        // Full-width digits are NUMERIC too, but belong to the other range.
        assert_eq!(cc.longest_run_within_single_range(ascii_digits, "12３４"), 2);
    }

    #[test]
    fn ranges_containing_drives_run_lookup() {
        let cc = CharacterCategory::load_default().unwrap();
        let text = "カタカナとひらがな";
        let first = text.chars().next().unwrap();
        let range = cc.ranges_containing(first).next().unwrap();
        let run = cc.longest_run_within_single_range(range, text);
        assert_eq!(&text[..run], "カタカナ");
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CharacterCategory>();

        let cc = CharacterCategory::load_default().unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cc = cc.clone();
                std::thread::spawn(move || cc.classify('漢'))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap().contains(CategoryType::KANJI));
        }
    }
}
