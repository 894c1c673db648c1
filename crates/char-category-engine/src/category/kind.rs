use std::fmt;
use std::str::FromStr;

/// A category tag assignable to a character by a `char.def` range.
///
/// The vocabulary is closed: definition files may only name these tags, and
/// any other token is rejected while parsing.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum CategoryType {
    /// Fallback for characters no range covers.
    DEFAULT,
    /// White space
    SPACE,
    /// CJK ideographs
    KANJI,
    /// Symbols and punctuation
    SYMBOL,
    /// Digits
    NUMERIC,
    /// Latin letters
    ALPHA,
    HIRAGANA,
    KATAKANA,
    /// Ideographs that also read as numerals (`一`, `二`, ...)
    KANJINUMERIC,
    GREEK,
    CYRILLIC,
    USER1,
    USER2,
    USER3,
    USER4,
    /// Characters that may not begin an out-of-vocabulary word.
    NOOOVBOW,
    /// Like `NOOOVBOW`, scoped to the second unknown-word handler.
    NOOOVBOW2,
}

impl CategoryType {
    /// All tags, in id order.
    pub const ALL: [CategoryType; 17] = [
        CategoryType::DEFAULT,
        CategoryType::SPACE,
        CategoryType::KANJI,
        CategoryType::SYMBOL,
        CategoryType::NUMERIC,
        CategoryType::ALPHA,
        CategoryType::HIRAGANA,
        CategoryType::KATAKANA,
        CategoryType::KANJINUMERIC,
        CategoryType::GREEK,
        CategoryType::CYRILLIC,
        CategoryType::USER1,
        CategoryType::USER2,
        CategoryType::USER3,
        CategoryType::USER4,
        CategoryType::NOOOVBOW,
        CategoryType::NOOOVBOW2,
    ];

    /// Stable numeric id of the tag: a single bit, `DEFAULT` being `1`.
    #[must_use]
    pub const fn id(self) -> u32 {
        1 << (self as u8)
    }

    /// Inverse of [`CategoryType::id`].
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// The exact name used for this tag in definition files.
    pub const fn name(self) -> &'static str {
        match self {
            CategoryType::DEFAULT => "DEFAULT",
            CategoryType::SPACE => "SPACE",
            CategoryType::KANJI => "KANJI",
            CategoryType::SYMBOL => "SYMBOL",
            CategoryType::NUMERIC => "NUMERIC",
            CategoryType::ALPHA => "ALPHA",
            CategoryType::HIRAGANA => "HIRAGANA",
            CategoryType::KATAKANA => "KATAKANA",
            CategoryType::KANJINUMERIC => "KANJINUMERIC",
            CategoryType::GREEK => "GREEK",
            CategoryType::CYRILLIC => "CYRILLIC",
            CategoryType::USER1 => "USER1",
            CategoryType::USER2 => "USER2",
            CategoryType::USER3 => "USER3",
            CategoryType::USER4 => "USER4",
            CategoryType::NOOOVBOW => "NOOOVBOW",
            CategoryType::NOOOVBOW2 => "NOOOVBOW2",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a token names no known [`CategoryType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is invalid type")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryType {
    type Err = UnknownCategory;

    /// Matches the exact, case-sensitive tag name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("DEFAULT", CategoryType::DEFAULT)]
    #[case("ALPHA", CategoryType::ALPHA)]
    #[case("KANJINUMERIC", CategoryType::KANJINUMERIC)]
    #[case("NOOOVBOW2", CategoryType::NOOOVBOW2)]
    fn parses_exact_names(#[case] token: &str, #[case] expected: CategoryType) {
        assert_eq!(token.parse::<CategoryType>(), Ok(expected));
    }

    #[rstest]
    #[case("alpha")]
    #[case("Alpha")]
    #[case("ALPHA ")]
    #[case("")]
    #[case("NONSENSE_TYPE")]
    fn rejects_anything_else(#[case] token: &str) {
        assert_eq!(
            token.parse::<CategoryType>(),
            Err(UnknownCategory(token.to_string()))
        );
    }

    #[test]
    fn ids_are_distinct_single_bits() {
        assert_eq!(CategoryType::DEFAULT.id(), 1);
        assert_eq!(CategoryType::SPACE.id(), 1 << 1);
        assert_eq!(CategoryType::NOOOVBOW2.id(), 1 << 16);

        let mut seen = 0u32;
        for t in CategoryType::ALL {
            assert_eq!(t.id().count_ones(), 1);
            assert_eq!(seen & t.id(), 0, "{t} shares a bit");
            seen |= t.id();
        }
    }

    #[test]
    fn id_round_trips() {
        for t in CategoryType::ALL {
            assert_eq!(CategoryType::from_id(t.id()), Some(t));
        }
        assert_eq!(CategoryType::from_id(0), None);
        assert_eq!(CategoryType::from_id(3), None);
    }

    #[test]
    fn display_matches_definition_name() {
        for t in CategoryType::ALL {
            assert_eq!(t.to_string().parse::<CategoryType>(), Ok(t));
        }
    }
}
