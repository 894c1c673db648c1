use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use bitflags::bitflags;

use super::kind::CategoryType;

bitflags! {
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
    struct Bits: u32 {
        const DEFAULT = CategoryType::DEFAULT.id();
        const SPACE = CategoryType::SPACE.id();
        const KANJI = CategoryType::KANJI.id();
        const SYMBOL = CategoryType::SYMBOL.id();
        const NUMERIC = CategoryType::NUMERIC.id();
        const ALPHA = CategoryType::ALPHA.id();
        const HIRAGANA = CategoryType::HIRAGANA.id();
        const KATAKANA = CategoryType::KATAKANA.id();
        const KANJINUMERIC = CategoryType::KANJINUMERIC.id();
        const GREEK = CategoryType::GREEK.id();
        const CYRILLIC = CategoryType::CYRILLIC.id();
        const USER1 = CategoryType::USER1.id();
        const USER2 = CategoryType::USER2.id();
        const USER3 = CategoryType::USER3.id();
        const USER4 = CategoryType::USER4.id();
        const NOOOVBOW = CategoryType::NOOOVBOW.id();
        const NOOOVBOW2 = CategoryType::NOOOVBOW2.id();
    }
}

impl Bits {
    const fn of(t: CategoryType) -> Self {
        Bits::from_bits_retain(t.id())
    }
}

/// A set of [`CategoryType`] tags, packed into the tags' id bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(Bits);

impl CategorySet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        CategorySet(Bits::empty())
    }

    /// A set holding just `t`.
    #[must_use]
    pub const fn single(t: CategoryType) -> Self {
        CategorySet(Bits::of(t))
    }

    /// Raw bit pattern; each bit is a [`CategoryType::id`].
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0.bits()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.bits().count_ones() as usize
    }

    #[must_use]
    pub const fn contains(self, t: CategoryType) -> bool {
        self.0.contains(Bits::of(t))
    }

    pub fn insert(&mut self, t: CategoryType) {
        self.0.insert(Bits::of(t));
    }

    #[must_use]
    pub const fn union(self, other: CategorySet) -> CategorySet {
        CategorySet(self.0.union(other.0))
    }

    /// Iterates the members in id order.
    pub fn iter(self) -> impl Iterator<Item = CategoryType> {
        self.0
            .iter()
            .filter_map(|flag| CategoryType::from_id(flag.bits()))
    }
}

impl BitOr for CategorySet {
    type Output = CategorySet;

    fn bitor(self, rhs: CategorySet) -> CategorySet {
        self.union(rhs)
    }
}

impl BitOrAssign for CategorySet {
    fn bitor_assign(&mut self, rhs: CategorySet) {
        self.0 |= rhs.0;
    }
}

impl From<CategoryType> for CategorySet {
    fn from(t: CategoryType) -> Self {
        CategorySet::single(t)
    }
}

impl FromIterator<CategoryType> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryType>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<CategoryType> for CategorySet {
    fn extend<I: IntoIterator<Item = CategoryType>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Space-separated tag names, the form used on a `char.def` data line.
impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}
