//! # char-category-engine
//!
//! Character category classification driven by a `char.def` definition file.
//!
//! A definition maps code points and inclusive code point ranges to one or
//! more [`CategoryType`] tags. Loading one produces a [`CharacterCategory`],
//! an immutable classifier answering two questions:
//!
//! - which categories a character belongs to ([`CharacterCategory::classify`]),
//!   the union over every range containing it, or `{DEFAULT}` if none does;
//! - how long a run of text stays inside one particular range
//!   ([`CharacterCategory::longest_run_within_single_range`]).
//!
//! ```
//! use char_category_engine::{BytesResource, CategoryType, CharacterCategory};
//!
//! let def = b"0x0030..0x0039 NUMERIC\n0x0041..0x005A ALPHA\n";
//! let cc = CharacterCategory::load(BytesResource::new("inline", def.as_slice())).unwrap();
//!
//! assert!(cc.classify('7').contains(CategoryType::NUMERIC));
//! assert!(cc.classify('!').contains(CategoryType::DEFAULT));
//!
//! let digits = &cc.ranges()[0];
//! assert_eq!(cc.longest_run_within_single_range(digits, "123abc"), 3);
//! ```

pub mod category;
pub mod classifier;
pub mod error;
pub mod parsing;
pub mod resource;

// Re-export key types for easier usage
pub use category::{CategorySet, CategoryTable, CategoryTableBuilder, CategoryType, Range};
pub use classifier::CharacterCategory;
pub use error::{CategoryError, FormatCause};
pub use resource::{BytesResource, DEFAULT_CHAR_DEF, DefaultResource, FileResource, Resource};
