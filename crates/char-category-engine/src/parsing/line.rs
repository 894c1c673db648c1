use crate::category::{CategorySet, CategoryType, Range};
use crate::error::FormatCause;

use super::literal;

/// Prefix that marks a data line.
pub const DATA_PREFIX: &str = "0x";
const RANGE_SEPARATOR: &str = "..";

/// Classification of a single definition line, independent of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionLine {
    /// Blank or `#` comment line.
    Blank,
    /// Well-formed line in some other format, such as the
    /// `DEFAULT 0 1 0` category header lines.
    Unrecognized,
    /// A code point or range with its tags.
    Data(Range),
}

/// Classifies one line of a definition source. `text` must not include the
/// line terminator.
pub fn classify(text: &str) -> Result<DefinitionLine, FormatCause> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(DefinitionLine::Blank);
    }

    let mut fields = trimmed.split_whitespace();
    let (Some(head), Some(second)) = (fields.next(), fields.next()) else {
        return Err(FormatCause::TooFewFields);
    };

    if !head.starts_with(DATA_PREFIX) {
        return Ok(DefinitionLine::Unrecognized);
    }

    let (low, high) = bounds(head)?;
    if low > high {
        return Err(FormatCause::InvertedRange { low, high });
    }

    let mut categories = CategorySet::new();
    for token in std::iter::once(second)
        .chain(fields)
        .take_while(|f| !f.starts_with('#'))
    {
        categories.insert(token.parse::<CategoryType>()?);
    }

    Range::new(low, high, categories)
        .map(DefinitionLine::Data)
        .ok_or(FormatCause::InvertedRange { low, high })
}

fn bounds(field: &str) -> Result<(u32, u32), FormatCause> {
    match field.split_once(RANGE_SEPARATOR) {
        None => {
            let cp = literal::code_point(field)?;
            Ok((cp, cp))
        }
        Some((_, high)) if high.contains(RANGE_SEPARATOR) => {
            Err(FormatCause::MalformedLiteral(field.to_string()))
        }
        Some((low, high)) => Ok((literal::code_point(low)?, literal::code_point(high)?)),
    }
}
