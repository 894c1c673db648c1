//! Reader for `char.def` character category definitions.
//!
//! ```text
//! 0x0020 SPACE              # a white space
//! 0x0041..0x005A ALPHA      # Latin alphabets
//! 0x4E00 KANJINUMERIC KANJI # Kanji numeric and Kanji
//! ```
//!
//! Each data line starts with a `0x` code point or `0x..0x` inclusive range
//! followed by category names. Blank lines and `#` comments are skipped.
//! Other lines with at least two fields are tolerated and ignored.

pub mod line;
pub mod literal;

use std::io::BufRead;

use crate::category::CategoryTableBuilder;
use crate::error::{CategoryError, FormatCause};

pub use line::{DefinitionLine, classify};

const BOM: char = '\u{FEFF}';

/// Reads every line of `reader` into `builder`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Stops at the first bad line; the
/// returned error carries its 1-based line number. Ranges pushed before the
/// failure are left in `builder` and should be discarded by the caller.
pub fn read_definition<R: BufRead>(
    mut reader: R,
    builder: &mut CategoryTableBuilder,
) -> Result<(), CategoryError> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let chunk = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);

        // `\r` never occurs inside a multi-byte UTF-8 sequence
        for raw in chunk.split(|&b| b == b'\r') {
            line_no += 1;
            read_line(raw, line_no, builder)?;
        }
    }

    Ok(())
}

fn read_line(
    raw: &[u8],
    line_no: usize,
    builder: &mut CategoryTableBuilder,
) -> Result<(), CategoryError> {
    let mut text = std::str::from_utf8(raw)
        .map_err(|_| CategoryError::format(line_no, FormatCause::InvalidUtf8))?;
    if line_no == 1 {
        text = text.trim_start_matches(BOM);
    }

    match classify(text).map_err(|cause| CategoryError::format(line_no, cause))? {
        DefinitionLine::Data(range) => builder.push(range),
        DefinitionLine::Unrecognized => {
            log::trace!("ignoring line {line_no}: {text:?}");
        }
        DefinitionLine::Blank => {}
    }

    Ok(())
}
