use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use super::LineBreakClass;
use crate::BuildError;
use crate::properties::table::CODEPOINT_LIMIT;

/// A half-open interval of codepoints sharing one [`LineBreakClass`].
///
/// Ranges are only used while building a [`super::ClassTable`]; when several
/// ranges overlap, the one that appears later in the input wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    lo: u32,
    hi: u32,
    class: LineBreakClass,
}

impl ClassRange {
    /// Returns a range covering `lo..hi`.
    ///
    /// Fails if the range is empty or inverted, or if it reaches beyond the
    /// last Unicode codepoint.
    pub fn new(lo: u32, hi: u32, class: LineBreakClass) -> Result<Self, BuildError> {
        if lo >= hi {
            return Err(BuildError::InvalidRange { lo, hi });
        }
        if hi as usize > CODEPOINT_LIMIT {
            return Err(BuildError::RangeOutOfBounds { lo, hi });
        }
        Ok(Self { lo, hi, class })
    }

    /// Returns a range covering the single codepoint `cp`.
    pub fn single(cp: u32, class: LineBreakClass) -> Result<Self, BuildError> {
        Self::new(cp, cp.saturating_add(1), class)
    }

    pub const fn lo(&self) -> u32 {
        self.lo
    }

    pub const fn hi(&self) -> u32 {
        self.hi
    }

    pub const fn class(&self) -> LineBreakClass {
        self.class
    }

    /// Returns `true` if `cp` falls inside this range.
    pub const fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp < self.hi
    }
}

/// Parses records in the format of the Unicode `LineBreak.txt` data file.
///
/// Each non-blank line holds `CODEPOINT;CLASS` or `LOW..HIGH;CLASS`, with
/// the codepoints in hexadecimal and `HIGH` inclusive. Everything after a
/// `#` is a comment. Any malformed line fails the whole parse.
pub fn parse_records(text: &str) -> Result<Vec<ClassRange>, BuildError> {
    let mut ranges = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let record = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();
        if record.is_empty() {
            continue;
        }

        let mut fields = record.split(';');
        let (Some(cps), Some(token), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(BuildError::MalformedRecord {
                line,
                record: record.to_string(),
            });
        };
        let token = token.trim();
        let class = LineBreakClass::from_token(token).ok_or_else(|| BuildError::UnknownClass {
            line,
            token: token.to_string(),
        })?;

        let cps = cps.trim();
        let (lo, hi) = match cps.split_once("..") {
            Some((lo, hi)) => (parse_codepoint(line, lo)?, parse_codepoint(line, hi)?),
            None => {
                let cp = parse_codepoint(line, cps)?;
                (cp, cp)
            }
        };
        ranges.push(ClassRange::new(lo, hi.saturating_add(1), class)?);
    }
    Ok(ranges)
}

fn parse_codepoint(line: usize, text: &str) -> Result<u32, BuildError> {
    let text = text.trim();
    match u32::from_str_radix(text, 16) {
        Ok(cp) if !text.is_empty() && !text.starts_with('+') => Ok(cp),
        _ => Err(BuildError::InvalidCodepoint {
            line,
            text: text.to_string(),
        }),
    }
}

/// Expands class ranges into one entry per codepoint, defaulting every
/// codepoint that no range covers to [`LineBreakClass::XX`].
pub fn expand_ranges(ranges: impl IntoIterator<Item = ClassRange>) -> Vec<LineBreakClass> {
    let mut flat = vec![LineBreakClass::XX; CODEPOINT_LIMIT];
    for range in ranges {
        // Bounds were checked by ClassRange::new.
        flat[range.lo as usize..range.hi as usize].fill(range.class);
    }
    flat
}
