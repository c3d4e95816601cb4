use alloc::string::String;

use crate::LineBreakClass;

/// Errors that can occur while building the class table or the transition
/// matrix.
///
/// Building never produces a partial result: any of these errors means that
/// no table was constructed at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("line {line}: expected `CODEPOINT[..CODEPOINT];CLASS`, found {record:?}")]
    MalformedRecord { line: usize, record: String },

    #[error("line {line}: invalid codepoint {text:?}")]
    InvalidCodepoint { line: usize, text: String },

    #[error("line {line}: unknown line break class {token:?}")]
    UnknownClass { line: usize, token: String },

    #[error("empty or inverted codepoint range {lo:#06X}..{hi:#06X}")]
    InvalidRange { lo: u32, hi: u32 },

    #[error("codepoint range {lo:#06X}..{hi:#06X} extends beyond U+10FFFF")]
    RangeOutOfBounds { lo: u32, hi: u32 },

    #[error("class array has {0} entries but must cover all 0x110000 codepoints")]
    WrongLength(usize),

    #[error("no rule assigns a transition from state {state} on class {class}")]
    UnassignedTransition { state: usize, class: LineBreakClass },

    #[error("state {state} cannot be encoded in a breaking transition")]
    StateNotEncodable { state: usize },
}
