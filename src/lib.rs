//! An implementation of
//! [UAX #14: Unicode Line Breaking Algorithm](https://www.unicode.org/reports/tr14/)
//! as a compiled finite state machine that is advanced one character at a
//! time.
//!
//! The library is made of two immutable tables and a small driver:
//!
//! - [`ClassTable`] maps every codepoint to its [`LineBreakClass`]. Rather
//!   than a flat array of 0x110000 entries it uses a direct array for
//!   codepoints below `U+0800` and tries with deduplicated 64-entry chunks
//!   above that, so that lookups stay constant-time while the table stays
//!   small.
//!
//! - [`TransitionMatrix`] is the line breaking rules compiled into a table of
//!   [`State`] × [`LineBreakClass`] → next state plus [`BreakFlags`]. It is
//!   derived from a [`RuleSet`], an ordered list of pair rules in which the
//!   first rule to cover a pair decides it, just as the numbered rules of
//!   UAX #14 take priority over later ones.
//!
//! - [`LineBreakMachine`] feeds characters through both tables and reports,
//!   for each new character, whether a line may (or must) end just before
//!   it. [`LineBreaks`] does the same for a whole string, yielding the byte
//!   offsets of the break opportunities.
//!
//! The library does not embed the Unicode character database. Build a
//! [`ClassTable`] from the `LineBreak.txt` data file with
//! [`ClassTable::from_records`], or from ranges you've obtained some other
//! way, once at startup. Both tables can also be written out as Rust source
//! with their `write_rust_source` methods, for projects that would rather
//! compile them in.
//!
//! ```
//! use linebreak_machine::{BreakOpportunity, ClassTable, RuleSet, TransitionMatrix};
//!
//! let classes = ClassTable::from_records(
//!     "0020;SP\n0041..005A;AL\n0061..007A;AL\n",
//! )?;
//! let matrix = TransitionMatrix::build(&RuleSet::UAX14)?;
//!
//! let breaks: Vec<_> = linebreak_machine::linebreaks(&classes, &matrix, "ab cd").collect();
//! assert_eq!(
//!     breaks,
//!     &[(3, BreakOpportunity::Allowed), (5, BreakOpportunity::Allowed)],
//! );
//! # Ok::<(), linebreak_machine::BuildError>(())
//! ```
//!
//! # Known limitations
//!
//! Characters of class `SA` (South East Asian scripts written without spaces)
//! are treated as `AL`. Breaking such text properly requires dictionary
//! lookup, which is beyond what a character-at-a-time state machine can
//! do. Classes introduced after Unicode 15.0 (`AK`, `AP`, `AS`, `VF`, `VI`)
//! are not recognized.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod codegen;
mod error;
mod properties;
mod state;

pub use error::BuildError;
pub use properties::*;
pub use state::*;

use u8char::u8char;

/// A finite state machine for finding line break opportunities.
///
/// Feed characters into the machine one at a time, in order, using
/// [`Self::next_char`], [`Self::next_u8char`], [`Self::next_codepoint`], or
/// [`Self::next_class`]. Each returns whether a line may end just before the
/// character that was submitted. Call [`Self::end_of_input`] after the last
/// character.
///
/// The machine itself holds only the current [`State`], so it's cheap to
/// create one per text and run many of them concurrently over the same
/// tables.
#[derive(Debug, Clone)]
pub struct LineBreakMachine<'t> {
    classes: &'t ClassTable,
    matrix: &'t TransitionMatrix,
    state: Option<State>,
}

impl<'t> LineBreakMachine<'t> {
    /// Constructs a new [`LineBreakMachine`] in the "start of text" state.
    pub fn new(classes: &'t ClassTable, matrix: &'t TransitionMatrix) -> Self {
        LineBreakMachine {
            classes,
            matrix,
            state: None,
        }
    }

    /// Advances the state machine for a character of the given class,
    /// returning whether a line may end between the previous character and
    /// this one.
    ///
    /// At the start of text there is no previous character and so the result
    /// is always [`BreakOpportunity::Forbidden`].
    pub fn next_class(&mut self, next: LineBreakClass) -> BreakOpportunity {
        let Some(state) = self.state else {
            log::trace!("start of text on {next}");
            self.state = Some(State::initial(next));
            return BreakOpportunity::Forbidden;
        };
        let (next_state, flags) = self.matrix.step(state, next);
        log::trace!("from {state:?} on {next} to {next_state:?}: {flags:?}");
        self.state = Some(next_state);
        flags.opportunity()
    }

    /// Looks up the class of the given character and then advances the state
    /// machine by passing it to [`Self::next_class`].
    pub fn next_char(&mut self, c: char) -> BreakOpportunity {
        self.next_codepoint(c as u32)
    }

    /// Like [`Self::next_char`], but for a character already encoded as
    /// UTF-8.
    pub fn next_u8char(&mut self, c: u8char) -> BreakOpportunity {
        let class = self.classes.classify_u8char(c);
        self.next_class(class)
    }

    /// Like [`Self::next_char`], but for a raw codepoint.
    ///
    /// # Panics
    ///
    /// Panics if `cp` is greater than `0x10FFFF`. Whether surrogates are
    /// acceptable input is up to the caller.
    pub fn next_codepoint(&mut self, cp: u32) -> BreakOpportunity {
        let class = self.classes.classify(cp);
        self.next_class(class)
    }

    /// Feeds every character of `s` into the machine, yielding the result
    /// for each one alongside the character itself.
    pub fn next_chars_from_str<'s>(
        &'s mut self,
        s: &'s str,
    ) -> impl Iterator<Item = (BreakOpportunity, char)> + 's {
        s.chars().map(move |c| (self.next_char(c), c))
    }

    /// Returns the current state, or `None` at the start of text.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Tells the state machine that the text has ended, returning the break
    /// at the end of the text and resetting to the "start of text" state.
    ///
    /// There is always a break at the end of a non-empty text. It is
    /// [`BreakOpportunity::Mandatory`] if the text ended with a line
    /// terminator (class `BK`, `CR`, `LF` or `NL`) and
    /// [`BreakOpportunity::Allowed`] otherwise. If no characters were
    /// submitted since the last reset then there is no text to end, and the
    /// result is [`BreakOpportunity::Forbidden`].
    pub fn end_of_input(&mut self) -> BreakOpportunity {
        match self.state.take() {
            None => BreakOpportunity::Forbidden,
            Some(state) => match state.kind() {
                StateKind::Class(class) if class.is_hard_break() => BreakOpportunity::Mandatory,
                _ => BreakOpportunity::Allowed,
            },
        }
    }
}

/// Whether a line may end at a particular position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakOpportunity {
    /// The line must not end here.
    Forbidden,
    /// The line may end here.
    Allowed,
    /// The line must end here.
    Mandatory,
}

impl BreakOpportunity {
    /// Returns `true` for both [`Self::Allowed`] and [`Self::Mandatory`].
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed | Self::Mandatory)
    }

    /// Returns `true` only for [`Self::Mandatory`].
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }
}

/// Returns an iterator over the line break opportunities in `text`.
///
/// Each item is the byte offset of the character that would begin the next
/// line, along with the kind of break. Positions where a break is forbidden
/// are skipped. The last item is always the break at the end of the text,
/// unless the text is empty.
pub fn linebreaks<'a>(
    classes: &'a ClassTable,
    matrix: &'a TransitionMatrix,
    text: &'a str,
) -> LineBreaks<'a> {
    LineBreaks {
        machine: LineBreakMachine::new(classes, matrix),
        text,
        ix: 0,
        done: false,
    }
}

/// Iterator returned by [`linebreaks`].
#[derive(Debug, Clone)]
pub struct LineBreaks<'a> {
    machine: LineBreakMachine<'a>,
    text: &'a str,
    ix: usize,
    done: bool,
}

impl Iterator for LineBreaks<'_> {
    type Item = (usize, BreakOpportunity);

    fn next(&mut self) -> Option<Self::Item> {
        while self.ix < self.text.len() {
            let at = self.ix;
            let (class, len) = self.machine.classes.classify_str(self.text, at);
            self.ix += len;
            let opportunity = self.machine.next_class(class);
            if opportunity.is_allowed() {
                return Some((at, opportunity));
            }
        }
        if self.done {
            return None;
        }
        self.done = true;
        match self.machine.end_of_input() {
            BreakOpportunity::Forbidden => None,
            opportunity => Some((self.text.len(), opportunity)),
        }
    }
}

impl core::iter::FusedIterator for LineBreaks<'_> {}
