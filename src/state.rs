use core::fmt;

use crate::BreakOpportunity;
use crate::BuildError;
use crate::LineBreakClass;
use crate::N_LINEBREAK_CLASSES;

mod matrix;
mod rules;

pub use matrix::TransitionMatrix;
pub use rules::{Action, ContextSet, Rule, RuleSet, Scope};

/// The number of synthetic states that remember two characters of context.
pub const N_COMPOSITE_STATES: usize = 3;

/// The number of states that can appear on the left of a pair rule: one per
/// class plus the composites.
pub const N_CONTEXT_STATES: usize = N_LINEBREAK_CLASSES + N_COMPOSITE_STATES;

/// The total number of states in the machine: the context states followed by
/// one pending-space state per class.
pub const N_STATES: usize = N_CONTEXT_STATES + N_LINEBREAK_CLASSES;

const BREAK_BIT: u8 = 0x80;
const MANDATORY_BIT: u8 = 0x40;
const STATE_MASK: u8 = 0x7f;
const BREAKING_STATE_MASK: u8 = 0x3f;

/// Two-character contexts that some rules need to see past the immediately
/// preceding character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    /// `HL` followed by `HY`, for rule LB21a.
    HebrewHyphen,
    /// `HL` followed by `BA`, for rule LB21a.
    HebrewBreakAfter,
    /// A complete pair of `RI`, for rule LB30a.
    RegionalPair,
}

impl Composite {
    /// Every composite, in state order.
    pub const ALL: [Self; N_COMPOSITE_STATES] =
        [Self::HebrewHyphen, Self::HebrewBreakAfter, Self::RegionalPair];

    /// Returns the class of the second character of the pair.
    pub const fn trailing_class(self) -> LineBreakClass {
        match self {
            Self::HebrewHyphen => LineBreakClass::HY,
            Self::HebrewBreakAfter => LineBreakClass::BA,
            Self::RegionalPair => LineBreakClass::RI,
        }
    }

    /// Returns the two classes of the pair joined by `+`, such as `"HL+HY"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HebrewHyphen => "HL+HY",
            Self::HebrewBreakAfter => "HL+BA",
            Self::RegionalPair => "RI+RI",
        }
    }
}

/// The three families of [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// The previous character (or the base that its combining marks attach
    /// to) had this class.
    Class(LineBreakClass),
    /// The previous two characters formed this composite.
    Composite(Composite),
    /// One or more `SP` followed a character of this class, and the decision
    /// about breaking after them waits for the next non-space character.
    PendingSpace(LineBreakClass),
}

/// Summarizes everything the line breaking rules need to know about the text
/// seen so far, in a single byte.
///
/// States are numbered with the class states first (in class order), then
/// the [`Composite`] states, then the pending-space states (in class order).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(u8);

impl State {
    /// Returns the state after the first character of a text, which has no
    /// break before it.
    pub const fn initial(first: LineBreakClass) -> Self {
        Self::class(first)
    }

    /// Returns the state after a character of class `class`.
    pub const fn class(class: LineBreakClass) -> Self {
        State(class as u8)
    }

    /// Returns the state for a two-character composite context.
    pub const fn composite(composite: Composite) -> Self {
        State((N_LINEBREAK_CLASSES + composite as usize) as u8)
    }

    /// Returns the state after one or more `SP` that followed a character
    /// of class `before`.
    pub const fn pending_space(before: LineBreakClass) -> Self {
        State((N_CONTEXT_STATES + before as usize) as u8)
    }

    /// Returns the state described by `kind`. This is the inverse of
    /// [`Self::kind`].
    pub const fn from_kind(kind: StateKind) -> Self {
        match kind {
            StateKind::Class(class) => Self::class(class),
            StateKind::Composite(composite) => Self::composite(composite),
            StateKind::PendingSpace(before) => Self::pending_space(before),
        }
    }

    /// Returns the state with the given number, if there is one.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < N_STATES {
            Some(State(index as u8))
        } else {
            None
        }
    }

    /// Returns the state's number, which is its row in the transition matrix.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns every state, in index order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..N_STATES as u8).map(State)
    }

    /// Returns which family the state belongs to, and what it remembers.
    pub const fn kind(self) -> StateKind {
        let idx = self.0 as usize;
        if idx < N_LINEBREAK_CLASSES {
            StateKind::Class(LineBreakClass::ALL[idx])
        } else if idx < N_CONTEXT_STATES {
            StateKind::Composite(Composite::ALL[idx - N_LINEBREAK_CLASSES])
        } else {
            StateKind::PendingSpace(LineBreakClass::ALL[idx - N_CONTEXT_STATES])
        }
    }

    /// Returns the class of the most recent non-space character that this
    /// state remembers.
    pub const fn trailing_class(self) -> LineBreakClass {
        match self.kind() {
            StateKind::Class(class) | StateKind::PendingSpace(class) => class,
            StateKind::Composite(composite) => composite.trailing_class(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            StateKind::Class(class) => write!(f, "{class}"),
            StateKind::Composite(composite) => f.write_str(composite.name()),
            StateKind::PendingSpace(before) => write!(f, "SP+ {before}"),
        }
    }
}

/// Whether a break is allowed at some position, and whether it is forced.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BreakFlags(u8);

impl BreakFlags {
    pub const FORBIDDEN: Self = BreakFlags(0);
    pub const ALLOWED: Self = BreakFlags(BREAK_BIT);
    pub const MANDATORY: Self = BreakFlags(BREAK_BIT | MANDATORY_BIT);

    /// Returns `true` if a line may end here. This includes mandatory breaks.
    pub const fn is_break_allowed(self) -> bool {
        self.0 & BREAK_BIT != 0
    }

    /// Returns `true` if a line must end here.
    pub const fn is_mandatory(self) -> bool {
        self.0 & MANDATORY_BIT != 0
    }

    /// Converts the flags into the [`BreakOpportunity`] they describe.
    pub const fn opportunity(self) -> BreakOpportunity {
        if self.is_mandatory() {
            BreakOpportunity::Mandatory
        } else if self.is_break_allowed() {
            BreakOpportunity::Allowed
        } else {
            BreakOpportunity::Forbidden
        }
    }
}

impl fmt::Debug for BreakFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.opportunity(), f)
    }
}

impl From<BreakFlags> for BreakOpportunity {
    fn from(flags: BreakFlags) -> Self {
        flags.opportunity()
    }
}

/// One cell of a [`TransitionMatrix`]: the next state and the break flags
/// for the position before the character that caused the transition.
///
/// The encoding is a single byte. Bit 7 means a break is allowed and bit 6,
/// only ever set together with bit 7, means the break is mandatory. The
/// remaining bits are the next state. Breaking transitions always lead to a
/// class state, so six bits are enough for them.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition(u8);

impl Transition {
    pub(crate) fn encode(next: State, action: Action) -> Result<Self, BuildError> {
        let (flags, limit) = match action {
            Action::Forbid => (BreakFlags::FORBIDDEN, STATE_MASK),
            Action::Allow => (BreakFlags::ALLOWED, BREAKING_STATE_MASK),
            Action::Mandatory => (BreakFlags::MANDATORY, BREAKING_STATE_MASK),
        };
        if next.0 > limit {
            return Err(BuildError::StateNotEncodable {
                state: next.index(),
            });
        }
        Ok(Transition(flags.0 | next.0))
    }

    /// Interprets a byte taken from [`TransitionMatrix::as_bytes`].
    pub const fn from_byte(byte: u8) -> Self {
        Transition(byte)
    }

    /// Returns the encoded byte.
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Returns the state the machine moves to.
    pub const fn state(self) -> State {
        if self.0 & BREAK_BIT != 0 {
            State(self.0 & BREAKING_STATE_MASK)
        } else {
            State(self.0 & STATE_MASK)
        }
    }

    /// Returns the flags for the position before the character.
    pub const fn flags(self) -> BreakFlags {
        if self.0 & BREAK_BIT != 0 {
            BreakFlags(self.0 & (BREAK_BIT | MANDATORY_BIT))
        } else {
            BreakFlags::FORBIDDEN
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.flags(), self.state())
    }
}
