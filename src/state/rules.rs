//! The pair rules of UAX #14, as data.
//!
//! Each [`Rule`] says what happens between a character whose context is in
//! its left set and a following character whose class is in its right set.
//! Rules are listed in priority order and folded into the pair tables with
//! "first assignment wins": a later rule never overrides a pair that an
//! earlier rule already decided. That ordering is what encodes the rule
//! priorities of the algorithm, so the order of [`UAX14_RULES`] matters.

use super::{Composite, N_CONTEXT_STATES, State};
use crate::LineBreakClass::{self, *};
use crate::N_LINEBREAK_CLASSES;

/// What a rule decides for the position between two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// No break (`×`).
    Forbid,
    /// A break is allowed (`÷`).
    Allow,
    /// A break is required (`!`).
    Mandatory,
}

/// Which of the two pair tables a rule populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Pairs of adjacent characters.
    Adjacent,
    /// Pairs separated by one or more `SP`.
    AfterSpaces,
    /// Both of the above.
    Both,
}

impl Scope {
    const fn adjacent(self) -> bool {
        matches!(self, Scope::Adjacent | Scope::Both)
    }

    const fn after_spaces(self) -> bool {
        matches!(self, Scope::AfterSpaces | Scope::Both)
    }
}

/// A set of left-hand contexts: classes and [`Composite`] states.
///
/// When used on the right-hand side of a rule only the class members matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextSet(u64);

impl ContextSet {
    pub const EMPTY: Self = ContextSet(0);
    pub const ANY: Self = ContextSet((1 << N_CONTEXT_STATES) - 1);

    pub const fn classes(classes: &[LineBreakClass]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < classes.len() {
            bits |= 1 << classes[i] as u64;
            i += 1;
        }
        ContextSet(bits)
    }

    pub const fn class(class: LineBreakClass) -> Self {
        ContextSet(1 << class as u64)
    }

    pub const fn composite(composite: Composite) -> Self {
        ContextSet(1 << State::composite(composite).index())
    }

    pub const fn union(self, other: Self) -> Self {
        ContextSet(self.0 | other.0)
    }

    pub const fn without(self, other: Self) -> Self {
        ContextSet(self.0 & !other.0)
    }

    /// Returns `true` if `state` is a class or composite state in this set.
    /// Pending-space states are never members.
    pub const fn contains(self, state: State) -> bool {
        state.index() < N_CONTEXT_STATES && self.0 & (1 << state.index()) != 0
    }

    pub const fn contains_class(self, class: LineBreakClass) -> bool {
        self.contains(State::class(class))
    }
}

/// One pair rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The name of the rule in UAX #14, such as `"LB21a"`.
    pub tag: &'static str,
    pub left: ContextSet,
    pub right: ContextSet,
    pub action: Action,
    pub scope: Scope,
}

/// An ordered list of pair rules, highest priority first.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet<'r> {
    rules: &'r [Rule],
}

impl RuleSet<'static> {
    /// The default rules of UAX #14.
    pub const UAX14: Self = RuleSet::new(UAX14_RULES);
}

impl<'r> RuleSet<'r> {
    pub const fn new(rules: &'r [Rule]) -> Self {
        RuleSet { rules }
    }

    pub const fn rules(&self) -> &'r [Rule] {
        self.rules
    }

    /// Folds the rules into the two pair tables, each cell taking the action
    /// of the first rule that covers it.
    pub(crate) fn pair_tables(&self) -> PairTables {
        let mut tables = PairTables {
            adjacent: [[None; N_LINEBREAK_CLASSES]; N_CONTEXT_STATES],
            after_spaces: [[None; N_LINEBREAK_CLASSES]; N_CONTEXT_STATES],
        };
        for rule in self.rules {
            for (left, (adjacent, after_spaces)) in tables
                .adjacent
                .iter_mut()
                .zip(tables.after_spaces.iter_mut())
                .enumerate()
            {
                if !rule.left.contains(State(left as u8)) {
                    continue;
                }
                for right in LineBreakClass::ALL {
                    if !rule.right.contains_class(right) {
                        continue;
                    }
                    if rule.scope.adjacent() {
                        adjacent[right.index()].get_or_insert(rule.action);
                    }
                    if rule.scope.after_spaces() {
                        after_spaces[right.index()].get_or_insert(rule.action);
                    }
                }
            }
        }
        tables
    }
}

/// The folded form of a [`RuleSet`], indexed by left context state and right
/// class.
pub(crate) struct PairTables {
    adjacent: [[Option<Action>; N_LINEBREAK_CLASSES]; N_CONTEXT_STATES],
    after_spaces: [[Option<Action>; N_LINEBREAK_CLASSES]; N_CONTEXT_STATES],
}

impl PairTables {
    /// The action between adjacent characters. `left` must be a class or
    /// composite state.
    pub(crate) fn adjacent(&self, left: State, right: LineBreakClass) -> Option<Action> {
        self.adjacent[left.index()][right.index()]
    }

    /// The action between `left` and `right` when one or more spaces
    /// separate them. `left` must be a class or composite state.
    pub(crate) fn after_spaces(&self, left: State, right: LineBreakClass) -> Option<Action> {
        self.after_spaces[left.index()][right.index()]
    }
}

const fn set(classes: &[LineBreakClass]) -> ContextSet {
    ContextSet::classes(classes)
}

const fn one(class: LineBreakClass) -> ContextSet {
    ContextSet::class(class)
}

const ANY: ContextSet = ContextSet::ANY;

const fn rule(
    tag: &'static str,
    scope: Scope,
    left: ContextSet,
    right: ContextSet,
    action: Action,
) -> Rule {
    Rule {
        tag,
        left,
        right,
        action,
        scope,
    }
}

use Action::{Allow, Forbid, Mandatory};
use Scope::{Adjacent, AfterSpaces, Both};

const HANGUL: ContextSet = set(&[JL, JV, JT, H2, H3]);
const ALPHA: ContextSet = set(&[AL, HL]);
const IDEO: ContextSet = set(&[ID, EB, EM]);
const HEBREW_COMPOSITES: ContextSet = ContextSet::composite(Composite::HebrewHyphen)
    .union(ContextSet::composite(Composite::HebrewBreakAfter));

/// The pair rules of UAX #14 in priority order.
///
/// LB1 (ambiguous class resolution), LB2 and LB3 (start and end of text),
/// LB9 and LB10 (combining marks) and the `SP` handling of LB7 are built
/// into the state machine rather than expressed here. After LB18 the
/// after-spaces table is complete, so later rules only affect adjacent
/// pairs.
pub const UAX14_RULES: &[Rule] = &[
    rule("LB4", Adjacent, one(BK), ANY, Mandatory),
    rule("LB5", Adjacent, one(CR), one(LF), Forbid),
    rule("LB5", Adjacent, set(&[CR, LF, NL]), ANY, Mandatory),
    rule("LB6", Both, ANY, set(&[BK, CR, LF, NL]), Forbid),
    rule("LB7", Both, ANY, set(&[SP, ZW]), Forbid),
    rule("LB8", Both, one(ZW), ANY, Allow),
    rule("LB8a", Adjacent, one(ZWJ), IDEO, Forbid),
    rule("LB11", Both, ANY, one(WJ), Forbid),
    rule("LB11", Adjacent, one(WJ), ANY, Forbid),
    rule("LB12", Adjacent, one(GL), ANY, Forbid),
    rule(
        "LB12a",
        Adjacent,
        ANY.without(set(&[SP, BA, HY])).without(HEBREW_COMPOSITES),
        one(GL),
        Forbid,
    ),
    // A space run never separates GL from what precedes it. A run with
    // nothing before it falls through to LB18, as a single leading SP does.
    rule("LB12", AfterSpaces, ANY.without(one(SP)), one(GL), Forbid),
    rule("LB13", Both, ANY, set(&[CL, CP, EX, IS, SY]), Forbid),
    rule("LB14", Both, one(OP), ANY, Forbid),
    rule("LB15", Both, one(QU), one(OP), Forbid),
    rule("LB16", Both, set(&[CL, CP]), one(NS), Forbid),
    rule("LB17", Both, one(B2), one(B2), Forbid),
    rule("LB18", Adjacent, one(SP), ANY, Allow),
    rule("LB18", AfterSpaces, ANY, ANY, Allow),
    rule("LB19", Adjacent, ANY, one(QU), Forbid),
    rule("LB19", Adjacent, one(QU), ANY, Forbid),
    rule("LB20", Adjacent, ANY, one(CB), Allow),
    rule("LB20", Adjacent, one(CB), ANY, Allow),
    rule("LB21", Adjacent, ANY, set(&[BA, HY, NS]), Forbid),
    rule("LB21", Adjacent, one(BB), ANY, Forbid),
    rule("LB21a", Adjacent, HEBREW_COMPOSITES, ANY, Forbid),
    rule("LB21b", Adjacent, one(SY), one(HL), Forbid),
    rule("LB22", Adjacent, set(&[AL, HL, EX, ID, EB, EM, IN, NU]), one(IN), Forbid),
    rule("LB23", Adjacent, ALPHA, one(NU), Forbid),
    rule("LB23", Adjacent, one(NU), ALPHA, Forbid),
    rule("LB23a", Adjacent, one(PR), IDEO, Forbid),
    rule("LB23a", Adjacent, IDEO, one(PO), Forbid),
    rule("LB24", Adjacent, set(&[PR, PO]), ALPHA, Forbid),
    rule("LB24", Adjacent, ALPHA, set(&[PR, PO]), Forbid),
    rule("LB25", Adjacent, set(&[CL, CP, NU]), set(&[PO, PR]), Forbid),
    rule("LB25", Adjacent, set(&[PO, PR]), set(&[OP, NU]), Forbid),
    rule("LB25", Adjacent, set(&[HY, IS, NU, SY]), one(NU), Forbid),
    rule("LB26", Adjacent, one(JL), set(&[JL, JV, H2, H3]), Forbid),
    rule("LB26", Adjacent, set(&[JV, H2]), set(&[JV, JT]), Forbid),
    rule("LB26", Adjacent, set(&[JT, H3]), one(JT), Forbid),
    rule("LB27", Adjacent, HANGUL, set(&[IN, PO]), Forbid),
    rule("LB27", Adjacent, one(PR), HANGUL, Forbid),
    rule("LB28", Adjacent, ALPHA, ALPHA, Forbid),
    rule("LB29", Adjacent, one(IS), ALPHA, Forbid),
    rule("LB30", Adjacent, set(&[AL, HL, NU]), one(OP), Forbid),
    rule("LB30", Adjacent, one(CP), set(&[AL, HL, NU]), Forbid),
    rule("LB30a", Adjacent, one(RI), one(RI), Forbid),
    rule(
        "LB30a",
        Adjacent,
        ContextSet::composite(Composite::RegionalPair),
        ANY,
        Allow,
    ),
    rule("LB30b", Adjacent, one(EB), one(EM), Forbid),
    rule("LB31", Both, ANY, ANY, Allow),
];
