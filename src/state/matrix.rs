use alloc::collections::BTreeSet;
use core::fmt;

use super::rules::PairTables;
use super::{
    Action, BreakFlags, Composite, ContextSet, N_STATES, RuleSet, State, StateKind, Transition,
};
use crate::BuildError;
use crate::LineBreakClass::{self, *};
use crate::N_LINEBREAK_CLASSES;
use crate::codegen::write_values;

/// Left contexts that a following `CM` or `ZWJ` cannot attach to (LB9). A
/// mark after one of these is treated as `AL` instead (LB10).
const NO_ATTACH: ContextSet = ContextSet::classes(&[BK, CR, LF, NL, SP, ZW]);

/// The compiled line breaking state machine.
///
/// Each cell holds the [`Transition`] taken from a [`State`] on a character of
/// some [`LineBreakClass`]. The matrix is computed once from a [`RuleSet`] and
/// then only read; [`Self::step`] is a single array lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct TransitionMatrix {
    cells: [[u8; N_LINEBREAK_CLASSES]; N_STATES],
}

impl TransitionMatrix {
    /// Compiles `rules` into a transition matrix.
    ///
    /// The result depends only on the rules, so building twice from the same
    /// rules produces byte-identical matrices. Fails if some state and class
    /// combination is not covered by any rule.
    pub fn build(rules: &RuleSet<'_>) -> Result<Self, BuildError> {
        let pairs = rules.pair_tables();
        let mut cells = [[0; N_LINEBREAK_CLASSES]; N_STATES];
        for (state, row) in State::all().zip(cells.iter_mut()) {
            for class in LineBreakClass::ALL {
                let (next, action) =
                    resolve(&pairs, state, class).ok_or(BuildError::UnassignedTransition {
                        state: state.index(),
                        class,
                    })?;
                row[class.index()] = Transition::encode(next, action)?.to_byte();
            }
        }

        let matrix = Self { cells };
        log::debug!(
            "transition matrix: {} rules, {} states, {} unique rows",
            rules.rules().len(),
            N_STATES,
            matrix.unique_rows(),
        );
        Ok(matrix)
    }

    /// Returns the next state and the break flags for the position before a
    /// character of class `next`, given the state after the previous
    /// character.
    #[inline]
    pub fn step(&self, state: State, next: LineBreakClass) -> (State, BreakFlags) {
        let transition = self.transition(state, next);
        (transition.state(), transition.flags())
    }

    #[inline]
    pub fn transition(&self, state: State, next: LineBreakClass) -> Transition {
        Transition::from_byte(self.cells[state.index()][next.index()])
    }

    /// Returns the encoded cells, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        self.cells.as_flattened()
    }

    /// Returns how many states have distinct rows.
    pub fn unique_rows(&self) -> usize {
        self.cells.iter().collect::<BTreeSet<_>>().len()
    }

    /// Writes the matrix as Rust constant declarations, one commented block
    /// per state.
    pub fn write_rust_source<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "// {} unique states", self.unique_rows())?;
        writeln!(out, "pub const N_LINEBREAK_CATEGORIES: usize = {N_LINEBREAK_CLASSES};")?;
        writeln!(out)?;
        writeln!(out, "#[rustfmt::skip]")?;
        writeln!(
            out,
            "pub const LINEBREAK_STATE_MACHINE: [u8; {}] = [",
            N_STATES * N_LINEBREAK_CLASSES
        )?;
        for (state, row) in State::all().zip(self.cells.iter()) {
            writeln!(out, "    // state {}: {state:?}", state.index())?;
            write_values(out, &row[..])?;
        }
        writeln!(out, "];")
    }
}

impl fmt::Debug for TransitionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionMatrix")
            .field("states", &N_STATES)
            .field("unique_rows", &self.unique_rows())
            .finish()
    }
}

/// The state whose rule-table row applies to pairs starting in `state`.
///
/// A lone `CM` (one with no base to attach to) behaves as `AL`, and the
/// ambiguous classes are resolved as in LB1.
fn rule_context(state: State) -> State {
    match state.kind() {
        StateKind::Class(CM) => State::class(AL),
        StateKind::Class(class) | StateKind::PendingSpace(class) => State::class(class.resolved()),
        StateKind::Composite(_) => state,
    }
}

/// Decides the transition from `state` on a character of class `next`.
///
/// Returns `None` if the rules leave the needed pair unassigned.
fn resolve(pairs: &PairTables, state: State, next: LineBreakClass) -> Option<(State, Action)> {
    let left = rule_context(state);

    if let StateKind::PendingSpace(_) = state.kind() {
        let right = if next.is_combining() { AL } else { next.resolved() };
        let action = pairs.after_spaces(left, right)?;
        if next == SP && action == Action::Forbid {
            return Some((state, action));
        }
        return Some((State::class(next), action));
    }

    if next.is_combining() {
        if !NO_ATTACH.contains(left) {
            // LB9: the mark extends whatever came before it.
            return Some((state, Action::Forbid));
        }
        let action = pairs.adjacent(left, AL)?;
        return Some((State::class(next), action));
    }

    let right = next.resolved();
    let action = if left == State::class(ZWJ) && !matches!(right, ID | EB | EM) {
        pairs.adjacent(State::class(AL), right)?
    } else {
        pairs.adjacent(left, right)?
    };
    if action != Action::Forbid {
        return Some((State::class(next), action));
    }

    let next_state = match (left.kind(), right) {
        (_, SP) => State::pending_space(state.trailing_class()),
        (StateKind::Class(HL), HY) => State::composite(Composite::HebrewHyphen),
        (StateKind::Class(HL), BA) => State::composite(Composite::HebrewBreakAfter),
        (StateKind::Class(RI), RI) => State::composite(Composite::RegionalPair),
        _ => State::class(next),
    };
    Some((next_state, action))
}

#[cfg(test)]
mod tests;
