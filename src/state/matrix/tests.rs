use super::*;
use crate::state::{N_CONTEXT_STATES, Rule, Scope};

use pretty_assertions::assert_eq;

fn uax14() -> TransitionMatrix {
    TransitionMatrix::build(&RuleSet::UAX14).expect("default rules should compile")
}

#[test]
fn deterministic_build() {
    let a = uax14();
    let b = uax14();
    assert!(a.as_bytes() == b.as_bytes());
    assert_eq!(a.as_bytes().len(), N_STATES * N_LINEBREAK_CLASSES);

    let mut source_a = String::new();
    let mut source_b = String::new();
    a.write_rust_source(&mut source_a).unwrap();
    b.write_rust_source(&mut source_b).unwrap();
    assert_eq!(source_a, source_b);
    assert!(source_a.contains("pub const N_LINEBREAK_CATEGORIES: usize = 43;"));
    assert!(source_a.contains("pub const LINEBREAK_STATE_MACHINE: [u8; 3827] = ["));
    assert!(source_a.contains("    // state 2: AL\n"));
    assert!(source_a.contains("    // state 43: HL+HY\n"));
    assert!(source_a.contains("    // state 46: SP+ XX\n"));
    assert!(source_a.lines().all(|line| line.len() <= 80));
}

#[test]
fn every_transition_decodes() {
    let matrix = uax14();
    for state in State::all() {
        for class in LineBreakClass::ALL {
            let transition = matrix.transition(state, class);
            let (next, flags) = matrix.step(state, class);
            assert!(next.index() < N_STATES, "{state:?} on {class}: {transition:?}");
            if flags.is_break_allowed() {
                // A break always starts a fresh context from the new
                // character alone.
                assert_eq!(next, State::class(class), "{state:?} on {class}");
            }
        }
    }
}

#[test]
fn mandatory_only_after_hard_breaks() {
    let matrix = uax14();
    for state in State::all() {
        let hard = matches!(state.kind(), StateKind::Class(c) if c.is_hard_break());
        for class in LineBreakClass::ALL {
            let (_, flags) = matrix.step(state, class);
            let expected = hard && !(state == State::class(CR) && class == LF);
            assert_eq!(flags.is_mandatory(), expected, "{state:?} on {class}");
        }
    }
}

#[test]
fn marks_carry_their_base() {
    let matrix = uax14();
    for state in State::all() {
        let StateKind::Class(class) = state.kind() else {
            continue;
        };
        if NO_ATTACH.contains_class(class) {
            continue;
        }
        for mark in [CM, ZWJ] {
            assert_eq!(
                matrix.step(state, mark),
                (state, BreakFlags::FORBIDDEN),
                "{state:?} on {mark}"
            );
        }
    }
}

#[test]
fn spaces_are_held_pending() {
    let matrix = uax14();
    for state in State::all() {
        if matches!(state.kind(), StateKind::Class(c) if c.is_hard_break()) {
            // LB4 and LB5 apply first.
            assert!(matrix.step(state, SP).1.is_mandatory());
            continue;
        }
        let (next, flags) = matrix.step(state, SP);
        assert_eq!(flags, BreakFlags::FORBIDDEN, "{state:?} on SP");
        assert_eq!(
            next.kind(),
            StateKind::PendingSpace(state.trailing_class()),
            "{state:?} on SP"
        );
    }
}

#[test]
fn leading_space_runs_agree() {
    // A lone SP and a longer run of SP with nothing before them are the
    // same context.
    let matrix = uax14();
    for class in LineBreakClass::ALL {
        assert_eq!(
            matrix.step(State::class(SP), class),
            matrix.step(State::pending_space(SP), class),
            "on {class}"
        );
    }
}

#[test]
fn incomplete_rules() {
    assert_eq!(
        TransitionMatrix::build(&RuleSet::new(&[])),
        Err(BuildError::UnassignedTransition {
            state: 0,
            class: XX
        })
    );

    // Everything except the catch-all.
    let rules = RuleSet::UAX14.rules();
    let without_default = RuleSet::new(&rules[..rules.len() - 1]);
    assert!(matches!(
        TransitionMatrix::build(&without_default),
        Err(BuildError::UnassignedTransition { .. })
    ));
}

#[test]
fn first_rule_wins() {
    let forbid = Rule {
        tag: "AL×AL",
        left: ContextSet::class(AL),
        right: ContextSet::class(AL),
        action: Action::Forbid,
        scope: Scope::Adjacent,
    };
    let allow = Rule {
        tag: "all",
        left: ContextSet::ANY,
        right: ContextSet::ANY,
        action: Action::Allow,
        scope: Scope::Both,
    };

    let rules = [forbid, allow];
    let matrix = TransitionMatrix::build(&RuleSet::new(&rules)).unwrap();
    assert_eq!(
        matrix.step(State::class(AL), AL),
        (State::class(AL), BreakFlags::FORBIDDEN)
    );
    assert_eq!(
        matrix.step(State::class(AL), NU),
        (State::class(NU), BreakFlags::ALLOWED)
    );

    let rules = [allow, forbid];
    let matrix = TransitionMatrix::build(&RuleSet::new(&rules)).unwrap();
    assert_eq!(
        matrix.step(State::class(AL), AL),
        (State::class(AL), BreakFlags::ALLOWED)
    );

    // The machine's own handling of marks and spaces applies whatever the
    // rules say.
    assert_eq!(
        matrix.step(State::class(AL), CM),
        (State::class(AL), BreakFlags::FORBIDDEN)
    );
    assert_eq!(
        matrix.step(State::class(AL), SP),
        (State::class(SP), BreakFlags::ALLOWED)
    );
}

#[test]
fn context_sets() {
    assert!(ContextSet::ANY.contains(State::class(ZWJ)));
    assert!(ContextSet::ANY.contains(State::composite(Composite::RegionalPair)));
    assert!(!ContextSet::ANY.contains(State::pending_space(XX)));
    assert!(!ContextSet::EMPTY.contains(State::class(XX)));

    let set = ContextSet::classes(&[AL, HL]).union(ContextSet::composite(Composite::HebrewHyphen));
    assert!(set.contains_class(AL));
    assert!(set.contains(State::composite(Composite::HebrewHyphen)));
    assert!(!set.contains(State::composite(Composite::HebrewBreakAfter)));
    assert!(!set.without(ContextSet::class(AL)).contains_class(AL));
    assert!(set.without(ContextSet::class(AL)).contains_class(HL));

    assert_eq!(N_CONTEXT_STATES, N_LINEBREAK_CLASSES + Composite::ALL.len());
}

#[test]
fn debug_summary() {
    let matrix = uax14();
    let debug = format!("{matrix:?}");
    assert!(debug.starts_with("TransitionMatrix { states: 89, unique_rows: "));
    assert!(matrix.unique_rows() <= N_STATES);
}
