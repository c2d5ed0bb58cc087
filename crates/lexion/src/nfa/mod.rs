//! # Non-deterministic finite automata
//!
//! The NFA layer of the toolkit. [`Builder`] assembles automata out of
//! fragments using three algebraic combinators — [`Builder::offset`]
//! (renumber states), [`Builder::append`] (concatenation via ε-bridging)
//! and [`Builder::merge`] (alternation via a shared initial ε-fan-out) —
//! and [`Nfa`] is the immutable result, queried by ε-closure and
//! symbol-advance during determinisation and simulation.
//!
//! Accept states carry an optional [`Token`]: regex fragments mark accept
//! states without a token, and [`Builder::set_accept_token`] brands a
//! finished fragment with the `(id, priority)` pair it was registered
//! under.

mod builder;
mod label;
pub mod simulator;
mod token;

pub use builder::Builder;
pub use label::Label;
pub use token::Token;

use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::symbol::Symbol;

/// Identifier of an automaton state. Ids are dense, allocated from 0 and
/// never reused.
pub type StateId = usize;

/// An ordered set of NFA states.
///
/// `BTreeSet` keeps the representation normalised (sorted), so state-sets
/// hash identically regardless of insertion order and can key the maps
/// used by subset construction.
pub type StateSet = BTreeSet<StateId>;

/// Transition table: `(state, label)` to the set of destination states.
pub type Transitions = HashMap<(StateId, Label), StateSet, ahash::RandomState>;

/// Accept-state table: state to its optional token.
pub type AcceptStates = HashMap<StateId, Option<Token>, ahash::RandomState>;

/// An immutable non-deterministic finite automaton.
///
/// Transitions may lead to multiple states and may consume no input
/// (ε-labels). Values are immutable after construction and may be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Nfa {
    init_state: StateId,
    transitions: Transitions,
    accept_states: AcceptStates,
}

impl Nfa {
    pub(crate) fn new(
        init_state: StateId,
        transitions: Transitions,
        accept_states: AcceptStates,
    ) -> Self {
        Self {
            init_state,
            transitions,
            accept_states,
        }
    }

    /// The initial state.
    #[must_use]
    pub const fn init_state(&self) -> StateId {
        self.init_state
    }

    /// The transition table.
    #[must_use]
    pub const fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// The accept states and their optional tokens.
    #[must_use]
    pub const fn accept_states(&self) -> &AcceptStates {
        &self.accept_states
    }

    /// All states reachable from `states` using only ε-transitions,
    /// including `states` itself.
    #[must_use]
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut result = states.clone();
        let mut worklist: Vec<StateId> = states.iter().copied().collect();

        while let Some(state) = worklist.pop() {
            if let Some(targets) = self.transitions.get(&(state, Label::Epsilon)) {
                for &target in targets {
                    if result.insert(target) {
                        worklist.push(target);
                    }
                }
            }
        }

        result
    }

    /// Advance every state in `states` over `symbol`, then ε-close the
    /// result. Returns the empty set if no state has a matching
    /// transition.
    #[must_use]
    pub fn advance(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        let mut result = StateSet::new();

        for &state in states {
            if let Some(targets) = self.transitions.get(&(state, Label::Symbol(symbol))) {
                result.extend(targets);
            }
        }

        self.epsilon_closure(&result)
    }

    /// The highest-priority token among the accepting members of
    /// `states`, or `None` if no member is accepting with an assigned
    /// token. Ties in priority resolve to the smallest id.
    #[must_use]
    pub fn accept_token(&self, states: &StateSet) -> Option<Token> {
        states
            .iter()
            .filter_map(|state| self.accept_states.get(state).copied().flatten())
            .min()
    }
}
