use super::{AcceptStates, Dfa, Token, Transitions};
use crate::nfa::StateId;
use crate::symbol::Symbol;

/// Mutable construction API for [`Dfa`] values.
///
/// A thin, monotonic counterpart to the NFA builder: state 0 is the
/// initial state, ids are allocated densely, and adding a transition for
/// an existing `(state, symbol)` key overwrites the previous target.
#[derive(Debug, Clone)]
pub struct Builder {
    init_state: StateId,
    next_state: StateId,
    transitions: Transitions,
    accept_states: AcceptStates,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Create a builder holding only its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            init_state: 0,
            next_state: 1,
            transitions: Transitions::default(),
            accept_states: AcceptStates::default(),
        }
    }

    /// The initial state.
    #[must_use]
    pub const fn init_state(&self) -> StateId {
        self.init_state
    }

    /// Allocate a fresh state id.
    pub fn next_state(&mut self) -> StateId {
        let state = self.next_state;
        self.next_state += 1;
        state
    }

    /// Add a transition, replacing any previous target for the same
    /// `(from, symbol)` key.
    pub fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) -> &mut Self {
        self.transitions.insert((from, symbol), to);
        self
    }

    /// Mark `state` accepting with the given token. The first assignment
    /// for a state wins; subset construction assigns each state at most
    /// once.
    pub fn add_accept_state(&mut self, state: StateId, token: Token) -> &mut Self {
        self.accept_states.entry(state).or_insert(token);
        self
    }

    /// Snapshot the machine as an immutable [`Dfa`].
    #[must_use]
    pub fn build(&self) -> Dfa {
        Dfa::new(
            self.init_state,
            self.transitions.clone(),
            self.accept_states.clone(),
        )
    }
}
