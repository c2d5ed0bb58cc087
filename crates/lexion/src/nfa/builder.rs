use super::{AcceptStates, Label, Nfa, StateId, Token, Transitions};

/// Mutable construction API for [`Nfa`] values.
///
/// A builder is both a mutable sink for primitive insertions
/// ([`add_transition`](Self::add_transition) and friends) and a value in
/// an algebra of automaton fragments: [`offset`](Self::offset),
/// [`append`](Self::append) and [`merge`](Self::merge) leave their
/// operands untouched and return new builders, so fragments compose the
/// way the regex tree is shaped.
///
/// A fresh builder owns a single state: `init_state() == 0`,
/// with the id allocator positioned at 1.
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

    fn with_parts(
        init_state: StateId,
        next_state: StateId,
        transitions: Transitions,
        accept_states: AcceptStates,
    ) -> Self {
        Self {
            init_state,
            next_state,
            transitions,
            accept_states,
        }
    }

    /// The initial state of the fragment under construction.
    #[must_use]
    pub const fn init_state(&self) -> StateId {
        self.init_state
    }

    /// Allocate a fresh state id. Ids are dense and never reused.
    pub fn next_state(&mut self) -> StateId {
        let state = self.next_state;
        self.next_state += 1;
        state
    }

    /// The transitions accumulated so far.
    #[must_use]
    pub const fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// The accept states accumulated so far.
    #[must_use]
    pub const fn accept_states(&self) -> &AcceptStates {
        &self.accept_states
    }

    /// Add a transition. Adding the same transition twice is a no-op.
    pub fn add_transition(&mut self, from: StateId, label: Label, to: StateId) -> &mut Self {
        self.transitions.entry((from, label)).or_default().insert(to);
        self
    }

    /// Add an ε-transition. Adding the same transition twice is a no-op.
    pub fn add_epsilon_transition(&mut self, from: StateId, to: StateId) -> &mut Self {
        self.add_transition(from, Label::Epsilon, to)
    }

    /// Mark `state` accepting without assigning a token. An existing
    /// token assignment for `state` is left untouched.
    pub fn add_accept_state(&mut self, state: StateId) -> &mut Self {
        self.accept_states.entry(state).or_insert(None);
        self
    }

    /// Mark `state` accepting with the given token.
    pub fn add_accept_state_with_token(&mut self, state: StateId, token: Token) -> &mut Self {
        self.accept_states.entry(state).or_insert(Some(token));
        self
    }

    /// Assign `token` to every accept state, replacing any previous
    /// assignments. Called once per pattern at registration time.
    pub fn set_accept_token(&mut self, token: Token) -> &mut Self {
        for slot in self.accept_states.values_mut() {
            *slot = Some(token);
        }
        self
    }

    /// A copy of this fragment with every state id shifted by `offset`.
    /// Transitions and token assignments are translated verbatim.
    #[must_use]
    pub fn offset(&self, offset: StateId) -> Self {
        let transitions = self
            .transitions
            .iter()
            .map(|(&(from, label), targets)| {
                let shifted = targets.iter().map(|state| state + offset).collect();
                ((from + offset, label), shifted)
            })
            .collect();

        let accept_states = self
            .accept_states
            .iter()
            .map(|(&state, &token)| (state + offset, token))
            .collect();

        Self::with_parts(
            self.init_state + offset,
            self.next_state + offset,
            transitions,
            accept_states,
        )
    }

    /// Concatenation: a fragment matching `self` followed by `other`.
    ///
    /// `other` is renumbered past this fragment's id space, every accept
    /// state of `self` gains an ε-transition into `other`'s initial
    /// state, and only `other`'s accept states survive — this fragment's
    /// accept markers become bridges.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let shifted = other.offset(self.next_state);

        let mut nfa = Self::with_parts(
            self.init_state,
            shifted.next_state,
            self.transitions.clone(),
            self.accept_states.clone(),
        );

        for &state in self.accept_states.keys() {
            nfa.add_epsilon_transition(state, shifted.init_state);
        }

        nfa.transitions.extend(shifted.transitions);
        nfa.accept_states = shifted.accept_states;

        nfa
    }

    /// Alternation: a fragment matching either `self` or `other`.
    ///
    /// `other` is renumbered past this fragment's id space and reached by
    /// an ε-transition from this fragment's initial state; accept states
    /// of both operands survive.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let shifted = other.offset(self.next_state);

        let mut nfa = Self::with_parts(
            self.init_state,
            shifted.next_state,
            self.transitions.clone(),
            self.accept_states.clone(),
        );

        nfa.add_epsilon_transition(self.init_state, shifted.init_state);

        nfa.transitions.extend(shifted.transitions);

        // The offset makes the operands' id spaces disjoint; a collision
        // here means a combinator bug upstream.
        debug_assert!(
            shifted
                .accept_states
                .keys()
                .all(|state| !nfa.accept_states.contains_key(state)),
            "merge operands must have disjoint accept states"
        );
        nfa.accept_states.extend(shifted.accept_states);

        nfa
    }

    /// Snapshot the fragment as an immutable [`Nfa`].
    #[must_use]
    pub fn build(&self) -> Nfa {
        Nfa::new(
            self.init_state,
            self.transitions.clone(),
            self.accept_states.clone(),
        )
    }
}
