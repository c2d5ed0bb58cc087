//! # Lexer façade
//!
//! The user-facing end of the pipeline. [`LexerBuilder`] registers
//! `(regex, kind, priority)` triples, accumulating one merged NFA in
//! which every pattern's accept states carry that pattern's token;
//! [`LexerBuilder::build`] determinises the result via subset
//! construction and wraps it in a [`Lexer`], whose
//! [`tokenize`](Lexer::tokenize) returns the longest-prefix match and
//! its kind.
//!
//! Priorities resolve conflicts between patterns that accept the same
//! prefix: the numerically smallest priority wins, and ties break in
//! favour of the earliest registration.
//!
//! ## Usage
//!
//! ```rust
//! use lexion::lexer::LexerBuilder;
//! use lexion::regex::{any_of, concat, kleene, text};
//! use lexion::symbol::SymbolSet;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     KwInt32,
//!     Identifier,
//! }
//!
//! let identifier = concat([
//!     any_of(SymbolSet::alpha() + b'_'),
//!     kleene(any_of(SymbolSet::alphanum() + b'_')),
//! ]);
//!
//! let lexer = LexerBuilder::new()
//!     .token(&text("int32"), Kind::KwInt32, 1)
//!     .token(&identifier, Kind::Identifier, 4)
//!     .build();
//!
//! assert_eq!(lexer.tokenize(b"int32"), (Some(Kind::KwInt32), 5));
//! assert_eq!(lexer.tokenize(b"int32x"), (Some(Kind::Identifier), 6));
//! ```

use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::dfa::{self, Dfa};
use crate::nfa::{self, Nfa, StateId, StateSet};
use crate::regex::Regex;
use crate::symbol::Symbol;

/// Registers token patterns and builds the deterministic [`Lexer`].
///
/// `K` is the caller's token kind. Kinds are stored in registration
/// order; the registration index doubles as the token id inside the
/// automata, so priority ties resolve to the earliest registration.
#[derive(Debug, Clone)]
pub struct LexerBuilder<K> {
    nfa: nfa::Builder,
    kinds: SmallVec<[K; 16]>,
}

impl<K: Copy> Default for LexerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> LexerBuilder<K> {
    /// Create a builder with no registered patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nfa: nfa::Builder::new(),
            kinds: SmallVec::new(),
        }
    }

    /// Register `regex` as the pattern for `kind` with the given
    /// priority (numerically smaller wins).
    #[must_use]
    pub fn token(mut self, regex: &Regex, kind: K, priority: usize) -> Self {
        let id = self.kinds.len();
        self.kinds.push(kind);

        let mut fragment = regex.to_nfa();
        fragment.set_accept_token(nfa::Token::new(id, priority));

        self.nfa = self.nfa.merge(&fragment);

        self
    }

    /// Snapshot the accumulated NFA.
    #[must_use]
    pub fn nfa(&self) -> Nfa {
        self.nfa.build()
    }

    /// Determinise the accumulated NFA.
    #[must_use]
    pub fn dfa(&self) -> Dfa {
        subset_construction(&self.nfa())
    }

    /// Build the lexer.
    #[must_use]
    pub fn build(self) -> Lexer<K> {
        let dfa = self.dfa();

        tracing::debug!(
            patterns = self.kinds.len(),
            dfa_states = dfa.transitions().len(),
            "built lexer"
        );

        Lexer {
            dfa,
            kinds: self.kinds,
        }
    }
}

/// A compiled lexer: a DFA plus the kind registry mapping token ids back
/// to the caller's kinds.
///
/// Immutable after construction; may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Lexer<K> {
    dfa: Dfa,
    kinds: SmallVec<[K; 16]>,
}

impl<K: Copy> Lexer<K> {
    /// Match the longest prefix of `input` against the registered
    /// patterns.
    ///
    /// Returns the winning kind and the match length. `(None, 0)` means
    /// no pattern matched any prefix; a `(Some(kind), 0)` result is a
    /// valid zero-length match from a pattern that accepts the empty
    /// string.
    #[must_use]
    pub fn tokenize(&self, input: &[u8]) -> (Option<K>, usize) {
        let (token, length) = dfa::simulator::run(&self.dfa, input);

        (token.map(|token| self.kinds[token.id()]), length)
    }

    /// The underlying DFA.
    #[must_use]
    pub const fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

/// Determinise `nfa` by subset construction.
///
/// Each DFA state corresponds to the set of NFA states reachable
/// together; accept states take the highest-priority token among their
/// members, keeping only its id. Outgoing symbols of each state-set are
/// visited in sorted order so state numbering is reproducible.
#[must_use]
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut dfa = dfa::Builder::new();

    // One-shot index: state -> outgoing non-ε symbols. Saves a scan of
    // the full transition map per dequeued state-set.
    let mut symbol_table: HashMap<StateId, BTreeSet<Symbol>, ahash::RandomState> =
        HashMap::default();
    for &(state, label) in nfa.transitions().keys() {
        if let Some(symbol) = label.symbol() {
            symbol_table.entry(state).or_default().insert(symbol);
        }
    }

    let initial = nfa.epsilon_closure(&StateSet::from([nfa.init_state()]));

    let mut state_map: HashMap<StateSet, StateId, ahash::RandomState> = HashMap::default();
    state_map.insert(initial.clone(), dfa.init_state());

    let mut queue = VecDeque::from([initial]);

    while let Some(states) = queue.pop_front() {
        let dfa_state = state_map[&states];

        if let Some(token) = nfa.accept_token(&states) {
            dfa.add_accept_state(dfa_state, dfa::Token::new(token.id()));
        }

        let mut symbols = BTreeSet::new();
        for state in &states {
            if let Some(outgoing) = symbol_table.get(state) {
                symbols.extend(outgoing);
            }
        }

        for &symbol in &symbols {
            let targets = nfa.advance(&states, symbol);
            debug_assert!(!targets.is_empty());

            let dfa_target = match state_map.get(&targets) {
                Some(&existing) => existing,
                None => {
                    let fresh = dfa.next_state();
                    state_map.insert(targets.clone(), fresh);
                    queue.push_back(targets);
                    fresh
                }
            };

            dfa.add_transition(dfa_state, symbol, dfa_target);
        }
    }

    tracing::trace!(dfa_states = state_map.len(), "subset construction done");

    dfa.build()
}
