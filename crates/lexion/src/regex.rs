//! # Regex combinators
//!
//! A closed family of regular-expression nodes, built programmatically
//! with the helper constructors at the bottom of this module and compiled
//! to NFA fragments by [`Regex::to_nfa`]. There is no textual regex
//! syntax; a pattern is an [`Arc`]-shared tree, so common sub-patterns
//! can be reused without deep copies.
//!
//! ## Usage
//!
//! ```rust
//! use lexion::regex::{any_of, concat, kleene};
//! use lexion::symbol::SymbolSet;
//!
//! // [_A-Za-z][_A-Za-z0-9]*
//! let identifier = concat([
//!     any_of(SymbolSet::alpha() + b'_'),
//!     kleene(any_of(SymbolSet::alphanum() + b'_')),
//! ]);
//! let nfa = identifier.to_nfa().build();
//! assert!(!nfa.accept_states().is_empty());
//! ```

use std::sync::Arc;

use compact_str::CompactString;

use crate::nfa;
use crate::symbol::SymbolSet;

/// How a [`Regex::Repeat`] node repeats its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum RepeatKind {
    /// Zero or more occurrences (`*`).
    Kleene,
    /// One or more occurrences (`+`).
    Plus,
    /// Zero or one occurrence (`?`).
    Optional,
    /// Exactly `n` occurrences.
    Exact(usize),
    /// At least `n` occurrences.
    AtLeast(usize),
    /// Between `min` and `max` occurrences, inclusive.
    Range(usize, usize),
}

/// A node in a regular-expression tree.
#[derive(Debug, Clone)]
pub enum Regex {
    /// A fixed sequence of symbols. The empty string matches the empty
    /// prefix.
    Text(CompactString),
    /// Any single symbol from the set. The empty set matches nothing.
    AnyOf(SymbolSet),
    /// The children in sequence. Must be non-empty.
    Concat(Vec<Arc<Regex>>),
    /// Any one of the children. Must be non-empty.
    Choice(Vec<Arc<Regex>>),
    /// The child repeated per [`RepeatKind`].
    Repeat(Arc<Regex>, RepeatKind),
}

impl Regex {
    /// Compile this node to a fresh NFA fragment.
    ///
    /// The returned builder has unassigned accept states; callers brand
    /// them with [`nfa::Builder::set_accept_token`] before merging the
    /// fragment into a larger automaton.
    #[must_use]
    pub fn to_nfa(&self) -> nfa::Builder {
        match self {
            Self::Text(text) => Self::text_to_nfa(text.as_bytes()),
            Self::AnyOf(set) => Self::any_of_to_nfa(set),
            Self::Concat(children) => Self::concat_to_nfa(children),
            Self::Choice(children) => Self::choice_to_nfa(children),
            Self::Repeat(child, kind) => Self::repeat_to_nfa(child, *kind),
        }
    }

    /// A chain of one transition per symbol:
    ///
    /// `(q0) --s[0]--> (q1) --s[1]--> ... --s[n-1]--> ((qn))`
    ///
    /// Empty text leaves the initial state accepting.
    fn text_to_nfa(text: &[u8]) -> nfa::Builder {
        let mut builder = nfa::Builder::new();

        let mut state = builder.init_state();
        for &symbol in text {
            let next = builder.next_state();
            builder.add_transition(state, nfa::Label::Symbol(symbol), next);
            state = next;
        }

        builder.add_accept_state(state);

        builder
    }

    /// One transition per symbol in the set, fanning in to a shared
    /// accept state:
    ///
    /// ```text
    ///      / --s[0]--> \
    /// (q0) ---s[1]---> ((q1))
    ///      \ --s[n]--> /
    /// ```
    ///
    /// An empty set leaves `q1` unreachable and unmarked: the fragment
    /// matches nothing.
    fn any_of_to_nfa(set: &SymbolSet) -> nfa::Builder {
        let mut builder = nfa::Builder::new();

        let accept_state = builder.next_state();

        for symbol in set.iter() {
            builder.add_transition(builder.init_state(), nfa::Label::Symbol(symbol), accept_state);
        }

        if !set.is_empty() {
            builder.add_accept_state(accept_state);
        }

        builder
    }

    fn concat_to_nfa(children: &[Arc<Regex>]) -> nfa::Builder {
        let (first, rest) = children
            .split_first()
            .expect("Concat requires at least one child");

        let mut builder = first.to_nfa();
        for child in rest {
            builder = builder.append(&child.to_nfa());
        }

        builder
    }

    /// ε-fan-out from a fresh initial state into each alternative:
    ///
    /// ```text
    ///      / --ε--> (q1 ...)
    /// (q0) ---ε--> (q2 ...)
    ///      \ --ε--> (q3 ...)
    /// ```
    fn choice_to_nfa(children: &[Arc<Regex>]) -> nfa::Builder {
        assert!(!children.is_empty(), "Choice requires at least one child");

        let mut builder = nfa::Builder::new();
        for child in children {
            builder = builder.merge(&child.to_nfa());
        }

        builder
    }

    fn repeat_to_nfa(child: &Regex, kind: RepeatKind) -> nfa::Builder {
        match kind {
            RepeatKind::Kleene => Self::kleene_to_nfa(child),
            RepeatKind::Plus => Self::plus_to_nfa(child),
            RepeatKind::Optional => Self::optional_to_nfa(child),
            RepeatKind::Exact(count) => Self::exact_to_nfa(child, count),
            RepeatKind::AtLeast(min) => Self::at_least_to_nfa(child, min),
            RepeatKind::Range(min, max) => Self::range_to_nfa(child, min, max),
        }
    }

    /// Merge the child behind a fresh initial state, loop every accept
    /// state back to it with ε, and mark the initial state accepting:
    ///
    /// ```text
    ///        / <-------ε------- \
    ///       /                    \
    /// ((q0)) --ε--> ((child)) ---/
    /// ```
    fn kleene_to_nfa(child: &Regex) -> nfa::Builder {
        let mut builder = nfa::Builder::new().merge(&child.to_nfa());

        let accepts: Vec<_> = builder.accept_states().keys().copied().collect();
        for state in accepts {
            builder.add_epsilon_transition(state, builder.init_state());
        }

        builder.add_accept_state(builder.init_state());

        builder
    }

    /// Same loop as Kleene but the initial state stays non-accepting, so
    /// at least one occurrence is required.
    fn plus_to_nfa(child: &Regex) -> nfa::Builder {
        let mut builder = nfa::Builder::new().merge(&child.to_nfa());

        let accepts: Vec<_> = builder.accept_states().keys().copied().collect();
        for state in accepts {
            builder.add_epsilon_transition(state, builder.init_state());
        }

        builder
    }

    /// Merge the child behind a fresh accepting initial state; no loop.
    fn optional_to_nfa(child: &Regex) -> nfa::Builder {
        let mut builder = nfa::Builder::new().merge(&child.to_nfa());

        builder.add_accept_state(builder.init_state());

        builder
    }

    /// `count` copies of the child appended to an empty-accepting seed.
    /// `Exact(0)` is the seed itself: it accepts exactly the empty
    /// string.
    fn exact_to_nfa(child: &Regex, count: usize) -> nfa::Builder {
        let mut builder = nfa::Builder::new();
        builder.add_accept_state(builder.init_state());

        for _ in 0..count {
            builder = builder.append(&child.to_nfa());
        }

        builder
    }

    /// `min - 1` plain copies followed by one looped copy, so the final
    /// copy may repeat indefinitely:
    ///
    /// ```text
    ///                  / <----ε---- \
    ///                 /              \
    /// (q0) --ε--> ... ((child n)) ---/
    /// ```
    ///
    /// `AtLeast(0)` is Kleene; appending the looped copy to the seed
    /// would demand one occurrence and lose the empty match.
    fn at_least_to_nfa(child: &Regex, min: usize) -> nfa::Builder {
        if min == 0 {
            return Self::kleene_to_nfa(child);
        }

        let mut builder = nfa::Builder::new();
        builder.add_accept_state(builder.init_state());

        for _ in 1..min {
            builder = builder.append(&child.to_nfa());
        }

        let mut looped = child.to_nfa();
        let accepts: Vec<_> = looped.accept_states().keys().copied().collect();
        for state in accepts {
            looped.add_epsilon_transition(state, looped.init_state());
        }

        builder.append(&looped)
    }

    /// `min` mandatory copies, then `max - min` optional ones. Before
    /// each optional copy the current accept states are recorded as
    /// pending; after the last copy every pending state gains an
    /// ε-transition to every final accept state, short-circuiting the
    /// occurrences between `min` and `max`:
    ///
    /// ```text
    /// (q0) --ε--> ... (child n) --ε--> ... --ε--> ((child m))
    ///                          \          \                 /
    ///                           \          \ ------ε-----> /
    ///                            \ ------------ε--------> /
    /// ```
    fn range_to_nfa(child: &Regex, min: usize, max: usize) -> nfa::Builder {
        let mut builder = nfa::Builder::new();
        builder.add_accept_state(builder.init_state());

        for _ in 0..min {
            builder = builder.append(&child.to_nfa());
        }

        let mut pending = nfa::StateSet::new();
        for _ in min..max {
            pending.extend(builder.accept_states().keys());
            builder = builder.append(&child.to_nfa());
        }

        let accepts: Vec<_> = builder.accept_states().keys().copied().collect();
        for &pending_state in &pending {
            for &accept_state in &accepts {
                builder.add_epsilon_transition(pending_state, accept_state);
            }
        }

        builder
    }
}

/// A regex matching the given text. Empty text matches the empty prefix.
pub fn text(text: impl Into<CompactString>) -> Arc<Regex> {
    Arc::new(Regex::Text(text.into()))
}

/// A regex matching any single symbol from `set`.
#[must_use]
pub fn any_of(set: SymbolSet) -> Arc<Regex> {
    Arc::new(Regex::AnyOf(set))
}

/// A regex matching the children in sequence.
///
/// # Panics
///
/// Compiling the returned regex panics if `children` is empty.
pub fn concat(children: impl IntoIterator<Item = Arc<Regex>>) -> Arc<Regex> {
    Arc::new(Regex::Concat(children.into_iter().collect()))
}

/// A regex matching any one of the children.
pub fn choice(children: impl IntoIterator<Item = Arc<Regex>>) -> Arc<Regex> {
    Arc::new(Regex::Choice(children.into_iter().collect()))
}

/// Zero or more occurrences of `regex`.
#[must_use]
pub fn kleene(regex: Arc<Regex>) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::Kleene))
}

/// One or more occurrences of `regex`.
#[must_use]
pub fn plus(regex: Arc<Regex>) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::Plus))
}

/// Zero or one occurrence of `regex`.
#[must_use]
pub fn optional(regex: Arc<Regex>) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::Optional))
}

/// Exactly `count` occurrences of `regex`.
#[must_use]
pub fn exact(regex: Arc<Regex>, count: usize) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::Exact(count)))
}

/// At least `min` occurrences of `regex`.
#[must_use]
pub fn at_least(regex: Arc<Regex>, min: usize) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::AtLeast(min)))
}

/// Between `min` and `max` occurrences of `regex`, inclusive.
#[must_use]
pub fn repeat_range(regex: Arc<Regex>, min: usize, max: usize) -> Arc<Regex> {
    Arc::new(Regex::Repeat(regex, RepeatKind::Range(min, max)))
}
