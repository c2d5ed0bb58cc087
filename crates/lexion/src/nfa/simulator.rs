//! Longest-match simulation directly over an [`Nfa`].
//!
//! Determinised machines are what production lexers run; this simulator
//! exists so the two can be checked against each other — subset
//! construction must preserve both the accepted language and the chosen
//! tokens.

use super::{Nfa, StateSet, Token};

/// The simulation result: the matched token (if any) and the length of
/// the longest accepted prefix.
pub type Match = (Option<Token>, usize);

/// Run the NFA over `input` and return the longest match.
///
/// The active state-set starts as the ε-closure of the initial state; a
/// zero-length match is reported when that closure already accepts. The
/// scan stops as soon as the state-set dies, and the result never
/// extends past the last accepting position.
#[must_use]
pub fn run(nfa: &Nfa, input: &[u8]) -> Match {
    let mut states = nfa.epsilon_closure(&StateSet::from([nfa.init_state()]));

    let mut result = (nfa.accept_token(&states), 0);

    for (index, &symbol) in input.iter().enumerate() {
        if states.is_empty() {
            break;
        }

        states = nfa.advance(&states, symbol);

        if let Some(token) = nfa.accept_token(&states) {
            result = (Some(token), index + 1);
        }
    }

    result
}
