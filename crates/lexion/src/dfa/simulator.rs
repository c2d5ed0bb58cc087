//! Longest-match simulation over a [`Dfa`].

use super::{Dfa, Token};

/// The simulation result: the matched token (if any) and the length of
/// the longest accepted prefix.
pub type Match = (Option<Token>, usize);

/// Run the DFA over `input` and return the longest match.
///
/// The machine starts in the initial state; if that state accepts, a
/// zero-length match is on the table from the outset. Each input byte
/// advances the machine once, and every accepting state visited moves
/// the recorded match end past that byte. A missing transition kills the
/// machine: no further input is consumed and the last recorded match
/// stands. When no accepting state was ever visited the result is
/// `(None, 0)`, regardless of how many bytes were consumed before the
/// machine died.
#[must_use]
pub fn run(dfa: &Dfa, input: &[u8]) -> Match {
    let mut state = Some(dfa.init_state());

    let mut result = (dfa.accept_token(dfa.init_state()), 0);

    for (index, &symbol) in input.iter().enumerate() {
        let Some(current) = state else { break };

        state = dfa.advance(current, symbol);

        if let Some(next) = state {
            if let Some(token) = dfa.accept_token(next) {
                result = (Some(token), index + 1);
            }
        }
    }

    result
}
