//! Graphviz DOT rendering of lexion automata.
//!
//! One double-circle node per accept state, an invisible start node with
//! an edge to the initial state, one labelled edge per transition.
//! Output is fully sorted (accept states ascending; edges by source,
//! label, target) so renders are reproducible and exact-testable.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use lexion::dfa::Dfa;
use lexion::nfa::{Label, Nfa};
use lexion::symbol::Symbol;

/// Render an NFA as a DOT document.
///
/// Accept states are labelled `"<state> (<id>)"`, or `"<state> (n/a)"`
/// when no token has been assigned yet.
#[must_use]
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut output = String::new();

    writeln!(output, "digraph NFA {{").unwrap();
    writeln!(output, "    rankdir=LR;").unwrap();
    writeln!(output, "    node [shape = circle];").unwrap();

    let mut accept_states: Vec<_> = nfa.accept_states().iter().collect();
    accept_states.sort_by_key(|(&state, _)| state);

    for (&state, &token) in accept_states {
        let id = token.map_or_else(|| "n/a".to_string(), |token| token.id().to_string());
        writeln!(
            output,
            "    {state} [shape = doublecircle, label=\"{state} ({id})\"];"
        )
        .unwrap();
    }

    writeln!(output, "    __start__ [shape = none, label=\"\"];").unwrap();
    writeln!(output, "    __start__ -> {};", nfa.init_state()).unwrap();

    let mut edges: Vec<(usize, Label, usize)> = Vec::new();
    for (&(from, label), targets) in nfa.transitions() {
        for &to in targets {
            edges.push((from, label, to));
        }
    }
    edges.sort_by_key(|&(from, label, to)| (from, label.symbol().map(u16::from), to));

    for (from, label, to) in edges {
        writeln!(
            output,
            "    {from} -> {to} [label = {}];",
            nfa_edge_label(label)
        )
        .unwrap();
    }

    writeln!(output, "}}").unwrap();

    output
}

/// Render a DFA as a DOT document.
///
/// Accept states are labelled `"<state> (<id>)"`.
#[must_use]
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut output = String::new();

    writeln!(output, "digraph DFA {{").unwrap();
    writeln!(output, "    rankdir=LR;").unwrap();
    writeln!(output, "    node [shape = circle];").unwrap();

    let mut accept_states: Vec<_> = dfa.accept_states().iter().collect();
    accept_states.sort_by_key(|(&state, _)| state);

    for (&state, token) in accept_states {
        writeln!(
            output,
            "    {state} [shape = doublecircle, label=\"{state} ({})\"];",
            token.id()
        )
        .unwrap();
    }

    writeln!(output, "    __start__ [shape = none, label=\"\"];").unwrap();
    writeln!(output, "    __start__ -> {};", dfa.init_state()).unwrap();

    let mut edges: Vec<(usize, Symbol, usize)> = dfa
        .transitions()
        .iter()
        .map(|(&(from, symbol), &to)| (from, symbol, to))
        .collect();
    edges.sort_unstable();

    for (from, symbol, to) in edges {
        writeln!(
            output,
            "    {from} -> {to} [label = \"{}\"];",
            escape_symbol(symbol)
        )
        .unwrap();
    }

    writeln!(output, "}}").unwrap();

    output
}

/// Write a rendered DOT document to `path`, creating parent directories.
///
/// # Errors
///
/// Returns any I/O error from directory creation or the write itself.
pub fn to_file(dot: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, dot)
}

fn nfa_edge_label(label: Label) -> String {
    match label.symbol() {
        None => "\"\u{03B5}\"".to_string(),
        Some(symbol) => format!("\"{}\"", escape_symbol(symbol)),
    }
}

/// Escape a symbol for use inside a double-quoted DOT label. `"`, `\`,
/// newline and tab get their usual escapes; other non-printable bytes
/// render as `\xHH` with two uppercase hex digits.
fn escape_symbol(symbol: Symbol) -> String {
    match symbol {
        b'"' => "\\\"".to_string(),
        b'\\' => "\\\\".to_string(),
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        symbol if symbol.is_ascii_graphic() || symbol == b' ' => {
            char::from(symbol).to_string()
        }
        symbol => format!("\\x{symbol:02X}"),
    }
}
