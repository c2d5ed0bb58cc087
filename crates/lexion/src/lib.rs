//! # Lexion
//!
//! A lexer construction toolkit: regular-expression combinators compiled
//! to non-deterministic automata by Thompson construction, determinised
//! by subset construction, and driven by a longest-match simulator.
//!
//! ## Overview
//!
//! The pipeline is layered; each layer depends only on the ones below:
//!
//! - [`symbol`] — single-byte symbols and [`SymbolSet`] character classes
//! - [`nfa`] — ε-transition automata and the fragment-composition builder
//! - [`regex`] — the combinator tree, compiled to NFA fragments
//! - [`dfa`] — deterministic automata and the longest-match simulator
//! - [`lexer`] — pattern registration, subset construction, [`Lexer`]
//! - [`tokenizer`] — a streaming token reader over a buffered input
//!
//! Patterns are built programmatically; there is no textual regex
//! syntax. The alphabet is single-byte symbols (conventionally
//! `0..=127`); Unicode-aware classes, backreferences and lookaround are
//! out of scope.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexion::{LexerBuilder, Tokenizer};
//! use lexion::regex::{any_of, concat, kleene, plus, text};
//! use lexion::symbol::SymbolSet;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     KwLet,
//!     Identifier,
//!     Integer,
//!     Whitespace,
//! }
//!
//! // 1. Describe each token as a regex. Lower priority values win when
//! //    two patterns match a prefix of the same length.
//! let identifier = concat([
//!     any_of(SymbolSet::alpha() + b'_'),
//!     kleene(any_of(SymbolSet::alphanum() + b'_')),
//! ]);
//!
//! let lexer = LexerBuilder::new()
//!     .token(&text("let"), Kind::KwLet, 1)
//!     .token(&identifier, Kind::Identifier, 4)
//!     .token(&plus(any_of(SymbolSet::digits())), Kind::Integer, 2)
//!     .token(&plus(any_of(SymbolSet::whitespace())), Kind::Whitespace, 0)
//!     .build();
//!
//! // 2. Longest-prefix matching, one call at a time...
//! assert_eq!(lexer.tokenize(b"let"), (Some(Kind::KwLet), 3));
//! assert_eq!(lexer.tokenize(b"letter"), (Some(Kind::Identifier), 6));
//!
//! // 3. ...or as a stream.
//! let tokens = Tokenizer::with_input(lexer, "let x 42");
//! let kinds: Vec<Kind> = tokens.map(|t| t.unwrap().kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         Kind::KwLet,
//!         Kind::Whitespace,
//!         Kind::Identifier,
//!         Kind::Whitespace,
//!         Kind::Integer,
//!     ]
//! );
//! ```

pub mod dfa;
pub mod error;
pub mod lexer;
pub mod nfa;
pub mod regex;
pub mod symbol;
pub mod tokenizer;

// Re-export commonly used types
pub use error::{LexError, LexErrorKind};
pub use lexer::{Lexer, LexerBuilder};
pub use regex::{Regex, RepeatKind};
pub use symbol::{Symbol, SymbolSet};
pub use tokenizer::Tokenizer;
