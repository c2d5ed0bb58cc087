//! # Streaming tokenizer
//!
//! [`Tokenizer`] turns a [`Lexer`] into a sequential token stream over a
//! buffered input: each call to [`next_token`](Tokenizer::next_token)
//! matches the longest prefix of the remaining input and advances past
//! it. Tokens come back in order with their lexemes and byte offsets;
//! input the lexer does not recognize surfaces as a [`LexError`] value
//! carrying the offending position.
//!
//! The tokenizer does no filtering of its own — whitespace and comments
//! are ordinary patterns, registered like any other, and skipped (or
//! not) by the caller.

use compact_str::CompactString;

use crate::error::{LexError, LexErrorKind};
use crate::lexer::Lexer;

/// A single token produced by a [`Tokenizer`]: the caller's kind, the
/// matched lexeme, and the byte offset of the lexeme in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    kind: K,
    text: CompactString,
    offset: usize,
}

impl<K: Copy> Token<K> {
    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> K {
        self.kind
    }

    /// The matched lexeme.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the lexeme in the tokenizer's input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// A sequential token stream over a buffered input string.
#[derive(Debug, Clone)]
pub struct Tokenizer<K> {
    lexer: Lexer<K>,
    input: String,
    offset: usize,
}

impl<K: Copy> Tokenizer<K> {
    /// Create a tokenizer with no input loaded.
    #[must_use]
    pub fn new(lexer: Lexer<K>) -> Self {
        Self {
            lexer,
            input: String::new(),
            offset: 0,
        }
    }

    /// Create a tokenizer over the given input.
    #[must_use]
    pub fn with_input(lexer: Lexer<K>, input: impl Into<String>) -> Self {
        Self {
            lexer,
            input: input.into(),
            offset: 0,
        }
    }

    /// Replace the input and rewind to its beginning.
    pub fn load(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.offset = 0;
    }

    /// Rewind to the beginning of the current input.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] when no registered pattern matches a
    /// non-empty prefix at the current position. The tokenizer does not
    /// advance past the error; recovery policy belongs to the caller.
    pub fn next_token(&mut self) -> Result<Option<Token<K>>, LexError> {
        if self.offset >= self.input.len() {
            return Ok(None);
        }

        let remaining = &self.input.as_bytes()[self.offset..];

        let (kind, consumed) = self.lexer.tokenize(remaining);

        let Some(kind) = kind else {
            return Err(self.unrecognized_character());
        };

        // A zero-length match cannot advance the stream; treat it the
        // same as no match.
        if consumed == 0 {
            return Err(self.unrecognized_character());
        }

        let token = Token {
            kind,
            text: CompactString::from(&self.input[self.offset..self.offset + consumed]),
            offset: self.offset,
        };

        self.offset += consumed;

        Ok(Some(token))
    }

    fn unrecognized_character(&self) -> LexError {
        let character = self.input[self.offset..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}');

        LexError {
            position: self.offset,
            kind: LexErrorKind::UnrecognizedCharacter(character),
        }
    }
}

impl<K: Copy> Iterator for Tokenizer<K> {
    type Item = Result<Token<K>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexerBuilder;
    use crate::regex::{any_of, choice, concat, kleene, optional, plus, text};
    use crate::symbol::SymbolSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Boolean,
        String,
        Identifier,
        IntegerLiteral,
        StringLiteral,
        FixedPointLiteral,
        FloatingPointLiteral,
        SingleLineComment,
        MultiLineComment,
        Whitespace,
        Newline,
    }

    fn build_lexer() -> Lexer<Kind> {
        let any_digit = any_of(SymbolSet::digits());
        let sign_part = choice([text("+"), text("-")]);
        let exponent_part = concat([
            choice([text("e"), text("E")]),
            optional(sign_part.clone()),
            plus(any_digit.clone()),
        ]);
        let floating_point = concat([
            optional(sign_part),
            choice([
                concat([
                    plus(any_digit.clone()),
                    text("."),
                    kleene(any_digit.clone()),
                    optional(exponent_part.clone()),
                ]),
                concat([
                    text("."),
                    plus(any_digit.clone()),
                    optional(exponent_part.clone()),
                ]),
                concat([plus(any_digit.clone()), exponent_part]),
            ]),
        ]);

        LexerBuilder::new()
            .token(&text("boolean"), Kind::Boolean, 1)
            .token(&text("string"), Kind::String, 1)
            .token(
                &concat([
                    any_of(SymbolSet::alpha() + b'_'),
                    kleene(any_of(SymbolSet::alphanum() + b'_')),
                ]),
                Kind::Identifier,
                4,
            )
            .token(&plus(any_digit.clone()), Kind::IntegerLiteral, 2)
            .token(
                &concat([
                    text("\""),
                    kleene(any_of(SymbolSet::printable())),
                    text("\""),
                ]),
                Kind::StringLiteral,
                2,
            )
            .token(
                &concat([plus(any_digit.clone()), text("."), plus(any_digit)]),
                Kind::FixedPointLiteral,
                2,
            )
            .token(&floating_point, Kind::FloatingPointLiteral, 3)
            .token(
                &concat([
                    text("//"),
                    kleene(any_of(
                        SymbolSet::printable() + SymbolSet::escape() - SymbolSet::newline(),
                    )),
                ]),
                Kind::SingleLineComment,
                0,
            )
            .token(
                &concat([
                    text("/*"),
                    kleene(any_of(SymbolSet::printable() + SymbolSet::escape())),
                    text("*/"),
                ]),
                Kind::MultiLineComment,
                0,
            )
            .token(&plus(any_of(SymbolSet::whitespace())), Kind::Whitespace, 0)
            .token(&plus(any_of(SymbolSet::newline())), Kind::Newline, 0)
            .build()
    }

    #[test]
    fn test_token_stream_sequence() {
        let input = "boolean x 1234 \"hello\" 3.14 // comment\nstring y 5.0e+1 /* block */";

        let mut tokenizer = Tokenizer::with_input(build_lexer(), input);

        let mut advance = |expect_kind: Kind, expect_text: &str| {
            let token = tokenizer
                .next_token()
                .expect("unexpected lexical error")
                .expect("unexpected end of input");
            assert_eq!(token.kind(), expect_kind);
            assert_eq!(token.text(), expect_text);
        };

        advance(Kind::Boolean, "boolean");
        advance(Kind::Whitespace, " ");
        advance(Kind::Identifier, "x");
        advance(Kind::Whitespace, " ");
        advance(Kind::IntegerLiteral, "1234");
        advance(Kind::Whitespace, " ");
        advance(Kind::StringLiteral, "\"hello\"");
        advance(Kind::Whitespace, " ");
        advance(Kind::FixedPointLiteral, "3.14");
        advance(Kind::Whitespace, " ");
        advance(Kind::SingleLineComment, "// comment");
        advance(Kind::Newline, "\n");
        advance(Kind::String, "string");
        advance(Kind::Whitespace, " ");
        advance(Kind::Identifier, "y");
        advance(Kind::Whitespace, " ");
        advance(Kind::FloatingPointLiteral, "5.0e+1");
        advance(Kind::Whitespace, " ");
        advance(Kind::MultiLineComment, "/* block */");
    }

    #[test]
    fn test_end_of_input_then_reset_replays() {
        let input = "x 1";
        let mut tokenizer = Tokenizer::with_input(build_lexer(), input);

        let mut drain = |tokenizer: &mut Tokenizer<Kind>| {
            let mut kinds = Vec::new();
            while let Some(token) = tokenizer.next_token().unwrap() {
                kinds.push(token.kind());
            }
            kinds
        };

        let first = drain(&mut tokenizer);
        assert_eq!(
            first,
            [Kind::Identifier, Kind::Whitespace, Kind::IntegerLiteral]
        );
        assert!(tokenizer.next_token().unwrap().is_none());

        tokenizer.reset();
        assert_eq!(drain(&mut tokenizer), first);

        tokenizer.load(input);
        assert_eq!(drain(&mut tokenizer), first);
    }

    #[test]
    fn test_token_offsets() {
        let mut tokenizer = Tokenizer::with_input(build_lexer(), "ab 12");

        assert_eq!(tokenizer.next_token().unwrap().unwrap().offset(), 0);
        assert_eq!(tokenizer.next_token().unwrap().unwrap().offset(), 2);
        assert_eq!(tokenizer.next_token().unwrap().unwrap().offset(), 3);
    }

    #[test]
    fn test_unrecognized_character() {
        let mut tokenizer = Tokenizer::with_input(build_lexer(), "$boolean");

        let error = tokenizer.next_token().unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.kind(), &LexErrorKind::UnrecognizedCharacter('$'));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_unrecognized_character_mid_stream() {
        let mut tokenizer = Tokenizer::with_input(build_lexer(), "ab $");

        assert!(tokenizer.next_token().unwrap().is_some());
        assert!(tokenizer.next_token().unwrap().is_some());

        let error = tokenizer.next_token().unwrap_err();
        assert_eq!(error.position(), 3);
    }

    #[test]
    fn test_iterator_interface() {
        let tokenizer = Tokenizer::with_input(build_lexer(), "x 1");

        let kinds: Vec<Kind> = tokenizer.map(|result| result.unwrap().kind()).collect();
        assert_eq!(
            kinds,
            [Kind::Identifier, Kind::Whitespace, Kind::IntegerLiteral]
        );
    }

    #[test]
    fn test_empty_input_is_end_of_stream() {
        let mut tokenizer = Tokenizer::new(build_lexer());
        assert!(tokenizer.next_token().unwrap().is_none());
    }
}
