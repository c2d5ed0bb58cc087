//! The demo patterns rendered by `lexion-viz`: the token shapes of a
//! small IDL-flavoured language.

use std::sync::Arc;

use lexion::regex::{any_of, choice, concat, kleene, optional, plus, text, Regex};
use lexion::symbol::SymbolSet;

/// `[_A-Za-z][_A-Za-z0-9]*`
#[must_use]
pub fn identifier() -> Arc<Regex> {
    concat([
        any_of(SymbolSet::alpha() + b'_'),
        kleene(any_of(SymbolSet::alphanum() + b'_')),
    ])
}

/// `[0-9]+`
#[must_use]
pub fn integer_literal() -> Arc<Regex> {
    plus(any_of(SymbolSet::digits()))
}

/// A double-quoted run of printable characters.
#[must_use]
pub fn string_literal() -> Arc<Regex> {
    concat([
        text("\""),
        kleene(any_of(SymbolSet::printable())),
        text("\""),
    ])
}

/// `[0-9]+ "." [0-9]+`
#[must_use]
pub fn fixed_point_literal() -> Arc<Regex> {
    concat([
        plus(any_of(SymbolSet::digits())),
        text("."),
        plus(any_of(SymbolSet::digits())),
    ])
}

/// `[+-]? ([0-9]+ "." [0-9]* | "." [0-9]+ | [0-9]+) ([eE][+-]?[0-9]+)?`
/// with the exponent mandatory in the integer-only form.
#[must_use]
pub fn floating_point_literal() -> Arc<Regex> {
    let digit = any_of(SymbolSet::digits());
    let sign = choice([text("+"), text("-")]);
    let exponent = concat([
        choice([text("e"), text("E")]),
        optional(sign.clone()),
        plus(digit.clone()),
    ]);

    let leading_digits = concat([
        plus(digit.clone()),
        text("."),
        kleene(digit.clone()),
        optional(exponent.clone()),
    ]);
    let leading_decimal = concat([text("."), plus(digit.clone()), optional(exponent.clone())]);
    let forced_exponent = concat([plus(digit), exponent]);

    concat([
        optional(sign),
        choice([leading_digits, leading_decimal, forced_exponent]),
    ])
}

/// `"//"` followed by anything but a newline.
#[must_use]
pub fn single_line_comment() -> Arc<Regex> {
    concat([
        text("//"),
        kleene(any_of(
            SymbolSet::printable() + SymbolSet::escape() - SymbolSet::newline(),
        )),
    ])
}

/// `"/*"` ... `"*/"`, greedy.
#[must_use]
pub fn multi_line_comment() -> Arc<Regex> {
    concat([
        text("/*"),
        kleene(any_of(SymbolSet::printable() + SymbolSet::escape())),
        text("*/"),
    ])
}
