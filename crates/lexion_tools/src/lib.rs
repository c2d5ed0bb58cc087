//! # Lexion Tools
//!
//! Companion utilities for [`lexion`]: Graphviz DOT rendering of NFAs
//! and DFAs, plus the `lexion-viz` CLI for rendering the built-in demo
//! patterns.

pub mod cli;
pub mod demos;
pub mod dot;
