//! CLI interface for lexion-tools

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexion-viz")]
#[command(about = "Automaton visualization tool for lexion")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a built-in demo pattern as a Graphviz DOT document
    Viz {
        /// Demo pattern to render
        #[arg(short, long, value_enum)]
        pattern: Pattern,

        /// Automaton stage to render
        #[arg(short, long, value_enum, default_value_t = Stage::Nfa)]
        stage: Stage,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// The demo patterns shipped with the tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    Identifier,
    IntegerLiteral,
    StringLiteral,
    FixedPointLiteral,
    FloatingPointLiteral,
    SingleLineComment,
    MultiLineComment,
}

/// Which automaton to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    Nfa,
    Dfa,
}
