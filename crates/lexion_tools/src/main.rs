//! Lexion Tools CLI
//!
//! Renders the built-in demo patterns as Graphviz DOT documents.

use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use lexion::lexer::subset_construction;
use lexion::regex::Regex;
use lexion_tools::cli::{Cli, Commands, Pattern, Stage};
use lexion_tools::{demos, dot};

fn demo_pattern(pattern: Pattern) -> Arc<Regex> {
    match pattern {
        Pattern::Identifier => demos::identifier(),
        Pattern::IntegerLiteral => demos::integer_literal(),
        Pattern::StringLiteral => demos::string_literal(),
        Pattern::FixedPointLiteral => demos::fixed_point_literal(),
        Pattern::FloatingPointLiteral => demos::floating_point_literal(),
        Pattern::SingleLineComment => demos::single_line_comment(),
        Pattern::MultiLineComment => demos::multi_line_comment(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Viz {
            pattern,
            stage,
            output,
        } => {
            let regex = demo_pattern(pattern);

            let mut builder = regex.to_nfa();
            builder.set_accept_token(lexion::nfa::Token::new(0, 0));
            let nfa = builder.build();

            let rendered = match stage {
                Stage::Nfa => dot::nfa_to_dot(&nfa),
                Stage::Dfa => dot::dfa_to_dot(&subset_construction(&nfa)),
            };

            match output {
                Some(path) => dot::to_file(&rendered, Path::new(&path))?,
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
