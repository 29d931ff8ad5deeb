//!
//! Parses and validates a qk source file.
//!
//! Usage: `qk_check <file.qk> [--ast] [--json]`

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use quokka_qk::{check_file, render, Analysis, Diagnostic, Node, Report};

#[derive(Parser, Debug)]
#[command(name = "qk_check")]
#[command(about = "Parse and validate a qk source file")]
struct Args {
    /// Path to the .qk source file
    file: PathBuf,

    /// Print the parse tree
    #[arg(long)]
    ast: bool,

    /// Emit diagnostics and counters as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    quokka_tools::init_logging();

    let args = Args::parse();

    info!("Checking {}", args.file.display());

    let analysis = match check_file(&args.file) {
        Ok(analysis) => analysis,
        Err(check_error) => {
            error!("{check_error}");
            process::exit(1);
        }
    };

    if args.json {
        print_json(&analysis, args.ast);
    } else {
        print_text(&analysis, args.ast);
    }

    if !analysis.is_clean() {
        process::exit(1);
    }
}

/// Parse errors go to stderr as they would stream from a compiler; the
/// tree and the validation report go to stdout.
fn print_text(analysis: &Analysis, show_ast: bool) {
    for diagnostic in &analysis.parse_diagnostics {
        eprintln!("{diagnostic}");
    }
    if analysis.parse_error_count() > 0 {
        eprintln!("Parsing failed with {} errors", analysis.parse_error_count());
    }

    if show_ast {
        println!("Abstract");
        print!("{}", render(&analysis.program));
    }

    println!("\n Validation ");
    if analysis.report.passed() {
        println!("✓ Validation passed");
    } else {
        println!("\n=== Validation Errors ===");
        for diagnostic in analysis.report.diagnostics() {
            println!("{diagnostic}");
        }
        println!("Total errors: {}", analysis.report.error_count());
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    parse_errors: usize,
    diagnostics: Vec<&'a Diagnostic>,
    validation: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    ast: Option<&'a Node>,
}

fn print_json(analysis: &Analysis, show_ast: bool) {
    let output = JsonOutput {
        parse_errors: analysis.parse_error_count(),
        diagnostics: analysis.diagnostics().collect(),
        validation: &analysis.report,
        ast: show_ast.then_some(&analysis.program),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(json_error) => {
            error!("could not serialize diagnostics: {json_error}");
            process::exit(1);
        }
    }
}
