//! CLI tool to convert binary strings to decimal.
//!
//! Usage:
//!   bin2dec 101 1111
//!   bin2dec -f inputs.txt
//!   printf '101\n102\n' | bin2dec
//!
//! Each input is run through the same click cycle as the web widget and the
//! rendered text is printed on its own line.

use bin2dec::{Button, DisplayState, Label, TextField, Widget, render, trim_input};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process;
use tracing::{debug, info};

/// Convert binary strings to decimal.
///
/// Reads inputs from the arguments, from a file, or from stdin (one per line).
#[derive(Parser)]
#[command(name = "bin2dec")]
struct Cli {
    /// Binary strings to convert
    inputs: Vec<String>,

    /// Read inputs from a file, one per line ("-" for stdin)
    #[arg(short, long, conflicts_with = "inputs")]
    file: Option<String>,

    /// Print only the decimal value instead of "Decimal Value: <n>"
    #[arg(short, long)]
    quiet: bool,

    /// Log each conversion on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bin2dec=debug" } else { "bin2dec=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inputs: Vec<String> = if !cli.inputs.is_empty() {
        cli.inputs.clone()
    } else {
        let path = cli.file.as_deref().unwrap_or("-");
        match read_source(path) {
            Ok(text) => text
                .lines()
                .filter(|line| !trim_input(line).is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                eprintln!("Error reading input file '{path}': {e}");
                process::exit(1);
            }
        }
    };

    let mut widget = Widget::new(TextField::default(), Button::default(), Label::default());
    let mut invalid = 0usize;
    let mut stdout = io::stdout().lock();

    for input in &inputs {
        widget.input_mut().set_value(input.as_str());
        widget.on_input();
        let state = widget.on_click();

        let line = match state {
            DisplayState::Value(value) if cli.quiet => value.to_string(),
            DisplayState::Invalid(_) => {
                invalid += 1;
                widget.display().text().to_string()
            }
            _ => widget.display().text().to_string(),
        };
        debug!(input = input.as_str(), output = render(&state).as_str(), "converted");

        if let Err(e) = writeln!(stdout, "{line}") {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }

    info!(total = inputs.len(), invalid, "done");

    if invalid > 0 {
        process::exit(1);
    }
}
