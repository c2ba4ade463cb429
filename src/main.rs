use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;
use snakecheck::{analyze, report, Outcome};
use std::fs;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of input source file
    file: PathBuf,

    /// Do not print the lexemes and tokens table
    #[arg(long)]
    no_tokens: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    tracing::info!("read {} bytes from {}", text.len(), cli.file.display());

    let analysis = analyze(&text);

    if !cli.no_tokens {
        println!("\n{}", "--- Lexemes and Tokens Table ---".bold());
        println!("{}", report::token_table(&analysis.tokens));
    }

    if analysis.outcome() == Outcome::LexicalErrors {
        analysis.diagnostics.print_all();
        println!(
            "\n{}",
            "Lexical errors found. Cannot proceed parsing.".red()
        );
        std::process::exit(1);
    }

    println!("\n{}", "--- Symbol Table ---".bold());
    println!("{}", report::symbol_table(&analysis.symbols));

    match analysis.outcome() {
        Outcome::Clean => {
            println!(
                "\n{}",
                "Parsing completed successfully with no errors!".green()
            );
            Ok(())
        }
        _ => {
            analysis.diagnostics.print_all();
            println!("\n{}", "Parsing completed with errors.".red());
            std::process::exit(1);
        }
    }
}
