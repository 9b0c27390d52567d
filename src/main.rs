use clap::{Parser as ClapParser, Subcommand};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use sift_lang::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - match nodes of a JSON document by key, value, or type")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a filter over a JSON document and print the matching nodes
    Check {
        /// The filter to run
        filter: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the tokens of a filter
    Tokens {
        filter: String,
    },

    /// Print the parsed tree of a filter
    Ast {
        filter: String,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sift docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Stdout carries the JSON output, so logs go to stderr.
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Check {
            filter,
            input,
            pretty,
            syntax_only,
        } => run_check(filter, input, pretty, syntax_only),
        Commands::Tokens { filter } => cli::render_tokens(&filter).map(|s| println!("{}", s)),
        Commands::Ast { filter } => cli::render_ast(&filter).map(|s| println!("{}", s)),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|s| print!("{}", s)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    filter: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        filter,
        input,
        syntax_only,
    };

    let result = cli::execute_check(&options)?;
    match &result {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Matches(matches) => {
            info!("{} matching nodes", matches.len());
            let json = result.to_json();
            let text = if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            }?;
            println!("{}", text);
        }
    }
    Ok(())
}
