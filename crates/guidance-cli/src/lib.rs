//! Command-line surface for the guidance tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use guidance_core::{
    AddOutcome, GuidanceError, Operations, Settings, DEFAULT_LANGUAGE, MANIFEST_FILE_NAME,
    OUTPUT_DIR_NAME,
};

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    let settings = match Settings::resolve(cli.bundle_dir) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return Ok(1);
        }
    };
    let ops = Operations::new(settings);

    match cli.command {
        Command::Init => handle_init(&ops),
        Command::Add(args) => handle_add(&ops, args),
    }
}

fn handle_init(ops: &Operations) -> Result<i32> {
    match ops.init() {
        Ok(outcome) => {
            println!(
                "Initialized {OUTPUT_DIR_NAME}: {} guides listed in {MANIFEST_FILE_NAME}",
                outcome.guide_count
            );
            Ok(0)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(1)
        }
    }
}

fn handle_add(ops: &Operations, args: AddArgs) -> Result<i32> {
    let AddArgs { query, lang } = args;

    if query.is_empty() {
        eprintln!("query must not be empty");
        return Ok(1);
    }

    match ops.add(&query, &lang) {
        Ok(AddOutcome::Copied { filename, language }) => {
            println!("Added {filename} ({language}) to {OUTPUT_DIR_NAME}");
            Ok(0)
        }
        Ok(AddOutcome::AlreadyExists { filename }) => {
            println!("{filename} already exists in {OUTPUT_DIR_NAME}; nothing to do");
            Ok(0)
        }
        Err(GuidanceError::Ambiguous { query, matches }) => {
            eprintln!("multiple guides match '{query}':");
            for name in &matches {
                eprintln!("  {name}");
            }
            eprintln!("narrow the query to select a single guide");
            Ok(1)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(1)
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Copy bundled guidance documents into a project",
    propagate_version = true
)]
struct Cli {
    /// Override the bundled guides directory
    #[arg(long = "bundle-dir", value_name = "PATH", global = true)]
    bundle_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the output directory and write the guide manifest
    Init,
    /// Copy the guide matching a filename prefix into the output directory
    Add(AddArgs),
}

#[derive(Args)]
struct AddArgs {
    /// Prefix of the guide filename to copy
    #[arg(value_name = "QUERY")]
    query: String,

    /// Language collection to search first
    #[arg(
        long = "lang",
        short = 'l',
        value_name = "CODE",
        default_value = DEFAULT_LANGUAGE
    )]
    lang: String,
}
