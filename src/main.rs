mod error;
mod filter;
mod input;
mod models;
mod output;
mod rules;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analysis result JSON to filter
    #[arg(default_value = "paritytech/polkadot-sdk/All-Targets.json")]
    input: PathBuf,

    /// Rule file, one path token per line
    #[arg(short = 'r', long, default_value = "filter_out.txt")]
    rules: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "filtered_output.json")]
    output: PathBuf,

    /// List compiled rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Verbose
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let rules = rules::compile_rules(&args.rules)?;

    println!("Loaded regex filters:");
    for rule in &rules {
        println!("  - {}", rule.as_str());
    }

    if args.list_rules {
        return Ok(());
    }

    if args.verbose > 0 {
        eprintln!("Filtering {}", args.input.display());
    }

    let mut document = input::load_document(&args.input)?;
    filter::apply_filter(&mut document, &rules);
    output::write_document(&document, &args.output)?;

    if args.verbose > 0 {
        eprintln!("Wrote {}", args.output.display());
    }

    Ok(())
}
