use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use monoinfer::driver::{Options, run_program};
use monoinfer::programs::{self, PROGRAMS, Program};

/// Infer monomorphic types for tiny lambda programs and run them
#[derive(Parser, Debug)]
#[command(name = "monoinfer", version, about, long_about = None)]
struct Args {
    /// Check and run this source file instead of the built-in examples
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// List the built-in example programs
    #[arg(long)]
    list: bool,

    /// Run only the built-in example with this key
    #[arg(long, value_name = "NAME", conflicts_with = "file")]
    example: Option<String>,

    /// Only infer types, skip evaluation
    #[arg(long)]
    no_eval: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}

fn run_examples(selected: &[Program], options: Options) {
    for program in selected {
        match run_program(program.title, program.source, options) {
            Ok(report) => println!("{}", report),
            Err(err) => println!("Running \"{}\":\nParse failed with: {}\n", program.title, err),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = Options {
        evaluate: !args.no_eval,
    };

    if args.list {
        for program in PROGRAMS {
            println!("{:<14} {}", program.key, program.title);
        }
        return Ok(());
    }

    if let Some(path) = &args.file {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let name = path.display().to_string();
        let report = run_program(&name, &source, options)
            .with_context(|| format!("Failed to parse: {}", path.display()))?;
        println!("{}", report);
        return Ok(());
    }

    match &args.example {
        Some(key) => match programs::find(key) {
            Some(program) => run_examples(std::slice::from_ref(program), options),
            None => bail!("no example named '{}', see --list", key),
        },
        None => run_examples(PROGRAMS, options),
    }

    Ok(())
}
