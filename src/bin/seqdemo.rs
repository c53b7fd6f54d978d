//! Runner for every sequence demo.
//!
//! Run with: cargo run --bin seqdemo -- run equal-range

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use sequence_demos::{DemoConfig, DemoKind, Outcome, Runner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqdemo", about = "Run sequence algorithm demos")]
struct Cli {
    /// TOML file overriding the demo inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the shuffle and random generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Log each demo to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available demos
    List,
    /// Run one demo
    Run { demo: DemoKind },
    /// Run every demo in order
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading demo inputs from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn print_outcome(kind: DemoKind, outcome: &Outcome, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("{}", outcome),
        Format::Json => {
            let json = serde_json::json!({ "demo": kind, "outcome": outcome });
            println!("{}", serde_json::to_string(&json)?);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::List => {
            for kind in DemoKind::ALL {
                println!("{:<26} {}", kind.name().bold(), kind.description());
            }
        }
        Command::Run { demo } => {
            let demo = *demo;
            let mut runner = Runner::new(load_config(&cli)?)?;
            let outcome = runner
                .run(demo)
                .with_context(|| format!("demo '{}' failed", demo))?;
            print_outcome(demo, &outcome, cli.format)?;
        }
        Command::All => {
            let mut runner = Runner::new(load_config(&cli)?)?;
            let mut failed = 0;
            for (kind, result) in runner.run_all() {
                if cli.format == Format::Text {
                    println!("{}", format!("== {} ==", kind).cyan().bold());
                }
                match result {
                    Ok(outcome) => print_outcome(kind, &outcome, cli.format)?,
                    Err(e) => {
                        failed += 1;
                        eprintln!("{} {}: {}", "error:".red().bold(), kind, e);
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} demos failed", failed, DemoKind::ALL.len());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
