use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stars_hh::{ConverterConfig, HandConverter};

const ABOUT: &str = r#"Rewrite a PokerStars play money hand history export with chip counts shown as dollars.

Converted hands are written to stdout. Hands that cannot be parsed are
reported on stderr, followed by a "<n> hands, <m> errors" summary."#;

#[derive(Debug, Parser)]
#[clap(version, about = ABOUT)]
struct Options {
    /// The hand history export to convert.
    #[clap(value_name = "FILE")]
    in_file: Option<PathBuf>,

    /// Print verbose logs.
    #[clap(short, long)]
    verbose: bool,

    /// Marker written in front of every converted amount.
    #[clap(long, value_name = "SYMBOL", default_value = "$")]
    currency_symbol: String,

    /// Currency code written after the stakes in each hand header.
    #[clap(long, value_name = "CODE", default_value = "USD")]
    currency_code: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(opts: Options) -> Result<()> {
    let Some(in_file) = opts.in_file else {
        let prog = env::args().next().unwrap_or_else(|| "stars-hh".to_string());
        eprintln!("{prog} <filename>");
        return Ok(());
    };

    let config = ConverterConfig::new().with_currency(opts.currency_symbol, opts.currency_code);
    let converter = HandConverter::new(config)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = converter
        .convert_file(&in_file, &mut stdout.lock(), &mut stderr.lock())
        .with_context(|| format!("failed to convert {}", in_file.display()))?;

    writeln!(io::stderr(), "{summary}")?;
    Ok(())
}

fn main() -> ExitCode {
    let opts = Options::parse();
    init_tracing(opts.verbose);

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
