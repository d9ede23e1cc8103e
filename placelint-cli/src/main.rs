use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod exit_codes;
mod output;
mod validate;

pub use args::*;

#[derive(Debug, Parser)]
#[command(
    name = "placelint",
    version,
    about = "Validate a place directory before it is published"
)]
struct Cli {
    /// Place directory document (TOML, JSON or YAML)
    #[arg(env = "PLACELINT_DATA", default_value = "data.toml")]
    path: PathBuf,
    /// Overrides the format inferred from the file extension
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() {
    // stdout carries results, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "placelint=warn,placelint_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let exit_code = validate::validate_cmd(&cli.path, cli.input_format, cli.output);
    std::process::exit(exit_code);
}
