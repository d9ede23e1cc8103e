use clap::Args;
use placelint_core::DocumentFormat;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print nothing; report through the exit code only
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Auto,
    Toml,
    Json,
    Yaml,
}

impl From<InputFormat> for DocumentFormat {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Auto => DocumentFormat::Auto,
            InputFormat::Toml => DocumentFormat::Toml,
            InputFormat::Json => DocumentFormat::Json,
            InputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}
