use clap::Parser;
use std::path::PathBuf;

use crate::logging::LoggingMode;

#[derive(Parser, Debug)]
#[command(name = "bin2cpp", version)]
#[command(about = "Convert a binary file to a C++ array", long_about = None)]
pub struct Cli {
    /// Input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (overwritten)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Name of the generated array [default: data]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Compress the bytes with Brotli before rendering
    #[arg(short, long)]
    pub compress: bool,

    /// Print a JSON summary of the conversion
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = LoggingMode::Stderr,
        hide = true
    )]
    pub logging_mode: LoggingMode,
}
