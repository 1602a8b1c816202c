use clap::{Parser, Subcommand};

/// Decide whether a string balances with at most one removal
#[derive(Parser, Debug)]
#[command(name = "evenfreq", version)]
#[command(about = "Decide whether a string balances with at most one removal")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print YES or NO for the first input line
    Check(CheckArgs),
    /// Show frequencies, match target and removal count for the first input line
    Explain(ExplainArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ExplainArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
