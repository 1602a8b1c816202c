use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod check_cmd;
mod cli;
mod error;
mod explain_cmd;
mod shared;

use check_cmd::run_check;
use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use explain_cmd::run_explain;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Check(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_check(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Explain(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_explain(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
