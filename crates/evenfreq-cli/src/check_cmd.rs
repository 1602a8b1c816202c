use std::process::ExitCode;

use evenfreq_core::{Verdict, is_almost_valid};
use serde::Serialize;
use tracing::debug;

use crate::cli::CheckArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_candidate;

#[derive(Debug, Serialize)]
struct CheckOutput {
    verdict: Verdict,
}

pub fn run_check(args: CheckArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let candidate = read_candidate(&args.input)?;
    let verdict = is_almost_valid(&candidate)?;
    debug!(%verdict, "Decided");

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&CheckOutput { verdict })
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", verdict);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
