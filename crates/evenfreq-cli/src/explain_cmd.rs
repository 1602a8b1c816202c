use std::process::ExitCode;

use evenfreq_core::{Evaluation, evaluate};

use crate::cli::ExplainArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_candidate;

pub fn run_explain(args: ExplainArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let candidate = read_candidate(&args.input)?;
    let evaluation = evaluate(&candidate)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&evaluation)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&evaluation)),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn render_text(evaluation: &Evaluation) -> String {
    let frequencies = evaluation
        .frequencies
        .iter()
        .map(|entry| format!("{}={}", entry.ch, entry.count))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("Input length: {}\n", evaluation.input_len));
    out.push_str(&format!("Frequencies: {}\n", frequencies));
    if let Some(target) = evaluation.target {
        out.push_str(&format!(
            "Match target: {} (count {})\n",
            target.ch, target.count
        ));
    }
    out.push_str(&format!("Removals: {}\n", evaluation.removals));
    out.push_str(&format!("Verdict: {}\n", evaluation.verdict));
    out
}
