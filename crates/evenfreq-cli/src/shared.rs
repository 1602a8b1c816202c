use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Read the first line of `input` (a path, or `-` for stdin) with its line
/// terminator removed. An empty stream yields an empty string.
pub fn read_candidate(input: &str) -> CliResult<String> {
    let line: Result<String> = if input == "-" {
        first_line(io::stdin().lock()).context("Failed to read stdin")
    } else {
        File::open(input)
            .with_context(|| format!("Failed to open file '{}'", input))
            .and_then(|file| {
                first_line(BufReader::new(file))
                    .with_context(|| format!("Failed to read file '{}'", input))
            })
    };
    let line = line.map_err(|e| CliError::runtime(format!("{e:#}")))?;

    debug!(source = input, len = line.len(), "Read candidate line");
    Ok(line)
}

fn first_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(strip_line_terminator(&line).to_string())
}

fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}
