// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_gethash::{common::{InputSource, MirroredOutput, SystemClipboard, copy_to_clipboard,
                            decode_stream, log_support::try_initialize_logging_global},
                   hash_decode::{CLIArg, COPIED_TO_CLIPBOARD, DecodeReport, LineDecoder,
                                 STRICT_MODE_FAILED, decode_text, format_line_failure,
                                 format_read_error, format_summary}};
use std::process;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:?}");
            process::exit(1);
        }
    }
}

/// Returns `false` when the run should exit with a failure status.
fn run() -> miette::Result<bool> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(cli_arg.to_tracing_config())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let options = cli_arg.to_decode_options();
    let mut output = MirroredOutput::new(std::io::stdout());
    let mut total_failed = 0;
    let mut unreadable = 0;

    for source in InputSource::from_paths(&cli_arg.paths) {
        let name = source.name().into_owned();

        let report = if cli_arg.follow && source == InputSource::Stdin {
            let mut decoder = LineDecoder::new(options);
            let report = decode_stream(std::io::stdin().lock(), &mut output, &mut decoder)?;
            output.end_source()?;
            report
        } else {
            let text = match source.read_text() {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{}", format_read_error(&name, &format!("{e:?}")));
                    unreadable += 1;
                    continue;
                }
            };
            let report = decode_text(&text, &options);
            output.write_rendered(&report.render())?;
            report
        };

        let rendered = report.render();
        // % is Display, ? is Debug.
        tracing::info!(message = "Decoded output", source = %name, output = %rendered);

        total_failed += report_failures(&name, &report, cli_arg.verbose);
    }

    if cli_arg.copy {
        copy_to_clipboard(&output.written_text(), &mut SystemClipboard)?;
        eprintln!("{COPIED_TO_CLIPBOARD}");
    }

    tracing::debug!(message = "Stop logging...");

    if unreadable > 0 {
        return Ok(false);
    }
    if cli_arg.strict && total_failed > 0 {
        eprintln!("{STRICT_MODE_FAILED}");
        return Ok(false);
    }
    Ok(true)
}

fn report_failures(name: &str, report: &DecodeReport, verbose: bool) -> usize {
    let failed = report.failures().count();
    if verbose {
        for line in report.failures() {
            eprintln!("{}", format_line_failure(name, line));
        }
        eprintln!("{}", format_summary(name, report.lines.len(), failed));
    }
    failed
}
