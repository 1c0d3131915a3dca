// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the text to decode comes from: files, or stdin.

use crate::hash_decode::{DecodeReport, LINE_DELIMITER, LineDecoder, STDIN_NAME};
use miette::{Context, IntoDiagnostic};
use std::{borrow::Cow,
          io::{BufRead, Read, Write},
          path::{Path, PathBuf}};

/// Path that stands for stdin on the command line.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// One source per path, in order. No paths means stdin.
    #[must_use]
    pub fn from_paths(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }
        paths
            .iter()
            .map(|path| {
                if path == Path::new(STDIN_PATH) {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }

    /// Name to use in messages.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            InputSource::Stdin => Cow::Borrowed(STDIN_NAME),
            InputSource::File(path) => path.to_string_lossy(),
        }
    }

    /// Read the whole source. Bytes that aren't UTF-8 become `U+FFFD`; they can't be
    /// part of a base64 payload anyway.
    ///
    /// # Errors
    ///
    /// Returns an error if the source can't be read.
    pub fn read_text(&self) -> miette::Result<String> {
        let bytes = match self {
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .into_diagnostic()
                    .wrap_err("Failed to read stdin")?;
                bytes
            }
            InputSource::File(path) => std::fs::read(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read file {}", path.display()))?,
        };
        Ok(into_text(bytes))
    }
}

fn into_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(message = "Input is not valid UTF-8, decoding it lossily");
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    }
}

/// Decode lines as they arrive on `reader`, writing each result to `writer` right away.
///
/// The bytes written are the same as `decode_text(whole_input).render()`: output lines
/// are separated by `\n` and a trailing newline in the input gives one in the output.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Lines that fail to decode are not
/// errors, they are in the returned report.
pub fn decode_stream(
    mut reader: impl BufRead,
    mut writer: impl Write,
    decoder: &mut LineDecoder,
) -> miette::Result<DecodeReport> {
    let mut report = DecodeReport::default();
    let mut buffer = Vec::new();
    let mut wrote_any_line = false;

    loop {
        buffer.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buffer)
            .into_diagnostic()
            .wrap_err("Failed to read input")?;
        let ends_with_newline = buffer.last() == Some(&b'\n');
        if ends_with_newline {
            buffer.pop();
        }

        let line = into_text(std::mem::take(&mut buffer));
        let line_report = decoder.decode_next(&line);
        if let Some(output) = &line_report.output {
            if wrote_any_line {
                write!(writer, "{LINE_DELIMITER}").into_diagnostic()?;
            }
            writer.write_all(output.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
            wrote_any_line = true;
        }
        report.lines.push(line_report);

        // The last segment has no newline after it, and it may be empty.
        if bytes_read == 0 || !ends_with_newline {
            break;
        }
    }

    Ok(report)
}
