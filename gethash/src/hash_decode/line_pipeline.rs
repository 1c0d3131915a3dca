// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Orchestrate decoding of `prefix|payload` lines.
//!
//! For every line:
//! 1. Take the payload, which is the text between the first and second `|`.
//! 2. Base64 decode it.
//! 3. Six bit charset decode it, twice.
//! 4. Pull the digit runs out of the result and concatenate them.
//! 5. Put that digit string where the payload was.
//!
//! A line that fails is handled by [`OnLineError`] and never stops the other lines from
//! being decoded. All of this is a pure function of the input text, so it can be driven
//! by anything: a file, stdin, a test.

use super::{DecodeOptions, DecodeReport, HashDecodeError, LineReport, OnLineError,
            decode_uu_charset_twice, extract_numbers, join_numbers};
use base64::{Engine, alphabet,
             engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig}};

pub const FIELD_DELIMITER: char = '|';
pub const LINE_DELIMITER: char = '\n';
/// Prefix of the payload replacement when failures are marked inline.
pub const ERROR_MARKER: &str = "!";
const PADDING: char = '=';

/// Padding is optional and non-zero trailing bits are ignored. Whitespace is removed and
/// padded lengths are checked in [`decode_base64_payload`], which together accept what a
/// browser's `atob` accepts.
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode every line of `input`.
///
/// Lines are split on `\n` and a trailing newline yields a trailing empty line, so
/// `render()` of the report has as many lines as the input (unless lines are skipped).
///
/// # Example
///
/// ```
/// use r3bl_gethash::hash_decode::{DecodeOptions, decode_text};
///
/// let report = decode_text("id|JShCVEMqIiAg\nno delimiter", &DecodeOptions::default());
/// assert_eq!(report.render(), "id|42\nno delimiter");
/// ```
#[must_use]
pub fn decode_text(input: &str, options: &DecodeOptions) -> DecodeReport {
    let mut decoder = LineDecoder::new(*options);
    let lines = input
        .split(LINE_DELIMITER)
        .map(|line| decoder.decode_next(line))
        .collect();
    DecodeReport { lines }
}

/// Find the payload of a line: the segment after the first `|`, up to the next `|`.
#[must_use]
pub fn extract_field(line: &str) -> Option<&str> { line.split(FIELD_DELIMITER).nth(1) }

/// Decode the payload of one line into its digit string.
///
/// An empty digit string is a success: the decoded text simply had no digits in it.
/// An empty line is left alone, it is what a trailing newline leaves behind.
///
/// # Errors
///
/// - [`HashDecodeError::MissingDelimiter`] if the line has no `|`.
/// - [`HashDecodeError::InvalidBase64`] if the payload isn't base64.
/// - [`HashDecodeError::DigitRunOutOfRange`] if a number doesn't fit a [u64].
pub fn decode_line(line: &str, options: &DecodeOptions) -> Result<String, HashDecodeError> {
    if line.is_empty() {
        return Ok(String::new());
    }
    let field = extract_field(line).ok_or(HashDecodeError::MissingDelimiter)?;
    decode_field(field, options)
}

/// Base64 decode a payload the way `atob` does. Padding is optional, but when it is
/// there it has to make the length a multiple of 4.
fn decode_base64_payload(field: &str) -> Result<Vec<u8>, HashDecodeError> {
    let invalid = |reason: String| HashDecodeError::InvalidBase64 {
        field: field.to_string(),
        reason,
    };

    let compact: String = field.chars().filter(|it| !it.is_ascii_whitespace()).collect();
    if compact.ends_with(PADDING) && compact.len() % 4 != 0 {
        return Err(invalid(format!(
            "Padded payload length {} is not a multiple of 4.",
            compact.len()
        )));
    }

    FORGIVING_BASE64
        .decode(compact.as_bytes())
        .map_err(|error| invalid(error.to_string()))
}

fn decode_field(field: &str, options: &DecodeOptions) -> Result<String, HashDecodeError> {
    let payload = decode_base64_payload(field)?;
    let decoded = decode_uu_charset_twice(&payload, options.trailing_group);

    // Every byte is a code point of its own, as with `atob`.
    let text: String = decoded.iter().copied().map(char::from).collect();
    let numbers = extract_numbers(&text)?;
    if numbers.is_empty() {
        // % is Display, ? is Debug.
        tracing::debug!(message = "No digits in decoded payload", field = %field, decoded = ?text);
    }

    Ok(join_numbers(&numbers))
}

/// Decodes lines one at a time, numbering them as it goes. Use this when lines arrive
/// incrementally, eg when following stdin. Feeding it every line of a text gives the
/// same result as [`decode_text`].
#[derive(Debug)]
pub struct LineDecoder {
    options: DecodeOptions,
    lines_seen: usize,
}

impl LineDecoder {
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            lines_seen: 0,
        }
    }

    /// Decode the next line.
    pub fn decode_next(&mut self, line: &str) -> LineReport {
        self.lines_seen += 1;
        let line_number = self.lines_seen;
        let outcome = decode_line(line, &self.options);

        let output = match &outcome {
            Ok(digits) => {
                let output = match extract_field(line) {
                    Some(field) => line.replacen(field, digits, 1),
                    None => line.to_string(),
                };
                tracing::debug!(message = "Decoded line", line_number, output = %output);
                Some(output)
            }
            Err(error) => {
                tracing::warn!(
                    message = "Could not decode line",
                    line_number,
                    error = %error,
                    policy = ?self.options.on_line_error
                );
                render_failed_line(line, error, self.options.on_line_error)
            }
        };

        LineReport {
            line_number,
            input: line.to_string(),
            output,
            outcome,
        }
    }
}

fn render_failed_line(
    line: &str,
    error: &HashDecodeError,
    policy: OnLineError,
) -> Option<String> {
    match policy {
        OnLineError::PassThrough => Some(line.to_string()),
        OnLineError::Skip => None,
        OnLineError::Mark => {
            let marker = format!("{ERROR_MARKER}{}", error.code());
            Some(match extract_field(line) {
                Some(field) => line.replacen(field, &marker, 1),
                None => format!("{line}{FIELD_DELIMITER}{marker}"),
            })
        }
    }
}
