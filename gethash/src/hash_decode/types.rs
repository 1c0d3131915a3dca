// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type definitions for hash decoding.

use super::HashDecodeError;
use clap::ValueEnum;

/// What to do with a line whose payload could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OnLineError {
    /// Emit the line exactly as it was typed.
    #[default]
    PassThrough,
    /// Replace the payload with `!<error-code>`.
    Mark,
    /// Leave the line out of the rendered output.
    Skip,
}

/// How to treat the last character group of a line when it has fewer than 4 symbols.
///
/// This also picks how control bytes `0x11..=0x1F` are read, which only matters for the
/// second pass over bytes that the first pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrailingGroup {
    /// Only emit the bytes that the available symbols fully determine. Every byte is
    /// read as `(byte - 32) mod 64`.
    #[default]
    Truncate,
    /// Treat the missing symbols as zero and build all 3 bytes. Control bytes
    /// `0x11..=0x1F` are read as 0. This gives the same bytes as the web decoder, see
    /// [`crate::hash_decode::web_six_bit_value`].
    ZeroFill,
}

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub on_line_error: OnLineError,
    pub trailing_group: TrailingGroup,
}

/// The result of decoding one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// 1 based.
    pub line_number: usize,
    pub input: String,
    /// `None` when the line was skipped.
    pub output: Option<String>,
    /// The digit string spliced into the line, or why that failed.
    pub outcome: Result<String, HashDecodeError>,
}

impl LineReport {
    #[must_use]
    pub fn is_failure(&self) -> bool { self.outcome.is_err() }
}

/// The result of decoding a whole input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeReport {
    pub lines: Vec<LineReport>,
}

impl DecodeReport {
    /// The text to display: every emitted output line joined with `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .filter_map(|it| it.output.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lines that could not be decoded.
    pub fn failures(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|it| it.is_failure())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool { self.failures().next().is_none() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(line_number: usize, output: Option<&str>, ok: bool) -> LineReport {
        LineReport {
            line_number,
            input: String::new(),
            output: output.map(String::from),
            outcome: if ok {
                Ok(String::new())
            } else {
                Err(HashDecodeError::MissingDelimiter)
            },
        }
    }

    #[test]
    fn test_options_default() {
        let options = DecodeOptions::default();
        assert_eq!(options.on_line_error, OnLineError::PassThrough);
        assert_eq!(options.trailing_group, TrailingGroup::Truncate);
    }

    #[test]
    fn test_render_skips_missing_output() {
        let report = DecodeReport {
            lines: vec![
                line(1, Some("a|1"), true),
                line(2, None, false),
                line(3, Some(""), true),
            ],
        };
        assert_eq!(report.render(), "a|1\n");
        assert_eq!(report.failures().count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = DecodeReport::default();
        assert_eq!(report.render(), "");
        assert!(report.is_clean());
    }
}
