// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

use super::LineReport;

pub const ERROR_PREFIX: &str = "Error";
pub const STDIN_NAME: &str = "<stdin>";
pub const COPIED_TO_CLIPBOARD: &str = "Decoded output copied to clipboard.";
pub const STRICT_MODE_FAILED: &str =
    "Some lines could not be decoded. Run with --verbose to see which.";

/// Format the failure of one line, eg `hashes.txt:3: Line has no `|` delimiter`.
#[must_use]
pub fn format_line_failure(source: &str, report: &LineReport) -> String {
    match &report.outcome {
        Ok(_) => format!("{source}:{}: ok", report.line_number),
        Err(error) => format!("{source}:{}: {error}", report.line_number),
    }
}

/// Format summary message.
#[must_use]
pub fn format_summary(source: &str, total: usize, failed: usize) -> String {
    format!("{source}: decoded {total} lines, {failed} failed")
}

/// Format an error message for an input that couldn't be read at all.
#[must_use]
pub fn format_read_error(source: &str, error: &str) -> String {
    format!("{ERROR_PREFIX} reading {source}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_decode::HashDecodeError;

    #[test]
    fn test_format_line_failure() {
        let report = LineReport {
            line_number: 3,
            input: "plain".into(),
            output: Some("plain".into()),
            outcome: Err(HashDecodeError::MissingDelimiter),
        };
        let msg = format_line_failure("hashes.txt", &report);
        assert!(msg.starts_with("hashes.txt:3:"));
        assert!(msg.contains("delimiter"));
    }

    #[test]
    fn test_format_summary() {
        let msg = format_summary(STDIN_NAME, 10, 2);
        assert!(msg.contains("<stdin>"));
        assert!(msg.contains("10 lines"));
        assert!(msg.contains("2 failed"));
    }

    #[test]
    fn test_format_read_error() {
        let msg = format_read_error("missing.txt", "No such file");
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("No such file"));
    }
}
