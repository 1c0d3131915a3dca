// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-line failures of the decoder.
//!
//! None of these are fatal to a whole run. The line pipeline catches each one, applies
//! the configured [`crate::hash_decode::OnLineError`] policy, and moves on to the next
//! line.

/// Things that can go wrong while decoding a single `prefix|payload` line.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum HashDecodeError {
    #[error("🔢 Invalid bit range [{start}, {end}) for a {length} bit value")]
    #[diagnostic(
        code(gethash::invalid_range),
        help("The range must satisfy `start < end <= length <= 64`")
    )]
    InvalidRange { start: u32, end: u32, length: u32 },

    #[error("✂️ Line has no `|` delimiter")]
    #[diagnostic(
        code(gethash::missing_delimiter),
        help("Each line should look like `<prefix>|<base64 payload>`")
    )]
    MissingDelimiter,

    #[error("📦 Payload '{field}' is not valid base64: {reason}")]
    #[diagnostic(code(gethash::invalid_base64))]
    InvalidBase64 { field: String, reason: String },

    #[error("🔟 Digit run '{run}' does not fit in a 64 bit integer")]
    #[diagnostic(code(gethash::digit_run_out_of_range))]
    DigitRunOutOfRange { run: String },
}

impl HashDecodeError {
    /// Short kebab-case tag, used when a failure is marked inline in the output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            HashDecodeError::InvalidRange { .. } => "invalid-range",
            HashDecodeError::MissingDelimiter => "missing-delimiter",
            HashDecodeError::InvalidBase64 { .. } => "invalid-base64",
            HashDecodeError::DigitRunOutOfRange { .. } => "digit-run-out-of-range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(HashDecodeError::MissingDelimiter, "missing-delimiter" ; "missing delimiter")]
    #[test_case(
        HashDecodeError::InvalidBase64 { field: "@@".into(), reason: "bad".into() },
        "invalid-base64" ; "invalid base64"
    )]
    #[test_case(
        HashDecodeError::InvalidRange { start: 3, end: 2, length: 6 },
        "invalid-range" ; "invalid range"
    )]
    #[test_case(
        HashDecodeError::DigitRunOutOfRange { run: "9".repeat(30) },
        "digit-run-out-of-range" ; "digit run out of range"
    )]
    fn test_error_code(error: HashDecodeError, expected: &str) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn test_error_message_mentions_field() {
        let error = HashDecodeError::InvalidBase64 {
            field: "not*base64".into(),
            reason: "Invalid symbol 42, offset 3.".into(),
        };
        let msg = error.to_string();
        assert!(msg.contains("not*base64"));
        assert!(msg.contains("offset 3"));
    }
}
