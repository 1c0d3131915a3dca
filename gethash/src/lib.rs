// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL gethash
//!
//! Decode hash lines of the form `<prefix>|<payload>` back into `<prefix>|<digits>`.
//!
//! The payload is base64. Inside it is text packed twice with a six bit charset, the
//! same packing uuencode uses: every 3 bytes become 4 characters in the range
//! `' '..='_'`, behind a one character marker. Unpacking twice yields text with the
//! identifier's digits embedded in it, and those digits replace the payload.
//!
//! ## Usage Examples
//!
//! **Decode a file**:
//! ```bash
//! gethash hashes.txt
//! ```
//!
//! **Decode what is pasted into stdin, line by line**:
//! ```bash
//! gethash --follow
//! ```
//!
//! **Mark lines that can't be decoded, and copy the result to the clipboard**:
//! ```bash
//! gethash --on-error mark --copy hashes.txt
//! ```
//!
//! **Fail (exit code 1) if any line is bad, and say which**:
//! ```bash
//! gethash --strict --verbose hashes.txt
//! ```
//!
//! ## Library
//!
//! ```
//! use r3bl_gethash::hash_decode::{DecodeOptions, decode_text};
//!
//! let report = decode_text("user|JShCVEMqIiAg\n", &DecodeOptions::default());
//! assert_eq!(report.render(), "user|42\n");
//! assert!(report.is_clean());
//! ```
//!
//! ## Failures
//!
//! A line with no `|`, or a payload that isn't base64, never stops the other lines from
//! being decoded. By default such a line is passed through unchanged; see
//! [`hash_decode::OnLineError`] for the alternatives. A payload with no digits in it
//! decodes to the empty string.
//!
//! ### Architecture
//!
//! **Module structure:**
//! - `src/lib.rs` - Library root
//! - `src/bin/gethash.rs` - Binary entry point
//! - `src/hash_decode/` - Tool implementation
//!   - `bit_field.rs` - Bit ranges of fixed width integers
//!   - `uu_charset.rs` - Six bit charset decoder
//!   - `numeric_extractor.rs` - Digit runs of decoded text
//!   - `line_pipeline.rs` - Orchestrate decoding of lines
//!   - `types.rs` - Options and reports
//!   - `error.rs` - Per-line failures
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `ui_str.rs` - User-facing messages
//! - `src/common/` - Shared utilities
//!   - `log_support.rs` - Tracing setup
//!   - `clipboard_service.rs` - System clipboard
//!   - `input_source.rs` - Files, stdin, and line by line decoding
//!   - `mirrored_output.rs` - Displayed output, kept for the clipboard

// Attach all modules.
pub mod common;
pub mod hash_decode;

// Re-export commonly used items.
pub use common::*;
