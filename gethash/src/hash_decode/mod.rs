// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode `prefix|payload` hash lines.
//!
//! The payload is base64, and inside that it is packed twice with a six bit charset in
//! the style of uuencode. Once unpacked, the digits in it are what the line is really
//! carrying, and they replace the payload in the output.
//!
//! The building blocks are usable on their own:
//! - [`extract_bits`] - bit ranges of a fixed width integer.
//! - [`decode_uu_charset`] - one pass of the six bit charset decoder.
//! - [`extract_numbers`] - digit runs of decoded text.
//! - [`decode_text`] - the whole thing, for many lines.

pub mod bit_field;
pub mod cli_arg;
pub mod error;
pub mod line_pipeline;
pub mod numeric_extractor;
pub mod types;
pub mod ui_str;
pub mod uu_charset;

// Re-export public API for flat module interface (like cmdr/).
pub use bit_field::*;
pub use cli_arg::*;
pub use error::*;
pub use line_pipeline::*;
pub use numeric_extractor::*;
pub use types::*;
pub use ui_str::*;
pub use uu_charset::*;
