// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Six bit charset decoding, in the style of uuencode.
//!
//! The encoder packs every 3 bytes into 4 symbols of 6 bits each, and writes each
//! symbol as the character `symbol + 32`. A leading marker character (uuencode uses it
//! for the line length) comes first and carries no data.
//!
//! ```text
//! byte:    |   b0 (8)    |   b1 (8)    |   b2 (8)    |
//! symbol:  |  s0 (6) |  s1 (6) |  s2 (6) |  s3 (6)   |
//! ```
//!
//! Decoding puts the bits back together:
//! - `b0` = all 6 bits of `s0` + top 2 bits of `s1`
//! - `b1` = bottom 4 bits of `s1` + top 4 bits of `s2`
//! - `b2` = bottom 2 bits of `s2` + all 6 bits of `s3`
//!
//! Zero bytes that come out of this are padding, and they are dropped.

use super::{TrailingGroup, bit_field::get_bits};

/// Width of one symbol.
pub const SYMBOL_BITS: u32 = 6;
/// Symbols per character group.
pub const GROUP_LEN: usize = 4;
/// Offset added to a symbol to turn it into a printable character.
pub const SYMBOL_OFFSET: u8 = 32;

/// Six bit value of an encoded character: `(byte - 32) mod 64`.
///
/// The reduction is Euclidean, so bytes below 32 land in `32..=63` (eg `\n` is 42).
/// The backtick, which uuencode writes for a zero symbol, is 0 just like space.
#[must_use]
pub fn six_bit_value(byte: u8) -> u8 { byte.wrapping_sub(SYMBOL_OFFSET) & 0x3F }

/// Six bit value of an encoded character as the web decoder computes it.
///
/// It renders `(byte - 32) % 64` as a zero padded binary string and parses that back.
/// For bytes `0x11..=0x1F` the remainder is `-15..=-1`, padding puts zeros in front of
/// the minus sign, and parsing stops at the sign, so these bytes are 0. Every other
/// byte has the same value as [`six_bit_value`].
#[must_use]
pub fn web_six_bit_value(byte: u8) -> u8 {
    match byte {
        0x11..=0x1F => 0,
        _ => six_bit_value(byte),
    }
}

/// Decode one line of six bit charset text.
///
/// The first byte is the marker and is skipped. The rest is consumed in groups of 4.
/// See [`TrailingGroup`] for what happens when the last group is short, and for how
/// control bytes are read.
///
/// # Example
///
/// ```
/// use r3bl_gethash::hash_decode::{TrailingGroup, decode_uu_charset};
///
/// assert_eq!(decode_uu_charset(b"#0V%T", TrailingGroup::Truncate), b"Cat");
/// ```
#[must_use]
pub fn decode_uu_charset(input: &[u8], trailing: TrailingGroup) -> Vec<u8> {
    let Some(body) = input.get(1..) else {
        return Vec::new();
    };

    let symbol_value: fn(u8) -> u8 = match trailing {
        TrailingGroup::Truncate => six_bit_value,
        TrailingGroup::ZeroFill => web_six_bit_value,
    };

    let mut output = Vec::with_capacity(body.len() / GROUP_LEN * 3 + 3);
    for group in body.chunks(GROUP_LEN) {
        let available = group.len();
        let mut symbols = [0_u64; GROUP_LEN];
        for (slot, &byte) in symbols.iter_mut().zip(group) {
            *slot = u64::from(symbol_value(byte));
        }

        let bytes = decode_group(symbols);
        let keep = match trailing {
            TrailingGroup::Truncate => available - 1,
            TrailingGroup::ZeroFill => bytes.len(),
        };
        output.extend_from_slice(&bytes[..keep]);
    }

    output.retain(|&byte| byte != 0);
    output
}

/// Decode twice: the output of the first pass is the input of the second.
#[must_use]
pub fn decode_uu_charset_twice(input: &[u8], trailing: TrailingGroup) -> Vec<u8> {
    let first_pass = decode_uu_charset(input, trailing);
    decode_uu_charset(&first_pass, trailing)
}

/// Rebuild 3 bytes from 4 six bit symbols.
#[allow(clippy::cast_possible_truncation)]
fn decode_group(symbols: [u64; GROUP_LEN]) -> [u8; 3] {
    let [s0, s1, s2, s3] = symbols;
    // Each byte is two slices of 6 bit values whose widths add up to 8.
    let join = |high: u64, low: u64, low_width: u32| ((high << low_width) | low) as u8;
    [
        join(get_bits(s0, 0, 6, SYMBOL_BITS), get_bits(s1, 0, 2, SYMBOL_BITS), 2),
        join(get_bits(s1, 2, 6, SYMBOL_BITS), get_bits(s2, 0, 4, SYMBOL_BITS), 4),
        join(get_bits(s2, 4, 6, SYMBOL_BITS), get_bits(s3, 0, 6, SYMBOL_BITS), 6),
    ]
}
