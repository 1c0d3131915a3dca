// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pull a contiguous run of bits out of a fixed width integer.
//!
//! Bits are numbered from the most significant end of the declared width. So for a
//! 6 bit value `0b10_1101`, the range `[0, 2)` is `0b10` and the range `[2, 6)` is
//! `0b1101`. The result is always right aligned.

use super::HashDecodeError;

/// Width used when the caller doesn't declare one.
pub const DEFAULT_BIT_LENGTH: u32 = 64;

/// Extract bits `[start, end)` of `value`, where `value` is treated as a `length` bit
/// integer.
///
/// The mask is `2^(end - start) - 1` and it is shifted left by
/// `length - (end - start) - start` before being applied. Any bits of `value` above
/// position `length` are expected to be zero.
///
/// # Errors
///
/// Returns [`HashDecodeError::InvalidRange`] unless `start < end <= length <= 64`.
///
/// # Example
///
/// ```
/// use r3bl_gethash::hash_decode::extract_bits;
///
/// assert_eq!(extract_bits(0b10_1101, 0, 2, 6).unwrap(), 0b10);
/// assert_eq!(extract_bits(0b10_1101, 2, 6, 6).unwrap(), 0b1101);
/// assert!(extract_bits(0b10_1101, 4, 7, 6).is_err());
/// ```
pub fn extract_bits(
    value: u64,
    start: u32,
    end: u32,
    length: u32,
) -> Result<u64, HashDecodeError> {
    if start >= end || end > length || length > DEFAULT_BIT_LENGTH {
        return Err(HashDecodeError::InvalidRange { start, end, length });
    }
    Ok(get_bits(value, start, end, length))
}

/// Same as [`extract_bits`] with a [`DEFAULT_BIT_LENGTH`] wide value.
///
/// # Errors
///
/// Returns [`HashDecodeError::InvalidRange`] unless `start < end <= 64`.
pub fn extract_bits_default(
    value: u64,
    start: u32,
    end: u32,
) -> Result<u64, HashDecodeError> {
    extract_bits(value, start, end, DEFAULT_BIT_LENGTH)
}

/// Unchecked core. Callers guarantee `start < end <= length <= 64`.
pub(crate) fn get_bits(value: u64, start: u32, end: u32, length: u32) -> u64 {
    let width = end - start;
    let mask = if width == DEFAULT_BIT_LENGTH {
        u64::MAX
    } else {
        (1_u64 << width) - 1
    };
    let shift = length - width - start;
    (value & (mask << shift)) >> shift
}
