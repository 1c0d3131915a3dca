// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pull the numbers out of decoded text.

use super::HashDecodeError;
use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of ASCII digits. Everything else is a separator.
static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

/// All digit runs in `text`, in order, as integers. Leading zeros vanish (`"007"` is 7).
/// No digits gives an empty [Vec].
///
/// # Errors
///
/// Returns [`HashDecodeError::DigitRunOutOfRange`] if a run is too big for a [u64].
///
/// # Example
///
/// ```
/// use r3bl_gethash::hash_decode::extract_numbers;
///
/// assert_eq!(extract_numbers("a12b345c").unwrap(), vec![12, 345]);
/// assert!(extract_numbers("abc").unwrap().is_empty());
/// ```
pub fn extract_numbers(text: &str) -> Result<Vec<u64>, HashDecodeError> {
    DIGIT_RUN_REGEX
        .find_iter(text)
        .map(|run| {
            run.as_str()
                .parse::<u64>()
                .map_err(|_| HashDecodeError::DigitRunOutOfRange {
                    run: run.as_str().to_string(),
                })
        })
        .collect()
}

/// Concatenate the decimal forms of `numbers`. They are not summed.
#[must_use]
pub fn join_numbers(numbers: &[u64]) -> String {
    numbers.iter().map(u64::to_string).collect()
}
