//! Random room name generation

use rand::Rng;

use crate::error::{DailyError, Result};

/// Longest prefix accepted for generated room names.
pub const MAX_PREFIX_LEN: usize = 10;

/// Default length of the random part of a generated room name.
pub const DEFAULT_SUFFIX_LEN: usize = 20;

/// Characters allowed in generated room names (URL-safe).
const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Generate a random suffix of `len` URL-safe characters.
///
/// Drawn from the thread-local CSPRNG.
pub fn generate_suffix(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Build `prefix` + a random suffix, rejecting prefixes over [`MAX_PREFIX_LEN`] characters.
pub fn generate_name_with_prefix(prefix: &str, suffix_len: usize) -> Result<String> {
    if prefix.chars().count() > MAX_PREFIX_LEN {
        return Err(DailyError::PrefixTooLong {
            prefix: prefix.to_string(),
            max: MAX_PREFIX_LEN,
        });
    }

    Ok(format!("{}{}", prefix, generate_suffix(suffix_len)))
}
