//! Short code generation.
//!
//! Provides cryptographically secure random code generation. Codes are
//! drawn from the URL-safe base64 alphabet (`A-Z a-z 0-9 - _`).

use base64::Engine as _;

/// Generates a random short code of exactly `length` characters.
///
/// Fills `length` bytes from the OS entropy source and encodes them as
/// URL-safe base64 without padding, truncated to `length`. The generator
/// is pure and stateless: uniqueness is enforced by the store's unique
/// constraint on the short-code column, and callers regenerate on
/// collision.
///
/// # Panics
///
/// Panics if `length` is zero or the system random number generator fails
/// (extremely rare).
///
/// # Examples
///
/// ```
/// use linksnip::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> String {
    assert!(length > 0, "short code length must be positive");

    // base64 yields 4 characters per 3 input bytes, so `length` bytes
    // always encode to at least `length` characters.
    let mut buffer = vec![0u8; length];
    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(length);
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [4, 6, 8, 12, 32] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..100 {
            let code = generate_code(6);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code(7);
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(6));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    #[should_panic(expected = "length must be positive")]
    fn test_generate_code_rejects_zero_length() {
        generate_code(0);
    }
}
