//! Normalization of raw strings into canonical comparison keys.
//!
//! Names and addresses compare case- and whitespace-insensitively; phone
//! numbers compare by their ASCII digits only.

/// Normalize a name or address.
///
/// Collapses every run of whitespace into a single space, lowercases,
/// and trims both ends.
///
/// # Example
/// ```
/// use contact_types::normalize_text;
///
/// assert_eq!(normalize_text("  KEVIN "), "kevin");
/// assert_eq!(normalize_text("123\tMain\n\nSt"), "123 main st");
/// ```
pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize a phone number to its ASCII digits.
///
/// Every non-digit is dropped, so formatting such as `(555) 010-2000`,
/// `555.010.2000` and `5550102000` all share a key.
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .trim()
        .to_string()
}

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
