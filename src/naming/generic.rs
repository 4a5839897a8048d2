//! Generic prefix scheme
//!
//! The product code is the first 6 characters of the filename stem. Files
//! are numbered in folder listing order; nothing else in the name matters.

/// Number of leading characters that form the product code
pub const PREFIX_LEN: usize = 6;

/// Group key for a stem: its first `PREFIX_LEN` characters, or the whole
/// stem when shorter
pub fn parse_generic(stem: &str) -> &str {
    match stem.char_indices().nth(PREFIX_LEN) {
        Some((end, _)) => &stem[..end],
        None => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_six_characters() {
        assert_eq!(parse_generic("123456_front_final"), "123456");
        assert_eq!(parse_generic("ABC123"), "ABC123");
    }

    #[test]
    fn test_short_stem_is_whole_key() {
        assert_eq!(parse_generic("A1"), "A1");
        assert_eq!(parse_generic(""), "");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(parse_generic("ÉÈÊËÀÂ-01"), "ÉÈÊËÀÂ");
    }
}
