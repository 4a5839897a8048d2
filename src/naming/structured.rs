//! Structured article/view scheme
//!
//! Filenames follow `BRAND_ARTICLECODE_PHxxxNNN[-suffix]`:
//!
//! ```text
//! AURORA_415445-101_PHCFH001-2000
//!        ^^^^^^^^^^ article code
//!                   ^^^^^ view code
//!                        ^^^ sequence number
//! ```

use crate::naming::views::view_rank;
use crate::state::data::OrderKey;

/// Marker every view segment starts with
const VIEW_MARKER: &str = "PH";

/// Length of a view code, marker included
pub const VIEW_CODE_LEN: usize = 5;

/// Fields extracted from a structured filename stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredName {
    pub article_code: String,
    pub view_code: String,
    pub sequence: u64,
}

impl StructuredName {
    /// Ordering within an article: view priority, then sequence number
    pub fn order_key(&self) -> OrderKey {
        OrderKey::View {
            rank: view_rank(&self.view_code),
            sequence: self.sequence,
        }
    }
}

/// Parse a stem, or None when it does not follow the scheme
///
/// The sequence number is the run of digits right after the view code. The
/// scan stops at the first `-` or any other non-digit; digits past that
/// point are ignored. No digits means sequence 0.
pub fn parse_structured(stem: &str) -> Option<StructuredName> {
    let segments: Vec<&str> = stem.split('_').collect();
    if segments.len() < 3 {
        return None;
    }

    let article_code = segments[1];
    let view_part = segments[2];
    if article_code.is_empty() || !view_part.starts_with(VIEW_MARKER) {
        return None;
    }

    let split_at = view_part
        .char_indices()
        .nth(VIEW_CODE_LEN)
        .map_or(view_part.len(), |(i, _)| i);
    let (view_code, remainder) = view_part.split_at(split_at);

    let sequence = remainder
        .chars()
        .map_while(|ch| ch.to_digit(10))
        .fold(0u64, |acc, digit| acc.saturating_mul(10).saturating_add(u64::from(digit)));

    Some(StructuredName {
        article_code: article_code.to_string(),
        view_code: view_code.to_string(),
        sequence,
    })
}
