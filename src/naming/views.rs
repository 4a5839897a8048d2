//! Camera view priority
//!
//! Shots of one article are numbered front first, then the sides, back, top,
//! sole and finally detail shots. Codes outside the table sort after all of
//! them.

/// Rank given to any view code not in the table
pub const UNKNOWN_VIEW_RANK: u8 = 99;

/// Known view codes and their rank (lower is numbered first)
const VIEW_RANKS: [(&str, u8); 7] = [
    ("PHCFH", 0), // front
    ("PHSLH", 1), // left
    ("PHSRH", 2), // right
    ("PHCBH", 3), // back
    ("PHSTH", 4), // top
    ("PHSUH", 5), // sole
    ("PHSYD", 6), // detail / zoom
];

/// Priority of a view code; unknown codes get `UNKNOWN_VIEW_RANK`
pub fn view_rank(code: &str) -> u8 {
    VIEW_RANKS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_VIEW_RANK, |&(_, rank)| rank)
}
