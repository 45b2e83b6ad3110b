//! Meeting chair format checks.
//!
//! The canonical chair format is `Full Name (ircnick)`; multiple chairs
//! are comma-separated.

use regex::Regex;

/// Validation result for a single chair entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChairStatus {
    pub chair: String,
    pub ok: bool,
}

/// Check every comma-separated chair against the canonical
/// `Name (ircnick)` format.
pub fn check_chair(chair: &str) -> Vec<ChairStatus> {
    let format = Regex::new(r"^[\w '.-]+\([\w\d_-]+\)$").unwrap();

    chair
        .split(',')
        .map(|c| {
            let c = c.trim();
            ChairStatus {
                chair: c.to_string(),
                ok: format.is_match(c),
            }
        })
        .collect()
}

/// True when every chair entry matches the canonical format.
pub fn all_ok(statuses: &[ChairStatus]) -> bool {
    statuses.iter().all(|s| s.ok)
}
