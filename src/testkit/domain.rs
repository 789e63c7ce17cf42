//! Builders for domain values used across tests.

use crate::domain::{CandidateSet, Digit, DrawRecord, DrawResult, ResultHistory};

/// History from result strings, newest first. Panics on invalid input.
pub fn history(results: &[&str]) -> ResultHistory {
    results
        .iter()
        .map(|r| draw(r))
        .collect()
}

/// History of labelled draws, newest first. Panics on invalid input.
pub fn labelled_history(rows: &[(&str, &str)]) -> ResultHistory {
    rows.iter()
        .map(|(label, result)| DrawRecord::new(draw(result), Some((*label).to_string())))
        .collect()
}

/// Parse a four-digit result. Panics on invalid input.
pub fn draw(result: &str) -> DrawResult {
    DrawResult::try_new(result).expect("valid draw result")
}

/// Candidate set from a digit string. Panics on invalid input.
pub fn candidates(digits: &str) -> CandidateSet {
    let digits = digits
        .chars()
        .map(|c| Digit::try_from(c).expect("valid digit"))
        .collect();
    CandidateSet::try_new(digits).expect("unique digits")
}
