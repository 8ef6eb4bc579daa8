use fec_weball::types::Office;

use crate::error::FundscopeError;
use crate::lookup::{normalize_district, AT_LARGE};

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_TOP_LIMIT: usize = 1000;

/// First election cycle covered by the FEC bulk files.
pub const FIRST_CYCLE: i32 = 1976;

/// Postal codes accepted for the candidate office state. `US` is used on
/// presidential records.
pub const VALID_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "AS", "GU", "MP", "PR", "VI", "US",
];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, FundscopeError> {
    if input.len() > max_len {
        return Err(FundscopeError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(FundscopeError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a candidate name query.
pub fn validate_search(input: &str) -> Result<String, FundscopeError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

pub fn validate_candidate_id(input: &str) -> Result<String, FundscopeError> {
    let id = input.trim().to_uppercase();
    if id.len() != 9 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FundscopeError::InvalidInput(format!(
            "candidate id '{}' must be 9 letters or digits (e.g. H0CA12001)",
            input
        )));
    }
    Ok(id)
}

/// Validate a state code: uppercase, check against states, DC, territories and `US`.
pub fn validate_state(input: &str) -> Result<String, FundscopeError> {
    let upper = input.trim().to_uppercase();
    if VALID_STATES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(FundscopeError::InvalidInput(format!(
            "unknown state code '{}'. Valid codes: AL, AK, AZ, ... DC, PR, VI, US",
            input
        )))
    }
}

/// Validate a district: `0`-`99` or an at-large spelling. Returns the
/// normalized form used for matching.
pub fn validate_district(input: &str) -> Result<String, FundscopeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FundscopeError::InvalidInput("district is empty".to_string()));
    }
    let normalized = normalize_district(trimmed);
    if normalized == AT_LARGE {
        return Ok(normalized);
    }
    match normalized.parse::<u8>() {
        Ok(n) if n <= 99 => Ok(normalized),
        _ => Err(FundscopeError::InvalidInput(format!(
            "invalid district '{}'. Use 00-99 or AL for at-large",
            input
        ))),
    }
}

/// Validate an election cycle: an even year no earlier than 1976.
pub fn validate_cycle(cycle: i32) -> Result<i32, FundscopeError> {
    if cycle < FIRST_CYCLE || cycle % 2 != 0 {
        return Err(FundscopeError::InvalidInput(format!(
            "invalid cycle {}. Cycles are even years from {}",
            cycle, FIRST_CYCLE
        )));
    }
    Ok(cycle)
}

/// Validate an office: case-insensitive, supports shorthand h/s/p.
pub fn validate_office(input: &str) -> Result<Office, FundscopeError> {
    match input.trim().to_lowercase().as_str() {
        "house" | "h" => Ok(Office::House),
        "senate" | "s" => Ok(Office::Senate),
        "president" | "presidential" | "p" => Ok(Office::President),
        _ => Err(FundscopeError::InvalidInput(format!(
            "unknown office '{}'. Valid values: house (h), senate (s), president (p)",
            input
        ))),
    }
}

/// Validate a result limit (must be 1..=1000).
pub fn validate_limit(limit: usize) -> Result<usize, FundscopeError> {
    if !(1..=MAX_TOP_LIMIT).contains(&limit) {
        return Err(FundscopeError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_TOP_LIMIT
        )));
    }
    Ok(limit)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
