//! Name and location lookups over a parsed record collection.
//!
//! All lookups borrow from the collection and preserve its order. The FEC
//! file groups a candidate's records together, so callers that want "the"
//! record for a name take the first match (see [`primary_record_for_name`]).

use std::collections::HashSet;

use fec_weball::types::FinancialRecord;

/// Tokens dropped from names before matching.
const IGNORED_NAME_TOKENS: &[&str] = &["mr", "mrs", "ms", "dr", "hon", "sen", "rep"];

/// Spellings of an at-large district.
const AT_LARGE_SPELLINGS: &[&str] = &["", "AL", "AT-LARGE", "AT LARGE", "ATLARGE", "AT_LARGE"];

/// Canonical at-large district value.
pub const AT_LARGE: &str = "AL";

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.80;

/// Splits a name into lowercase tokens, ignoring punctuation and word order
/// conventions ("LAST, FIRST" vs "First Last").
pub fn name_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '.')
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|t| !IGNORED_NAME_TOKENS.contains(t))
        .map(str::to_string)
        .collect()
}

/// True when every query token is a substring of some name token.
fn tokens_match(query: &[String], name: &[String]) -> bool {
    !query.is_empty() && query.iter().all(|q| name.iter().any(|n| n.contains(q.as_str())))
}

/// Records whose candidate name matches `query`, in collection order.
///
/// Matching is case-insensitive and order-insensitive: `"Smith, John"` and
/// `"John Smith"` both match `"SMITH, JOHN A"`. A blank query matches nothing.
pub fn find_by_candidate_name<'a>(
    records: &'a [FinancialRecord],
    query: &str,
) -> Vec<&'a FinancialRecord> {
    let query_tokens = name_tokens(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| tokens_match(&query_tokens, &name_tokens(&r.candidate_name)))
        .collect()
}

/// First record matching `query` in file order.
///
/// This relies on the source file listing a candidate's most relevant record
/// first; the parser does not verify that ordering.
pub fn primary_record_for_name<'a>(
    records: &'a [FinancialRecord],
    query: &str,
) -> Option<&'a FinancialRecord> {
    let query_tokens = name_tokens(query);
    if query_tokens.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| tokens_match(&query_tokens, &name_tokens(&r.candidate_name)))
}

pub fn find_by_candidate_id<'a>(
    records: &'a [FinancialRecord],
    candidate_id: &str,
) -> Option<&'a FinancialRecord> {
    let id = candidate_id.trim();
    records
        .iter()
        .find(|r| r.candidate_id.eq_ignore_ascii_case(id))
}

/// Normalizes a district for comparison.
///
/// At-large spellings (`00`, `0`, `AL`, `at-large`, blank) become [`AT_LARGE`]
/// and numeric districts lose leading zeros, so `"07"` equals `"7"`.
pub fn normalize_district(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if AT_LARGE_SPELLINGS.contains(&upper.as_str()) {
        return AT_LARGE.to_string();
    }
    if upper.chars().all(|c| c.is_ascii_digit()) {
        let stripped = upper.trim_start_matches('0');
        if stripped.is_empty() {
            return AT_LARGE.to_string();
        }
        return stripped.to_string();
    }
    upper
}

/// Records for a state, optionally narrowed to one district.
///
/// The state match is exact (case-insensitive). The district match is exact
/// after [`normalize_district`].
pub fn find_by_location<'a>(
    records: &'a [FinancialRecord],
    state: &str,
    district: Option<&str>,
) -> Vec<&'a FinancialRecord> {
    let state = state.trim();
    let district = district.map(normalize_district);
    records
        .iter()
        .filter(|r| r.state.eq_ignore_ascii_case(state))
        .filter(|r| match &district {
            Some(d) => normalize_district(&r.district) == *d,
            None => true,
        })
        .collect()
}

/// Distinct candidate names most similar to `query`, best first.
///
/// Used for "did you mean" hints when a name search comes back empty.
pub fn suggest_candidate_names(
    records: &[FinancialRecord],
    query: &str,
    limit: usize,
) -> Vec<(String, f64)> {
    let query_key = sorted_key(query);
    if query_key.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut scored: Vec<(String, f64)> = Vec::new();
    for record in records {
        if !seen.insert(record.candidate_name.as_str()) {
            continue;
        }
        let score = strsim::jaro_winkler(&query_key, &sorted_key(&record.candidate_name));
        if score >= SUGGESTION_THRESHOLD {
            scored.push((record.candidate_name.clone(), score));
        }
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}

fn sorted_key(name: &str) -> String {
    let mut tokens = name_tokens(name);
    tokens.sort();
    tokens.join(" ")
}
