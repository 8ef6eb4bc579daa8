use super::*;

// -- Search validation --

#[test]
fn search_trims_and_strips_control_chars() {
    assert_eq!(validate_search("  smith\t, john\n ").unwrap(), "smith, john");
}

#[test]
fn search_empty() {
    assert!(validate_search("   ").is_err());
    assert!(validate_search("\x07").is_err());
}

#[test]
fn search_too_long() {
    let long = "a".repeat(MAX_SEARCH_LENGTH + 1);
    assert!(validate_search(&long).is_err());
    let max = "a".repeat(MAX_SEARCH_LENGTH);
    assert_eq!(validate_search(&max).unwrap().len(), MAX_SEARCH_LENGTH);
}

// -- Candidate id validation --

#[test]
fn candidate_id_uppercased() {
    assert_eq!(validate_candidate_id(" h0ca12001 ").unwrap(), "H0CA12001");
}

#[test]
fn candidate_id_wrong_length() {
    assert!(validate_candidate_id("H0CA1").is_err());
    assert!(validate_candidate_id("H0CA-2001").is_err());
}

// -- State validation --

#[test]
fn state_valid_uppercase() {
    assert_eq!(validate_state("CA").unwrap(), "CA");
}

#[test]
fn state_valid_lowercase() {
    assert_eq!(validate_state("tx").unwrap(), "TX");
}

#[test]
fn state_valid_dc_and_territories() {
    assert_eq!(validate_state("DC").unwrap(), "DC");
    assert_eq!(validate_state("pr").unwrap(), "PR");
    assert_eq!(validate_state("gu").unwrap(), "GU");
}

#[test]
fn state_valid_presidential() {
    assert_eq!(validate_state("us").unwrap(), "US");
}

#[test]
fn state_invalid() {
    assert!(validate_state("XX").is_err());
    assert!(validate_state("").is_err());
    assert!(validate_state("CALIFORNIA").is_err());
    assert!(validate_state("12").is_err());
}

// -- District validation --

#[test]
fn district_numeric() {
    assert_eq!(validate_district("12").unwrap(), "12");
    assert_eq!(validate_district("07").unwrap(), "7");
    assert_eq!(validate_district("99").unwrap(), "99");
}

#[test]
fn district_at_large() {
    assert_eq!(validate_district("00").unwrap(), "AL");
    assert_eq!(validate_district("al").unwrap(), "AL");
    assert_eq!(validate_district("at-large").unwrap(), "AL");
}

#[test]
fn district_invalid() {
    assert!(validate_district("").is_err());
    assert!(validate_district("100").is_err());
    assert!(validate_district("twelve").is_err());
    assert!(validate_district("-1").is_err());
}

// -- Cycle validation --

#[test]
fn cycle_valid() {
    assert_eq!(validate_cycle(2024).unwrap(), 2024);
    assert_eq!(validate_cycle(1976).unwrap(), 1976);
}

#[test]
fn cycle_odd_year() {
    assert!(validate_cycle(2023).is_err());
}

#[test]
fn cycle_too_early() {
    assert!(validate_cycle(1974).is_err());
}

// -- Office validation --

#[test]
fn office_names_and_shorthand() {
    assert_eq!(validate_office("House").unwrap(), Office::House);
    assert_eq!(validate_office("s").unwrap(), Office::Senate);
    assert_eq!(validate_office("PRESIDENT").unwrap(), Office::President);
}

#[test]
fn office_invalid() {
    assert!(validate_office("governor").is_err());
    assert!(validate_office("").is_err());
}

// -- Limit validation --

#[test]
fn limit_bounds() {
    assert!(validate_limit(0).is_err());
    assert_eq!(validate_limit(1).unwrap(), 1);
    assert_eq!(validate_limit(MAX_TOP_LIMIT).unwrap(), MAX_TOP_LIMIT);
    assert!(validate_limit(MAX_TOP_LIMIT + 1).is_err());
}
