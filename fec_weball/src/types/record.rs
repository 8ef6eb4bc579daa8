//! The decoded candidate summary record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::{Incumbency, Office, Party};

/// FEC candidate identifier (e.g. "H8CA05035").
pub type CandidateID = String;

/// One candidate's FEC summary filing for a reporting cycle.
///
/// Every amount is in dollars and defaults to `0.0` when the source column was
/// blank or unparsable. `total_receipts` and `total_disbursements` are as filed
/// and may already include transfers between the candidate's own authorized
/// committees; use the analytics layer for transfer-corrected totals.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Stable candidate key.
    pub candidate_id: CandidateID,

    /// Candidate name in "LAST, FIRST" order as filed.
    pub candidate_name: String,

    /// Three-letter affiliation code (`DEM`, `REP`, ...).
    pub party: String,

    /// FEC party code column (`1` Democrat, `2` Republican, `3` other).
    pub party_code: String,

    pub incumbency: Incumbency,

    /// Two-letter state code, uppercase.
    pub state: String,

    /// District as filed; `00` is used for at-large seats and statewide races.
    pub district: String,

    pub office: Office,

    /// Election cycle (even year), `0` when unknown.
    pub cycle: i32,

    // -- Receipts --
    pub total_receipts: f64,
    pub individual_contributions: f64,
    pub party_contributions: f64,
    /// Contributions from other political committees (PACs).
    pub pac_contributions: f64,
    pub candidate_contributions: f64,
    pub candidate_loans: f64,
    pub other_loans: f64,
    pub total_loans: f64,
    pub transfers_from_authorized: f64,
    pub candidate_loan_repayments: f64,
    pub other_loan_repayments: f64,
    pub individual_refunds: f64,
    pub committee_refunds: f64,

    // -- Disbursements --
    pub total_disbursements: f64,
    pub transfers_to_authorized: f64,

    // -- Cash position --
    pub beginning_cash: f64,
    pub ending_cash: f64,
    pub debts_owed: f64,

    // -- Election outcome codes --
    pub special_election: String,
    pub primary_election: String,
    pub runoff_election: String,
    pub general_election: String,
    pub general_election_percent: f64,

    // -- Coverage period --
    pub coverage_start: Option<NaiveDate>,
    pub coverage_end: Option<NaiveDate>,
}

impl FinancialRecord {
    /// Party decoded from the affiliation code.
    pub fn party(&self) -> Party {
        Party::from_code(&self.party)
    }

    /// Personal contributions plus loans made by the candidate.
    pub fn candidate_funding(&self) -> f64 {
        self.candidate_contributions + self.candidate_loans
    }
}
