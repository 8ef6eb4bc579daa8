//! Transfer-corrected funding analytics for a single candidate record.
//!
//! Raw FEC totals can include money moved between a candidate's own authorized
//! committees. Those transfers are already inside the filed totals, so they are
//! subtracted once here and every share or ratio is computed against the
//! adjusted figures.

use fec_weball::types::FinancialRecord;
use serde::{Deserialize, Serialize};

/// A funding category used for breakdowns and classification.
///
/// Variant order is the tie-break precedence for "largest source".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    Individual,
    Pac,
    Party,
    Candidate,
    Other,
}

impl FundingSource {
    /// All categories in precedence order.
    pub const ALL: [FundingSource; 5] = [
        FundingSource::Individual,
        FundingSource::Pac,
        FundingSource::Party,
        FundingSource::Candidate,
        FundingSource::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FundingSource::Individual => "Individual contributions",
            FundingSource::Pac => "PAC contributions",
            FundingSource::Party => "Party contributions",
            FundingSource::Candidate => "Candidate self-funding",
            FundingSource::Other => "Other receipts",
        }
    }
}

impl std::fmt::Display for FundingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FundingSource::Individual => "individual",
                FundingSource::Pac => "pac",
                FundingSource::Party => "party",
                FundingSource::Candidate => "candidate",
                FundingSource::Other => "other",
            }
        )
    }
}

/// Amount and share of adjusted receipts for one category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SourceShare {
    pub amount: f64,
    pub percentage: f64,
}

/// Per-category split of adjusted receipts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingBreakdown {
    pub individual: SourceShare,
    pub pac: SourceShare,
    pub party: SourceShare,
    pub candidate: SourceShare,
    pub other: SourceShare,
    /// Named categories sum to more than adjusted receipts. Percentages are
    /// left unscaled and will total above 100.
    pub components_exceed_total: bool,
}

impl FundingBreakdown {
    pub fn share(&self, source: FundingSource) -> SourceShare {
        match source {
            FundingSource::Individual => self.individual,
            FundingSource::Pac => self.pac,
            FundingSource::Party => self.party,
            FundingSource::Candidate => self.candidate,
            FundingSource::Other => self.other,
        }
    }

    /// Categories with their shares, in precedence order.
    pub fn entries(&self) -> [(FundingSource, SourceShare); 5] {
        FundingSource::ALL.map(|s| (s, self.share(s)))
    }

    pub fn total_percentage(&self) -> f64 {
        self.entries().iter().map(|(_, s)| s.percentage).sum()
    }
}

/// Inter-committee transfer activity and the corrected totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferSummary {
    pub transfers_in: f64,
    pub transfers_out: f64,
    pub has_double_counting_issue: bool,
    pub raw_total_receipts: f64,
    pub raw_total_disbursements: f64,
    pub adjusted_total_receipts: f64,
    pub adjusted_total_disbursements: f64,
}

/// Cash and spending indicators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealth {
    pub cash_on_hand: f64,
    pub debt: f64,
    pub net_position: f64,
    /// Adjusted disbursements per adjusted dollar raised. Above 1 means the
    /// campaign spent more than it raised this cycle.
    pub burn_rate: f64,
    /// Same ratio as `burn_rate`, labelled for efficiency views.
    pub expenditure_efficiency: f64,
    pub debt_ratio: f64,
    pub cash_change: f64,
}

/// Everything derived from one record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingAnalytics {
    pub candidate_id: String,
    pub candidate_name: String,
    pub transfers: TransferSummary,
    pub funding_sources: FundingBreakdown,
    pub health: FinancialHealth,
}

impl FundingAnalytics {
    pub fn adjusted_total_receipts(&self) -> f64 {
        self.transfers.adjusted_total_receipts
    }

    pub fn adjusted_total_disbursements(&self) -> f64 {
        self.transfers.adjusted_total_disbursements
    }
}

/// Removes a transfer amount from a filed total. Negative transfers (refunds or
/// amended filings) are ignored so the result never exceeds the filed total.
fn remove_transfers(total: f64, transfers: f64) -> f64 {
    (total - transfers.max(0.0)).max(0.0)
}

/// Receipts with inter-committee transfers removed, floored at zero.
pub fn adjusted_total_receipts(record: &FinancialRecord) -> f64 {
    remove_transfers(record.total_receipts, record.transfers_from_authorized)
}

/// Disbursements with inter-committee transfers removed, floored at zero.
pub fn adjusted_total_disbursements(record: &FinancialRecord) -> f64 {
    remove_transfers(record.total_disbursements, record.transfers_to_authorized)
}

/// `numerator / max(1, denominator)`.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}

pub fn summarize_transfers(record: &FinancialRecord) -> TransferSummary {
    let transfers_in = record.transfers_from_authorized;
    let transfers_out = record.transfers_to_authorized;
    TransferSummary {
        transfers_in,
        transfers_out,
        has_double_counting_issue: transfers_in > 0.0 || transfers_out > 0.0,
        raw_total_receipts: record.total_receipts,
        raw_total_disbursements: record.total_disbursements,
        adjusted_total_receipts: adjusted_total_receipts(record),
        adjusted_total_disbursements: adjusted_total_disbursements(record),
    }
}

/// Splits adjusted receipts across the five funding categories.
///
/// With zero adjusted receipts every percentage is 0.
pub fn funding_breakdown(record: &FinancialRecord) -> FundingBreakdown {
    let adjusted = adjusted_total_receipts(record);
    let individual = record.individual_contributions;
    let pac = record.pac_contributions;
    let party = record.party_contributions;
    let candidate = record.candidate_funding();
    let named = individual + pac + party + candidate;
    let other = (adjusted - named).max(0.0);

    let share = |amount: f64| SourceShare {
        amount,
        percentage: if adjusted > 0.0 {
            guarded_ratio(amount, adjusted) * 100.0
        } else {
            0.0
        },
    };

    FundingBreakdown {
        individual: share(individual),
        pac: share(pac),
        party: share(party),
        candidate: share(candidate),
        other: share(other),
        components_exceed_total: named > adjusted,
    }
}

pub fn financial_health(record: &FinancialRecord) -> FinancialHealth {
    let receipts = adjusted_total_receipts(record);
    let disbursements = adjusted_total_disbursements(record);
    let cash_on_hand = record.ending_cash;
    let debt = record.debts_owed;
    let burn_rate = guarded_ratio(disbursements, receipts);

    FinancialHealth {
        cash_on_hand,
        debt,
        net_position: cash_on_hand - debt,
        burn_rate,
        expenditure_efficiency: burn_rate,
        debt_ratio: guarded_ratio(debt, receipts),
        cash_change: record.ending_cash - record.beginning_cash,
    }
}

/// Computes transfer-corrected totals, funding breakdown and health indicators.
pub fn calculate_funding_analytics(record: &FinancialRecord) -> FundingAnalytics {
    FundingAnalytics {
        candidate_id: record.candidate_id.clone(),
        candidate_name: record.candidate_name.clone(),
        transfers: summarize_transfers(record),
        funding_sources: funding_breakdown(record),
        health: financial_health(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn record() -> FinancialRecord {
        FinancialRecord {
            candidate_id: "H0CA12001".to_string(),
            candidate_name: "SMITH, JOHN A".to_string(),
            total_receipts: 100_000.0,
            transfers_from_authorized: 20_000.0,
            individual_contributions: 50_000.0,
            pac_contributions: 30_000.0,
            total_disbursements: 90_000.0,
            transfers_to_authorized: 5_000.0,
            beginning_cash: 10_000.0,
            ending_cash: 20_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn transfer_correction() {
        let a = calculate_funding_analytics(&record());
        assert!(a.transfers.has_double_counting_issue);
        assert_eq!(a.adjusted_total_receipts(), 80_000.0);
        assert_eq!(a.adjusted_total_disbursements(), 85_000.0);
        assert_eq!(a.transfers.raw_total_receipts, 100_000.0);
    }

    #[test]
    fn percentages_use_adjusted_total() {
        let b = funding_breakdown(&record());
        assert!((b.individual.percentage - 62.5).abs() < EPSILON);
        assert!((b.pac.percentage - 37.5).abs() < EPSILON);
        assert_eq!(b.other.amount, 0.0);
        assert!((b.total_percentage() - 100.0).abs() < EPSILON);
        assert!(!b.components_exceed_total);
    }

    #[test]
    fn no_transfers_no_flag() {
        let mut r = record();
        r.transfers_from_authorized = 0.0;
        r.transfers_to_authorized = 0.0;
        let t = summarize_transfers(&r);
        assert!(!t.has_double_counting_issue);
        assert_eq!(t.adjusted_total_receipts, 100_000.0);
    }

    #[test]
    fn outbound_transfer_alone_sets_flag() {
        let mut r = record();
        r.transfers_from_authorized = 0.0;
        assert!(summarize_transfers(&r).has_double_counting_issue);
    }

    #[test]
    fn adjusted_totals_floor_at_zero() {
        let mut r = record();
        r.transfers_from_authorized = 150_000.0;
        r.transfers_to_authorized = 200_000.0;
        assert_eq!(adjusted_total_receipts(&r), 0.0);
        assert_eq!(adjusted_total_disbursements(&r), 0.0);
    }

    #[test]
    fn negative_transfers_do_not_inflate_totals() {
        let mut r = record();
        r.transfers_from_authorized = -20_000.0;
        r.transfers_to_authorized = -5_000.0;
        let a = calculate_funding_analytics(&r);
        assert_eq!(a.adjusted_total_receipts(), 100_000.0);
        assert_eq!(a.adjusted_total_disbursements(), 90_000.0);
        assert!(a.adjusted_total_receipts() <= a.transfers.raw_total_receipts);
        assert!(a.adjusted_total_disbursements() <= a.transfers.raw_total_disbursements);
        assert!(!a.transfers.has_double_counting_issue);
        assert!((a.funding_sources.individual.percentage - 50.0).abs() < EPSILON);
    }

    #[test]
    fn zero_receipts_are_zero_safe() {
        let r = FinancialRecord {
            candidate_id: "P80001571".to_string(),
            individual_contributions: 500.0,
            ..Default::default()
        };
        let a = calculate_funding_analytics(&r);
        for (_, share) in a.funding_sources.entries() {
            assert_eq!(share.percentage, 0.0);
            assert!(share.percentage.is_finite());
        }
        assert!(a.health.burn_rate.is_finite());
        assert!(a.health.debt_ratio.is_finite());
    }

    #[test]
    fn other_absorbs_unnamed_receipts() {
        let mut r = record();
        r.pac_contributions = 10_000.0;
        let b = funding_breakdown(&r);
        assert_eq!(b.other.amount, 20_000.0);
        assert!((b.other.percentage - 25.0).abs() < EPSILON);
        assert!((b.total_percentage() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn candidate_share_includes_loans() {
        let mut r = record();
        r.individual_contributions = 0.0;
        r.pac_contributions = 0.0;
        r.candidate_contributions = 30_000.0;
        r.candidate_loans = 10_000.0;
        let b = funding_breakdown(&r);
        assert_eq!(b.candidate.amount, 40_000.0);
        assert!((b.candidate.percentage - 50.0).abs() < EPSILON);
    }

    #[test]
    fn inconsistent_components_are_flagged() {
        let mut r = record();
        r.individual_contributions = 90_000.0;
        let b = funding_breakdown(&r);
        assert!(b.components_exceed_total);
        assert_eq!(b.other.amount, 0.0);
        assert!(b.total_percentage() > 100.0);
    }

    #[test]
    fn health_indicators() {
        let mut r = record();
        r.debts_owed = 8_000.0;
        let h = financial_health(&r);
        assert_eq!(h.cash_on_hand, 20_000.0);
        assert_eq!(h.net_position, 12_000.0);
        assert!((h.burn_rate - 85_000.0 / 80_000.0).abs() < EPSILON);
        assert_eq!(h.burn_rate, h.expenditure_efficiency);
        assert!((h.debt_ratio - 0.1).abs() < EPSILON);
        assert_eq!(h.cash_change, 10_000.0);
    }

    #[test]
    fn guarded_ratio_small_denominator() {
        assert_eq!(guarded_ratio(5.0, 0.0), 5.0);
        assert_eq!(guarded_ratio(5.0, 0.5), 5.0);
        assert_eq!(guarded_ratio(5.0, 10.0), 0.5);
    }
}
