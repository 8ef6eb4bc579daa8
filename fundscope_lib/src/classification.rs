//! Contributor-mix classification against fixed share thresholds.

use fec_weball::types::FinancialRecord;
use serde::{Deserialize, Serialize};

use crate::analytics::{funding_breakdown, FundingBreakdown, FundingSource};

/// Share thresholds, in percent of adjusted receipts. A flag is set only when
/// the share is strictly greater than its threshold.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// PAC share above which a candidate is flagged for corporate influence.
    pub pac_share_pct: f64,
    /// Individual share above which a candidate counts as grassroots-supported.
    pub individual_share_pct: f64,
    /// Candidate contributions plus loans above which a campaign is self-funded.
    pub self_funded_pct: f64,
    /// Party share above which a candidate counts as party-supported.
    pub party_share_pct: f64,
}

impl ClassificationThresholds {
    pub const DEFAULT_PAC_SHARE_PCT: f64 = 40.0;
    pub const DEFAULT_INDIVIDUAL_SHARE_PCT: f64 = 60.0;
    pub const DEFAULT_SELF_FUNDED_PCT: f64 = 50.0;
    pub const DEFAULT_PARTY_SHARE_PCT: f64 = 20.0;
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            pac_share_pct: Self::DEFAULT_PAC_SHARE_PCT,
            individual_share_pct: Self::DEFAULT_INDIVIDUAL_SHARE_PCT,
            self_funded_pct: Self::DEFAULT_SELF_FUNDED_PCT,
            party_share_pct: Self::DEFAULT_PARTY_SHARE_PCT,
        }
    }
}

/// Contributor-mix labels for one record. Flags are independent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributorProfile {
    pub corporate_influence: bool,
    pub grassroots_support: bool,
    pub self_funded: bool,
    pub party_supported: bool,
    pub primary_funding_source: FundingSource,
}

impl ContributorProfile {
    /// Human-readable labels for the flags that are set.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.corporate_influence {
            labels.push("corporate influence");
        }
        if self.grassroots_support {
            labels.push("grassroots support");
        }
        if self.self_funded {
            labels.push("self-funded");
        }
        if self.party_supported {
            labels.push("party supported");
        }
        labels
    }
}

/// Largest category by share. Ties go to the earlier category in
/// [`FundingSource::ALL`].
pub fn primary_funding_source(breakdown: &FundingBreakdown) -> FundingSource {
    let mut best = FundingSource::Individual;
    let mut best_pct = breakdown.individual.percentage;
    for (source, share) in breakdown.entries().into_iter().skip(1) {
        if share.percentage > best_pct {
            best = source;
            best_pct = share.percentage;
        }
    }
    best
}

/// Classifies a precomputed breakdown.
pub fn classify(
    breakdown: &FundingBreakdown,
    thresholds: &ClassificationThresholds,
) -> ContributorProfile {
    ContributorProfile {
        corporate_influence: breakdown.pac.percentage > thresholds.pac_share_pct,
        grassroots_support: breakdown.individual.percentage > thresholds.individual_share_pct,
        self_funded: breakdown.candidate.percentage > thresholds.self_funded_pct,
        party_supported: breakdown.party.percentage > thresholds.party_share_pct,
        primary_funding_source: primary_funding_source(breakdown),
    }
}

/// Classifies a record with the default thresholds.
pub fn get_contributor_analysis(record: &FinancialRecord) -> ContributorProfile {
    get_contributor_analysis_with(record, &ClassificationThresholds::default())
}

pub fn get_contributor_analysis_with(
    record: &FinancialRecord,
    thresholds: &ClassificationThresholds,
) -> ContributorProfile {
    classify(&funding_breakdown(record), thresholds)
}
