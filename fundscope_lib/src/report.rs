//! Per-candidate report combining the record, its analytics and its
//! contributor profile. This is the shape the CLI emits for `analyze`.

use fec_weball::types::FinancialRecord;
use serde::Serialize;

use crate::analytics::{calculate_funding_analytics, FundingAnalytics};
use crate::classification::{get_contributor_analysis_with, ClassificationThresholds, ContributorProfile};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub record: FinancialRecord,
    pub analytics: FundingAnalytics,
    pub contributors: ContributorProfile,
    pub labels: Vec<&'static str>,
}

impl CandidateReport {
    pub fn build(record: &FinancialRecord, thresholds: &ClassificationThresholds) -> Self {
        let contributors = get_contributor_analysis_with(record, thresholds);
        Self {
            record: record.clone(),
            analytics: calculate_funding_analytics(record),
            labels: contributors.labels(),
            contributors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FundingSource;

    #[test]
    fn report_serializes_all_sections() {
        let record = FinancialRecord {
            candidate_id: "H0CA12001".to_string(),
            candidate_name: "SMITH, JOHN A".to_string(),
            total_receipts: 100_000.0,
            individual_contributions: 70_000.0,
            ..Default::default()
        };
        let report = CandidateReport::build(&record, &ClassificationThresholds::default());
        assert_eq!(report.labels, vec!["grassroots support"]);
        assert_eq!(report.contributors.primary_funding_source, FundingSource::Individual);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["record"]["candidateId"], "H0CA12001");
        assert_eq!(json["analytics"]["transfers"]["adjustedTotalReceipts"], 100_000.0);
        assert_eq!(json["contributors"]["primaryFundingSource"], "individual");
        assert_eq!(json["labels"][0], "grassroots support");
    }
}
