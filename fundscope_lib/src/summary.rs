//! Batch-level aggregation over parsed candidate records.
//!
//! All functions operate on slices of `FinancialRecord` and use the
//! transfer-corrected totals from the analytics module.

use std::collections::BTreeMap;

use fec_weball::types::{FinancialRecord, Office, Party};
use serde::Serialize;

use crate::analytics::{adjusted_total_disbursements, adjusted_total_receipts};

/// Totals for a group of records.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    pub candidates: usize,
    pub adjusted_receipts: f64,
    pub adjusted_disbursements: f64,
    pub cash_on_hand: f64,
    pub debt: f64,
}

impl GroupTotals {
    fn add(&mut self, record: &FinancialRecord) {
        self.candidates += 1;
        self.adjusted_receipts += adjusted_total_receipts(record);
        self.adjusted_disbursements += adjusted_total_disbursements(record);
        self.cash_on_hand += record.ending_cash;
        self.debt += record.debts_owed;
    }
}

/// Whole-batch overview.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub totals: GroupTotals,
    /// Records with any inter-committee transfer activity.
    pub with_transfers: usize,
    /// Raw receipts removed by the transfer correction.
    pub transfers_removed: f64,
    pub by_party: BTreeMap<Party, GroupTotals>,
    pub by_office: BTreeMap<Office, GroupTotals>,
}

pub fn summarize(records: &[FinancialRecord]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for record in records {
        summary.totals.add(record);
        summary.by_party.entry(record.party()).or_default().add(record);
        summary.by_office.entry(record.office).or_default().add(record);
        if record.transfers_from_authorized > 0.0 || record.transfers_to_authorized > 0.0 {
            summary.with_transfers += 1;
        }
        summary.transfers_removed +=
            (record.total_receipts - adjusted_total_receipts(record)).max(0.0);
    }
    summary
}

/// Records ranked by adjusted receipts, highest first. Ties keep source order.
pub fn top_fundraisers(records: &[FinancialRecord], limit: usize) -> Vec<&FinancialRecord> {
    let mut ranked: Vec<&FinancialRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        adjusted_total_receipts(b)
            .partial_cmp(&adjusted_total_receipts(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, party: &str, receipts: f64, transfers_in: f64) -> FinancialRecord {
        FinancialRecord {
            candidate_id: id.to_string(),
            party: party.to_string(),
            office: Office::from_candidate_id(id),
            total_receipts: receipts,
            transfers_from_authorized: transfers_in,
            ending_cash: 1_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn summarize_groups() {
        let records = vec![
            rec("H001", "DEM", 100_000.0, 20_000.0),
            rec("S002", "REP", 50_000.0, 0.0),
            rec("H003", "DEM", 10_000.0, 0.0),
        ];
        let s = summarize(&records);
        assert_eq!(s.totals.candidates, 3);
        assert_eq!(s.totals.adjusted_receipts, 140_000.0);
        assert_eq!(s.totals.cash_on_hand, 3_000.0);
        assert_eq!(s.with_transfers, 1);
        assert_eq!(s.transfers_removed, 20_000.0);
        assert_eq!(s.by_party[&Party::Democrat].candidates, 2);
        assert_eq!(s.by_party[&Party::Democrat].adjusted_receipts, 90_000.0);
        assert_eq!(s.by_office[&Office::Senate].candidates, 1);
    }

    #[test]
    fn top_fundraisers_use_adjusted_receipts() {
        let records = vec![
            rec("H001", "DEM", 100_000.0, 60_000.0),
            rec("H002", "REP", 50_000.0, 0.0),
            rec("H003", "DEM", 50_000.0, 0.0),
        ];
        let top = top_fundraisers(&records, 2);
        let ids: Vec<&str> = top.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["H002", "H003"]);
    }

    #[test]
    fn empty_batch() {
        assert_eq!(summarize(&[]), BatchSummary::default());
        assert!(top_fundraisers(&[], 10).is_empty());
    }
}
