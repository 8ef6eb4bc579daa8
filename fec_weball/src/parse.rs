//! Batch parsing of whole candidate summary files.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::decode::{decode_fields, DELIMITER};
use crate::schema::Schema;
use crate::types::FinancialRecord;

/// Line numbers kept per parse for diagnostics.
const MAX_SAMPLED_FAILURES: usize = 20;

/// Counts of lines that were skipped during a parse.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    /// Non-blank lines seen.
    pub lines_read: usize,
    /// Lines that decoded into records.
    pub decoded: usize,
    /// Lines dropped because they failed to decode.
    pub failed: usize,
    /// Failure counts keyed by reason label.
    pub failures_by_reason: BTreeMap<String, usize>,
    /// 1-based line numbers of the first failures.
    pub sample_failed_lines: Vec<usize>,
    /// Candidate IDs seen more than once, each listed once. The records are kept.
    pub duplicate_ids: Vec<String>,
}

impl ParseReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Records decoded from one input together with the skipped-line report.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ParsedBatch {
    pub records: Vec<FinancialRecord>,
    pub report: ParseReport,
}

/// Configurable batch parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchParser {
    schema: Schema,
    cycle: Option<i32>,
}

impl BatchParser {
    /// Parser for the weball layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Cycle assigned to records whose layout carries no cycle column.
    pub fn with_cycle(mut self, cycle: i32) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn cycle(&self) -> Option<i32> {
        self.cycle
    }

    /// Decodes every line of `raw` in order, skipping lines that fail.
    pub fn parse(&self, raw: &str) -> ParsedBatch {
        let mut records = Vec::new();
        let mut report = ParseReport::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut repeated: HashSet<String> = HashSet::new();
        let mut fields: Vec<&str> = Vec::with_capacity(self.schema.len() + 1);

        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            report.lines_read += 1;

            fields.clear();
            fields.extend(line.split(DELIMITER));

            match decode_fields(&self.schema, &fields, self.cycle) {
                Ok(record) => {
                    if !seen.insert(record.candidate_id.clone()) {
                        tracing::warn!(
                            "Duplicate candidate id {} on line {}",
                            record.candidate_id,
                            idx + 1
                        );
                        if repeated.insert(record.candidate_id.clone()) {
                            report.duplicate_ids.push(record.candidate_id.clone());
                        }
                    }
                    records.push(record);
                }
                Err(err) => {
                    tracing::debug!("Skipping line {}: {}", idx + 1, err);
                    report.failed += 1;
                    *report
                        .failures_by_reason
                        .entry(err.reason().to_string())
                        .or_default() += 1;
                    if report.sample_failed_lines.len() < MAX_SAMPLED_FAILURES {
                        report.sample_failed_lines.push(idx + 1);
                    }
                }
            }
        }

        report.decoded = records.len();
        if report.has_failures() {
            tracing::warn!(
                "Skipped {} of {} lines ({} schema): {:?}",
                report.failed,
                report.lines_read,
                self.schema.version,
                report.failures_by_reason
            );
        }

        ParsedBatch { records, report }
    }
}

/// Decodes every line of `raw` with the weball layout, dropping lines that fail.
pub fn parse_all_records(raw: &str) -> Vec<FinancialRecord> {
    parse_with_report(raw).records
}

/// Like [`parse_all_records`], also returning the skipped-line report.
pub fn parse_with_report(raw: &str) -> ParsedBatch {
    BatchParser::new().parse(raw)
}
