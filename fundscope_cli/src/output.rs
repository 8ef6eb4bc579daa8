use anyhow::{bail, Result};
use serde::Serialize;
use fundscope_lib::analytics::{adjusted_total_disbursements, adjusted_total_receipts, funding_breakdown};
use fundscope_lib::format::{format_compact_currency, format_currency, format_percentage};
use fundscope_lib::summary::GroupTotals;
use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{BatchSummary, CandidateReport};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "xml" => Ok(OutputFormat::Xml),
            other => bail!(
                "unknown output format '{}'. Valid values: table, json, csv, markdown, xml",
                other
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
struct CandidateRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    candidate_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    district: String,
    #[tabled(rename = "Office")]
    #[serde(rename = "Office")]
    office: String,
    #[tabled(rename = "Cycle")]
    #[serde(rename = "Cycle")]
    cycle: String,
    #[tabled(rename = "Receipts")]
    #[serde(rename = "Receipts")]
    receipts: String,
    #[tabled(rename = "Disbursements")]
    #[serde(rename = "Disbursements")]
    disbursements: String,
    #[tabled(rename = "Cash on Hand")]
    #[serde(rename = "Cash on Hand")]
    cash_on_hand: String,
}

#[derive(Tabled, Serialize)]
struct RankedRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    candidate_id: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Office")]
    #[serde(rename = "Office")]
    office: String,
    #[tabled(rename = "Adjusted Receipts")]
    #[serde(rename = "Adjusted Receipts")]
    receipts: String,
    #[tabled(rename = "Individual")]
    #[serde(rename = "Individual")]
    individual: String,
    #[tabled(rename = "PAC")]
    #[serde(rename = "PAC")]
    pac: String,
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    group: String,
    #[tabled(rename = "Candidates")]
    #[serde(rename = "Candidates")]
    candidates: usize,
    #[tabled(rename = "Adjusted Receipts")]
    #[serde(rename = "Adjusted Receipts")]
    receipts: String,
    #[tabled(rename = "Adjusted Disbursements")]
    #[serde(rename = "Adjusted Disbursements")]
    disbursements: String,
    #[tabled(rename = "Cash on Hand")]
    #[serde(rename = "Cash on Hand")]
    cash_on_hand: String,
    #[tabled(rename = "Debt")]
    #[serde(rename = "Debt")]
    debt: String,
}

#[derive(Tabled, Serialize)]
struct MetricRow {
    #[tabled(rename = "Section")]
    #[serde(rename = "Section")]
    section: String,
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn cycle_label(cycle: i32) -> String {
    if cycle > 0 {
        cycle.to_string()
    } else {
        "-".to_string()
    }
}

fn build_candidate_rows(records: &[&FinancialRecord]) -> Vec<CandidateRow> {
    records
        .iter()
        .map(|r| CandidateRow {
            candidate_id: r.candidate_id.clone(),
            name: r.candidate_name.clone(),
            party: r.party.clone(),
            state: r.state.clone(),
            district: r.district.clone(),
            office: r.office.to_string(),
            cycle: cycle_label(r.cycle),
            receipts: format_compact_currency(adjusted_total_receipts(r)),
            disbursements: format_compact_currency(adjusted_total_disbursements(r)),
            cash_on_hand: format_compact_currency(r.ending_cash),
        })
        .collect()
}

fn build_ranked_rows(records: &[&FinancialRecord]) -> Vec<RankedRow> {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let breakdown = funding_breakdown(r);
            RankedRow {
                rank: idx + 1,
                name: r.candidate_name.clone(),
                candidate_id: r.candidate_id.clone(),
                party: r.party.clone(),
                state: r.state.clone(),
                office: r.office.to_string(),
                receipts: format_currency(adjusted_total_receipts(r)),
                individual: format_percentage(breakdown.individual.percentage),
                pac: format_percentage(breakdown.pac.percentage),
            }
        })
        .collect()
}

fn summary_row(group: String, totals: &GroupTotals) -> SummaryRow {
    SummaryRow {
        group,
        candidates: totals.candidates,
        receipts: format_currency(totals.adjusted_receipts),
        disbursements: format_currency(totals.adjusted_disbursements),
        cash_on_hand: format_currency(totals.cash_on_hand),
        debt: format_currency(totals.debt),
    }
}

fn build_summary_rows(summary: &BatchSummary) -> Vec<SummaryRow> {
    let mut rows = vec![summary_row("All".to_string(), &summary.totals)];
    for (party, totals) in &summary.by_party {
        rows.push(summary_row(format!("party: {}", party), totals));
    }
    for (office, totals) in &summary.by_office {
        rows.push(summary_row(format!("office: {}", office), totals));
    }
    rows
}

fn build_metric_rows(report: &CandidateReport) -> Vec<MetricRow> {
    let mut rows = Vec::new();
    let mut push = |section: &str, metric: &str, value: String| {
        rows.push(MetricRow {
            section: section.to_string(),
            metric: metric.to_string(),
            value,
        });
    };

    let r = &report.record;
    push("Candidate", "Name", r.candidate_name.clone());
    push("Candidate", "ID", r.candidate_id.clone());
    push("Candidate", "Party", format!("{} ({})", r.party(), r.party));
    push("Candidate", "Office", r.office.to_string());
    push("Candidate", "Seat", format!("{}-{}", r.state, r.district));
    push("Candidate", "Status", r.incumbency.to_string());
    push("Candidate", "Cycle", cycle_label(r.cycle));

    let t = &report.analytics.transfers;
    push("Transfers", "Raw receipts", format_currency(t.raw_total_receipts));
    push("Transfers", "Transfers in", format_currency(t.transfers_in));
    push("Transfers", "Adjusted receipts", format_currency(t.adjusted_total_receipts));
    push("Transfers", "Raw disbursements", format_currency(t.raw_total_disbursements));
    push("Transfers", "Transfers out", format_currency(t.transfers_out));
    push(
        "Transfers",
        "Adjusted disbursements",
        format_currency(t.adjusted_total_disbursements),
    );
    push(
        "Transfers",
        "Double counting",
        if t.has_double_counting_issue { "yes" } else { "no" }.to_string(),
    );

    for (source, share) in report.analytics.funding_sources.entries() {
        push(
            "Funding",
            source.label(),
            format!(
                "{} ({})",
                format_currency(share.amount),
                format_percentage(share.percentage)
            ),
        );
    }

    let h = &report.analytics.health;
    push("Health", "Cash on hand", format_currency(h.cash_on_hand));
    push("Health", "Debt", format_currency(h.debt));
    push("Health", "Net position", format_currency(h.net_position));
    push("Health", "Burn rate", format!("{:.2}", h.burn_rate));
    push("Health", "Debt ratio", format!("{:.2}", h.debt_ratio));
    push("Health", "Cash change", format_currency(h.cash_change));

    push(
        "Contributors",
        "Primary source",
        report.contributors.primary_funding_source.label().to_string(),
    );
    let flags = if report.labels.is_empty() {
        "none".to_string()
    } else {
        report.labels.join(", ")
    };
    push("Contributors", "Flags", flags);

    rows
}

// -- Shared renderers --

fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).to_string()
}

fn render_markdown<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    table.to_string()
}

fn write_csv<W: std::io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Candidate lists --

pub fn print_candidates_table(records: &[&FinancialRecord]) {
    println!("{}", render_table(build_candidate_rows(records)));
}

pub fn print_candidates_markdown(records: &[&FinancialRecord]) {
    println!("{}", render_markdown(build_candidate_rows(records)));
}

pub fn print_candidates_csv(records: &[&FinancialRecord]) -> Result<()> {
    write_csv(std::io::stdout(), &build_candidate_rows(records))
}

pub fn print_candidates_xml(records: &[&FinancialRecord]) -> Result<()> {
    println!("{}", xml_output::records_to_xml(records)?);
    Ok(())
}

// -- Rankings --

pub fn print_ranked_table(records: &[&FinancialRecord]) {
    println!("{}", render_table(build_ranked_rows(records)));
}

pub fn print_ranked_markdown(records: &[&FinancialRecord]) {
    println!("{}", render_markdown(build_ranked_rows(records)));
}

pub fn print_ranked_csv(records: &[&FinancialRecord]) -> Result<()> {
    write_csv(std::io::stdout(), &build_ranked_rows(records))
}

// -- Batch summary --

pub fn print_summary_table(summary: &BatchSummary) {
    println!("{}", render_table(build_summary_rows(summary)));
}

pub fn print_summary_markdown(summary: &BatchSummary) {
    println!("{}", render_markdown(build_summary_rows(summary)));
}

pub fn print_summary_csv(summary: &BatchSummary) -> Result<()> {
    write_csv(std::io::stdout(), &build_summary_rows(summary))
}

pub fn print_summary_xml(summary: &BatchSummary) -> Result<()> {
    println!("{}", xml_output::summary_to_xml(summary)?);
    Ok(())
}

// -- Candidate analysis --

pub fn print_report_table(report: &CandidateReport) {
    println!("{}", render_table(build_metric_rows(report)));
}

pub fn print_report_markdown(report: &CandidateReport) {
    println!("{}", render_markdown(build_metric_rows(report)));
}

pub fn print_report_csv(report: &CandidateReport) -> Result<()> {
    write_csv(std::io::stdout(), &build_metric_rows(report))
}

pub fn print_report_xml(report: &CandidateReport) -> Result<()> {
    println!("{}", xml_output::report_to_xml(report)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
