use anyhow::Result;
use clap::Args;
use fundscope_lib::summarize;
use fundscope_lib::types::FinancialRecord;

use crate::output::{
    print_json, print_summary_csv, print_summary_markdown, print_summary_table, print_summary_xml,
    OutputFormat,
};

#[derive(Args)]
pub struct SummaryArgs {}

pub fn run(_args: &SummaryArgs, records: &[FinancialRecord], format: &OutputFormat) -> Result<()> {
    let summary = summarize(records);

    eprintln!(
        "{} candidates, {} with inter-committee transfers ({} removed from receipts)",
        summary.totals.candidates,
        summary.with_transfers,
        fundscope_lib::format::format_currency(summary.transfers_removed)
    );

    match format {
        OutputFormat::Table => print_summary_table(&summary),
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Csv => print_summary_csv(&summary)?,
        OutputFormat::Markdown => print_summary_markdown(&summary),
        OutputFormat::Xml => print_summary_xml(&summary)?,
    }

    Ok(())
}
