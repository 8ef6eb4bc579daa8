use anyhow::{bail, Result};
use clap::Args;
use fundscope_lib::lookup::{primary_record_for_name, suggest_candidate_names};
use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{find_by_candidate_id, validation, CandidateReport, ClassificationThresholds};

use crate::output::{
    print_json, print_report_csv, print_report_markdown, print_report_table, print_report_xml,
    OutputFormat,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Candidate name; the first matching record in file order is analyzed
    #[arg(long, conflicts_with = "id", required_unless_present = "id")]
    pub name: Option<String>,

    /// FEC candidate ID (e.g. H0CA12001)
    #[arg(long)]
    pub id: Option<String>,
}

fn select<'a>(args: &AnalyzeArgs, records: &'a [FinancialRecord]) -> Result<&'a FinancialRecord> {
    if let Some(ref id) = args.id {
        let id = validation::validate_candidate_id(id)?;
        return match find_by_candidate_id(records, &id) {
            Some(record) => Ok(record),
            None => bail!("no record for candidate id {}", id),
        };
    }

    let name = validation::validate_search(args.name.as_deref().unwrap_or_default())?;
    match primary_record_for_name(records, &name) {
        Some(record) => Ok(record),
        None => {
            let suggestions = suggest_candidate_names(records, &name, 3);
            if suggestions.is_empty() {
                bail!("no candidate matches '{}'", name);
            }
            let names: Vec<&str> = suggestions.iter().map(|(n, _)| n.as_str()).collect();
            bail!(
                "no candidate matches '{}'. Did you mean: {}?",
                name,
                names.join("; ")
            )
        }
    }
}

pub fn run(
    args: &AnalyzeArgs,
    records: &[FinancialRecord],
    thresholds: &ClassificationThresholds,
    format: &OutputFormat,
) -> Result<()> {
    let record = select(args, records)?;
    let report = CandidateReport::build(record, thresholds);

    match format {
        OutputFormat::Table => print_report_table(&report),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_report_csv(&report)?,
        OutputFormat::Markdown => print_report_markdown(&report),
        OutputFormat::Xml => print_report_xml(&report)?,
    }

    Ok(())
}
