use anyhow::Result;
use clap::Args;
use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{top_fundraisers, validation};

use crate::output::{
    print_candidates_xml, print_json, print_ranked_csv, print_ranked_markdown, print_ranked_table,
    OutputFormat,
};

#[derive(Args)]
pub struct TopArgs {
    /// Number of candidates to show
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Only candidates running in this state
    #[arg(long)]
    pub state: Option<String>,

    /// Only candidates for this office: house (h), senate (s), president (p)
    #[arg(long)]
    pub office: Option<String>,
}

pub fn run(args: &TopArgs, records: &[FinancialRecord], format: &OutputFormat) -> Result<()> {
    let limit = validation::validate_limit(args.limit)?;
    let state = match args.state {
        Some(ref s) => Some(validation::validate_state(s)?),
        None => None,
    };
    let office = match args.office {
        Some(ref o) => Some(validation::validate_office(o)?),
        None => None,
    };

    let filtered: Vec<FinancialRecord> = records
        .iter()
        .filter(|r| state.as_deref().map_or(true, |s| r.state.eq_ignore_ascii_case(s)))
        .filter(|r| office.map_or(true, |o| r.office == o))
        .cloned()
        .collect();
    let ranked = top_fundraisers(&filtered, limit);

    eprintln!("Top {} of {} candidates by adjusted receipts", ranked.len(), filtered.len());

    match format {
        OutputFormat::Table => print_ranked_table(&ranked),
        OutputFormat::Json => print_json(&ranked)?,
        OutputFormat::Csv => print_ranked_csv(&ranked)?,
        OutputFormat::Markdown => print_ranked_markdown(&ranked),
        OutputFormat::Xml => print_candidates_xml(&ranked)?,
    }

    Ok(())
}
