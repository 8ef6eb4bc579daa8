use anyhow::Result;
use clap::Args;
use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{find_by_location, validation};

use crate::output::{
    print_candidates_csv, print_candidates_markdown, print_candidates_table, print_candidates_xml,
    print_json, OutputFormat,
};

#[derive(Args)]
pub struct LocationArgs {
    /// State code (e.g. CA, TX, NY; US for presidential)
    #[arg(long)]
    pub state: String,

    /// District number, or AL / 00 for at-large
    #[arg(long)]
    pub district: Option<String>,
}

pub fn run(args: &LocationArgs, records: &[FinancialRecord], format: &OutputFormat) -> Result<()> {
    let state = validation::validate_state(&args.state)?;
    let district = match args.district {
        Some(ref d) => Some(validation::validate_district(d)?),
        None => None,
    };

    let found = find_by_location(records, &state, district.as_deref());

    match &district {
        Some(d) => eprintln!("{} records in {}-{}", found.len(), state, d),
        None => eprintln!("{} records in {}", found.len(), state),
    }

    match format {
        OutputFormat::Table => print_candidates_table(&found),
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Csv => print_candidates_csv(&found)?,
        OutputFormat::Markdown => print_candidates_markdown(&found),
        OutputFormat::Xml => print_candidates_xml(&found)?,
    }

    Ok(())
}
