use anyhow::Result;
use clap::Args;
use fundscope_lib::lookup::suggest_candidate_names;
use fundscope_lib::types::FinancialRecord;
use fundscope_lib::{find_by_candidate_name, validation};

use crate::output::{
    print_candidates_csv, print_candidates_markdown, print_candidates_table, print_candidates_xml,
    print_json, OutputFormat,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Candidate name, in any order (e.g. "John Smith" or "SMITH, JOHN")
    #[arg(long)]
    pub name: String,
}

pub fn run(args: &SearchArgs, records: &[FinancialRecord], format: &OutputFormat) -> Result<()> {
    let query = validation::validate_search(&args.name)?;
    let found = find_by_candidate_name(records, &query);

    eprintln!("{} matching records", found.len());
    if found.is_empty() {
        let suggestions = suggest_candidate_names(records, &query, 3);
        if !suggestions.is_empty() {
            let names: Vec<&str> = suggestions.iter().map(|(name, _)| name.as_str()).collect();
            eprintln!("Did you mean: {}?", names.join("; "));
        }
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
