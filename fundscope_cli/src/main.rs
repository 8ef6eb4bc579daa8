mod commands;
mod output;
mod xml_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fundscope_lib::{validation, BatchParser, RecordStore, Settings};

use crate::commands::Input;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fundscope")]
#[command(about = "Analyze FEC candidate summary (weball) files")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to a weball file
    #[arg(long, env = "FUNDSCOPE_FILE", global = true)]
    file: Option<PathBuf>,

    /// URL of a weball file
    #[arg(long, env = "FUNDSCOPE_URL", global = true)]
    url: Option<String>,

    /// Election cycle assigned to every record, replacing the one derived from coverage dates
    #[arg(long, global = true)]
    cycle: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Totals by party and office with transfers removed
    Summary(commands::summary::SummaryArgs),
    /// Find candidates by name
    Search(commands::search::SearchArgs),
    /// List candidates for a state or district
    Location(commands::location::LocationArgs),
    /// Funding analysis and contributor profile for one candidate
    Analyze(commands::analyze::AnalyzeArgs),
    /// Rank candidates by adjusted receipts
    Top(commands::top::TopArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fundscope=info".parse()?)
                .add_directive("fec_weball=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;
    let settings = Settings::from_env()?;

    let mut parser = BatchParser::new();
    if let Some(cycle) = cli.cycle {
        parser = parser.with_cycle(validation::validate_cycle(cycle)?);
    }
    let store = RecordStore::from_settings(&settings).with_parser(parser);

    let input = Input::from_args(cli.file.clone(), cli.url.as_deref(), &settings)?;
    let batch = input.load(&store).await?;
    commands::report_skipped(&batch);
    let records = batch.records.as_slice();

    match &cli.command {
        Commands::Summary(args) => commands::summary::run(args, records, &format)?,
        Commands::Search(args) => commands::search::run(args, records, &format)?,
        Commands::Location(args) => commands::location::run(args, records, &format)?,
        Commands::Analyze(args) => {
            commands::analyze::run(args, records, &settings.thresholds, &format)?
        }
        Commands::Top(args) => commands::top::run(args, records, &format)?,
    }

    Ok(())
}
