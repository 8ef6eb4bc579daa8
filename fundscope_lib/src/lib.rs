//! Library layer for Fundscope: cached record loading, funding analytics,
//! contributor classification, lookups and input validation.
//!
//! Wraps the `fec_weball` decoder crate with record sources (file, HTTP),
//! a single-flight TTL cache, and the analysis functions the CLI renders.

pub mod analytics;
pub mod cache;
pub mod classification;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod report;
pub mod source;
pub mod store;
pub mod summary;
pub mod validation;

pub use fec_weball;
pub use fec_weball::types;
pub use fec_weball::{parse_all_records, parse_with_report, BatchParser, ParseReport, ParsedBatch};

pub use analytics::{calculate_funding_analytics, FundingAnalytics, FundingBreakdown, FundingSource};
pub use classification::{
    get_contributor_analysis, get_contributor_analysis_with, ClassificationThresholds,
    ContributorProfile,
};
pub use config::{ConfigError, Settings};
pub use error::FundscopeError;
pub use lookup::{find_by_candidate_id, find_by_candidate_name, find_by_location};
pub use report::CandidateReport;
pub use source::{FileSource, HttpSource, InlineSource, RecordSource, RetryPolicy, SourceError};
pub use store::RecordStore;
pub use summary::{summarize, top_fundraisers, BatchSummary};
