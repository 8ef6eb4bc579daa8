//! Decoder and batch parser for FEC candidate summary bulk files.
//!
//! The `weball` all-candidates file is pipe-delimited with a fixed column
//! order. [`decode_line`] turns one line into a [`types::FinancialRecord`];
//! [`parse_all_records`] and [`BatchParser`] handle whole files, skipping and
//! counting lines that fail to decode.

mod decode;
mod errors;
mod parse;
pub mod schema;
pub mod types;

pub use self::decode::{
    cycle_for_year, decode_line, decode_line_with, parse_amount, parse_date, DELIMITER,
};
pub use self::errors::DecodeError;
pub use self::parse::{parse_all_records, parse_with_report, BatchParser, ParseReport, ParsedBatch};
pub use self::schema::{Field, FieldKind, Schema};
