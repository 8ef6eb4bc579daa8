//! Single-line decoder for pipe-delimited candidate summary lines.

use chrono::{Datelike, NaiveDate};

use crate::errors::DecodeError;
use crate::schema::{Field, FieldKind, Schema};
use crate::types::{FinancialRecord, Incumbency, Office};

/// Column separator used by FEC bulk files.
pub const DELIMITER: char = '|';

/// Decodes one line using the weball layout.
pub fn decode_line(line: &str) -> Result<FinancialRecord, DecodeError> {
    decode_line_with(&Schema::WEBALL, line, None)
}

/// Decodes one line against `schema`. `cycle` applies when the layout has no
/// cycle column.
pub fn decode_line_with(
    schema: &Schema,
    line: &str,
    cycle: Option<i32>,
) -> Result<FinancialRecord, DecodeError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    decode_fields(schema, &fields, cycle)
}

/// Decodes already-split columns. Columns beyond the layout are ignored.
pub(crate) fn decode_fields(
    schema: &Schema,
    fields: &[&str],
    cycle: Option<i32>,
) -> Result<FinancialRecord, DecodeError> {
    if fields.len() < schema.len() {
        return Err(DecodeError::Truncated {
            expected: schema.len(),
            found: fields.len(),
        });
    }

    let mut record = FinancialRecord::default();
    for (field, raw) in schema.fields.iter().zip(fields) {
        assign(&mut record, *field, raw);
    }

    if record.candidate_id.is_empty() {
        return Err(DecodeError::MissingCandidateId);
    }

    fill_derived(&mut record, schema, cycle);
    Ok(record)
}

fn assign(record: &mut FinancialRecord, field: Field, raw: &str) {
    match field.kind() {
        FieldKind::Text => assign_text(record, field, raw.trim()),
        FieldKind::Amount | FieldKind::Percent => {
            if let Some(slot) = amount_slot(record, field) {
                *slot = parse_amount(raw);
            }
        }
        FieldKind::Date => {
            let date = parse_date(raw);
            match field {
                Field::CoverageStartDate => record.coverage_start = date,
                Field::CoverageEndDate => record.coverage_end = date,
                _ => {}
            }
        }
        FieldKind::Integer => {
            if field == Field::Cycle {
                record.cycle = parse_integer(raw);
            }
        }
    }
}

fn assign_text(record: &mut FinancialRecord, field: Field, value: &str) {
    match field {
        Field::CandidateId => record.candidate_id = value.to_uppercase(),
        Field::CandidateName => record.candidate_name = value.to_string(),
        Field::IncumbentChallenger => record.incumbency = Incumbency::from_code(value),
        Field::PartyCode => record.party_code = value.to_string(),
        Field::PartyAffiliation => record.party = value.to_uppercase(),
        Field::State => record.state = value.to_uppercase(),
        Field::District => record.district = value.to_string(),
        Field::SpecialElection => record.special_election = value.to_string(),
        Field::PrimaryElection => record.primary_election = value.to_string(),
        Field::RunoffElection => record.runoff_election = value.to_string(),
        Field::GeneralElection => record.general_election = value.to_string(),
        Field::Office => record.office = Office::from_code(value),
        _ => {}
    }
}

fn amount_slot(record: &mut FinancialRecord, field: Field) -> Option<&mut f64> {
    let slot = match field {
        Field::TotalReceipts => &mut record.total_receipts,
        Field::TransfersFromAuthorized => &mut record.transfers_from_authorized,
        Field::TotalDisbursements => &mut record.total_disbursements,
        Field::TransfersToAuthorized => &mut record.transfers_to_authorized,
        Field::BeginningCash => &mut record.beginning_cash,
        Field::EndingCash => &mut record.ending_cash,
        Field::CandidateContributions => &mut record.candidate_contributions,
        Field::CandidateLoans => &mut record.candidate_loans,
        Field::OtherLoans => &mut record.other_loans,
        Field::CandidateLoanRepayments => &mut record.candidate_loan_repayments,
        Field::OtherLoanRepayments => &mut record.other_loan_repayments,
        Field::DebtsOwed => &mut record.debts_owed,
        Field::IndividualContributions => &mut record.individual_contributions,
        Field::PacContributions => &mut record.pac_contributions,
        Field::PartyContributions => &mut record.party_contributions,
        Field::IndividualRefunds => &mut record.individual_refunds,
        Field::CommitteeRefunds => &mut record.committee_refunds,
        Field::TotalLoans => &mut record.total_loans,
        Field::GeneralElectionPercent => &mut record.general_election_percent,
        _ => return None,
    };
    Some(slot)
}

/// Fills values the layout does not carry: total loans, office and cycle.
fn fill_derived(record: &mut FinancialRecord, schema: &Schema, cycle: Option<i32>) {
    if !schema.contains(Field::TotalLoans) {
        record.total_loans = record.candidate_loans + record.other_loans;
    }
    if record.office == Office::Unknown {
        record.office = Office::from_candidate_id(&record.candidate_id);
    }
    if record.cycle == 0 {
        record.cycle = cycle
            .or_else(|| record.coverage_end.map(|d| cycle_for_year(d.year())))
            .unwrap_or(0);
    }
}

/// Election cycles end on even years; odd years roll forward.
pub fn cycle_for_year(year: i32) -> i32 {
    year + year.rem_euclid(2)
}

/// Parses a dollar amount. Blank or unparsable input is `0.0`.
///
/// Commas, `$` and surrounding whitespace are tolerated, and a parenthesized
/// value is read as negative.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    let cleaned = cleaned.trim();
    let (negative, digits) = match cleaned.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        Some(inner) => (true, inner.trim()),
        None => (false, cleaned),
    };
    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            if negative {
                -v
            } else {
                v
            }
        }
        _ => 0.0,
    }
}

/// Parses a coverage date.
///
/// Accepts `MM/DD/YYYY`, ISO `YYYY-MM-DD`, and 8-digit `YYYYMMDD` or
/// `MMDDYYYY`. Anything else is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(raw, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%m%d%Y"))
            .ok();
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

fn parse_integer(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
