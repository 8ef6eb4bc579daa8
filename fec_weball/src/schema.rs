//! Column layout of FEC candidate summary files.
//!
//! The bulk files are positional: column meaning comes from order, not from a
//! header row. A [`Schema`] is the ordered list of columns for one published
//! layout, so a layout change is a new constant rather than new decoding code.

/// How a column's raw text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed text.
    Text,
    /// Dollar amount; blank or unparsable becomes `0.0`.
    Amount,
    /// Percentage value; blank or unparsable becomes `0.0`.
    Percent,
    /// Calendar date; unparsable becomes `None`.
    Date,
    /// Whole number; blank or unparsable becomes `0`.
    Integer,
}

/// A column that can appear in a candidate summary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CandidateId,
    CandidateName,
    IncumbentChallenger,
    PartyCode,
    PartyAffiliation,
    TotalReceipts,
    TransfersFromAuthorized,
    TotalDisbursements,
    TransfersToAuthorized,
    BeginningCash,
    EndingCash,
    CandidateContributions,
    CandidateLoans,
    OtherLoans,
    CandidateLoanRepayments,
    OtherLoanRepayments,
    DebtsOwed,
    IndividualContributions,
    State,
    District,
    SpecialElection,
    PrimaryElection,
    RunoffElection,
    GeneralElection,
    GeneralElectionPercent,
    PacContributions,
    PartyContributions,
    CoverageStartDate,
    CoverageEndDate,
    IndividualRefunds,
    CommitteeRefunds,
    TotalLoans,
    Office,
    Cycle,
}

impl Field {
    /// Column name as published in the FEC data dictionary.
    pub fn name(self) -> &'static str {
        match self {
            Field::CandidateId => "CAND_ID",
            Field::CandidateName => "CAND_NAME",
            Field::IncumbentChallenger => "CAND_ICI",
            Field::PartyCode => "PTY_CD",
            Field::PartyAffiliation => "CAND_PTY_AFFILIATION",
            Field::TotalReceipts => "TTL_RECEIPTS",
            Field::TransfersFromAuthorized => "TRANS_FROM_AUTH",
            Field::TotalDisbursements => "TTL_DISB",
            Field::TransfersToAuthorized => "TRANS_TO_AUTH",
            Field::BeginningCash => "COH_BOP",
            Field::EndingCash => "COH_COP",
            Field::CandidateContributions => "CAND_CONTRIB",
            Field::CandidateLoans => "CAND_LOANS",
            Field::OtherLoans => "OTHER_LOANS",
            Field::CandidateLoanRepayments => "CAND_LOAN_REPAY",
            Field::OtherLoanRepayments => "OTHER_LOAN_REPAY",
            Field::DebtsOwed => "DEBTS_OWED_BY",
            Field::IndividualContributions => "TTL_INDIV_CONTRIB",
            Field::State => "CAND_OFFICE_ST",
            Field::District => "CAND_OFFICE_DISTRICT",
            Field::SpecialElection => "SPEC_ELECTION",
            Field::PrimaryElection => "PRIM_ELECTION",
            Field::RunoffElection => "RUN_ELECTION",
            Field::GeneralElection => "GEN_ELECTION",
            Field::GeneralElectionPercent => "GEN_ELECTION_PRECENT",
            Field::PacContributions => "OTHER_POL_CMTE_CONTRIB",
            Field::PartyContributions => "POL_PTY_CONTRIB",
            Field::CoverageStartDate => "CVG_START_DT",
            Field::CoverageEndDate => "CVG_END_DT",
            Field::IndividualRefunds => "INDIV_REFUNDS",
            Field::CommitteeRefunds => "CMTE_REFUNDS",
            Field::TotalLoans => "TTL_LOANS",
            Field::Office => "CAND_OFFICE",
            Field::Cycle => "CAND_ELECTION_YR",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::CandidateId
            | Field::CandidateName
            | Field::IncumbentChallenger
            | Field::PartyCode
            | Field::PartyAffiliation
            | Field::State
            | Field::District
            | Field::SpecialElection
            | Field::PrimaryElection
            | Field::RunoffElection
            | Field::GeneralElection
            | Field::Office => FieldKind::Text,
            Field::GeneralElectionPercent => FieldKind::Percent,
            Field::CoverageStartDate | Field::CoverageEndDate => FieldKind::Date,
            Field::Cycle => FieldKind::Integer,
            Field::TotalReceipts
            | Field::TransfersFromAuthorized
            | Field::TotalDisbursements
            | Field::TransfersToAuthorized
            | Field::BeginningCash
            | Field::EndingCash
            | Field::CandidateContributions
            | Field::CandidateLoans
            | Field::OtherLoans
            | Field::CandidateLoanRepayments
            | Field::OtherLoanRepayments
            | Field::DebtsOwed
            | Field::IndividualContributions
            | Field::PacContributions
            | Field::PartyContributions
            | Field::IndividualRefunds
            | Field::CommitteeRefunds
            | Field::TotalLoans => FieldKind::Amount,
        }
    }
}

/// An ordered, versioned column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub version: &'static str,
    pub fields: &'static [Field],
}

const WEBALL_FIELDS: &[Field] = &[
    Field::CandidateId,
    Field::CandidateName,
    Field::IncumbentChallenger,
    Field::PartyCode,
    Field::PartyAffiliation,
    Field::TotalReceipts,
    Field::TransfersFromAuthorized,
    Field::TotalDisbursements,
    Field::TransfersToAuthorized,
    Field::BeginningCash,
    Field::EndingCash,
    Field::CandidateContributions,
    Field::CandidateLoans,
    Field::OtherLoans,
    Field::CandidateLoanRepayments,
    Field::OtherLoanRepayments,
    Field::DebtsOwed,
    Field::IndividualContributions,
    Field::State,
    Field::District,
    Field::SpecialElection,
    Field::PrimaryElection,
    Field::RunoffElection,
    Field::GeneralElection,
    Field::GeneralElectionPercent,
    Field::PacContributions,
    Field::PartyContributions,
    Field::CoverageEndDate,
    Field::IndividualRefunds,
    Field::CommitteeRefunds,
];

impl Schema {
    /// All-candidates summary file (`weballYY.txt`), 30 columns.
    pub const WEBALL: Schema = Schema {
        version: "weball-2016",
        fields: WEBALL_FIELDS,
    };

    /// Number of columns a line must carry to decode.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Position of `field` in this layout.
    pub fn position(&self, field: Field) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::WEBALL
    }
}
