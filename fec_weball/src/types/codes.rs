//! Coded values carried by FEC candidate summary lines.

use serde::{Deserialize, Serialize};

/// Office sought, as encoded by the first character of an FEC candidate ID.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Office {
    /// US House of Representatives.
    #[serde(rename = "house")]
    House,

    /// US Senate.
    #[serde(rename = "senate")]
    Senate,

    /// President of the United States.
    #[serde(rename = "president")]
    President,

    /// Candidate ID did not carry a recognizable office prefix.
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Office {
    /// Derives the office from a candidate ID prefix (`H`, `S`, `P`).
    pub fn from_candidate_id(candidate_id: &str) -> Self {
        match candidate_id.trim().chars().next() {
            Some('H') | Some('h') => Office::House,
            Some('S') | Some('s') => Office::Senate,
            Some('P') | Some('p') => Office::President,
            _ => Office::Unknown,
        }
    }

    /// Parses an office code or name (`H`, `house`, `S`, `senate`, `P`, `president`).
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "h" | "house" => Office::House,
            "s" | "senate" => Office::Senate,
            "p" | "president" | "presidential" => Office::President,
            _ => Office::Unknown,
        }
    }
}

impl std::fmt::Display for Office {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Office::House => "house",
                Office::Senate => "senate",
                Office::President => "president",
                Office::Unknown => "unknown",
            }
        )
    }
}

/// Incumbent/challenger status (`CAND_ICI`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Incumbency {
    #[serde(rename = "incumbent")]
    Incumbent,

    #[serde(rename = "challenger")]
    Challenger,

    /// Open seat: no incumbent is running.
    #[serde(rename = "open")]
    OpenSeat,

    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Incumbency {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "I" | "i" => Incumbency::Incumbent,
            "C" | "c" => Incumbency::Challenger,
            "O" | "o" => Incumbency::OpenSeat,
            _ => Incumbency::Unknown,
        }
    }
}

impl std::fmt::Display for Incumbency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Incumbency::Incumbent => "incumbent",
                Incumbency::Challenger => "challenger",
                Incumbency::OpenSeat => "open",
                Incumbency::Unknown => "unknown",
            }
        )
    }
}

/// Party affiliation, decoded from the three-letter FEC affiliation code.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Party {
    #[serde(rename = "democrat")]
    Democrat,

    #[serde(rename = "republican")]
    Republican,

    #[serde(rename = "independent")]
    Independent,

    #[serde(rename = "libertarian")]
    Libertarian,

    #[serde(rename = "green")]
    Green,

    /// Any other or unrecognized affiliation code.
    #[serde(rename = "other")]
    Other,
}

impl Party {
    /// Maps an FEC affiliation code (`DEM`, `REP`, `IND`, ...) to a party.
    ///
    /// `DFL` (Minnesota Democratic-Farmer-Labor) is folded into Democrat.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "DEM" | "DFL" => Party::Democrat,
            "REP" => Party::Republican,
            "IND" | "NPA" | "NNE" => Party::Independent,
            "LIB" => Party::Libertarian,
            "GRE" => Party::Green,
            _ => Party::Other,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Party::Democrat => "democrat",
                Party::Republican => "republican",
                Party::Independent => "independent",
                Party::Libertarian => "libertarian",
                Party::Green => "green",
                Party::Other => "other",
            }
        )
    }
}
