mod codes;
pub use self::codes::{Incumbency, Office, Party};

mod record;
pub use self::record::{CandidateID, FinancialRecord};
