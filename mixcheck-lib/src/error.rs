use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixCheckError {
    EmptyKey,
    UnnormalizedKey(String),
    DuplicateChemical(String),
    DuplicateRule { first: String, second: String },
    RiskOutOfRange { title: String, risk: u8 },
    UnknownReagent(String),
}

pub type Result<T> = std::result::Result<T, MixCheckError>;

impl fmt::Display for MixCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "empty chemical key"),
            Self::UnnormalizedKey(key) => write!(f, "key is not normalized: '{key}'"),
            Self::DuplicateChemical(key) => write!(f, "duplicate chemical: {key}"),
            Self::DuplicateRule { first, second } => {
                write!(f, "duplicate combination rule for '{first}' + '{second}'")
            }
            Self::RiskOutOfRange { title, risk } => {
                write!(f, "risk {risk} of '{title}' out of range [1, 10]")
            }
            Self::UnknownReagent(key) => write!(f, "caution reagent has no chemical record: {key}"),
        }
    }
}

impl std::error::Error for MixCheckError {}
