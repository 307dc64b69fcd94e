pub mod analyze;
pub mod db;
pub mod error;
pub(crate) mod knowledge;
pub mod normalize;
pub mod pair;

pub use analyze::AnalysisResult;
pub use db::MixtureDb;
pub use error::{MixCheckError, Result};
pub use mixcheck_data::{
    CautionRule, ChemicalRecord, CombinationRule, HazardStatus, Preset, Verdict,
};
pub use normalize::normalize;
pub use pair::PairKey;
pub use mixcheck_data;
