//! 服务模块

pub mod assembler;
pub mod classifier;
pub mod places;
pub mod session_log;
pub mod triage;

pub use assembler::{
    AnalysisResult, MedicineResult, RemedyResult, TriageAssembler, create_triage_assembler,
};
pub use places::{ChemistFinder, ChemistResult, GooglePlacesFinder, create_chemist_finder};
pub use session_log::{DEFAULT_LIMIT, SessionLog};
