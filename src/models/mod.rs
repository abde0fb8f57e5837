//! 领域模型模块

pub mod condition;
pub mod knowledge;
pub mod medicine;
pub mod session;
pub mod triage;

pub use condition::ConditionTag;
pub use medicine::MedicineRecord;
pub use session::SessionRecord;
pub use triage::{EmergencyContacts, TriageLevel};
