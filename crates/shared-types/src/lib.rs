pub mod types;

pub use types::{
    AuditOutcome, AuditStatus, BatchResult, Record, RecordInput, RiskBreakdown, RiskLevel,
    Violation,
};
