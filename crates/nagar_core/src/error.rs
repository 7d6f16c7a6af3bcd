//! Error types for the Nagar core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NagarError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Staff member not found in roster: {0}")]
    UnknownStaff(String),

    #[error("Complaint not found: {0}")]
    UnknownComplaint(String),
}
