//! Shared decision core for the Nagar municipal complaint console.
//!
//! Pure, synchronous, caller-owned data: front-ends pass an actor and a
//! complaint collection in and render what comes back. Nothing here does
//! I/O or holds state across calls.

pub mod analytics;
pub mod assign;
pub mod complaint;
pub mod department;
pub mod error;
pub mod feed;
pub mod geo;
pub mod performance;
pub mod roster;
pub mod sample;
pub mod scope;
pub mod session;
pub mod sla;

pub use assign::{bulk_assign, AssignReport, AssignTarget};
pub use complaint::{Category, Complaint, Priority, Status};
pub use department::{route_department, Department};
pub use error::NagarError;
pub use roster::{nearest_staff, StaffMember};
pub use scope::{scope_complaints, scope_staff, scope_visible};
pub use session::{Actor, Role, Session};
pub use sla::{is_overdue, sla_hours_for};
