//! Bulk assignment and status transitions.
//!
//! Assignment is the only operation here that mutates complaint state.
//! Each complaint is updated atomically: status and assignee change
//! together or not at all. A nearest-search miss leaves the complaint
//! untouched and reports it as skipped.

use crate::complaint::{Complaint, Status};
use crate::department::route_department;
use crate::error::NagarError;
use crate::roster::{nearest_staff, staff_by_id, StaffMember};
use tracing::{debug, warn};

/// How the assignee is chosen for a bulk assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// Route each complaint's category to its department and pick the
    /// nearest locatable staff member.
    Nearest,
    /// Assign everything to one explicitly chosen staff member.
    Staff(String),
}

/// What a bulk assignment did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignReport {
    /// `(complaint id, staff id)` pairs that were updated.
    pub assigned: Vec<(String, String)>,
    /// Complaint ids left untouched: no eligible staff, or id not in
    /// the collection.
    pub skipped: Vec<String>,
}

impl AssignReport {
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Assign the selected complaints, setting `status = ASSIGNED` and
/// `assigned_to` together.
///
/// For `AssignTarget::Staff` the id must exist in the roster; an unknown
/// id is a caller error and nothing is modified. For
/// `AssignTarget::Nearest` a department with no locatable staff is not
/// an error: the complaint stays as it was and shows up in
/// `AssignReport::skipped`.
pub fn bulk_assign(
    complaints: &mut [Complaint],
    ids: &[String],
    target: &AssignTarget,
    roster: &[StaffMember],
) -> Result<AssignReport, NagarError> {
    if let AssignTarget::Staff(staff_id) = target {
        if staff_by_id(roster, staff_id).is_none() {
            return Err(NagarError::UnknownStaff(staff_id.clone()));
        }
    }

    let mut report = AssignReport::default();
    for id in ids {
        let Some(complaint) = complaints.iter_mut().find(|c| &c.id == id) else {
            warn!(complaint = %id, "bulk assign: id not in collection");
            report.skipped.push(id.clone());
            continue;
        };

        let staff_id = match target {
            AssignTarget::Staff(staff_id) => Some(staff_id.clone()),
            AssignTarget::Nearest => {
                let department = route_department(complaint.category);
                nearest_staff(roster, department, complaint.location.point())
                    .map(|s| s.id.clone())
            }
        };

        match staff_id {
            Some(staff_id) => {
                complaint.status = Status::Assigned;
                complaint.assigned_to = Some(staff_id.clone());
                debug!(complaint = %id, staff = %staff_id, "assigned");
                report.assigned.push((id.clone(), staff_id));
            }
            None => {
                debug!(complaint = %id, "no eligible staff, left unassigned");
                report.skipped.push(id.clone());
            }
        }
    }
    Ok(report)
}

/// Set a complaint's status directly. Transitions are deliberately not
/// restricted to forward moves; `Status::is_forward` lets callers warn.
/// Returns false when the id is not in the collection.
pub fn update_status(complaints: &mut [Complaint], id: &str, status: Status) -> bool {
    match complaints.iter_mut().find(|c| c.id == id) {
        Some(complaint) => {
            if !complaint.status.is_forward(status) && complaint.status != status {
                debug!(complaint = %id, from = %complaint.status, to = %status, "backward status move");
            }
            complaint.status = status;
            true
        }
        None => false,
    }
}
