//! Role-scoped visibility over complaints and staff.
//!
//! Scope resolution is fail-closed: an unauthenticated caller sees
//! nothing, and a scoped role missing its department/ward matches
//! nothing. No scope error is ever raised.

use crate::complaint::Complaint;
use crate::roster::StaffMember;
use crate::session::{Actor, Role};
use tracing::debug;

/// The subset of `complaints` visible to `actor`, order preserved.
pub fn scope_complaints(actor: &Actor, complaints: &[Complaint]) -> Vec<Complaint> {
    let scoped: Vec<Complaint> = match actor.role {
        Role::SuperAdmin => complaints.to_vec(),
        Role::DeptAdmin => complaints
            .iter()
            .filter(|c| actor.department.is_some_and(|d| c.department == d))
            .cloned()
            .collect(),
        Role::WardOfficer => complaints
            .iter()
            .filter(|c| actor.ward.as_deref() == Some(c.location.ward.as_str()))
            .cloned()
            .collect(),
        Role::FieldStaff => complaints
            .iter()
            .filter(|c| c.assigned_to.as_deref() == Some(actor.id.as_str()))
            .cloned()
            .collect(),
    };
    debug!(
        role = %actor.role,
        total = complaints.len(),
        visible = scoped.len(),
        "scoped complaints"
    );
    scoped
}

/// Scope for a possibly-unauthenticated caller. No actor sees nothing.
pub fn scope_visible(actor: Option<&Actor>, complaints: &[Complaint]) -> Vec<Complaint> {
    match actor {
        Some(actor) => scope_complaints(actor, complaints),
        None => Vec::new(),
    }
}

/// The subset of the staff roster visible to `actor`, order preserved.
/// Field staff manage no one and see an empty roster.
pub fn scope_staff(actor: &Actor, roster: &[StaffMember]) -> Vec<StaffMember> {
    match actor.role {
        Role::SuperAdmin => roster.to_vec(),
        Role::DeptAdmin => roster
            .iter()
            .filter(|s| actor.department.is_some() && s.department == actor.department)
            .cloned()
            .collect(),
        Role::WardOfficer => roster
            .iter()
            .filter(|s| actor.ward.is_some() && s.ward == actor.ward)
            .cloned()
            .collect(),
        Role::FieldStaff => Vec::new(),
    }
}
