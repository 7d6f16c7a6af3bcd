//! Per-staff performance metrics for the leaderboard view.

use crate::complaint::{Complaint, Status};
use crate::department::Department;
use crate::roster::StaffMember;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMetrics {
    pub staff_id: String,
    pub name: String,
    pub department: Option<Department>,
    pub ward: Option<String>,
    pub assigned: usize,
    pub resolved: usize,
    pub overdue: usize,
    /// Share of assignments inside their SLA window, as a rounded
    /// percent. 100 when nothing is assigned.
    pub sla_compliance: u32,
}

/// Compute metrics for each staff member over a complaint collection,
/// sorted by resolved count descending. The sort is stable, so ties
/// keep roster order.
pub fn staff_leaderboard(
    roster: &[StaffMember],
    complaints: &[Complaint],
    now: DateTime<Utc>,
) -> Vec<StaffMetrics> {
    let mut rows: Vec<StaffMetrics> = roster
        .iter()
        .map(|member| {
            let assigned: Vec<&Complaint> = complaints
                .iter()
                .filter(|c| c.assigned_to.as_deref() == Some(member.id.as_str()))
                .collect();
            let resolved = assigned
                .iter()
                .filter(|c| c.status == Status::Resolved)
                .count();
            let overdue = assigned.iter().filter(|c| c.is_overdue(now)).count();
            let sla_compliance = if assigned.is_empty() {
                100
            } else {
                let on_time = assigned.len() - overdue;
                ((on_time as f64 / assigned.len() as f64) * 100.0).round() as u32
            };
            StaffMetrics {
                staff_id: member.id.clone(),
                name: member.name.clone(),
                department: member.department,
                ward: member.ward.clone(),
                assigned: assigned.len(),
                resolved,
                overdue,
                sla_compliance,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.resolved.cmp(&a.resolved));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::update_status;
    use crate::sample::{sample_complaints, sample_staff};

    #[test]
    fn test_unassigned_staff_have_full_compliance() {
        let now = Utc::now();
        let rows = staff_leaderboard(&sample_staff(), &[], now);
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.assigned, 0);
            assert_eq!(row.sla_compliance, 100);
        }
    }

    #[test]
    fn test_assigned_and_resolved_counts() {
        let now = Utc::now();
        let mut complaints = sample_complaints(now);
        update_status(&mut complaints, "c3", Status::Resolved);

        let rows = staff_leaderboard(&sample_staff(), &complaints, now);
        let s3 = rows.iter().find(|r| r.staff_id == "s3").unwrap();
        assert_eq!(s3.assigned, 1);
        assert_eq!(s3.resolved, 1);

        let s1 = rows.iter().find(|r| r.staff_id == "s1").unwrap();
        assert_eq!(s1.assigned, 0);
        assert_eq!(s1.resolved, 0);
    }

    #[test]
    fn test_leaderboard_sorted_by_resolved_desc() {
        let now = Utc::now();
        let mut complaints = sample_complaints(now);
        update_status(&mut complaints, "c3", Status::Resolved);

        let rows = staff_leaderboard(&sample_staff(), &complaints, now);
        assert_eq!(rows[0].staff_id, "s3");
        // Stable on ties: the rest keep roster order.
        let tail: Vec<&str> = rows[1..].iter().map(|r| r.staff_id.as_str()).collect();
        assert_eq!(tail, ["s1", "s2", "s4"]);
    }

    #[test]
    fn test_compliance_drops_with_overdue_assignment() {
        let now = Utc::now();
        let complaints = sample_complaints(now);
        // c2 (assigned to s2) was created 60h ago with a 48h window: overdue.
        let rows = staff_leaderboard(&sample_staff(), &complaints, now);
        let s2 = rows.iter().find(|r| r.staff_id == "s2").unwrap();
        assert_eq!(s2.assigned, 1);
        assert_eq!(s2.overdue, 1);
        assert_eq!(s2.sla_compliance, 0);

        // c4 (assigned to s4) is 10h into a 24h window: on time.
        let s4 = rows.iter().find(|r| r.staff_id == "s4").unwrap();
        assert_eq!(s4.overdue, 0);
        assert_eq!(s4.sla_compliance, 100);
    }
}
