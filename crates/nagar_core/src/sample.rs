//! Built-in sample data for demos and tests.
//!
//! Fixed roster and a four-complaint feed. Complaint ages are offsets
//! from a caller-supplied `now`, so tests control the clock.

use crate::complaint::{
    AttachmentKind, Category, Complaint, Location, Priority, Reporter, Status,
};
use crate::department::Department;
use crate::roster::StaffMember;
use crate::session::Role;
use chrono::{DateTime, Duration, Utc};

/// The sample staff roster.
pub fn sample_staff() -> Vec<StaffMember> {
    vec![
        StaffMember::new("s1", "A. Sharma", Role::WardOfficer)
            .with_department(Department::Roads)
            .with_ward("W-12")
            .with_location(19.0825, 72.7411),
        StaffMember::new("s2", "B. Patel", Role::WardOfficer)
            .with_department(Department::Sanitation)
            .with_ward("W-07")
            .with_location(19.104, 72.85),
        StaffMember::new("s3", "C. Rao", Role::FieldStaff)
            .with_department(Department::Streetlights)
            .with_ward("W-22")
            .with_location(19.097, 72.88),
        StaffMember::new("s4", "D. Singh", Role::FieldStaff)
            .with_department(Department::Water)
            .with_ward("W-03")
            .with_location(19.12, 72.78),
    ]
}

fn location(lat: f64, lng: f64, ward: &str, zone: &str) -> Location {
    Location {
        lat,
        lng,
        ward: ward.to_string(),
        zone: zone.to_string(),
    }
}

/// The sample complaint feed, aged relative to `now`.
pub fn sample_complaints(now: DateTime<Utc>) -> Vec<Complaint> {
    let mut c1 = Complaint::new(
        "c1",
        "Pothole near bus stop",
        "Large pothole causing traffic jams.",
        Category::Pothole,
        Priority::High,
        now - Duration::hours(36),
        location(19.1, 72.86, "W-12", "Zone A"),
    )
    .with_attachment(AttachmentKind::Image, "/placeholder.svg")
    .with_reporter(Reporter {
        name: Some("R. Mehta".to_string()),
        contact: Some("+91-98XXXXXX".to_string()),
        anonymous: false,
    });
    c1.updated_at = now;

    let mut c2 = Complaint::new(
        "c2",
        "Garbage not collected",
        "Overflowing garbage bins for 3 days.",
        Category::Garbage,
        Priority::Medium,
        now - Duration::hours(60),
        location(19.2, 72.92, "W-07", "Zone B"),
    )
    .with_status(Status::Assigned)
    .with_attachment(AttachmentKind::Image, "/placeholder.svg")
    .with_reporter(Reporter {
        name: None,
        contact: None,
        anonymous: true,
    })
    .with_assignee("s2");
    c2.updated_at = now;

    let mut c3 = Complaint::new(
        "c3",
        "Streetlight flickering",
        "Streetlight near park is flickering at night.",
        Category::Streetlight,
        Priority::Low,
        now - Duration::hours(5),
        location(19.05, 72.81, "W-22", "Zone C"),
    )
    .with_status(Status::InProgress)
    .with_attachment(AttachmentKind::Image, "/placeholder.svg")
    .with_assignee("s3");
    c3.updated_at = now;

    let mut c4 = Complaint::new(
        "c4",
        "Water leakage",
        "Leakage visible on main road.",
        Category::Water,
        Priority::High,
        now - Duration::hours(10),
        location(19.18, 72.98, "W-03", "Zone D"),
    )
    .with_status(Status::Accepted)
    .with_attachment(AttachmentKind::Image, "/placeholder.svg")
    .with_assignee("s4");
    c4.updated_at = now;

    vec![c1, c2, c3, c4]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::route_department;

    #[test]
    fn test_sample_departments_follow_routing_table() {
        let complaints = sample_complaints(Utc::now());
        for c in &complaints {
            assert_eq!(c.department, route_department(c.category));
        }
    }

    #[test]
    fn test_sample_sla_windows() {
        let complaints = sample_complaints(Utc::now());
        let by_id = |id: &str| complaints.iter().find(|c| c.id == id).unwrap();
        assert_eq!(by_id("c1").sla_hours, 16);
        assert_eq!(by_id("c2").sla_hours, 48);
        assert_eq!(by_id("c3").sla_hours, 72);
        assert_eq!(by_id("c4").sla_hours, 24);
    }

    #[test]
    fn test_sample_assignees_exist_and_match_department() {
        let complaints = sample_complaints(Utc::now());
        let roster = sample_staff();
        for c in &complaints {
            if let Some(assignee) = &c.assigned_to {
                let staff = crate::roster::staff_by_id(&roster, assignee).unwrap();
                assert_eq!(staff.department, Some(c.department));
            }
        }
    }

    #[test]
    fn test_sample_overdue_profile() {
        let now = Utc::now();
        let complaints = sample_complaints(now);
        let by_id = |id: &str| complaints.iter().find(|c| c.id == id).unwrap();
        // 36h old with a 16h window, 60h old with 48h: both overdue.
        assert!(by_id("c1").is_overdue(now));
        assert!(by_id("c2").is_overdue(now));
        // 5h into 72h, 10h into 24h: inside the window.
        assert!(!by_id("c3").is_overdue(now));
        assert!(!by_id("c4").is_overdue(now));
    }
}
