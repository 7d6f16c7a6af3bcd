//! Staff roster and nearest-staff lookup.
//!
//! The roster is owned by the caller; lookups are free functions over a
//! slice so scoping and assignment stay pure.

use crate::department::Department;
use crate::geo::{distance, GeoPoint};
use crate::session::Role;
use serde::{Deserialize, Serialize};

/// A staff member on the municipal roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
    /// Last known field position. Staff without one are never
    /// auto-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl StaffMember {
    pub fn new(id: &str, name: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            department: None,
            ward: None,
            location: None,
        }
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn with_ward(mut self, ward: &str) -> Self {
        self.ward = Some(ward.to_string());
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lng));
        self
    }
}

/// Find a staff member by id.
pub fn staff_by_id<'a>(roster: &'a [StaffMember], id: &str) -> Option<&'a StaffMember> {
    roster.iter().find(|s| s.id == id)
}

/// Nearest staff member of `department` to `point`, by Euclidean distance
/// in raw degree space. Candidates need a known location. Ties go to the
/// first roster member at the minimal distance; returns `None` when the
/// department has no locatable staff.
pub fn nearest_staff(
    roster: &[StaffMember],
    department: Department,
    point: GeoPoint,
) -> Option<&StaffMember> {
    let mut best: Option<(&StaffMember, f64)> = None;
    for member in roster {
        if member.department != Some(department) {
            continue;
        }
        let Some(location) = member.location else {
            continue;
        };
        let d = distance(location, point);
        // Strict < keeps the earliest member on equal distance.
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((member, d));
        }
    }
    best.map(|(member, _)| member)
}
