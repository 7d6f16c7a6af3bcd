//! Actors and the console session.
//!
//! The session is an explicit value owned by the caller and passed into
//! core operations. The core keeps no ambient login state, which keeps
//! every operation deterministic under test.

use crate::department::Department;
use crate::error::NagarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Access role. The four roles are mutually exclusive; scope rules key
/// off the role alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Unrestricted access to every complaint.
    SuperAdmin,
    /// Scoped to one department.
    DeptAdmin,
    /// Scoped to one ward.
    WardOfficer,
    /// Scoped to own assignments.
    FieldStaff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::DeptAdmin => "DEPT_ADMIN",
            Self::WardOfficer => "WARD_OFFICER",
            Self::FieldStaff => "FIELD_STAFF",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "DEPT_ADMIN" => Ok(Self::DeptAdmin),
            "WARD_OFFICER" => Ok(Self::WardOfficer),
            "FIELD_STAFF" => Ok(Self::FieldStaff),
            _ => Err(NagarError::UnknownRole(s.to_string())),
        }
    }
}

/// The logged-in user as seen by the core: role plus the scope fields
/// that role needs. `department` only matters for dept-admins, `ward`
/// only for ward-officers; a missing scope field matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
}

impl Actor {
    /// Mint an actor with a fresh id.
    pub fn new(name: &str, role: Role, department: Option<Department>, ward: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            role,
            department,
            ward,
        }
    }

    /// Actor with a caller-chosen id (roster logins, tests).
    pub fn with_id(
        id: &str,
        name: &str,
        role: Role,
        department: Option<Department>,
        ward: Option<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            department,
            ward,
        }
    }
}

/// Console session: at most one actor, replaced wholesale on login and
/// cleared on logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
}

impl Session {
    /// Start with no one logged in.
    pub fn empty() -> Self {
        Self { actor: None }
    }

    /// Replace the session with a freshly minted actor.
    pub fn login(
        &mut self,
        name: &str,
        role: Role,
        department: Option<Department>,
        ward: Option<String>,
    ) -> &Actor {
        self.actor.insert(Actor::new(name, role, department, ward))
    }

    /// Clear the session.
    pub fn logout(&mut self) {
        self.actor = None;
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.actor.is_some()
    }
}
