//! Complaint/roster data provider.
//!
//! A JSON file plays the role of the backing data layer. Without one the
//! console runs on the built-in sample feed, and mutations live only for
//! the duration of the command.

use anyhow::{Context, Result};
use chrono::Utc;
use nagar_core::complaint::Complaint;
use nagar_core::roster::StaffMember;
use nagar_core::sample::{sample_complaints, sample_staff};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of the data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub complaints: Vec<Complaint>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

/// Loaded working set plus where it came from.
#[derive(Debug)]
pub struct Store {
    pub complaints: Vec<Complaint>,
    pub staff: Vec<StaffMember>,
    path: Option<PathBuf>,
}

impl Store {
    /// Load from `path`, or fall back to the sample fixture.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading data file {}", path.display()))?;
                let data: DataFile = serde_json::from_str(&raw)
                    .with_context(|| format!("parsing data file {}", path.display()))?;
                debug!(
                    complaints = data.complaints.len(),
                    staff = data.staff.len(),
                    "loaded data file"
                );
                Ok(Self {
                    complaints: data.complaints,
                    staff: data.staff,
                    path: Some(path.to_path_buf()),
                })
            }
            None => Ok(Self {
                complaints: sample_complaints(Utc::now()),
                staff: sample_staff(),
                path: None,
            }),
        }
    }

    /// Whether mutations survive this process.
    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Write the working set back to its data file. A no-op for the
    /// in-memory sample feed.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = DataFile {
            complaints: self.complaints.clone(),
            staff: self.staff.clone(),
        };
        let raw = serde_json::to_string_pretty(&data).context("serializing data file")?;
        fs::write(path, raw).with_context(|| format!("writing data file {}", path.display()))?;
        debug!(path = %path.display(), "saved data file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nagar_core::assign::{bulk_assign, AssignTarget};

    #[test]
    fn test_sample_store_is_not_persistent() {
        let store = Store::load(None).unwrap();
        assert!(!store.is_persistent());
        assert_eq!(store.complaints.len(), 4);
        assert_eq!(store.staff.len(), 4);
        store.save().unwrap();
    }

    #[test]
    fn test_data_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("city.json");

        let sample = Store::load(None).unwrap();
        let initial = DataFile {
            complaints: sample.complaints.clone(),
            staff: sample.staff.clone(),
        };
        fs::write(&path, serde_json::to_string(&initial).unwrap()).unwrap();

        let mut store = Store::load(Some(&path)).unwrap();
        assert!(store.is_persistent());

        bulk_assign(
            &mut store.complaints,
            &["c2".to_string()],
            &AssignTarget::Nearest,
            &store.staff,
        )
        .unwrap();
        store.save().unwrap();

        let reloaded = Store::load(Some(&path)).unwrap();
        let c2 = reloaded.complaints.iter().find(|c| c.id == "c2").unwrap();
        assert_eq!(c2.assigned_to.as_deref(), Some("s2"));
    }

    #[test]
    fn test_missing_data_file_is_an_error() {
        assert!(Store::load(Some(Path::new("/nonexistent/city.json"))).is_err());
    }

    #[test]
    fn test_data_file_fields_default_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();
        let store = Store::load(Some(&path)).unwrap();
        assert!(store.complaints.is_empty());
        assert!(store.staff.is_empty());
    }
}
