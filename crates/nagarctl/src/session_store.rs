//! Session persistence.
//!
//! The session lives in a small TOML file under the user config dir and
//! is loaded into an explicit `Session` value for every command. The
//! core never reads it itself.

use anyhow::{Context, Result};
use nagar_core::session::Session;
use std::fs;
use std::path::{Path, PathBuf};

/// Default session file location.
pub fn default_session_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nagar")
        .join("session.toml")
}

/// Load the session; a missing file means nobody is logged in.
pub fn load(path: &Path) -> Result<Session> {
    if !path.exists() {
        return Ok(Session::empty());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading session file {}", path.display()))?;
    let session: Session =
        toml::from_str(&raw).with_context(|| format!("parsing session file {}", path.display()))?;
    Ok(session)
}

/// Persist the session.
pub fn save(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating session dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(session).context("serializing session")?;
    fs::write(path, raw).with_context(|| format!("writing session file {}", path.display()))?;
    Ok(())
}

/// Remove the session file, if any.
pub fn clear(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("removing session file {}", path.display()))?;
    }
    Ok(())
}
