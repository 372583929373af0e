//! Editor settings loaded from TOML.
//!
//! A settings file may set the log filter and outline a workflow to start
//! from:
//!
//! ```toml
//! log_filter = "leadflow=debug"
//! sample_workflow = false
//!
//! [[statuses]]
//! name = "New"
//! tasks = ["Email Sent", "Follow-up Call"]
//!
//! [[statuses]]
//! name = "Closed"
//!
//! [[transitions]]
//! from = "New"
//! to = "Closed"
//! required = ["Email Sent"]
//! ```

use crate::workflow::{
    ports::IdSource,
    services::{SeedError, WorkflowEditor, WorkflowSeed},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Settings file read when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "leadflow.toml";

/// Environment variable naming an alternative settings file.
pub const SETTINGS_PATH_ENV: &str = "LEADFLOW_SETTINGS";

/// Top-level editor settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Start from the sample workflow when no statuses are listed.
    pub sample_workflow: bool,
    /// Workflow outline to start from.
    #[serde(flatten)]
    pub seed: WorkflowSeed,
}

/// Errors returned while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// Settings file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The settings file is not valid TOML for [`EditorSettings`].
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// Settings file path.
        path: Utf8PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

impl EditorSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text does not describe valid settings.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads settings from `path`. A missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, SettingsError> {
        let loaded = Self::load_optional(path)?;
        log_loaded(path, loaded.as_ref());
        Ok(loaded.unwrap_or_default())
    }

    /// Loads settings from `path` without logging, returning `None` when the
    /// file does not exist.
    ///
    /// Binaries call this before a subscriber is installed, since the
    /// settings choose the log filter, and report the outcome afterwards
    /// with [`log_loaded`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the file cannot be read or parsed.
    pub fn load_optional(path: &Utf8Path) -> Result<Option<Self>, SettingsError> {
        let Some(text) = read_optional(path)? else {
            return Ok(None);
        };
        Self::from_toml_str(&text)
            .map(Some)
            .map_err(|source| SettingsError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    /// Resolves the settings path: an explicit path wins, then
    /// [`SETTINGS_PATH_ENV`], then [`DEFAULT_SETTINGS_FILE`].
    #[must_use]
    pub fn resolve_path(explicit: Option<&str>) -> Utf8PathBuf {
        explicit
            .map(ToOwned::to_owned)
            .or_else(|| std::env::var(SETTINGS_PATH_ENV).ok())
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_SETTINGS_FILE), Utf8PathBuf::from)
    }

    /// Returns the seed the editor should start from.
    ///
    /// With `sample_workflow` set and no statuses listed, the sample statuses
    /// are used and the listed transitions refer to them.
    #[must_use]
    pub fn effective_seed(&self) -> WorkflowSeed {
        if self.sample_workflow && self.seed.statuses.is_empty() {
            WorkflowSeed {
                transitions: self.seed.transitions.clone(),
                ..WorkflowSeed::sample()
            }
        } else {
            self.seed.clone()
        }
    }

    /// Builds an editor from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the workflow outline does not resolve.
    pub fn build_editor<I: IdSource>(&self, ids: Arc<I>) -> Result<WorkflowEditor<I>, SeedError> {
        WorkflowEditor::from_seed(&self.effective_seed(), ids)
    }
}

/// Records the outcome of loading settings from `path`.
pub fn log_loaded(path: &Utf8Path, settings: Option<&EditorSettings>) {
    match settings {
        Some(found) => debug!(
            path = %path,
            statuses = found.seed.statuses.len(),
            transitions = found.seed.transitions.len(),
            "loaded settings"
        ),
        None => debug!(path = %path, "settings file not found; using defaults"),
    }
}

fn read_optional(path: &Utf8Path) -> Result<Option<String>, SettingsError> {
    let read_error = |source: io::Error| SettingsError::Read {
        path: path.to_owned(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(io::Error::other("path must include a file name")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_error(err)),
    };
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(read_error(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::EditorSettings;
    use crate::workflow::services::{SeedStatus, SeedTransition, WorkflowSeed};
    use rstest::rstest;

    #[rstest]
    fn parses_full_settings() {
        let text = r#"
            log_filter = "leadflow=debug"

            [[statuses]]
            name = "New"
            tasks = ["Email Sent", "Follow-up Call"]

            [[statuses]]
            name = "Closed"

            [[transitions]]
            from = "New"
            to = "Closed"
            required = ["Email Sent"]
        "#;

        let settings = EditorSettings::from_toml_str(text).expect("valid settings");

        assert_eq!(settings.log_filter.as_deref(), Some("leadflow=debug"));
        assert!(!settings.sample_workflow);
        assert_eq!(
            settings.seed.statuses,
            vec![
                SeedStatus::new("New").with_tasks(["Email Sent", "Follow-up Call"]),
                SeedStatus::new("Closed"),
            ]
        );
        assert_eq!(
            settings.seed.transitions,
            vec![SeedTransition::new("New", "Closed").requiring(["Email Sent"])]
        );
    }

    #[rstest]
    fn empty_text_yields_defaults() {
        let settings = EditorSettings::from_toml_str("").expect("valid settings");

        assert_eq!(settings, EditorSettings::default());
    }

    #[rstest]
    fn rejects_mistyped_fields() {
        let result = EditorSettings::from_toml_str("sample_workflow = \"yes\"");

        assert!(result.is_err());
    }

    #[rstest]
    fn sample_flag_supplies_statuses_when_none_listed() {
        let settings = EditorSettings {
            sample_workflow: true,
            seed: WorkflowSeed {
                statuses: Vec::new(),
                transitions: vec![SeedTransition::new("New", "Closed")],
            },
            ..EditorSettings::default()
        };

        let seed = settings.effective_seed();

        assert_eq!(seed.statuses, WorkflowSeed::sample().statuses);
        assert_eq!(seed.transitions.len(), 1);
    }

    #[rstest]
    fn listed_statuses_override_sample_flag() {
        let settings = EditorSettings {
            sample_workflow: true,
            seed: WorkflowSeed {
                statuses: vec![SeedStatus::new("Only")],
                transitions: Vec::new(),
            },
            ..EditorSettings::default()
        };

        assert_eq!(settings.effective_seed().statuses, vec![SeedStatus::new("Only")]);
    }

    #[rstest]
    fn explicit_path_wins() {
        assert_eq!(
            EditorSettings::resolve_path(Some("custom.toml")).as_str(),
            "custom.toml"
        );
    }
}
