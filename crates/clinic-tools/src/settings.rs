use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── CLI ────────────────────────────────────────────────────────────────────────

/// Maintenance tools for the clinic patient-records store
#[derive(Parser, Debug, Clone)]
#[command(
    name = "clinic-tools",
    about = "Maintenance tools for the clinic patient-records store",
    version
)]
pub struct Cli {
    /// MongoDB connection string (overrides CLINIC_DB_URI)
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// Database name (overrides CLINIC_DB_NAME)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Collection name (overrides CLINIC_DB_COLLECTION)
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Logging level
    #[arg(long, global = true, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print a patient's encounter history
    Encounters {
        /// Registration id, e.g. REG-2025-370784 (defaults to the last-used id)
        registration_id: Option<String>,
    },
    /// Install sample billing data on a patient that has none
    SeedBilling {
        /// Registration id, e.g. REG-2025-370784 (defaults to the last-used id)
        registration_id: Option<String>,
    },
    /// Print per-month visit counts computed from the encounter history
    Visits {
        /// Registration id, e.g. REG-2025-370784 (defaults to the last-used id)
        registration_id: Option<String>,
    },
}

impl Command {
    /// The registration id argument, if one was given.
    pub fn registration_id(&self) -> Option<&str> {
        match self {
            Command::Encounters { registration_id }
            | Command::SeedBilling { registration_id }
            | Command::Visits { registration_id } => registration_id.as_deref(),
        }
    }
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.clinic-tools/last_used.json`.
///
/// These tools are typically run several times in a row against the same
/// patient, so the registration id may be omitted after the first run.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted params file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the params path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".clinic-tools").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent
    /// directories if needed.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }
}

// ── Registration id resolution ─────────────────────────────────────────────────

/// Resolve the registration id to operate on: an explicit argument wins,
/// otherwise fall back to the persisted last-used id.
pub fn resolve_registration_id(
    explicit: Option<&str>,
    last_used: &LastUsedParams,
) -> anyhow::Result<String> {
    if let Some(id) = explicit {
        return Ok(id.to_string());
    }
    if let Some(id) = &last_used.registration_id {
        tracing::info!("No registration id given; reusing last-used {}", id);
        return Ok(id.clone());
    }
    anyhow::bail!("no registration id given and no last-used id on record")
}
