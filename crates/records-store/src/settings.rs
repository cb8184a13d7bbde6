/// Connection settings for the patient-records store.
///
/// Resolved from the environment with sensible local defaults; explicit CLI
/// values are applied on top via [`StoreSettings::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// MongoDB connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Patient collection name.
    pub collection: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "clinic".to_string(),
            collection: "patients".to_string(),
        }
    }
}

impl StoreSettings {
    /// Resolve settings from `CLINIC_DB_URI`, `CLINIC_DB_NAME`, and
    /// `CLINIC_DB_COLLECTION`, falling back to the defaults for any unset
    /// variable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("CLINIC_DB_URI").unwrap_or(defaults.uri),
            database: std::env::var("CLINIC_DB_NAME").unwrap_or(defaults.database),
            collection: std::env::var("CLINIC_DB_COLLECTION").unwrap_or(defaults.collection),
        }
    }

    /// Apply explicit values on top of the resolved settings. `None` leaves
    /// the existing value in place.
    pub fn with_overrides(
        mut self,
        uri: Option<&str>,
        database: Option<&str>,
        collection: Option<&str>,
    ) -> Self {
        if let Some(uri) = uri {
            self.uri = uri.to_string();
        }
        if let Some(database) = database {
            self.database = database.to_string();
        }
        if let Some(collection) = collection {
            self.collection = collection.to_string();
        }
        self
    }
}
