//! Typed access to the patient collection.

use mongodb::bson::{doc, to_bson, Document};
use mongodb::{Client, Collection};
use tracing::debug;

use records_core::models::{Billing, Patient};

use crate::error::{Result, StoreError};
use crate::settings::StoreSettings;

/// Handle on the patient collection.
///
/// One point lookup and one single-document update; no transactions, no
/// ordering guarantees across calls.
pub struct PatientStore {
    patients: Collection<Patient>,
}

impl PatientStore {
    /// Connect to the store described by `settings` and select the typed
    /// patient collection.
    pub async fn connect(settings: &StoreSettings) -> Result<Self> {
        if settings.uri.is_empty() {
            return Err(StoreError::Config("connection URI is empty".to_string()));
        }

        let client = Client::with_uri_str(&settings.uri).await?;
        let patients = client
            .database(&settings.database)
            .collection::<Patient>(&settings.collection);

        debug!(
            "Connected to {}/{}.{}",
            settings.uri, settings.database, settings.collection
        );

        Ok(Self { patients })
    }

    /// Look up a patient by registration id.
    ///
    /// `None` means no such patient — a normal outcome, not an error.
    pub async fn find_by_registration_id(&self, registration_id: &str) -> Result<Option<Patient>> {
        let patient = self
            .patients
            .find_one(Self::registration_filter(registration_id), None)
            .await?;
        debug!(
            "Lookup for {}: {}",
            registration_id,
            if patient.is_some() { "found" } else { "absent" }
        );
        Ok(patient)
    }

    /// Set the `billing` sub-document on a patient.
    ///
    /// Returns whether a document matched the registration id.
    pub async fn set_billing(&self, registration_id: &str, billing: &Billing) -> Result<bool> {
        let update = Self::billing_update(billing)?;
        let result = self
            .patients
            .update_one(Self::registration_filter(registration_id), update, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    // ── Document builders ─────────────────────────────────────────────────────

    /// Filter selecting a patient by its unique registration id.
    pub fn registration_filter(registration_id: &str) -> Document {
        doc! { "registrationId": registration_id }
    }

    /// `$set` update installing a billing sub-document.
    pub fn billing_update(billing: &Billing) -> Result<Document> {
        Ok(doc! { "$set": { "billing": to_bson(billing)? } })
    }
}
