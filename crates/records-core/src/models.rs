use bson::oid::ObjectId;
use bson::Document;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A patient document as stored in the records collection.
///
/// Field names in the store are camelCase; unknown fields are ignored on
/// deserialization so documents may carry data these tools do not model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Store-assigned document id, absent on documents built in memory.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique lookup key, canonically of the form `REG-YYYY-NNNNNN`.
    pub registration_id: String,
    /// Demographic sub-document.
    #[serde(default)]
    pub patient_details: PatientDetails,
    /// Recorded clinical interactions, oldest-first by convention but no
    /// ordering is relied upon.
    #[serde(default)]
    pub encounters: Vec<Encounter>,
    /// Billing sub-document; absent until seeded or billed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
}

/// Demographics carried on the patient document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One recorded clinical interaction.
///
/// `date` is kept as the raw stored string; parsing is the aggregation
/// layer's concern and tolerates malformed values (see [`crate::dates`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    #[serde(default)]
    pub date: Option<String>,
    /// Free-text classification, e.g. "follow-up".
    #[serde(rename = "type", default)]
    pub encounter_type: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Billing sub-document: invoices, payments, insurance, and opaque claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub insurance: Option<InsurancePolicy>,
    /// Claims are passed through untyped; no tool inspects them.
    #[serde(default)]
    pub claims: Vec<Document>,
}

impl Billing {
    /// True when there are no invoices.
    ///
    /// This is the seeding predicate: a billing sub-document with an empty
    /// invoice list counts as "no billing data".
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

/// A single invoice. Amounts are whole currency units, as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub date: NaiveDate,
    pub service: String,
    pub amount: i64,
    pub insurance_covered: i64,
    pub patient_responsibility: i64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Invoice settlement state as stored (lowercase strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    /// Any stored value these tools do not recognise.
    #[serde(other)]
    Unknown,
}

/// A payment applied against an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub method: String,
    pub invoice_id: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// An insurance policy on file.
///
/// The string/number split mirrors the stored documents exactly: copay,
/// deductible, and out-of-pocket maximum are stored as strings, the
/// met-so-far counters as numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub provider: String,
    pub policy_number: String,
    pub group_number: String,
    pub coverage_type: String,
    pub copay: String,
    pub deductible: String,
    pub deductible_met: i64,
    pub out_of_pocket_max: String,
    pub out_of_pocket_met: i64,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub coverage_verified: bool,
    pub last_verified: NaiveDate,
}

/// Check a registration id against the `REG-YYYY-NNNNNN` convention.
///
/// Advisory only: callers warn on a nonstandard id and proceed, since the
/// store lookup is authoritative.
pub fn is_valid_registration_id(id: &str) -> bool {
    let re = Regex::new(r"^REG-\d{4}-\d{6}$").expect("regex is valid");
    re.is_match(id)
}
