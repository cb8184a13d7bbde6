//! Console rendering for the three subcommands.
//!
//! Pure string builders; the binary only ever `print!`s their output.

use records_core::models::Patient;
use records_core::visits::MonthlyVisitSummary;

/// Encounter history listing: total count plus one indexed line per record.
pub fn render_encounters(patient: &Patient) -> String {
    let mut out = format!("Total encounters: {}\n", patient.encounters.len());
    for (i, encounter) in patient.encounters.iter().enumerate() {
        let date = encounter.date.as_deref().unwrap_or("unknown");
        let encounter_type = encounter.encounter_type.as_deref().unwrap_or("unknown");
        out.push_str(&format!(
            "{}. date={}, type={}\n",
            i + 1,
            date,
            encounter_type
        ));
    }
    out
}

/// Billing status summary shown before seeding.
pub fn render_billing_status(patient: &Patient) -> String {
    let name = patient
        .patient_details
        .name
        .as_deref()
        .unwrap_or("Unknown");
    let invoices = patient
        .billing
        .as_ref()
        .map(|b| b.invoices.len())
        .unwrap_or(0);
    let payments = patient
        .billing
        .as_ref()
        .map(|b| b.payments.len())
        .unwrap_or(0);

    format!(
        "Patient found: {}\nBilling data exists: {}\nInvoices: {}\nPayments: {}\n",
        name,
        patient.billing.is_some(),
        invoices,
        payments
    )
}

/// Per-month visit counts, one `month=visits` line per month.
pub fn render_visit_summaries(summaries: &[MonthlyVisitSummary]) -> String {
    let mut out = String::from("Visits by month:\n");
    for summary in summaries {
        out.push_str(&format!("  {}={}\n", summary.month, summary.visits));
    }
    out
}
