//! The fixed sample billing payload installed by `seed-billing`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Billing, InsurancePolicy, Invoice, InvoiceStatus, Payment};

/// Build the sample billing payload for a patient without billing data.
///
/// Three invoices (one settled, two pending), one payment covering the
/// settled invoice's patient share, a verified insurance policy, and an
/// empty claims list. `now` stamps every record's `createdAt`; passing it in
/// keeps the builder pure so tests can pin the timestamp.
pub fn sample_billing(now: DateTime<Utc>) -> Billing {
    Billing {
        invoices: vec![
            Invoice {
                id: "INV-2025-001".to_string(),
                date: date(2025, 10, 15),
                service: "Comprehensive Eye Exam".to_string(),
                amount: 4200,
                insurance_covered: 3360,
                patient_responsibility: 840,
                status: InvoiceStatus::Paid,
                notes: String::new(),
                created_at: now,
            },
            Invoice {
                id: "INV-2025-002".to_string(),
                date: date(2025, 12, 4),
                service: "OCT Scan - Bilateral".to_string(),
                amount: 7500,
                insurance_covered: 6000,
                patient_responsibility: 1500,
                status: InvoiceStatus::Pending,
                notes: String::new(),
                created_at: now,
            },
            Invoice {
                id: "INV-2025-003".to_string(),
                date: date(2025, 12, 5),
                service: "Visual Field Test".to_string(),
                amount: 3000,
                insurance_covered: 2400,
                patient_responsibility: 600,
                status: InvoiceStatus::Pending,
                notes: String::new(),
                created_at: now,
            },
        ],
        payments: vec![Payment {
            id: "PAY-001".to_string(),
            date: date(2025, 10, 16),
            amount: 840,
            method: "Credit Card".to_string(),
            invoice_id: "INV-2025-001".to_string(),
            notes: String::new(),
            created_at: now,
        }],
        insurance: Some(InsurancePolicy {
            provider: "Blue Cross Blue Shield".to_string(),
            policy_number: "BCBS-123456789".to_string(),
            group_number: "GRP-987654".to_string(),
            coverage_type: "PPO".to_string(),
            copay: "500".to_string(),
            deductible: "25000".to_string(),
            deductible_met: 14500,
            out_of_pocket_max: "85000".to_string(),
            out_of_pocket_met: 20000,
            effective_date: date(2025, 1, 1),
            expiration_date: date(2025, 12, 31),
            coverage_verified: true,
            last_verified: date(2025, 10, 1),
        }),
        claims: vec![],
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("hard-coded date is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        "2025-12-06T08:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_sample_counts() {
        let billing = sample_billing(fixed_now());
        assert_eq!(billing.invoices.len(), 3);
        assert_eq!(billing.payments.len(), 1);
        assert!(billing.insurance.is_some());
        assert!(billing.claims.is_empty());
        assert!(!billing.is_empty());
    }

    #[test]
    fn test_invoice_ids_are_unique() {
        let billing = sample_billing(fixed_now());
        let ids: HashSet<&str> = billing.invoices.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), billing.invoices.len());
    }

    #[test]
    fn test_payment_references_existing_invoice() {
        let billing = sample_billing(fixed_now());
        let payment = &billing.payments[0];
        let invoice = billing
            .invoices
            .iter()
            .find(|i| i.id == payment.invoice_id)
            .expect("payment must reference a sample invoice");
        assert_eq!(payment.amount, invoice.patient_responsibility);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_invoice_amounts_split_consistently() {
        for invoice in sample_billing(fixed_now()).invoices {
            assert_eq!(
                invoice.insurance_covered + invoice.patient_responsibility,
                invoice.amount,
                "invoice {} split does not add up",
                invoice.id
            );
        }
    }

    #[test]
    fn test_created_at_uses_supplied_clock() {
        let now = fixed_now();
        let billing = sample_billing(now);
        assert!(billing.invoices.iter().all(|i| i.created_at == now));
        assert!(billing.payments.iter().all(|p| p.created_at == now));
    }

    #[test]
    fn test_insurance_is_verified_for_current_year() {
        let insurance = sample_billing(fixed_now()).insurance.unwrap();
        assert!(insurance.coverage_verified);
        assert!(insurance.effective_date < insurance.expiration_date);
        assert_eq!(insurance.coverage_type, "PPO");
    }
}
