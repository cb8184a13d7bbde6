mod bootstrap;
mod render;
mod settings;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use records_core::models::is_valid_registration_id;
use records_core::seed::sample_billing;
use records_core::visits::summarize_visits_by_month;
use records_store::{PatientStore, StoreSettings};
use settings::{Cli, Command, LastUsedParams};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    tracing::info!("clinic-tools v{} starting", env!("CARGO_PKG_VERSION"));

    let registration_id =
        settings::resolve_registration_id(cli.command.registration_id(), &LastUsedParams::load())?;
    if !is_valid_registration_id(&registration_id) {
        tracing::warn!(
            "Registration id \"{}\" does not match the REG-YYYY-NNNNNN convention",
            registration_id
        );
    }

    let store_settings = StoreSettings::from_env().with_overrides(
        cli.uri.as_deref(),
        cli.database.as_deref(),
        cli.collection.as_deref(),
    );
    let store = PatientStore::connect(&store_settings).await?;

    let Some(patient) = store.find_by_registration_id(&registration_id).await? else {
        println!("Patient not found");
        return Ok(());
    };

    match cli.command {
        Command::Encounters { .. } => {
            print!("{}", render::render_encounters(&patient));
        }

        Command::SeedBilling { .. } => {
            print!("{}", render::render_billing_status(&patient));

            let needs_seed = patient.billing.as_ref().map_or(true, |b| b.is_empty());
            if needs_seed {
                println!();
                println!("Creating sample billing data...");

                let billing = sample_billing(Utc::now());
                if store.set_billing(&registration_id, &billing).await? {
                    println!(
                        "Sample billing data created: {} invoices, {} payments",
                        billing.invoices.len(),
                        billing.payments.len()
                    );
                } else {
                    // The patient vanished between lookup and update.
                    tracing::warn!("No document matched {} during update", registration_id);
                    println!("Patient not found");
                    return Ok(());
                }
            } else {
                println!();
                println!("Billing data already present; nothing to do");
            }
        }

        Command::Visits { .. } => {
            let summaries = summarize_visits_by_month(&patient.encounters);
            print!("{}", render::render_visit_summaries(&summaries));
        }
    }

    let last_used = LastUsedParams {
        registration_id: Some(registration_id),
    };
    if let Err(e) = last_used.save() {
        tracing::warn!("Could not persist last-used params: {}", e);
    }

    Ok(())
}
