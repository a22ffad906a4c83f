//! Entry point for the cross-account DNS A-record inventory agent
//!
//! Enumerates the organization's ACTIVE accounts, assumes the scan role in
//! each one, walks its Route 53 hosted zones, and prints the collected
//! A-record entries as pretty JSON on stdout. Takes no arguments; the base
//! identity comes from the standard AWS environment variables.

use std::process::ExitCode;
use std::sync::Arc;

use dns_recon_aws::{AwsCredentials, OrganizationsClient, StsClient};
use dns_recon_core::adapters::{
    OrganizationsAccountSource, Route53RecordLister, StsCredentialBroker,
};
use dns_recon_core::services::{ScanService, ServiceContext};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (stdout carries the scan results)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting cross-account DNS A-record scan");

    // Base identity for the STS and Organizations calls
    let Some(base_credentials) = AwsCredentials::from_env() else {
        tracing::error!(
            "No base credentials found: set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY"
        );
        return ExitCode::from(2);
    };

    // Create adapters over the wire clients
    let account_source = Arc::new(OrganizationsAccountSource::new(OrganizationsClient::new(
        base_credentials.clone(),
    )));
    let credential_broker = Arc::new(StsCredentialBroker::new(StsClient::new(base_credentials)));
    let record_lister = Arc::new(Route53RecordLister::new());

    // Create service context
    let ctx = Arc::new(ServiceContext::new(
        account_source,
        credential_broker,
        record_lister,
    ));

    // Run one scan
    let entries = ScanService::new(ctx).run().await;
    tracing::info!("Scan finished with {} entries", entries.len());

    // Emit results
    match serde_json::to_string_pretty(&entries) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize results: {}", e);
            ExitCode::FAILURE
        }
    }
}
