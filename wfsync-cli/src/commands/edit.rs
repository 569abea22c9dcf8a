//! Insert, update and delete commands - write GeoJSON edits back as WFS-T.

use clap::Args;
use std::path::PathBuf;
use tracing::info;
use wfsync::wfs::{ServerAck, TransactionOperation};

use super::common::load_features;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments shared by the insert, update and delete commands.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Layer (feature type) name without the workspace prefix, e.g. fire_hydrants
    pub layer: String,

    /// GeoJSON file holding a FeatureCollection or a single Feature
    pub file: PathBuf,

    /// Print the transaction document instead of submitting it
    #[arg(long)]
    pub dry_run: bool,
}

/// Run an edit command for `operation`.
pub async fn run(
    runner: &CliRunner,
    operation: TransactionOperation,
    args: EditArgs,
) -> Result<(), CliError> {
    runner.log_startup(&operation.to_string());
    let service = runner.create_service()?;

    let features = load_features(&args.file)?;
    info!(
        file = %args.file.display(),
        features = features.len(),
        "Loaded features"
    );

    let document = service.build_transaction(&features, operation, &args.layer)?;
    if document.dropped_count() > 0 {
        eprintln!(
            "Skipped {} of {} feature(s) that cannot be written",
            document.dropped_count(),
            features.len()
        );
    }

    if args.dry_run {
        println!("{}", document.to_pretty_xml()?);
        return Ok(());
    }

    let ack = service
        .submit(&document)
        .await
        .map_err(|e| CliError::Sync(e.into()))?;
    print_ack(operation, &args.layer, document.fragment_count(), &ack);
    Ok(())
}

fn print_ack(operation: TransactionOperation, layer: &str, fragments: usize, ack: &ServerAck) {
    println!("{} of {} feature(s) on {} succeeded", operation, fragments, layer);

    if !ack.inserted_ids.is_empty() {
        let ids: Vec<String> = ack.inserted_ids.iter().map(ToString::to_string).collect();
        println!("Inserted ids: {}", ids.join(", "));
    }
    if let Some(message) = &ack.message {
        println!("Server message: {}", message);
    }
}
