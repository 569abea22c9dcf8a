//! Read command - fetch a layer as GeoJSON.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::common::write_output;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the read command.
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Layer (feature type) name without the workspace prefix, e.g. fire_hydrants
    pub layer: String,

    /// Write the FeatureCollection to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the read command.
pub async fn run(runner: &CliRunner, args: ReadArgs) -> Result<(), CliError> {
    runner.log_startup("read");
    let service = runner.create_service()?;

    let collection = service.read_features(&args.layer).await?;

    let json =
        serde_json::to_string_pretty(&collection).map_err(|e| CliError::Output(e.to_string()))?;
    write_output(args.output.as_deref(), &json)?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), "Features written");
        eprintln!(
            "Wrote {} feature(s) from {} to {}",
            collection.len(),
            args.layer,
            path.display()
        );
    }
    Ok(())
}
