//! wfsync CLI - Command-line interface
//!
//! This binary reads WFS layers as GeoJSON and writes edits back as WFS-T
//! transactions using the wfsync library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wfsync::wfs::TransactionOperation;

use commands::config::ConfigCommands;
use commands::edit::EditArgs;
use commands::read::ReadArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "wfsync")]
#[command(version = wfsync::VERSION)]
#[command(about = "Read and edit WFS point layers", long_about = None)]
struct Cli {
    /// Configuration file to use instead of ~/.wfsync/config.ini
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every feature of a layer as a GeoJSON FeatureCollection
    Read(ReadArgs),

    /// Insert new Point features from a GeoJSON file
    Insert(EditArgs),

    /// Update existing Point features from a GeoJSON file
    Update(EditArgs),

    /// Delete features (not supported by the transaction builder)
    Delete(EditArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        e.exit();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config { command } => commands::config::run(command, config_path),
        Commands::Read(args) => {
            let runner = CliRunner::new(config_path, cli.verbose)?;
            commands::read::run(&runner, args).await
        }
        Commands::Insert(args) => {
            edit(config_path, cli.verbose, TransactionOperation::Insert, args).await
        }
        Commands::Update(args) => {
            edit(config_path, cli.verbose, TransactionOperation::Update, args).await
        }
        Commands::Delete(args) => {
            edit(config_path, cli.verbose, TransactionOperation::Delete, args).await
        }
    }
}

async fn edit(
    config_path: Option<&Path>,
    verbose: bool,
    operation: TransactionOperation,
    args: EditArgs,
) -> Result<(), CliError> {
    let runner = CliRunner::new(config_path, verbose)?;
    commands::edit::run(&runner, operation, args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wfsync",
            "update",
            "fire_hydrants",
            "edits.geojson",
            "--dry-run",
            "--config",
            "/tmp/wfsync.ini",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wfsync.ini")));
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.layer, "fire_hydrants");
                assert_eq!(args.file, PathBuf::from("edits.geojson"));
                assert!(args.dry_run);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_parse_read_output() {
        let cli =
            Cli::try_parse_from(["wfsync", "read", "fire_hydrants", "-o", "out.json"]).unwrap();

        match cli.command {
            Commands::Read(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected read command"),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["wfsync", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Init { force: true }
            }
        ));
    }
}
