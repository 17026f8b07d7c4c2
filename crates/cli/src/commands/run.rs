use std::path::PathBuf;

use anyhow::Result;
use beacon_core::{execute_pipeline, ProviderRegistry};
use clap::Parser;

const DEFAULT_CONFIG_PATH: &str = "/etc/beacon/beacon.yml";

/// Resolve the configured lookup and rewrite all target files
#[derive(Debug, Parser)]
pub struct RunCommand {
    /// Path to the beacon configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,
}

impl RunCommand {
    pub fn execute(&self) -> Result<i32> {
        let registry = ProviderRegistry::new();

        match execute_pipeline(&self.config, &registry) {
            Ok(report) => {
                println!("external address: {}", report.external_address);
                for path in &report.files_updated {
                    println!("updated {path}");
                }
                Ok(0)
            }
            Err(error) => {
                // Surface the whole cause chain.
                let error = anyhow::Error::new(error);
                eprintln!("beacon run failed: {error:#}");
                Ok(1)
            }
        }
    }
}
