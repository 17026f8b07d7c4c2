//! The sequential run pipeline: load, resolve, rewrite

use std::path::Path;

use tracing::info;

use crate::config;
use crate::lookup;
use crate::provider::ProviderRegistry;
use crate::rewrite;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// The discovered externally reachable address
    pub external_address: String,
    /// Target files rewritten, in processing order
    pub files_updated: Vec<String>,
}

/// Execute one full run: load the configuration at `config_path`, resolve
/// its lookup descriptor through `registry`, and rewrite every target file
/// with the discovered address.
///
/// Strictly sequential: one lookup per run, then the targets in list order.
/// The first error of any class aborts the run.
pub fn execute_pipeline(
    config_path: &Path,
    registry: &ProviderRegistry,
) -> crate::Result<PipelineReport> {
    let config = config::load_config(config_path)?;
    let descriptor = lookup::parse_lookup(&config.lookup)?;
    let address = registry.resolve(&descriptor)?;
    info!(address = %address.external_address, "resolved external address");

    rewrite::rewrite_target_files(
        &address.external_address,
        &config.target_files,
        config.backup_enabled(),
    )?;

    Ok(PipelineReport {
        external_address: address.external_address,
        files_updated: config.target_files,
    })
}
