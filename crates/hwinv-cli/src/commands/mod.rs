//! Subcommand implementations
//!
//! Every command runs against one repository opened over the configured
//! data directory. Mutating commands wait for their write before returning.

pub mod hardware;
pub mod listing;

use std::sync::Arc;

use anyhow::Result;
use hwinv_store::{FsKv, HardwareRepository, LoadOutcome};

use crate::config::Config;

/// Open and initialize the repository under `config.data_dir`
///
/// # Errors
///
/// Fails only if no Tokio runtime is available; an unreadable store is
/// reported on stderr and treated as empty.
pub async fn open_repository(config: &Config) -> Result<HardwareRepository<FsKv>> {
    let kv = Arc::new(FsKv::new(config.data_dir.clone()));
    let mut repo = HardwareRepository::new(kv)?;

    if let LoadOutcome::Recovered { error } = repo.initialize().await {
        eprintln!(
            "Warning: stored inventory could not be loaded, starting empty ({})",
            error
        );
    }

    Ok(repo)
}
