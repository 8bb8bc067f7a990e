//! Startup wiring: build the provider directory before any command runs.
//!
//! This is the in-binary stand-in for the host's extension loader - each
//! connector registers exactly once, then the directory is read-only.

use std::sync::Arc;

use anyhow::{Context, Result};

use flowhost_registry::{ProviderDirectory, ServiceOperationProvider};

pub fn directory() -> Result<ProviderDirectory> {
    let mut directory = ProviderDirectory::new();
    trigger_cosmos::register(&mut directory).context("registering the Cosmos DB connector")?;
    Ok(directory)
}

/// Resolve a provider by service id or, failing that, by service name.
pub fn lookup(
    directory: &ProviderDirectory,
    service: &str,
) -> Result<Arc<dyn ServiceOperationProvider>> {
    directory
        .lookup(service)
        .or_else(|_| directory.lookup_by_name(service))
        .with_context(|| format!("no service provider registered under `{service}`"))
}
