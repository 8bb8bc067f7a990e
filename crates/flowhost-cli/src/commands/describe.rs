use anyhow::{bail, Result};

use flowhost_registry::{ProviderDirectory, ServiceOperationProvider};

use crate::startup;

/// Execute the `describe` command: print one operation's manifest as JSON.
pub fn execute(directory: &ProviderDirectory, service: &str, operation: &str) -> Result<()> {
    let provider = startup::lookup(directory, service)?;
    let registry = provider.registry();

    // resolve the canonical name first so the match is case-insensitive
    let descriptor = registry.operation_by_name(operation)?;
    let Some(manifest) = registry
        .manifests()
        .iter()
        .find(|manifest| manifest.name() == descriptor.name)
    else {
        bail!("operation `{operation}` has no manifest");
    };

    println!("{}", serde_json::to_string_pretty(manifest)?);
    Ok(())
}
