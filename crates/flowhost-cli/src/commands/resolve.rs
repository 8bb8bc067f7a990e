use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use flowhost_registry::{ConnectionParameters, ProviderDirectory, ServiceOperationProvider};

use crate::startup;

/// Execute the `resolve` command: resolve one connection parameter value
/// from a JSON parameter file, the way the trigger binding would.
pub fn execute(
    directory: &ProviderDirectory,
    service: &str,
    operation: &str,
    parameter: &str,
    params_path: &Path,
) -> Result<()> {
    let provider = startup::lookup(directory, service)?;

    let raw = std::fs::read_to_string(params_path)
        .with_context(|| format!("reading {}", params_path.display()))?;
    let supplied: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", params_path.display()))?;
    let Value::Object(fields) = supplied else {
        anyhow::bail!("{} must contain a JSON object", params_path.display());
    };
    let parameters: ConnectionParameters = fields.into_iter().collect();

    let value = provider.binding_connection_value(operation, parameter, &parameters)?;
    println!("{value}");
    Ok(())
}
