use anyhow::Result;

use flowhost_registry::{OperationRef, ProviderDirectory, ServiceOperationProvider};
use flowhost_types::operation::OperationKind;

use crate::startup;

/// Execute the `operations` command: list one provider's operations, as
/// summaries or as full manifest JSON.
pub fn execute(directory: &ProviderDirectory, service: &str, manifest: bool) -> Result<()> {
    let provider = startup::lookup(directory, service)?;
    let registry = provider.registry();

    if manifest {
        let manifests = registry.manifests();
        println!("{}", serde_json::to_string_pretty(manifests)?);
        return Ok(());
    }

    for operation in registry.operations(false) {
        if let OperationRef::Summary(op) = operation {
            let kind = match op.kind {
                OperationKind::Trigger { mode } => format!("trigger/{mode:?}").to_lowercase(),
                OperationKind::Action => "action".to_string(),
            };
            println!("  {}  [{}]", op.name, kind);
            if !op.summary.is_empty() {
                println!("    {}", op.summary);
            }
        }
    }

    Ok(())
}
