use anyhow::Result;

use flowhost_registry::{ProviderDirectory, ServiceOperationProvider};
use flowhost_types::api::ApiCapability;

/// Execute the `connectors` command: list registered service providers.
pub fn execute(directory: &ProviderDirectory) -> Result<()> {
    if directory.is_empty() {
        println!("No service providers registered in this build.");
        return Ok(());
    }

    for (service_id, provider) in directory.services() {
        let api = provider.registry().api();
        let capabilities: Vec<&str> = api
            .properties
            .capabilities
            .iter()
            .map(|capability| match capability {
                ApiCapability::Triggers => "Triggers",
                ApiCapability::Actions => "Actions",
            })
            .collect();

        println!(
            "  {} ({})  [{}]",
            api.properties.display_name,
            service_id,
            capabilities.join(", "),
        );
        if !api.properties.description.is_empty() {
            println!("    {}", api.properties.description);
        }
        println!(
            "    Operations: {}  Trigger binding: {}",
            provider.registry().len(),
            provider.trigger_binding_kind(),
        );
    }

    Ok(())
}
