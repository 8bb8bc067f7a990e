//! Process-wide mapping from service identifiers to provider instances.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use flowhost_types::api::ConnectorIdentity;
use flowhost_types::errors::ProviderError;

use crate::provider::ServiceOperationProvider;

/// All installed connectors, keyed by service id with a service-name index.
///
/// Populated by the host's extension loader during single-threaded startup
/// (`register` takes `&mut self`), then published immutably, typically
/// behind an `Arc`. Entries are never removed; the directory's scope is the
/// process lifetime. Because registration happens-before publication,
/// lookups need no locks.
#[derive(Default)]
pub struct ProviderDirectory {
    /// Service id -> provider, in registration order.
    providers: IndexMap<String, Arc<dyn ServiceOperationProvider>>,
    /// Service name -> service id.
    names: HashMap<String, String>,
}

impl ProviderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a connector under its stable identity. Fails with
    /// [`ProviderError::DuplicateRegistration`] when either the id or the
    /// name is already taken; both are globally unique by contract.
    pub fn register(
        &mut self,
        identity: ConnectorIdentity,
        provider: Arc<dyn ServiceOperationProvider>,
    ) -> Result<(), ProviderError> {
        if self.providers.contains_key(&identity.service_id)
            || self.names.contains_key(&identity.service_name)
        {
            return Err(ProviderError::DuplicateRegistration {
                service_id: identity.service_id,
            });
        }
        info!(
            service_id = %identity.service_id,
            service_name = %identity.service_name,
            operations = provider.registry().len(),
            "registered service provider"
        );
        self.names
            .insert(identity.service_name, identity.service_id.clone());
        self.providers.insert(identity.service_id, provider);
        Ok(())
    }

    /// Look up a provider by service id.
    pub fn lookup(
        &self,
        service_id: &str,
    ) -> Result<Arc<dyn ServiceOperationProvider>, ProviderError> {
        self.providers
            .get(service_id)
            .cloned()
            .ok_or_else(|| ProviderError::ServiceNotFound {
                service: service_id.to_string(),
            })
    }

    /// Look up a provider by service name.
    pub fn lookup_by_name(
        &self,
        service_name: &str,
    ) -> Result<Arc<dyn ServiceOperationProvider>, ProviderError> {
        match self.names.get(service_name) {
            Some(service_id) => self.lookup(service_id),
            None => Err(ProviderError::ServiceNotFound {
                service: service_name.to_string(),
            }),
        }
    }

    /// Registered providers in registration order, for discovery listings.
    pub fn services(
        &self,
    ) -> impl Iterator<Item = (&str, &Arc<dyn ServiceOperationProvider>)> {
        self.providers
            .iter()
            .map(|(service_id, provider)| (service_id.as_str(), provider))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
