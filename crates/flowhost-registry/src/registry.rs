//! Per-connector operation lookup at two levels of detail.

use indexmap::IndexMap;

use flowhost_types::api::ServiceApi;
use flowhost_types::errors::ProviderError;
use flowhost_types::manifest::OperationManifest;
use flowhost_types::operation::Operation;

/// One operation at either detail level. Borrows the registered object;
/// listing never re-materializes descriptors or schema trees.
#[derive(Debug, Clone, Copy)]
pub enum OperationRef<'a> {
    Summary(&'a Operation),
    Expanded(&'a OperationManifest),
}

impl<'a> OperationRef<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            OperationRef::Summary(op) => &op.name,
            OperationRef::Expanded(manifest) => manifest.name(),
        }
    }
}

/// A connector's immutable operation set, queryable as a lightweight
/// summary view (keyed, case-insensitive) or an expanded manifest view
/// (ordered, schema included).
///
/// Populated once through [`OperationRegistryBuilder`] at connector
/// construction and read-only thereafter. The summary view exists so that
/// discovery/listing surfaces never materialize the schema trees the
/// manifest view carries.
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    api: ServiceApi,
    /// Lowercased name -> summary descriptor, in registration order.
    summaries: IndexMap<String, Operation>,
    /// Expanded manifests, in registration order.
    manifests: Vec<OperationManifest>,
}

impl OperationRegistry {
    pub fn builder(api: ServiceApi) -> OperationRegistryBuilder {
        OperationRegistryBuilder {
            api,
            summaries: IndexMap::new(),
            manifests: Vec::new(),
        }
    }

    /// The connector-level API descriptor, constant for the registry's
    /// lifetime.
    pub fn api(&self) -> &ServiceApi {
        &self.api
    }

    /// Lightweight descriptors, in registration order.
    pub fn summaries(&self) -> impl Iterator<Item = &Operation> {
        self.summaries.values()
    }

    /// Expanded manifests, in registration order.
    pub fn manifests(&self) -> &[OperationManifest] {
        &self.manifests
    }

    /// Both query modes behind the host's boolean-keyed contract:
    /// `true` yields the expanded manifest view, `false` the summary view.
    pub fn operations(&self, expand_manifest: bool) -> Vec<OperationRef<'_>> {
        if expand_manifest {
            self.manifests.iter().map(OperationRef::Expanded).collect()
        } else {
            self.summaries.values().map(OperationRef::Summary).collect()
        }
    }

    /// Case-insensitive lookup of one operation's summary descriptor.
    pub fn operation_by_name(&self, name: &str) -> Result<&Operation, ProviderError> {
        self.summaries
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| ProviderError::OperationNotFound {
                service_id: self.api.id.clone(),
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}

/// Builder feeding both registry views from one manifest per operation, so
/// the views can never fall out of step.
#[derive(Debug, Clone)]
pub struct OperationRegistryBuilder {
    api: ServiceApi,
    summaries: IndexMap<String, Operation>,
    manifests: Vec<OperationManifest>,
}

impl OperationRegistryBuilder {
    /// Register one operation. The summary view gets the manifest's base
    /// descriptor; a duplicate (case-insensitive) name is a configuration
    /// error.
    pub fn operation(mut self, manifest: OperationManifest) -> Result<Self, ProviderError> {
        let key = manifest.name().to_ascii_lowercase();
        if self.summaries.contains_key(&key) {
            return Err(ProviderError::DuplicateOperation {
                name: manifest.name().to_string(),
            });
        }
        self.summaries.insert(key, manifest.operation.clone());
        self.manifests.push(manifest);
        Ok(self)
    }

    pub fn build(self) -> OperationRegistry {
        OperationRegistry {
            api: self.api,
            summaries: self.summaries,
            manifests: self.manifests,
        }
    }
}
