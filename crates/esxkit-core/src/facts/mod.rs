// ── Fact gathering ──
//
// A static registry maps each category name to a collector. Collectors
// fetch the raw blocks they need and hand them to a pure extractor that
// builds the category document. Adding a category is one registry row
// plus its extractor.

pub mod datastore;
pub mod host;
pub mod network;
pub mod storage;

pub use datastore::{DatastoreFacts, datastore_facts};
pub use host::{HardwareFacts, hardware_facts};
pub use network::{NetworkFacts, network_facts};
pub use storage::{StorageFacts, storage_facts};

use futures_util::future::BoxFuture;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::CoreError;
use crate::session::HostHandle;

/// Category name -> category document, in selection order.
pub type FactDocument = IndexMap<String, Value>;

type Collect = for<'a> fn(&'a HostHandle) -> BoxFuture<'a, Result<Value, CoreError>>;

/// One registered fact category.
pub struct FactCategory {
    pub name: &'static str,
    pub collect: Collect,
}

impl std::fmt::Debug for FactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactCategory").field("name", &self.name).finish()
    }
}

/// Every known category, in the order `all` expands to.
pub static REGISTRY: &[FactCategory] = &[
    FactCategory {
        name: "system",
        collect: collect_system,
    },
    FactCategory {
        name: "hardware",
        collect: collect_hardware,
    },
    FactCategory {
        name: "network",
        collect: collect_network,
    },
    FactCategory {
        name: "storage",
        collect: collect_storage,
    },
    FactCategory {
        name: "datastore",
        collect: collect_datastore,
    },
];

/// Names of all registered categories.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|c| c.name)
}

/// Which categories to gather.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FactSelection {
    #[default]
    All,
    Only(Vec<String>),
}

impl FactSelection {
    /// Parse a list of names; a lone `all` selects everything.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() || names.iter().any(|n| n == "all") {
            Self::All
        } else {
            Self::Only(names)
        }
    }

    /// Resolve to registry entries. Unknown names fail before any
    /// remote call is made.
    pub fn resolve(&self) -> Result<Vec<&'static FactCategory>, CoreError> {
        match self {
            Self::All => Ok(REGISTRY.iter().collect()),
            Self::Only(names) => names
                .iter()
                .map(|name| {
                    REGISTRY
                        .iter()
                        .find(|c| c.name == name.as_str())
                        .ok_or_else(|| CoreError::ValidationFailed {
                            message: format!(
                                "unknown fact category '{name}' (expected one of: all, {})",
                                category_names().collect::<Vec<_>>().join(", ")
                            ),
                        })
                })
                .collect(),
        }
    }
}

/// Collect every selected category into one document.
///
/// The first remote fault aborts the whole gather.
pub async fn gather(host: &HostHandle, selection: &FactSelection) -> Result<FactDocument, CoreError> {
    let categories = selection.resolve()?;
    let mut doc = FactDocument::new();
    for category in categories {
        debug!(category = category.name, "collecting facts");
        let value = (category.collect)(host).await?;
        doc.insert(category.name.to_owned(), value);
    }
    Ok(doc)
}

// ── Collectors ───────────────────────────────────────────────────────

fn collect_system(host: &HostHandle) -> BoxFuture<'_, Result<Value, CoreError>> {
    Box::pin(async move {
        let about = host.client().get_product_info(host.id()).await?;
        to_document(&about)
    })
}

fn collect_hardware(host: &HostHandle) -> BoxFuture<'_, Result<Value, CoreError>> {
    Box::pin(async move {
        let summary = host.client().get_hardware_summary(host.id()).await?;
        to_document(&hardware_facts(&summary))
    })
}

fn collect_network(host: &HostHandle) -> BoxFuture<'_, Result<Value, CoreError>> {
    Box::pin(async move {
        let info = host.client().get_network_info(host.id()).await?;
        to_document(&network_facts(&info))
    })
}

fn collect_storage(host: &HostHandle) -> BoxFuture<'_, Result<Value, CoreError>> {
    Box::pin(async move {
        let info = host.client().get_storage_info(host.id()).await?;
        to_document(&storage_facts(&info))
    })
}

fn collect_datastore(host: &HostHandle) -> BoxFuture<'_, Result<Value, CoreError>> {
    Box::pin(async move {
        let datastores = host.client().list_datastores(host.id()).await?;
        to_document(&datastore_facts(&datastores))
    })
}

fn to_document(facts: &impl Serialize) -> Result<Value, CoreError> {
    serde_json::to_value(facts).map_err(|e| CoreError::Internal(format!("fact encoding: {e}")))
}
