//! Extension registration.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::deployer::ServiceDeployer;

/// Registry the orchestrator hands to an extension's entry point.
///
/// An extension calls [`ExtensionContext::service`] once per service kind it
/// provides; the orchestrator then resolves manifest entries to deployers by
/// kind.
#[derive(Default)]
pub struct ExtensionContext {
    deployers: HashMap<String, Arc<dyn ServiceDeployer>>,
}

impl std::fmt::Debug for ExtensionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionContext")
            .field("kinds", &self.kinds())
            .finish_non_exhaustive()
    }
}

impl ExtensionContext {
    /// Create a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deployers: HashMap::new(),
        }
    }

    /// Register a deployer under a service kind (e.g. `"s3"`).
    ///
    /// A second registration for the same kind replaces the first.
    pub fn service<D>(&mut self, kind: impl Into<String>, deployer: D)
    where
        D: ServiceDeployer + 'static,
    {
        let kind = kind.into();
        debug!(kind = %kind, "service deployer registered");
        self.deployers.insert(kind, Arc::new(deployer));
    }

    /// Look up the deployer registered for a service kind.
    #[must_use]
    pub fn deployer(&self, kind: &str) -> Option<Arc<dyn ServiceDeployer>> {
        self.deployers.get(kind).cloned()
    }

    /// Registered service kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.deployers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Number of registered deployers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deployers.len()
    }

    /// Whether no deployers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deployers.is_empty()
    }
}
