//! Context and output types exchanged between the orchestrator and deployers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::DeployResult;
use crate::events::EventOutputs;
use crate::policy::PolicyStatement;
use crate::types::AccountContext;

/// Everything a deployer knows about one service instance in a manifest.
///
/// Built by the orchestrator from the deployment manifest and handed to every
/// lifecycle operation. Parameters stay loosely typed here; deployers pull
/// their own config out with [`ServiceContext::typed_params`].
///
/// # Examples
///
/// ```
/// use gantry_core::ServiceContext;
///
/// let ctx = ServiceContext::builder()
///     .app_name("orders")
///     .environment_name("prod")
///     .service_name("uploads")
///     .service_kind("s3")
///     .params(serde_json::json!({"bucket_name": "orders-uploads"}))
///     .build();
/// assert_eq!(ctx.service_name, "uploads");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContext {
    /// Application the service belongs to.
    #[builder(setter(into))]
    pub app_name: String,
    /// Environment within the application.
    #[builder(setter(into))]
    pub environment_name: String,
    /// Name of this service instance in the manifest.
    #[builder(setter(into))]
    pub service_name: String,
    /// Registered kind of the deployer handling the service (e.g. `"s3"`).
    #[builder(setter(into))]
    pub service_kind: String,
    /// Raw service parameters from the manifest.
    #[builder(default = serde_json::Value::Null)]
    pub params: serde_json::Value,
    /// Account and region the deployment targets.
    #[builder(default)]
    pub account: AccountContext,
}

impl ServiceContext {
    /// Deserialize the service parameters into a typed config.
    ///
    /// # Errors
    /// Returns [`crate::DeployError::InvalidConfig`] if the parameters do not
    /// match `T`.
    pub fn typed_params<T: serde::de::DeserializeOwned>(&self) -> DeployResult<T> {
        serde_json::from_value(self.params.clone())
            .map_err(|e| crate::DeployError::invalid_config(e.to_string()))
    }
}

/// Output bundle a service publishes after a successful deploy.
///
/// Dependents read the environment variables and policy statements; event
/// producers and consumers additionally read [`EventOutputs`] when wiring
/// subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOutputs {
    /// Name of the service that produced this bundle.
    pub service_name: String,
    /// Environment variables injected into dependent services.
    pub env_vars: HashMap<String, String>,
    /// Policy statements granted to dependent services.
    pub policies: Vec<PolicyStatement>,
    /// Event wiring record, present only for event-capable services.
    pub event_outputs: Option<EventOutputs>,
}

impl DeployOutputs {
    /// Create an empty output bundle for `service_name`.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            env_vars: HashMap::new(),
            policies: Vec::new(),
            event_outputs: None,
        }
    }

    /// Add one environment variable.
    pub fn add_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Add one policy statement.
    pub fn add_policy(&mut self, statement: PolicyStatement) {
        self.policies.push(statement);
    }
}

/// Acknowledgment that event production between two services was configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceEventsAck {
    /// Service producing events.
    pub producer_service_name: String,
    /// Service consuming them.
    pub consumer_service_name: String,
}

impl ProduceEventsAck {
    /// Create a new acknowledgment.
    #[must_use]
    pub fn new(
        producer_service_name: impl Into<String>,
        consumer_service_name: impl Into<String>,
    ) -> Self {
        Self {
            producer_service_name: producer_service_name.into(),
            consumer_service_name: consumer_service_name.into(),
        }
    }
}

/// Acknowledgment that a service finished its un-deploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnDeployAck {
    /// Service that was un-deployed.
    pub service_name: String,
}

impl UnDeployAck {
    /// Create a new acknowledgment.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}
