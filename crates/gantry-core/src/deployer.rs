//! The service deployer contract.
//!
//! [`ServiceDeployer`] uses `#[async_trait]` because deployers must be
//! object-safe: the orchestrator stores them behind `dyn` in an
//! [`crate::ExtensionContext`] and dispatches lifecycle calls by service kind.

use serde::{Deserialize, Serialize};

use crate::context::{DeployOutputs, ProduceEventsAck, ServiceContext, UnDeployAck};
use crate::error::DeployResult;
use crate::events::{EventSubscriptionRequest, ServiceEventType};

/// Categories of deploy output a service can consume from its dependencies
/// or produce for its dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeployOutputType {
    /// Environment variables injected into the dependent.
    EnvironmentVariables,
    /// Scripts run in the dependent's startup.
    Scripts,
    /// IAM policy statements attached to the dependent's role.
    Policies,
    /// Credentials handed to the dependent.
    Credentials,
    /// Security groups opened toward the dependent.
    SecurityGroups,
}

/// Lifecycle contract implemented by every pluggable service type.
///
/// The orchestrator drives each service through validate → deploy →
/// produce-events (once per declared consumer) → un-deploy. Capability
/// accessors are queried up front to wire the deploy graph; the defaults
/// describe a service with no dependencies and no event participation, so
/// implementations only override what they actually do.
#[async_trait::async_trait]
pub trait ServiceDeployer: Send + Sync {
    /// Deploy output categories this service reads from its dependencies.
    fn consumed_deploy_output_types(&self) -> &[DeployOutputType] {
        &[]
    }

    /// Deploy output categories this service publishes for its dependents.
    fn produced_deploy_output_types(&self) -> &[DeployOutputType] {
        &[]
    }

    /// Event kind this service's resource emits, if it can act as a
    /// producer or consumer of events.
    fn provided_event_type(&self) -> Option<ServiceEventType> {
        None
    }

    /// Consumer event kinds this service can route its events to.
    fn produced_event_types_supported(&self) -> &[ServiceEventType] {
        &[]
    }

    /// Whether the underlying resource type supports tagging.
    fn supports_tagging(&self) -> bool {
        false
    }

    /// Validate the service's parameters before any network activity.
    ///
    /// Returns human-readable error strings, one per problem; an empty list
    /// means the configuration is acceptable. Never fails.
    fn check(&self, ctx: &ServiceContext, dependencies: &[ServiceContext]) -> Vec<String>;

    /// Deploy the service and publish its output bundle.
    ///
    /// `dependencies` holds the already-published outputs of every service
    /// this one depends on, in manifest order.
    async fn deploy(
        &self,
        ctx: &ServiceContext,
        dependencies: &[DeployOutputs],
    ) -> DeployResult<DeployOutputs>;

    /// Configure event routing from this service's resource to one consumer.
    async fn produce_events(
        &self,
        own_ctx: &ServiceContext,
        own_outputs: &DeployOutputs,
        request: &EventSubscriptionRequest,
        consumer_ctx: &ServiceContext,
        consumer_outputs: &DeployOutputs,
    ) -> DeployResult<ProduceEventsAck>;

    /// Release whatever the deploy created.
    async fn un_deploy(&self, ctx: &ServiceContext) -> DeployResult<UnDeployAck>;
}
