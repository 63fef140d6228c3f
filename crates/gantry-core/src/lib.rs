//! Core extension API for the Gantry deployment orchestrator.
//!
//! This crate defines the contract between the orchestrator and pluggable
//! service deployers: the [`ServiceDeployer`] trait with its four lifecycle
//! operations, the context and output types exchanged across that boundary,
//! and the [`ExtensionContext`] registry extensions use to announce the
//! service kinds they provide.

mod context;
mod deployer;
mod error;
mod events;
mod extension;
mod policy;
mod types;

pub use context::{DeployOutputs, ProduceEventsAck, ServiceContext, UnDeployAck};
pub use deployer::{DeployOutputType, ServiceDeployer};
pub use error::{DeployError, DeployResult};
pub use events::{
    EventFilter, EventOutputs, EventSubscriptionRequest, FilterRuleKind, ServiceEventType,
};
pub use extension::ExtensionContext;
pub use policy::{PolicyEffect, PolicyStatement};
pub use types::{AccountContext, AccountId, AwsRegion};
