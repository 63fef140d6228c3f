//! Deployer for the `s3` service kind.
//!
//! Imports a pre-existing bucket into a deployment instead of creating one:
//! deploy verifies the bucket exists and republishes its coordinates as
//! outputs, and un-deploy leaves the bucket untouched.

use std::fmt;
use std::sync::Arc;

use gantry_core::{
    DeployError, DeployOutputType, DeployOutputs, DeployResult, EventSubscriptionRequest,
    ProduceEventsAck, ServiceContext, ServiceDeployer, ServiceEventType, UnDeployAck,
};
use tracing::info;

use crate::client::{AwsS3Client, S3Calls};
use crate::config::S3ImportConfig;
use crate::notifications::apply_subscription;
use crate::outputs::{ImportedBucket, build_deploy_outputs};
use crate::template::apply_name_template;

/// Label prefixed to every validation and event-wiring message.
pub const SERVICE_NAME: &str = "s3-import";

const PRODUCED_DEPLOY_OUTPUT_TYPES: &[DeployOutputType] = &[
    DeployOutputType::EnvironmentVariables,
    DeployOutputType::Policies,
];

const SUPPORTED_EVENT_CONSUMERS: &[ServiceEventType] = &[
    ServiceEventType::Lambda,
    ServiceEventType::Sns,
    ServiceEventType::Sqs,
];

/// [`ServiceDeployer`] implementation backing the `s3` service kind.
pub struct S3ImportService {
    client: Arc<dyn S3Calls>,
}

impl fmt::Debug for S3ImportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ImportService").finish_non_exhaustive()
    }
}

impl S3ImportService {
    /// Create a deployer over the given provider client.
    #[must_use]
    pub fn new(client: Arc<dyn S3Calls>) -> Self {
        Self { client }
    }

    /// Create a deployer over a live client built from ambient AWS
    /// credentials and region.
    pub async fn from_env() -> Self {
        Self::new(Arc::new(AwsS3Client::from_env().await))
    }
}

#[async_trait::async_trait]
impl ServiceDeployer for S3ImportService {
    fn produced_deploy_output_types(&self) -> &[DeployOutputType] {
        PRODUCED_DEPLOY_OUTPUT_TYPES
    }

    fn provided_event_type(&self) -> Option<ServiceEventType> {
        Some(ServiceEventType::S3)
    }

    fn produced_event_types_supported(&self) -> &[ServiceEventType] {
        SUPPORTED_EVENT_CONSUMERS
    }

    fn supports_tagging(&self) -> bool {
        true
    }

    fn check(&self, ctx: &ServiceContext, _dependencies: &[ServiceContext]) -> Vec<String> {
        let config: S3ImportConfig = match ctx.typed_params() {
            Ok(config) => config,
            Err(e) => return vec![format!("{SERVICE_NAME} - {e}")],
        };

        let mut errors = Vec::new();
        if config.bucket_name.is_empty() {
            errors.push(format!("{SERVICE_NAME} - must provide a bucket name"));
        }
        for consumer in &config.event_consumers {
            if consumer.bucket_events.is_empty() {
                errors.push(format!(
                    "{SERVICE_NAME} - event consumer '{}' must list at least one bucket event",
                    consumer.service_name
                ));
            }
        }
        errors
    }

    async fn deploy(
        &self,
        ctx: &ServiceContext,
        _dependencies: &[DeployOutputs],
    ) -> DeployResult<DeployOutputs> {
        let config: S3ImportConfig = ctx.typed_params()?;
        let bucket_name = apply_name_template(&config.bucket_name, &ctx.account);
        info!(service = %ctx.service_name, bucket = %bucket_name, "importing existing bucket");

        let found = self
            .client
            .find_bucket(&bucket_name)
            .await?
            .ok_or_else(|| DeployError::resource_not_found("bucket", &bucket_name))?;

        // The listing may omit the name field; fall back to the name we
        // resolved from the template.
        let bucket = ImportedBucket::new(found.name.as_deref().unwrap_or(&bucket_name));
        info!(service = %ctx.service_name, bucket = %bucket.name, "bucket import finished");
        Ok(build_deploy_outputs(
            &ctx.service_name,
            &bucket,
            &ctx.account.region,
        ))
    }

    async fn produce_events(
        &self,
        own_ctx: &ServiceContext,
        own_outputs: &DeployOutputs,
        request: &EventSubscriptionRequest,
        consumer_ctx: &ServiceContext,
        consumer_outputs: &DeployOutputs,
    ) -> DeployResult<ProduceEventsAck> {
        info!(
            producer = %own_ctx.service_name,
            consumer = %consumer_ctx.service_name,
            "wiring bucket events to consumer"
        );

        apply_subscription(
            self.client.as_ref(),
            SERVICE_NAME,
            own_outputs.event_outputs.as_ref(),
            consumer_outputs.event_outputs.as_ref(),
            request,
            self.produced_event_types_supported(),
        )
        .await?;

        info!(
            producer = %own_ctx.service_name,
            consumer = %consumer_ctx.service_name,
            "bucket events wired"
        );
        Ok(ProduceEventsAck::new(
            &own_ctx.service_name,
            &consumer_ctx.service_name,
        ))
    }

    async fn un_deploy(&self, ctx: &ServiceContext) -> DeployResult<UnDeployAck> {
        // The bucket was imported, not created here; leave it in place.
        info!(service = %ctx.service_name, "un-deploy leaves imported bucket untouched");
        Ok(UnDeployAck::new(&ctx.service_name))
    }
}
