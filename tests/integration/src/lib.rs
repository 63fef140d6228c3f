//! Integration tests for the Gantry s3-import extension.
//!
//! The suite runs hermetically against [`InMemoryS3`]; only the tests in
//! `test_live` talk to real AWS, and those are marked `#[ignore]`.
//!
//! Run the hermetic suite with:
//! ```text
//! cargo test -p gantry-integration
//! ```

use std::sync::{Arc, Once};

use gantry_core::{DeployOutputs, EventOutputs, ServiceContext, ServiceDeployer, ServiceEventType};
use gantry_s3_import::{InMemoryS3, S3ImportService};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Deployer wired to a fresh in-memory provider, returned alongside the
/// provider handle for assertions.
#[must_use]
pub fn in_memory_service() -> (Arc<InMemoryS3>, S3ImportService) {
    init_tracing();
    let s3 = Arc::new(InMemoryS3::new());
    let client: Arc<dyn gantry_s3_import::S3Calls> = s3.clone();
    let service = S3ImportService::new(client);
    (s3, service)
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Manifest context for one s3-import service instance.
#[must_use]
pub fn import_context(service_name: &str, params: serde_json::Value) -> ServiceContext {
    ServiceContext::builder()
        .app_name("gantry-it")
        .environment_name("test")
        .service_name(service_name)
        .service_kind("s3")
        .params(params)
        .build()
}

/// Seed `bucket` into the provider and deploy an import service over it.
pub async fn deploy_seeded(
    s3: &InMemoryS3,
    service: &S3ImportService,
    service_name: &str,
    bucket: &str,
) -> DeployOutputs {
    s3.add_bucket(bucket);
    let ctx = import_context(service_name, serde_json::json!({ "bucket_name": bucket }));
    service
        .deploy(&ctx, &[])
        .await
        .unwrap_or_else(|e| panic!("deploy of {bucket} should succeed: {e}"))
}

/// Deploy outputs as a consumer service of the given kind would publish them.
#[must_use]
pub fn consumer_outputs(service_name: &str, kind: ServiceEventType, arn: &str) -> DeployOutputs {
    let mut outputs = DeployOutputs::new(service_name);
    outputs.event_outputs = Some(EventOutputs::new(
        service_name,
        arn,
        principal_for(kind),
        kind,
    ));
    outputs
}

fn principal_for(kind: ServiceEventType) -> &'static str {
    match kind {
        ServiceEventType::Lambda => "lambda.amazonaws.com",
        ServiceEventType::Sns => "sns.amazonaws.com",
        ServiceEventType::Sqs => "sqs.amazonaws.com",
        _ => "events.amazonaws.com",
    }
}

mod test_live;
mod test_notifications;
