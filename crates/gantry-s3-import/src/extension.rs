//! Extension entry point wiring this crate's deployers into a host.

use std::sync::Arc;

use gantry_core::ExtensionContext;

use crate::client::{AwsS3Client, S3Calls};
use crate::service::S3ImportService;

/// Service kind the deployer is registered under.
pub const SERVICE_KIND: &str = "s3";

/// Register this extension's deployers over a live provider client.
pub async fn load_extension(ctx: &mut ExtensionContext) {
    load_extension_with(ctx, Arc::new(AwsS3Client::from_env().await));
}

/// Register this extension's deployers over a caller-supplied client.
pub fn load_extension_with(ctx: &mut ExtensionContext, client: Arc<dyn S3Calls>) {
    ctx.service(SERVICE_KIND, S3ImportService::new(client));
}
