//! Deploy output assembly for an imported bucket.

use gantry_core::{AwsRegion, DeployOutputs, EventOutputs, PolicyStatement, ServiceEventType};

/// Principal S3 acts as when invoking notification targets.
pub const BUCKET_EVENT_PRINCIPAL: &str = "s3.amazonaws.com";

/// Resolved descriptor for a bucket confirmed to exist.
///
/// Created once during deploy, after lookup succeeds, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedBucket {
    /// Canonical bucket name.
    pub name: String,
    /// Bucket ARN.
    pub arn: String,
}

impl ImportedBucket {
    /// Descriptor for `name`, deriving the ARN from it.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let arn = format!("arn:aws:s3:::{name}");
        Self { name, arn }
    }
}

/// Assemble the deploy output bundle for an imported bucket.
///
/// The bundle always carries the four fixed environment variables, the two
/// fixed access policies (list on the bucket, object read/write/ACL under
/// it), and the event outputs record consumers read when subscribing. The
/// shapes are fixed; callers wanting narrower grants don't get them here.
#[must_use]
pub fn build_deploy_outputs(
    service_name: &str,
    bucket: &ImportedBucket,
    region: &AwsRegion,
) -> DeployOutputs {
    let mut outputs = DeployOutputs::new(service_name);

    outputs.add_env_var("BUCKET_NAME", &bucket.name);
    outputs.add_env_var("BUCKET_ARN", &bucket.arn);
    outputs.add_env_var(
        "BUCKET_URL",
        format!("https://{}.s3.amazonaws.com/", bucket.name),
    );
    outputs.add_env_var("REGION_ENDPOINT", format!("s3-{region}.amazonaws.com"));

    outputs.add_policy(PolicyStatement::allow(
        ["s3:ListBucket"],
        [bucket.arn.clone()],
    ));
    outputs.add_policy(PolicyStatement::allow(
        [
            "s3:PutObject",
            "s3:GetObject",
            "s3:DeleteObject",
            "s3:GetObjectAcl",
            "s3:PutObjectAcl",
            "s3:DeleteObjectAcl",
        ],
        [format!("{}/*", bucket.arn)],
    ));

    outputs.event_outputs = Some(EventOutputs::new(
        &bucket.name,
        &bucket.arn,
        BUCKET_EVENT_PRINCIPAL,
        ServiceEventType::S3,
    ));

    outputs
}
