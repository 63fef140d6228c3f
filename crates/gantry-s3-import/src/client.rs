//! Provider client seam for the S3 calls the deployer makes.
//!
//! [`S3Calls`] uses `#[async_trait]` because the service holds its client
//! behind `dyn`, letting tests substitute [`crate::InMemoryS3`] for the
//! SDK-backed [`AwsS3Client`].

use aws_config::BehaviorVersion;
use gantry_core::{DeployError, DeployResult};
use gantry_s3_model::{Bucket, NotificationConfiguration};
use tracing::debug;

/// The two provider operations the import deployer performs.
#[async_trait::async_trait]
pub trait S3Calls: Send + Sync {
    /// Look up a bucket by exact name. Resolves to `None` when absent.
    async fn find_bucket(&self, name: &str) -> DeployResult<Option<Bucket>>;

    /// Replace the bucket's stored notification configuration wholesale.
    async fn put_notification_configuration(
        &self,
        bucket: &str,
        configuration: NotificationConfiguration,
    ) -> DeployResult<()>;
}

/// [`S3Calls`] implementation backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsS3Client {
    inner: aws_sdk_s3::Client,
}

impl AwsS3Client {
    /// Build a client from ambient AWS configuration (environment, shared
    /// profile, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&config))
    }

    /// Wrap an already-configured SDK client.
    #[must_use]
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl S3Calls for AwsS3Client {
    async fn find_bucket(&self, name: &str) -> DeployResult<Option<Bucket>> {
        let resp = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(provider_err)?;

        let found = resp
            .buckets()
            .iter()
            .find(|b| b.name() == Some(name))
            .map(into_model_bucket);

        debug!(bucket = %name, found = found.is_some(), "bucket lookup");
        Ok(found)
    }

    async fn put_notification_configuration(
        &self,
        bucket: &str,
        configuration: NotificationConfiguration,
    ) -> DeployResult<()> {
        let mut builder = aws_sdk_s3::types::NotificationConfiguration::builder();

        for entry in configuration.lambda_function_configurations {
            let mut lambda = aws_sdk_s3::types::LambdaFunctionConfiguration::builder()
                .lambda_function_arn(entry.lambda_function_arn);
            for event in entry.events {
                lambda = lambda.events(aws_sdk_s3::types::Event::from(event.as_str()));
            }
            if let Some(id) = entry.id {
                lambda = lambda.id(id);
            }
            if let Some(filter) = entry.filter {
                lambda = lambda.filter(into_sdk_filter(filter));
            }
            builder =
                builder.lambda_function_configurations(lambda.build().map_err(provider_err)?);
        }

        for entry in configuration.queue_configurations {
            let mut queue =
                aws_sdk_s3::types::QueueConfiguration::builder().queue_arn(entry.queue_arn);
            for event in entry.events {
                queue = queue.events(aws_sdk_s3::types::Event::from(event.as_str()));
            }
            if let Some(id) = entry.id {
                queue = queue.id(id);
            }
            if let Some(filter) = entry.filter {
                queue = queue.filter(into_sdk_filter(filter));
            }
            builder = builder.queue_configurations(queue.build().map_err(provider_err)?);
        }

        for entry in configuration.topic_configurations {
            let mut topic =
                aws_sdk_s3::types::TopicConfiguration::builder().topic_arn(entry.topic_arn);
            for event in entry.events {
                topic = topic.events(aws_sdk_s3::types::Event::from(event.as_str()));
            }
            if let Some(id) = entry.id {
                topic = topic.id(id);
            }
            if let Some(filter) = entry.filter {
                topic = topic.filter(into_sdk_filter(filter));
            }
            builder = builder.topic_configurations(topic.build().map_err(provider_err)?);
        }

        self.inner
            .put_bucket_notification_configuration()
            .bucket(bucket)
            .notification_configuration(builder.build())
            .send()
            .await
            .map_err(provider_err)?;

        debug!(bucket = %bucket, "bucket notification configuration applied");
        Ok(())
    }
}

/// Wrap a provider-side failure without retrying or reinterpreting it.
fn provider_err<E>(err: E) -> DeployError
where
    E: std::error::Error + Send + Sync + 'static,
{
    DeployError::Provider(anyhow::Error::new(err))
}

fn into_model_bucket(bucket: &aws_sdk_s3::types::Bucket) -> Bucket {
    Bucket {
        bucket_arn: bucket.bucket_arn().map(ToOwned::to_owned),
        bucket_region: bucket.bucket_region().map(ToOwned::to_owned),
        creation_date: bucket
            .creation_date()
            .and_then(|d| chrono::DateTime::from_timestamp(d.secs(), d.subsec_nanos())),
        name: bucket.name().map(ToOwned::to_owned),
    }
}

fn into_sdk_filter(
    filter: gantry_s3_model::NotificationConfigurationFilter,
) -> aws_sdk_s3::types::NotificationConfigurationFilter {
    let mut key = aws_sdk_s3::types::S3KeyFilter::builder();
    if let Some(model_key) = filter.key {
        for rule in model_key.filter_rules {
            let mut sdk_rule = aws_sdk_s3::types::FilterRule::builder();
            if let Some(name) = rule.name {
                sdk_rule = sdk_rule.name(aws_sdk_s3::types::FilterRuleName::from(name.as_str()));
            }
            if let Some(value) = rule.value {
                sdk_rule = sdk_rule.value(value);
            }
            key = key.filter_rules(sdk_rule.build());
        }
    }

    aws_sdk_s3::types::NotificationConfigurationFilter::builder()
        .key(key.build())
        .build()
}
