//! In-memory provider double for hermetic tests.

use dashmap::DashMap;
use gantry_core::{DeployError, DeployResult};
use gantry_s3_model::{Bucket, NotificationConfiguration};
use tracing::debug;

use crate::client::S3Calls;

/// In-memory [`S3Calls`] implementation.
///
/// Buckets are seeded by tests; notification writes are stored per bucket
/// together with a write counter, so tests can assert both the final stored
/// shape and how many configuration calls were issued. Writing to an unknown
/// bucket fails the way the provider would.
///
/// All fields are accessed concurrently via `DashMap`; no external locking
/// is required.
#[derive(Default)]
pub struct InMemoryS3 {
    buckets: DashMap<String, Bucket>,
    configurations: DashMap<String, NotificationConfiguration>,
    write_counts: DashMap<String, usize>,
}

impl std::fmt::Debug for InMemoryS3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryS3")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl InMemoryS3 {
    /// Create an empty double with no buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a bucket, as if it had been provisioned out-of-band.
    pub fn add_bucket(&self, name: impl Into<String>) {
        let name = name.into();
        let bucket = Bucket {
            creation_date: Some(chrono::Utc::now()),
            ..Bucket::named(name.clone())
        };
        self.buckets.insert(name, bucket);
    }

    /// The configuration most recently stored for `bucket`, if any.
    #[must_use]
    pub fn stored_configuration(&self, bucket: &str) -> Option<NotificationConfiguration> {
        self.configurations.get(bucket).map(|c| c.clone())
    }

    /// How many configuration writes `bucket` has received.
    #[must_use]
    pub fn write_count(&self, bucket: &str) -> usize {
        self.write_counts.get(bucket).map_or(0, |c| *c)
    }
}

#[async_trait::async_trait]
impl S3Calls for InMemoryS3 {
    async fn find_bucket(&self, name: &str) -> DeployResult<Option<Bucket>> {
        Ok(self.buckets.get(name).map(|b| b.clone()))
    }

    async fn put_notification_configuration(
        &self,
        bucket: &str,
        configuration: NotificationConfiguration,
    ) -> DeployResult<()> {
        if !self.buckets.contains_key(bucket) {
            return Err(DeployError::Provider(anyhow::anyhow!(
                "no such bucket: {bucket}"
            )));
        }

        *self.write_counts.entry(bucket.to_owned()).or_insert(0) += 1;
        self.configurations.insert(bucket.to_owned(), configuration);

        debug!(bucket = %bucket, "notification configuration stored");
        Ok(())
    }
}
