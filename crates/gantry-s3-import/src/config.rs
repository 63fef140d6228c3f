//! Service parameters for the s3-import deployer.

use gantry_core::{EventFilter, EventSubscriptionRequest};
use serde::Deserialize;

/// User-supplied parameters for one s3-import service instance.
///
/// Deserialized from the manifest's service params. Every field defaults so
/// that malformed-but-well-typed input reaches [`check`] and comes back as a
/// readable validation message instead of a deserialization error.
///
/// [`check`]: gantry_core::ServiceDeployer::check
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct S3ImportConfig {
    /// Name of the pre-existing bucket to import. May contain the
    /// `<account_id>` and `<region>` placeholder tokens.
    pub bucket_name: String,
    /// Consumers that should receive bucket event notifications.
    pub event_consumers: Vec<EventConsumerConfig>,
}

/// One declared event consumer in the service params.
#[derive(Debug, Clone, Deserialize)]
pub struct EventConsumerConfig {
    /// Manifest name of the consuming service.
    pub service_name: String,
    /// Bucket event names to route (e.g. `s3:ObjectCreated:*`).
    pub bucket_events: Vec<String>,
    /// Optional object-key filters restricting which keys trigger events.
    pub filters: Option<Vec<EventFilter>>,
}

impl EventConsumerConfig {
    /// Kind-agnostic subscription request for this consumer.
    #[must_use]
    pub fn subscription_request(&self) -> EventSubscriptionRequest {
        EventSubscriptionRequest {
            event_names: self.bucket_events.clone(),
            filters: self.filters.clone(),
        }
    }
}
