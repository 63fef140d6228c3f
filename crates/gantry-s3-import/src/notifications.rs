//! Bucket notification configuration engine.
//!
//! Translates one consumer's kind-agnostic [`EventSubscriptionRequest`] into
//! the kind-specific notification shape the provider accepts, then applies
//! it to the producer bucket with a single configuration write.
//!
//! That write replaces the bucket's stored configuration wholesale; it is
//! not additive. Each call here carries exactly one consumer's entry, so a
//! bucket with several consumers keeps only the most recently applied one.
//! Callers needing several consumers on one bucket must either serialize the
//! calls and accept last-write-wins, or batch all entries into a single
//! configuration themselves.

use gantry_core::{
    DeployError, DeployResult, EventFilter, EventOutputs, EventSubscriptionRequest,
    FilterRuleKind, ServiceEventType,
};
use gantry_s3_model::{
    FilterRule, FilterRuleName, LambdaFunctionConfiguration, NotificationConfiguration,
    NotificationConfigurationFilter, QueueConfiguration, S3KeyFilter, TopicConfiguration,
};
use tracing::debug;

use crate::client::S3Calls;

/// Apply one consumer's subscription to the producer bucket.
///
/// Preconditions are checked in order, each with its own failure: both sides
/// must have published event outputs, those outputs must carry the producer
/// name and consumer ARN, and the consumer's kind must be in
/// `supported_kinds`. Only after all three hold is the configuration built
/// and written. No provider call is made on any failure path.
pub async fn apply_subscription(
    client: &dyn S3Calls,
    service: &str,
    producer: Option<&EventOutputs>,
    consumer: Option<&EventOutputs>,
    request: &EventSubscriptionRequest,
    supported_kinds: &[ServiceEventType],
) -> DeployResult<()> {
    let (Some(producer), Some(consumer)) = (producer, consumer) else {
        return Err(DeployError::missing_event_outputs(service));
    };

    if producer.resource_name.is_empty() || consumer.resource_arn.is_empty() {
        return Err(DeployError::incomplete_event_outputs(service));
    }

    if !supported_kinds.contains(&consumer.event_kind) {
        return Err(DeployError::unsupported_consumer_kind(
            service,
            consumer.event_kind,
        ));
    }

    let configuration = build_notification_configuration(
        consumer.event_kind,
        &consumer.resource_arn,
        &request.event_names,
        build_key_filter(request.filters.as_deref()),
    )?;

    debug!(
        bucket = %producer.resource_name,
        consumer_kind = %consumer.event_kind,
        "applying bucket notification configuration"
    );
    client
        .put_notification_configuration(&producer.resource_name, configuration)
        .await
}

/// Build the configuration carrying exactly one entry of the shape matching
/// `kind`.
///
/// Kinds without a shape in the dispatch below fail with
/// [`DeployError::UnsupportedNotificationKind`], even when the caller's
/// supported set let them through.
fn build_notification_configuration(
    kind: ServiceEventType,
    target_arn: &str,
    event_names: &[String],
    filter: Option<NotificationConfigurationFilter>,
) -> DeployResult<NotificationConfiguration> {
    let events = event_names.to_vec();
    let mut configuration = NotificationConfiguration::default();

    match kind {
        ServiceEventType::Lambda => {
            configuration
                .lambda_function_configurations
                .push(LambdaFunctionConfiguration {
                    events,
                    filter,
                    id: None,
                    lambda_function_arn: target_arn.to_owned(),
                });
        }
        ServiceEventType::Sns => {
            configuration.topic_configurations.push(TopicConfiguration {
                events,
                filter,
                id: None,
                topic_arn: target_arn.to_owned(),
            });
        }
        ServiceEventType::Sqs => {
            configuration.queue_configurations.push(QueueConfiguration {
                events,
                filter,
                id: None,
                queue_arn: target_arn.to_owned(),
            });
        }
        other => return Err(DeployError::unsupported_notification_kind(other)),
    }

    Ok(configuration)
}

/// Translate subscription filters into the provider's key-filter block.
///
/// Rules map 1:1 in declaration order. An absent or empty filter list yields
/// `None`, not an empty block; the provider treats those differently.
fn build_key_filter(filters: Option<&[EventFilter]>) -> Option<NotificationConfigurationFilter> {
    let filter_rules: Vec<FilterRule> = filters
        .unwrap_or_default()
        .iter()
        .map(|f| FilterRule {
            name: Some(rule_name(f.rule_kind)),
            value: Some(f.value.clone()),
        })
        .collect();

    if filter_rules.is_empty() {
        return None;
    }

    Some(NotificationConfigurationFilter {
        key: Some(S3KeyFilter { filter_rules }),
    })
}

fn rule_name(kind: FilterRuleKind) -> FilterRuleName {
    match kind {
        FilterRuleKind::Prefix => FilterRuleName::Prefix,
        FilterRuleKind::Suffix => FilterRuleName::Suffix,
    }
}
