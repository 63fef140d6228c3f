//! Event routing types shared between producer and consumer deployers.
//!
//! A deployer that can originate or receive events publishes an
//! [`EventOutputs`] record from its deploy; the orchestrator later hands the
//! producer a consumer's record plus an [`EventSubscriptionRequest`] and asks
//! it to wire the two together.

use serde::{Deserialize, Serialize};

/// Event kinds known to the orchestrator.
///
/// Tags which provider resource type an [`EventOutputs`] record or
/// notification target belongs to. Serialized forms match the labels used in
/// deployment manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceEventType {
    /// S3 bucket.
    #[serde(rename = "S3")]
    S3,
    /// Lambda function.
    #[serde(rename = "Lambda")]
    Lambda,
    /// SNS topic.
    #[serde(rename = "SNS")]
    Sns,
    /// SQS queue.
    #[serde(rename = "SQS")]
    Sqs,
    /// DynamoDB table stream.
    #[serde(rename = "DynamoDB")]
    DynamoDb,
    /// CloudWatch Events rule.
    #[serde(rename = "CloudWatchEvents")]
    CloudWatchEvents,
}

impl ServiceEventType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "S3",
            Self::Lambda => "Lambda",
            Self::Sns => "SNS",
            Self::Sqs => "SQS",
            Self::DynamoDb => "DynamoDB",
            Self::CloudWatchEvents => "CloudWatchEvents",
        }
    }
}

impl std::fmt::Display for ServiceEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event wiring record a deployer publishes from its deploy.
///
/// Created once at deploy time and held immutably thereafter; read by
/// producers when configuring event routing toward a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOutputs {
    /// Canonical name of the resource.
    pub resource_name: String,
    /// ARN of the resource.
    pub resource_arn: String,
    /// Provider principal that invokes or is invoked on behalf of the
    /// resource (e.g. `s3.amazonaws.com`).
    pub resource_principal: String,
    /// Which resource type this record belongs to.
    #[serde(rename = "serviceEventType")]
    pub event_kind: ServiceEventType,
}

impl EventOutputs {
    /// Create a new event outputs record.
    #[must_use]
    pub fn new(
        resource_name: impl Into<String>,
        resource_arn: impl Into<String>,
        resource_principal: impl Into<String>,
        event_kind: ServiceEventType,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            resource_arn: resource_arn.into(),
            resource_principal: resource_principal.into(),
            event_kind,
        }
    }
}

/// Key-matching rule kinds recognized in subscription filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterRuleKind {
    /// Match keys beginning with the value.
    #[serde(rename = "prefix")]
    Prefix,
    /// Match keys ending with the value.
    #[serde(rename = "suffix")]
    Suffix,
}

impl FilterRuleKind {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for FilterRuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key-matching rule in a subscription filter list.
///
/// The serialized field name for the rule kind is `name`, matching the
/// manifest format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Whether the value matches a key prefix or suffix.
    #[serde(rename = "name")]
    pub rule_kind: FilterRuleKind,
    /// The prefix or suffix value to match.
    pub value: String,
}

impl EventFilter {
    /// Create a new filter rule.
    #[must_use]
    pub fn new(rule_kind: FilterRuleKind, value: impl Into<String>) -> Self {
        Self {
            rule_kind,
            value: value.into(),
        }
    }
}

/// A user's declared intent to route events from a producer to one consumer.
///
/// `event_names` must be non-empty; `filters` may be absent or empty, and the
/// two are equivalent (no key filtering either way).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubscriptionRequest {
    /// Provider event names to subscribe to (e.g. `s3:ObjectCreated:*`).
    pub event_names: Vec<String>,
    /// Ordered key-matching rules constraining which objects trigger events.
    pub filters: Option<Vec<EventFilter>>,
}

impl EventSubscriptionRequest {
    /// Create a subscription request with no key filtering.
    #[must_use]
    pub fn new(event_names: Vec<String>) -> Self {
        Self {
            event_names,
            filters: None,
        }
    }

    /// Attach key-matching rules to the request.
    #[must_use]
    pub fn with_filters(mut self, filters: Vec<EventFilter>) -> Self {
        self.filters = Some(filters);
        self
    }
}
