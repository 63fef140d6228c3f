//! Shared S3 model structs and enums.

use serde::{Deserialize, Serialize};

/// S3 Bucket record as returned by `ListBuckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    /// ARN of the bucket, when the provider reports one.
    pub bucket_arn: Option<String>,
    /// Region the bucket lives in.
    pub bucket_region: Option<String>,
    /// When the bucket was created.
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Bucket name.
    pub name: Option<String>,
}

impl Bucket {
    /// Bucket record carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// S3 FilterRuleName enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterRuleName {
    /// Match on key prefix.
    #[serde(rename = "prefix")]
    Prefix,
    /// Match on key suffix.
    #[serde(rename = "suffix")]
    Suffix,
}

impl FilterRuleName {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for FilterRuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// S3 FilterRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRule {
    /// Rule kind (prefix or suffix).
    pub name: Option<FilterRuleName>,
    /// Key fragment to match.
    pub value: Option<String>,
}

/// S3 S3KeyFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3KeyFilter {
    /// Ordered matching rules, applied together.
    pub filter_rules: Vec<FilterRule>,
}

/// S3 NotificationConfigurationFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationConfigurationFilter {
    /// Object-key filter, the only filter dimension the provider defines.
    pub key: Option<S3KeyFilter>,
}

/// S3 LambdaFunctionConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaFunctionConfiguration {
    /// Provider event names that trigger the function.
    pub events: Vec<String>,
    /// Optional object-key filter.
    pub filter: Option<NotificationConfigurationFilter>,
    /// Caller-assigned configuration ID.
    pub id: Option<String>,
    /// ARN of the function to invoke.
    pub lambda_function_arn: String,
}

/// S3 QueueConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueConfiguration {
    /// Provider event names that enqueue a message.
    pub events: Vec<String>,
    /// Optional object-key filter.
    pub filter: Option<NotificationConfigurationFilter>,
    /// Caller-assigned configuration ID.
    pub id: Option<String>,
    /// ARN of the destination queue.
    pub queue_arn: String,
}

/// S3 TopicConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicConfiguration {
    /// Provider event names that publish a message.
    pub events: Vec<String>,
    /// Optional object-key filter.
    pub filter: Option<NotificationConfigurationFilter>,
    /// Caller-assigned configuration ID.
    pub id: Option<String>,
    /// ARN of the destination topic.
    pub topic_arn: String,
}

/// S3 NotificationConfiguration.
///
/// The write that carries this record replaces the bucket's stored
/// configuration wholesale. The provider treats a missing list and an empty
/// list identically, but a missing filter and an empty filter-rule list are
/// distinct shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationConfiguration {
    /// Targets invoked as Lambda functions.
    pub lambda_function_configurations: Vec<LambdaFunctionConfiguration>,
    /// Targets receiving SQS messages.
    pub queue_configurations: Vec<QueueConfiguration>,
    /// Targets receiving SNS publishes.
    pub topic_configurations: Vec<TopicConfiguration>,
}

impl NotificationConfiguration {
    /// Total number of configuration entries across all three kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lambda_function_configurations.len()
            + self.queue_configurations.len()
            + self.topic_configurations.len()
    }

    /// Whether the configuration carries no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
