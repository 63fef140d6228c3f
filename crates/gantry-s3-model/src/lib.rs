//! S3 provider wire-shape model types used by the Gantry S3 deployer.
//!
//! Mirrors the subset of the S3 API surface the deployer touches: the bucket
//! record returned by `ListBuckets` and the notification-configuration shapes
//! accepted by `PutBucketNotificationConfiguration`. Field and token names
//! follow the provider schema so translation to SDK types stays mechanical.

mod types;

pub use types::{
    Bucket, FilterRule, FilterRuleName, LambdaFunctionConfiguration, NotificationConfiguration,
    NotificationConfigurationFilter, QueueConfiguration, S3KeyFilter, TopicConfiguration,
};
