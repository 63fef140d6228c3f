//! Bucket-import service type for the Gantry deployment orchestrator.
//!
//! Registers an `s3` service kind whose deploy imports a pre-existing bucket
//! rather than creating one: the bucket is looked up, its coordinates are
//! published as environment variables and access policies, and declared
//! consumers get bucket event notifications wired to them. Un-deploy leaves
//! the bucket in place.
//!
//! Hosts call [`load_extension`] to register the deployer over a live AWS
//! client; tests and embedded hosts can use [`load_extension_with`] together
//! with [`InMemoryS3`].

mod client;
mod config;
mod extension;
mod memory;
mod notifications;
mod outputs;
mod service;
mod template;

pub use client::{AwsS3Client, S3Calls};
pub use config::{EventConsumerConfig, S3ImportConfig};
pub use extension::{SERVICE_KIND, load_extension, load_extension_with};
pub use memory::InMemoryS3;
pub use outputs::{BUCKET_EVENT_PRINCIPAL, ImportedBucket, build_deploy_outputs};
pub use service::{S3ImportService, SERVICE_NAME};
pub use template::apply_name_template;
