//! Error types for Gantry deploy operations.

use crate::events::ServiceEventType;

/// Error type shared by every service deployer lifecycle operation.
///
/// Variants cover the contract-level failures the orchestrator reacts to;
/// anything the underlying provider raises is carried opaquely in
/// [`DeployError::Provider`] and never retried here.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The named resource does not exist in the target account.
    #[error("cannot find {resource_kind} named {name}")]
    ResourceNotFound {
        /// Noun for the missing resource (e.g. `"bucket"`).
        resource_kind: String,
        /// The resolved name that was looked up.
        name: String,
    },

    /// Producer or consumer did not publish event outputs from its deploy.
    #[error("{service} - both the producer and consumer must publish event outputs from their deploy")]
    MissingEventOutputs {
        /// Label of the service reporting the failure.
        service: String,
    },

    /// Published event outputs are missing the resource name or ARN.
    #[error("{service} - expected producer resource name and consumer ARN in deploy outputs")]
    IncompleteEventOutputs {
        /// Label of the service reporting the failure.
        service: String,
    },

    /// The consumer's event kind is not in this producer's supported set.
    #[error("{service} - unsupported event consumer type given: {kind}")]
    UnsupportedConsumerKind {
        /// Label of the service reporting the failure.
        service: String,
        /// The offending consumer event kind.
        kind: ServiceEventType,
    },

    /// No notification shape exists for the consumer's event kind.
    #[error("invalid/unsupported notification type specified: {kind}")]
    UnsupportedNotificationKind {
        /// The event kind with no notification shape.
        kind: ServiceEventType,
    },

    /// Service parameters failed to deserialize into the expected config.
    #[error("invalid service configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration problem.
        message: String,
    },

    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Provider call failure, propagated unchanged to the caller.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl DeployError {
    /// A lookup for `name` found nothing. `resource_kind` is the noun used
    /// in the message (e.g. `"bucket"`).
    #[must_use]
    pub fn resource_not_found(resource_kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_kind: resource_kind.into(),
            name: name.into(),
        }
    }

    /// One side of an event subscription published no event outputs.
    #[must_use]
    pub fn missing_event_outputs(service: impl Into<String>) -> Self {
        Self::MissingEventOutputs {
            service: service.into(),
        }
    }

    /// Published event outputs lack a required field.
    #[must_use]
    pub fn incomplete_event_outputs(service: impl Into<String>) -> Self {
        Self::IncompleteEventOutputs {
            service: service.into(),
        }
    }

    /// The consumer's kind is outside the producer's supported set.
    #[must_use]
    pub fn unsupported_consumer_kind(service: impl Into<String>, kind: ServiceEventType) -> Self {
        Self::UnsupportedConsumerKind {
            service: service.into(),
            kind,
        }
    }

    /// No notification shape could be built for `kind`.
    #[must_use]
    pub fn unsupported_notification_kind(kind: ServiceEventType) -> Self {
        Self::UnsupportedNotificationKind { kind }
    }

    /// Service parameters were malformed.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience result type for deploy operations.
pub type DeployResult<T> = Result<T, DeployError>;
