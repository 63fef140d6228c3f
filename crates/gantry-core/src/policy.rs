//! IAM policy statement types published in deploy outputs.

use serde::{Deserialize, Serialize};

/// Effect of a policy statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEffect {
    /// Grant the listed actions.
    Allow,
    /// Deny the listed actions.
    Deny,
}

/// One IAM policy statement granted to services that depend on a resource.
///
/// Serialized field names match the policy-document schema, so a statement
/// can be embedded directly into a role's policy JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    /// Allow or deny.
    pub effect: PolicyEffect,
    /// Actions the statement covers.
    pub action: Vec<String>,
    /// Resource ARNs the statement covers.
    pub resource: Vec<String>,
}

impl PolicyStatement {
    /// Build an `Allow` statement over the given actions and resources.
    #[must_use]
    pub fn allow<A, R>(action: A, resource: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            effect: PolicyEffect::Allow,
            action: action.into_iter().map(Into::into).collect(),
            resource: resource.into_iter().map(Into::into).collect(),
        }
    }
}
