//! Organization models

use serde::{Deserialize, Serialize};

/// Organization (group account)
///
/// Also used as the partial body of an edit: only the fields that are set
/// are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Numeric organization ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Canonical API URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
