//! Team models

use serde::{Deserialize, Serialize};

/// Organization team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team ID, used by the membership endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Permission level granted to the team (pull, push, admin)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos_count: Option<u32>,
}
