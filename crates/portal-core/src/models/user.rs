use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Abbreviated user record embedded in projects and organizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserShort {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_user_id: Option<String>,
}
