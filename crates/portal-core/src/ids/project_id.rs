use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable identifier of a project as assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl_id!(ProjectId);
