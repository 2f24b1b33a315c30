use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable identifier of a client organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientOrgId(String);

impl_id!(ClientOrgId);
