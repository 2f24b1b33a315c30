use serde::{Deserialize, Serialize};

use super::{CatalogEntity, ProjectShort, UserShort, WireEnum};
use crate::ids::ClientOrgId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientOrgType {
    Startup,
    #[serde(rename = "Non-profit")]
    Nonprofit,
    Academic,
    #[serde(rename = "Community Service Learning")]
    Csl,
    Other,
}

impl WireEnum for ClientOrgType {
    const ALL: &'static [Self] = &[
        ClientOrgType::Startup,
        ClientOrgType::Nonprofit,
        ClientOrgType::Academic,
        ClientOrgType::Csl,
        ClientOrgType::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ClientOrgType::Startup => "Startup",
            ClientOrgType::Nonprofit => "Non-profit",
            ClientOrgType::Academic => "Academic",
            ClientOrgType::Csl => "Community Service Learning",
            ClientOrgType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ClientOrgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abbreviated organization record embedded in projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrgShort {
    pub id: ClientOrgId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub org_type: ClientOrgType,
}

/// Client organization as returned by the organization listing endpoint.
/// 组织列表接口返回的客户组织
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrg {
    pub id: ClientOrgId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub org_type: ClientOrgType,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub reps: Vec<UserShort>,
    #[serde(default)]
    pub projects: Vec<ProjectShort>,
    #[serde(default)]
    pub testimonial: String,
}

impl CatalogEntity for ClientOrg {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail_path(&self) -> String {
        format!("/clients/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_org_type_round_trips_display_strings() {
        for member in ClientOrgType::ALL {
            let json = serde_json::to_string(member).unwrap();
            assert_eq!(json, format!("\"{}\"", member.as_str()));
            assert_eq!(ClientOrgType::from_wire(member.as_str()), Some(*member));
        }
    }

    #[test]
    fn test_client_org_without_projects_deserializes() {
        let json = r#"{"id": "3", "name": "A Big Client", "type": "Other", "about": "we are a large client"}"#;

        let org: ClientOrg = serde_json::from_str(json).unwrap();

        assert_eq!(org.org_type, ClientOrgType::Other);
        assert!(org.projects.is_empty());
        assert_eq!(org.detail_path(), "/clients/3");
    }
}
