use serde::{Deserialize, Serialize};

/// Claims bundle resolved from the credential store; source of truth for issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Authentication {
    #[serde(rename = "id")]
    pub primary_id: String,
    #[serde(rename = "groupId")]
    pub primary_group_id: String,
    #[serde(rename = "roleId")]
    pub role_id: String,
    pub alias: String,
    pub email: String,
    pub hidden: bool,
}
