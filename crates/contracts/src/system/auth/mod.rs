use serde::{Deserialize, Serialize};

/// Authenticated warehouse worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Session established at login; the access token is sent as a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}
