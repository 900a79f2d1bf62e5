use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const GLOBAL_PARAMETERS_CODE: &str = "globalParameters";
pub const GLOBAL_PARAMETERS_MOBILE_CODE: &str = "globalParametersMobile";

/// Generic per-user settings record stored by the API
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub value_json: serde_json::Value,
}

impl UserSettingsRecord {
    pub fn parse_value<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.value_json.clone())
    }
}

/// Display preferences stored under `globalParameters`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalParameters {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub collapse_menu: bool,
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            theme: default_theme(),
            collapse_menu: false,
        }
    }
}

pub const USER_SETTINGS_QUERY: &str = "query warehouseWorkerSettings($code: String!) { \
     warehouseWorkerSettings(filters: { code: $code }) { results { id code valueJson } } }";

pub const CREATE_USER_SETTINGS_MUTATION: &str = "mutation createWarehouseWorkerSetting($input: CreateWarehouseWorkerSettingInput!) { \
     createWarehouseWorkerSetting(input: $input) { id code valueJson } }";

pub const UPDATE_USER_SETTINGS_MUTATION: &str = "mutation updateWarehouseWorkerSetting($id: String!, $input: UpdateWarehouseWorkerSettingInput!) { \
     updateWarehouseWorkerSetting(id: $id, input: $input) { id code valueJson } }";

pub const RESET_USER_SETTINGS_MUTATION: &str =
    "mutation resetWarehouseWorkerSettings { resetWarehouseWorkerSettings }";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_parameters_defaults() {
        let record = UserSettingsRecord {
            id: Some("1".into()),
            code: GLOBAL_PARAMETERS_CODE.into(),
            value_json: json!({ "theme": "dark" }),
        };
        let params: GlobalParameters = record.parse_value().unwrap();
        assert_eq!(params.theme, "dark");
        assert_eq!(params.lang, "en-US");
        assert!(!params.collapse_menu);
    }
}
