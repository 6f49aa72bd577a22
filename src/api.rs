//! Wire types of the JSON endpoints shared by the servers and the page loaders.
//!
//! The two front ends use different field conventions (`camelCase` for
//! `/api/info`, `PascalCase` for the legacy `/api/files`), and each keeps its own.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceNode;

pub const RESOURCES_PATH: &str = "/api/resources";
pub const INFO_PATH: &str = "/api/info";
pub const FILES_PATH: &str = "/api/files";
pub const DOWNLOAD_PATH: &str = "/api/download";
pub const MEDIA_PREFIX: &str = "/api/video";

/// Response body of `/api/resources`. `code == 0` means success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEnvelope {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ResourceNode>>,
}

impl ResourceEnvelope {
    pub fn ok(data: Vec<ResourceNode>) -> Self {
        Self {
            code: 0,
            message: Some("resource directory loaded".to_string()),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Response body of `/api/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShareInfo {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Response body of the legacy `/api/files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Size")]
    pub size: String,
}

/// Non-empty value of an optional text field.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_success_shape() {
        let body = serde_json::to_value(ResourceEnvelope::ok(vec![])).unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"], json!([]));
    }

    #[test]
    fn envelope_failure_has_no_data() {
        let body = serde_json::to_value(ResourceEnvelope::failure("boom")).unwrap();
        assert_eq!(body["code"], 1);
        assert_eq!(body["message"], "boom");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn share_info_uses_camel_case() {
        let info: ShareInfo =
            serde_json::from_value(json!({"fileName": "a.zip", "fileSize": "1.0 KiB"})).unwrap();
        assert_eq!(info.file_name.as_deref(), Some("a.zip"));
        assert_eq!(info.description, None);

        let body = serde_json::to_value(&info).unwrap();
        assert_eq!(body, json!({"fileName": "a.zip", "fileSize": "1.0 KiB"}));
    }

    #[test]
    fn file_listing_keeps_pascal_case() {
        let listing = FileListing {
            name: "a.zip".into(),
            size: "1.0 kB".into(),
        };
        let body = serde_json::to_value(&listing).unwrap();
        assert_eq!(body, json!({"Name": "a.zip", "Size": "1.0 kB"}));
    }

    #[test]
    fn present_ignores_empty_strings() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("x".into())), Some("x"));
        assert_eq!(present(&None), None);
    }
}
