use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON response envelope shared by the public and admin APIs.
///
/// Every endpoint answers `{ success, data?, error?, message? }`; absent
/// fields are omitted from the serialized body.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn ok_with(data: serde_json::Value) -> Self {
        Self { success: true, data: Some(data), ..Default::default() }
    }

    pub fn ok_message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), ..Default::default() }
    }

    pub fn fail(error: serde_json::Value) -> Self {
        Self { success: false, error: Some(error), ..Default::default() }
    }
}
