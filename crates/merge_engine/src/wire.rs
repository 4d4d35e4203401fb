use std::collections::BTreeMap;

use merge_core::{MergeRequest, PreviewResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest<'a> {
    report_id: &'a str,
    template_content_document_id: &'a str,
    delivery_option: &'static str,
    preview_only: bool,
}

impl<'a> From<&'a MergeRequest> for WireRequest<'a> {
    fn from(request: &'a MergeRequest) -> Self {
        Self {
            report_id: &request.source_id,
            template_content_document_id: &request.template_id,
            delivery_option: request.delivery_mode.as_wire(),
            preview_only: request.preview_only,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePreview {
    #[serde(default)]
    letter_body: Option<String>,
    #[serde(default)]
    tokens: Option<BTreeMap<String, Value>>,
}

impl From<WirePreview> for PreviewResult {
    fn from(wire: WirePreview) -> Self {
        PreviewResult::new(
            wire.letter_body.unwrap_or_default(),
            wire.tokens
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, token_text(value))),
        )
    }
}

fn token_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts `message` from a JSON error body, if there is one.
pub(crate) fn error_body_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use merge_core::DeliveryMode;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_uses_service_field_names() {
        let request = MergeRequest {
            source_id: "R1".to_string(),
            template_id: "T1".to_string(),
            delivery_mode: DeliveryMode::Email,
            preview_only: true,
        };
        let value = serde_json::to_value(WireRequest::from(&request)).unwrap();
        assert_eq!(
            value,
            json!({
                "reportId": "R1",
                "templateContentDocumentId": "T1",
                "deliveryOption": "EMAIL",
                "previewOnly": true
            })
        );
    }

    #[test]
    fn missing_preview_fields_default_to_empty() {
        let wire: WirePreview = serde_json::from_str("{}").unwrap();
        let preview = PreviewResult::from(wire);
        assert_eq!(preview.rendered_body, "");
        assert!(preview.tokens.is_empty());

        let wire: WirePreview =
            serde_json::from_str(r#"{"letterBody": null, "tokens": null}"#).unwrap();
        assert_eq!(PreviewResult::from(wire), PreviewResult::default());
    }

    #[test]
    fn non_string_tokens_are_rendered_as_text() {
        let wire: WirePreview = serde_json::from_str(
            r#"{"letterBody": "b", "tokens": {"amount": 12.5, "note": null, "name": "X"}}"#,
        )
        .unwrap();
        let preview = PreviewResult::from(wire);
        assert_eq!(preview.tokens["amount"], "12.5");
        assert_eq!(preview.tokens["note"], "");
        assert_eq!(preview.tokens["name"], "X");
    }

    #[test]
    fn error_body_message_requires_json_object_with_message() {
        assert_eq!(
            error_body_message(br#"{"message":"Template locked"}"#),
            Some("Template locked".to_string())
        );
        assert_eq!(error_body_message(br#"{"message":""}"#), None);
        assert_eq!(error_body_message(br#"{"error":"x"}"#), None);
        assert_eq!(error_body_message(b"<html>oops</html>"), None);
    }
}
