// Eden AI sub-providers and response normalization

use crate::errors::{ConfigError, ContractViolation};
use claidcut_core::RemovalResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SUCCESS_STATUS: &str = "success";

/// Background-removal backends selectable through Eden AI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubProvider {
    Clipdrop,
    Photoroom,
    Picsart,
    Sentisight,
    Api4ai,
    Stabilityai,
}

impl SubProvider {
    pub const ALL: [SubProvider; 6] = [
        SubProvider::Clipdrop,
        SubProvider::Photoroom,
        SubProvider::Picsart,
        SubProvider::Sentisight,
        SubProvider::Api4ai,
        SubProvider::Stabilityai,
    ];

    /// Name used in the `providers` form field and as the response key
    pub fn as_str(&self) -> &'static str {
        match self {
            SubProvider::Clipdrop => "clipdrop",
            SubProvider::Photoroom => "photoroom",
            SubProvider::Picsart => "picsart",
            SubProvider::Sentisight => "sentisight",
            SubProvider::Api4ai => "api4ai",
            SubProvider::Stabilityai => "stabilityai",
        }
    }
}

impl Default for SubProvider {
    fn default() -> Self {
        SubProvider::Clipdrop
    }
}

impl std::fmt::Display for SubProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownProvider(name.to_string()))
    }
}

/// One provider's entry in a `response_as_dict=true` response
#[derive(Debug, Deserialize)]
struct ProviderEntry {
    status: Option<String>,
    image_resource_url: Option<String>,
    error: Option<Value>,
}

/// Extract the processed image location from a successful (2xx) response body.
///
/// The body is untrusted. Everything other than
/// `{"<provider>": {"status": "success", "image_resource_url": "<uri>"}}`
/// is a contract violation.
pub fn normalize_response(provider: SubProvider, body: &str) -> Result<RemovalResult, ContractViolation> {
    let response: serde_json::Map<String, Value> =
        serde_json::from_str(body).map_err(|e| ContractViolation::MalformedBody(e.to_string()))?;

    let Some(raw_entry) = response.get(provider.as_str()) else {
        return Err(ContractViolation::MissingProviderKey {
            provider,
            present: response.keys().cloned().collect(),
        });
    };

    let entry: ProviderEntry = serde_json::from_value(raw_entry.clone()).map_err(|e| {
        ContractViolation::MalformedEntry {
            provider,
            reason: e.to_string(),
        }
    })?;

    let status = entry.status.ok_or_else(|| ContractViolation::MalformedEntry {
        provider,
        reason: "missing status".to_string(),
    })?;

    if status != SUCCESS_STATUS {
        return Err(ContractViolation::ProviderFailed {
            provider,
            status,
            message: entry.error.as_ref().and_then(error_message),
        });
    }

    match entry.image_resource_url {
        Some(url) if !url.trim().is_empty() => Ok(RemovalResult {
            processed_image_uri: url,
        }),
        _ => Err(ContractViolation::MissingImageUrl(provider)),
    }
}

/// Eden AI reports errors either as a string or as `{"message": ...}`
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("clipdrop".parse::<SubProvider>(), Ok(SubProvider::Clipdrop));
        assert_eq!(" PhotoRoom ".parse::<SubProvider>(), Ok(SubProvider::Photoroom));
        assert_eq!(
            "remove.bg".parse::<SubProvider>(),
            Err(ConfigError::UnknownProvider("remove.bg".to_string()))
        );
    }

    #[test]
    fn test_normalize_success() {
        let body = r#"{"clipdrop": {"status": "success", "image_resource_url": "https://example.com/out.png"}}"#;
        let result = normalize_response(SubProvider::Clipdrop, body).unwrap();
        assert_eq!(result.processed_image_uri, "https://example.com/out.png");
    }

    #[test]
    fn test_normalize_keeps_uri_verbatim() {
        let body = r#"{"clipdrop": {"status": "success", "image_resource_url": "data:image/png;base64,AAAA", "image_b64": "AAAA"}}"#;
        let result = normalize_response(SubProvider::Clipdrop, body).unwrap();
        assert_eq!(result.processed_image_uri, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_normalize_failure_status() {
        let body = r#"{"clipdrop": {"status": "failure"}}"#;
        assert_eq!(
            normalize_response(SubProvider::Clipdrop, body),
            Err(ContractViolation::ProviderFailed {
                provider: SubProvider::Clipdrop,
                status: "failure".to_string(),
                message: None,
            })
        );
    }

    #[test]
    fn test_normalize_failure_with_error_object() {
        let body = r#"{"clipdrop": {"status": "fail", "error": {"type": "ProviderError", "message": "bad image"}}}"#;
        assert!(matches!(
            normalize_response(SubProvider::Clipdrop, body),
            Err(ContractViolation::ProviderFailed { message: Some(m), .. }) if m == "bad image"
        ));
    }

    #[test]
    fn test_normalize_missing_provider_key() {
        let body = r#"{"photoroom": {"status": "success", "image_resource_url": "https://example.com/x.png"}}"#;
        assert_eq!(
            normalize_response(SubProvider::Clipdrop, body),
            Err(ContractViolation::MissingProviderKey {
                provider: SubProvider::Clipdrop,
                present: vec!["photoroom".to_string()],
            })
        );
    }

    #[test]
    fn test_normalize_missing_url() {
        let body = r#"{"clipdrop": {"status": "success"}}"#;
        assert_eq!(
            normalize_response(SubProvider::Clipdrop, body),
            Err(ContractViolation::MissingImageUrl(SubProvider::Clipdrop))
        );

        let empty = r#"{"clipdrop": {"status": "success", "image_resource_url": ""}}"#;
        assert_eq!(
            normalize_response(SubProvider::Clipdrop, empty),
            Err(ContractViolation::MissingImageUrl(SubProvider::Clipdrop))
        );
    }

    #[test]
    fn test_normalize_malformed_bodies() {
        assert!(matches!(
            normalize_response(SubProvider::Clipdrop, "not json"),
            Err(ContractViolation::MalformedBody(_))
        ));
        assert!(matches!(
            normalize_response(SubProvider::Clipdrop, r#"[{"status": "success"}]"#),
            Err(ContractViolation::MalformedBody(_))
        ));
        assert!(matches!(
            normalize_response(SubProvider::Clipdrop, r#"{"clipdrop": "success"}"#),
            Err(ContractViolation::MalformedEntry { .. })
        ));
        assert!(matches!(
            normalize_response(SubProvider::Clipdrop, r#"{"clipdrop": {"image_resource_url": "x"}}"#),
            Err(ContractViolation::MalformedEntry { .. })
        ));
    }
}
