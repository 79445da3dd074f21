use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::FactConfig;

use super::{FactError, FactSource};

/// Fact source backed by a JSON HTTP endpoint.
pub struct HttpFactSource {
    client: Client,
    url: String,
    text_field: String,
    request_timeout: Duration,
}

impl HttpFactSource {
    pub fn new(config: &FactConfig) -> Result<Self, FactError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(FactError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            text_field: config.text_field.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn do_fetch(&self) -> Result<String, FactError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FactError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FactError::Network {
            url: self.url.clone(),
            source,
        })?;

        extract_fact(&body, &self.text_field)
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<String, FactError> {
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FactError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Pull the fact text out of a JSON response body.
///
/// The body must be a JSON object whose `field` is a string.
pub fn extract_fact(body: &[u8], field: &str) -> Result<String, FactError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| FactError::Malformed {
        reason: format!("invalid JSON: {}", e),
    })?;

    match value.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(FactError::Malformed {
            reason: format!("field '{}' is not a string", field),
        }),
        None => Err(FactError::Malformed {
            reason: format!("missing field '{}'", field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_configured_field() {
        let body = br#"{"fact": "Cats sleep 70% of their lives.", "length": 30}"#;
        assert_eq!(
            extract_fact(body, "fact").unwrap(),
            "Cats sleep 70% of their lives."
        );
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = extract_fact(br#"{"text": "hi"}"#, "fact").unwrap_err();
        match err {
            FactError::Malformed { reason } => assert!(reason.contains("missing field 'fact'")),
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn non_string_field_is_malformed() {
        let err = extract_fact(br#"{"fact": 42}"#, "fact").unwrap_err();
        assert!(matches!(err, FactError::Malformed { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = extract_fact(b"<html>oops</html>", "fact").unwrap_err();
        match err {
            FactError::Malformed { reason } => assert!(reason.starts_with("invalid JSON")),
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn builds_from_default_config() {
        let source = HttpFactSource::new(&FactConfig::default()).unwrap();
        assert_eq!(source.url(), "https://catfact.ninja/fact");
        assert_eq!(source.name(), "http");
    }
}
