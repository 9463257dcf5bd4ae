// Eden AI background-removal gateway

use crate::config::{ApiKey, GatewayConfig};
use crate::errors::GatewayError;
use crate::provider::normalize_response;
use claidcut_core::{DecodedImage, RemovalRequest, RemovalResult, RequestId};
use reqwest::multipart::{Form, Part};

/// File name Eden AI sees for every upload
const UPLOAD_FILE_NAME: &str = "image.png";
const OUTPUT_FORMAT: &str = "png";

/// Gateway to the Eden AI background-removal endpoint.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`, so one
/// instance can be shared across concurrent callers.
pub struct EdenAiClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl EdenAiClient {
    /// Create a new gateway
    ///
    /// Succeeds without an API key; removals then fail with
    /// [`GatewayError::Configuration`].
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(GatewayError::Network)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Remove the background of one image.
    ///
    /// Fails before any network call on a missing API key or an undecodable
    /// data URI. Transient provider failures are retried according to the
    /// configured [`RetryPolicy`](crate::RetryPolicy).
    pub async fn remove_background(&self, request: &RemovalRequest) -> Result<RemovalResult, GatewayError> {
        let request_id = RequestId::new();

        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            tracing::error!(%request_id, "EDEN_AI_API_KEY is not set");
            GatewayError::Configuration("EDEN_AI_API_KEY is not set in environment variables.".to_string())
        })?;

        let image = request.image().decode().map_err(|e| {
            tracing::warn!(%request_id, "Rejected image data URI: {}", e);
            GatewayError::from(e)
        })?;

        tracing::debug!(
            %request_id,
            provider = %self.config.provider,
            mime = %image.mime,
            "Submitting {} bytes for background removal",
            image.bytes.len()
        );

        let retry = self.config.retry;
        let mut attempt: u32 = 0;
        loop {
            match self.submit(api_key, &image).await {
                Ok(result) => {
                    tracing::info!(%request_id, attempt, "Background removal successful");
                    return Ok(result);
                }
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    let delay = retry.backoff_for(attempt);
                    tracing::warn!(%request_id, attempt, "Retrying in {:?} after: {}", delay, e);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(%request_id, attempt, "Background removal failed: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// One POST to the provider
    async fn submit(&self, api_key: &ApiKey, image: &DecodedImage) -> Result<RemovalResult, GatewayError> {
        let file = Part::bytes(image.bytes.clone())
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(image.mime.as_str())
            .map_err(GatewayError::Network)?;

        let form = Form::new()
            .text("providers", self.config.provider.as_str())
            .part("file", file)
            .text("response_as_dict", "true")
            .text("attributes_as_list", "false")
            .text("output_format", OUTPUT_FORMAT);

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(api_key.expose())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Eden AI API error {}: {}", status, body);
            return Err(GatewayError::ProviderHttp {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        normalize_response(self.config.provider, &body).map_err(|violation| {
            tracing::error!("Eden AI did not return a usable result: {} (body: {})", violation, body);
            GatewayError::ProviderContract(violation)
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::ProviderTimeout(self.config.timeout)
        } else {
            GatewayError::Network(error)
        }
    }
}
