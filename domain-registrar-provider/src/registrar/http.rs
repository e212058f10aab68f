//! JSON-over-HTTP registrar client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{RegistrarApi, RegistrarConfig};
use crate::error::{RegistrarError, Result};
use crate::types::{BuyDomainsRequest, Domain, GetDomainRequest, OrderResponse};
use crate::utils::log_sanitizer::truncate_for_log;

const LOG_TAG: &str = "registrar";
const API_PATH: &str = "/domain/v2beta1";
const AUTH_HEADER: &str = "X-Auth-Token";

/// Error payload returned by the registrar on non-2xx answers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// [`RegistrarApi`] backed by the registrar's HTTP API.
pub struct HttpRegistrar {
    client: Client,
    config: RegistrarConfig,
}

impl HttpRegistrar {
    /// Creates a client with the connect/request timeouts from `config`.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::NetworkError`] if the HTTP client cannot be built (e.g. no TLS
    /// backend available).
    pub fn new(config: RegistrarConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                RegistrarError::NetworkError(format!("Failed to create HTTP client: {e}"))
            })?;
        Ok(Self { client, config })
    }

    /// Uses an existing client, e.g. one shared with other services.
    pub fn with_client(config: RegistrarConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{API_PATH}{path}",
            self.config.api_url.trim_end_matches('/')
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(AUTH_HEADER, &self.config.secret_key)
    }
}

#[async_trait]
impl RegistrarApi for HttpRegistrar {
    async fn buy_domains(&self, request: &BuyDomainsRequest) -> Result<OrderResponse> {
        let url = self.url("/buy-domains");
        let body = serde_json::to_string(request)
            .map_err(|e| RegistrarError::SerializationError(e.to_string()))?;
        log::debug!("[{LOG_TAG}] Request Body: {}", truncate_for_log(&body));

        let builder = self
            .authorized(self.client.post(&url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let (status, text) = execute_request(builder, "POST", &url).await?;
        check_status(status, &text, None)?;
        parse_json(&text)
    }

    async fn get_domain(&self, request: &GetDomainRequest) -> Result<Domain> {
        let url = self.url(&format!(
            "/domains/{}",
            urlencoding::encode(&request.domain)
        ));

        let builder = self.authorized(self.client.get(&url));
        let (status, text) = execute_request(builder, "GET", &url).await?;
        check_status(status, &text, Some(request.domain.as_str()))?;
        parse_json(&text)
    }
}

/// Sends a request and reads the whole body, logging both ends.
async fn execute_request(
    builder: RequestBuilder,
    method: &str,
    url: &str,
) -> Result<(u16, String)> {
    log::debug!("[{LOG_TAG}] {method} {url}");

    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            RegistrarError::Timeout(e.to_string())
        } else {
            RegistrarError::NetworkError(e.to_string())
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[{LOG_TAG}] Response Status: {status}");

    let text = response.text().await.map_err(|e| {
        RegistrarError::NetworkError(format!("Failed to read response body: {e}"))
    })?;
    log::debug!("[{LOG_TAG}] Response Body: {}", truncate_for_log(&text));

    Ok((status, text))
}

/// Maps a non-2xx status to the matching [`RegistrarError`].
///
/// `domain` names the looked-up domain for 404s; without one a 404 is a plain API error.
fn check_status(status: u16, body: &str, domain: Option<&str>) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let parsed = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| truncate_for_log(body));
    log::warn!(
        "[{LOG_TAG}] HTTP {status} ({}): {message}",
        parsed.kind.as_deref().unwrap_or("unknown")
    );

    Err(match (status, domain) {
        (401 | 403, _) => RegistrarError::InvalidCredentials(message),
        (404, Some(domain)) => RegistrarError::DomainNotFound {
            domain: domain.to_string(),
        },
        _ => RegistrarError::Api { status, message },
    })
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        log::error!("[{LOG_TAG}] JSON parse failed: {e}");
        log::error!("[{LOG_TAG}] Raw response: {}", truncate_for_log(text));
        RegistrarError::ParseError(e.to_string())
    })
}
