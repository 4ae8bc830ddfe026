use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::retry::{RETRY_WAIT, with_retry};
use crate::token::AccessTokenProvider;

use super::encode::encode_send_payload;
use super::result::{ApiResult, normalize};

/// Default base URL of the remote service.
pub const SERVER_URL: &str = "https://api.weixin.qq.com";

/// Client for the user-management endpoints of the WeChat MP API.
///
/// Stateless between calls: every operation fetches a fresh access token,
/// issues exactly one HTTP request under the retry policy, and normalizes the
/// JSON response into an [`ApiResult`]. Cheap to clone and safe to share
/// across tasks.
#[derive(Clone)]
pub struct MpClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn AccessTokenProvider>,
    retry_wait: Duration,
}

impl MpClient {
    /// Creates a client against `base_url`, defaulting to [`SERVER_URL`].
    #[tracing::instrument(skip(http, tokens))]
    pub fn new(
        http: Client,
        tokens: Arc<dyn AccessTokenProvider>,
        base_url: Option<String>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| SERVER_URL.to_string());
        Self {
            http,
            base_url,
            tokens,
            retry_wait: RETRY_WAIT,
        }
    }

    /// Overrides the wait between retry attempts.
    pub fn with_retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON payload to `path` and normalizes the response.
    ///
    /// The payload is encoded once up front; when encoding fails the call
    /// returns errcode -10001 without touching the network. The access token
    /// is fetched freshly on every attempt and attached as the `access_token`
    /// query parameter, so retry sits outermost and the credential innermost.
    #[tracing::instrument(skip(self, payload))]
    pub async fn post_api<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
        success_key: Option<&str>,
    ) -> Result<ApiResult> {
        let Some(body) = encode_send_payload(payload) else {
            return Ok(ApiResult::encoding_failed());
        };
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}...", url);

        let value = with_retry(path, self.retry_wait, || {
            let http = self.http.clone();
            let url = url.clone();
            let body = body.clone();
            let tokens = Arc::clone(&self.tokens);
            async move {
                let token = tokens
                    .access_token()
                    .await
                    .context("failed to obtain access token")?;

                let response = http
                    .post(&url)
                    .query(&[("access_token", token.as_str())])
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .send()
                    .await
                    .context("failed to send request")?;

                let value = response
                    .error_for_status()?
                    .json::<Value>()
                    .await
                    .context("failed to parse JSON response")?;

                Ok(value)
            }
        })
        .await?;

        normalize(value, success_key)
    }

    /// GETs `path` with the given query pairs and normalizes the response.
    /// Token handling and retry behave exactly as in [`Self::post_api`].
    #[tracing::instrument(skip(self, query))]
    pub async fn get_api(
        &self,
        path: &str,
        query: &[(&str, &str)],
        success_key: Option<&str>,
    ) -> Result<ApiResult> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} with query {:?}...", url, query);

        let query: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let value = with_retry(path, self.retry_wait, || {
            let http = self.http.clone();
            let url = url.clone();
            let query = query.clone();
            let tokens = Arc::clone(&self.tokens);
            async move {
                let token = tokens
                    .access_token()
                    .await
                    .context("failed to obtain access token")?;

                let response = http
                    .get(&url)
                    .query(&[("access_token", token.as_str())])
                    .query(&query)
                    .send()
                    .await
                    .context("failed to send request")?;

                let value = response
                    .error_for_status()?
                    .json::<Value>()
                    .await
                    .context("failed to parse JSON response")?;

                Ok(value)
            }
        })
        .await?;

        normalize(value, success_key)
    }
}
