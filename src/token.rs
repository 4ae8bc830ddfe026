//! Access-token provisioning seam.

use anyhow::Result;
use async_trait::async_trait;

/// Supplies the current bearer access token for the remote API.
///
/// Dispatch consults the provider freshly before every request attempt;
/// implementations may cache and refresh transparently. A failure here
/// propagates as an error into the retry loop, exactly like a transport
/// failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// Provider backed by a fixed token string.
///
/// Suitable for tests and for setups where refresh happens out of band.
pub struct StaticAccessToken(pub String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
