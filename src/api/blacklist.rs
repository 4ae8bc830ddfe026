//! Blacklist operations.

use anyhow::Result;
use serde_json::json;

use super::client::MpClient;
use super::result::ApiResult;

impl MpClient {
    /// Lists one page of blacklisted users, under `data`. An empty
    /// `begin_openid` starts from the beginning.
    pub async fn get_blacklist(&self, begin_openid: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/members/getblacklist",
            &json!({"begin_openid": begin_openid}),
            Some("data"),
        )
        .await
    }

    /// Blacklists a single user, wrapping the id into a one-element batch.
    pub async fn add_user_into_blacklist(&self, openid: &str) -> Result<ApiResult> {
        self.add_users_into_blacklist(&[openid]).await
    }

    /// Blacklists every user in `openids` in one request. The remote status
    /// passes through unchanged.
    pub async fn add_users_into_blacklist(&self, openids: &[&str]) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/members/batchblacklist",
            &json!({"openid_list": openids}),
            None,
        )
        .await
    }

    /// Removes a single user from the blacklist, wrapping the id into a
    /// one-element batch.
    pub async fn delete_user_of_blacklist(&self, openid: &str) -> Result<ApiResult> {
        self.delete_users_of_blacklist(&[openid]).await
    }

    /// Removes every user in `openids` from the blacklist in one request.
    pub async fn delete_users_of_blacklist(&self, openids: &[&str]) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/members/batchunblacklist",
            &json!({"openid_list": openids}),
            None,
        )
        .await
    }
}
