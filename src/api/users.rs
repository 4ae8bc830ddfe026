//! User info and listing operations.

use anyhow::Result;
use serde_json::json;

use super::client::MpClient;
use super::result::ApiResult;

impl MpClient {
    /// Fetches one user's profile from the single-record endpoint. Success is
    /// signalled by the `openid` field in the response.
    pub async fn get_user_info(&self, openid: &str) -> Result<ApiResult> {
        self.get_api(
            "/cgi-bin/user/info",
            &[("openid", openid), ("lang", "zh_CN")],
            Some("openid"),
        )
        .await
    }

    /// Fetches several profiles in a single batch request, returned under
    /// `user_info_list`. The remote API caps the batch size; the cap is not
    /// enforced here. Note the batch endpoint spells the language tag
    /// `zh-CN`, unlike the single-record one.
    pub async fn batch_get_user_info(&self, openids: &[&str]) -> Result<ApiResult> {
        let user_list: Vec<_> = openids
            .iter()
            .map(|id| json!({"openid": id, "lang": "zh-CN"}))
            .collect();
        self.post_api(
            "/cgi-bin/user/info/batchget",
            &json!({"user_list": user_list}),
            Some("user_info_list"),
        )
        .await
    }

    /// Lists one page of the account's followers, under `data`. An empty
    /// `next_openid` starts from the beginning.
    pub async fn get_users(&self, next_openid: &str) -> Result<ApiResult> {
        self.get_api(
            "/cgi-bin/user/get",
            &[("next_openid", next_openid)],
            Some("data"),
        )
        .await
    }

    /// Sets a display alias for a user. The remote side restricts this to
    /// verified service accounts; the restriction is not enforced here and
    /// the remote status passes through unchanged.
    pub async fn set_alias(&self, openid: &str, alias: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/user/info/updateremark",
            &json!({"openid": openid, "remark": alias}),
            None,
        )
        .await
    }
}
