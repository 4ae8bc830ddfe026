//! Tag management operations.

use anyhow::Result;
use serde_json::json;

use super::client::MpClient;
use super::result::ApiResult;

impl MpClient {
    /// Creates a named tag. The response carries the new tag's id and name
    /// under `tag`.
    pub async fn create_tag(&self, name: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/create",
            &json!({"tag": {"name": name}}),
            Some("tag"),
        )
        .await
    }

    /// Lists every tag under the account, under `tags`.
    pub async fn get_tags(&self) -> Result<ApiResult> {
        self.get_api("/cgi-bin/tags/get", &[], Some("tags")).await
    }

    /// Renames a tag. The remote status passes through unchanged.
    pub async fn update_tag(&self, id: i64, name: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/update",
            &json!({"tag": {"name": name, "id": id}}),
            None,
        )
        .await
    }

    /// Deletes a tag. The remote status passes through unchanged.
    pub async fn delete_tag(&self, id: i64) -> Result<ApiResult> {
        self.post_api("/cgi-bin/tags/delete", &json!({"tag": {"id": id}}), None)
            .await
    }

    /// Lists one page of the users carrying a tag. An empty `next_openid`
    /// starts from the beginning; the `next_openid` in the response continues
    /// the listing.
    pub async fn get_users_of_tag(&self, id: i64, next_openid: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tag/get",
            &json!({"tagid": id, "next_openid": next_openid}),
            Some("count"),
        )
        .await
    }

    /// Attaches a tag to every user in `openids` in one request.
    pub async fn add_users_into_tag(&self, id: i64, openids: &[&str]) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/members/batchtagging",
            &json!({"openid_list": openids, "tagid": id}),
            None,
        )
        .await
    }

    /// Detaches a tag from every user in `openids` in one request.
    pub async fn delete_users_of_tag(&self, id: i64, openids: &[&str]) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/members/batchuntagging",
            &json!({"tagid": id, "openid_list": openids}),
            None,
        )
        .await
    }

    /// Lists the tag ids attached to one user, under `tagid_list`.
    pub async fn get_tags_of_user(&self, openid: &str) -> Result<ApiResult> {
        self.post_api(
            "/cgi-bin/tags/getidlist",
            &json!({"openid": openid}),
            Some("tagid_list"),
        )
        .await
    }
}
