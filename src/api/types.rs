use serde::{Deserialize, Serialize};

/// A named grouping users can be attached to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Number of users carrying the tag; omitted on creation responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// `openid` container used by paginated listings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenIdList {
    #[serde(default)]
    pub openid: Vec<String>,
}

/// One page of a user, tag-member, or blacklist listing.
///
/// Decoded with [`ApiResult::decode_all`](super::ApiResult::decode_all)
/// because the remote service puts these fields at the top level of the
/// response. `total` is absent on tag-member pages.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OpenIdPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: OpenIdList,
    /// Continuation cursor; empty when the listing is exhausted.
    #[serde(default)]
    pub next_openid: String,
}
