//! Client binding for the WeChat MP user-management API: tags, user info,
//! and blacklist operations.

mod blacklist;
mod client;
mod encode;
mod result;
mod tags;
mod types;
mod users;

pub use client::{MpClient, SERVER_URL};
pub use encode::encode_send_payload;
pub use result::{ApiResult, ENCODING_FAILED};
pub use types::{OpenIdList, OpenIdPage, Tag};
