//! Activities API
//!
//! Frontend bindings to the backend endpoints, behind a trait so the board
//! can be driven by something other than `fetch`.

mod http;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::BoardError;
use crate::models::{ActivityPayload, ApiMessage};

pub use http::HttpApi;

/// Same characters `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Response of a mutation endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub ok: bool,
    pub status: u16,
    pub body: ApiMessage,
}

impl ApiReply {
    pub fn into_result(self) -> Result<ApiMessage, BoardError> {
        if self.ok {
            Ok(self.body)
        } else {
            Err(BoardError::Http {
                status: self.status,
                detail: self.body.detail_text(),
            })
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`, bypassing any HTTP cache
    async fn fetch_activities(&self) -> Result<ActivityPayload, BoardError>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError>;

    /// `DELETE /activities/{name}/participants?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError>;
}

// ========================
// Paths
// ========================

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

pub fn activities_path(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

pub fn signup_path(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        activities_path(base),
        encode_component(activity),
        encode_component(email)
    )
}

pub fn participants_path(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        activities_path(base),
        encode_component(activity),
        encode_component(email)
    )
}
