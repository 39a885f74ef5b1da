//! HTTP Backend
//!
//! `ActivityApi` over the browser's `fetch`, via gloo-net.

use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::RequestCache;

use super::{activities_path, participants_path, signup_path, ActivityApi, ApiReply};
use crate::error::BoardError;
use crate::models::{ActivityPayload, ApiMessage};

#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

async fn read_reply(response: Response) -> Result<ApiReply, BoardError> {
    let body: ApiMessage = response.json().await?;
    Ok(ApiReply {
        ok: response.ok(),
        status: response.status(),
        body,
    })
}

impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityPayload, BoardError> {
        let response = Request::get(&activities_path(&self.base))
            .cache(RequestCache::NoStore)
            .header("Cache-Control", "no-cache")
            .send()
            .await?;
        let body: Value = response.json().await?;
        ActivityPayload::try_from(body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError> {
        let response = Request::post(&signup_path(&self.base, activity, email))
            .send()
            .await?;
        read_reply(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError> {
        let response = Request::delete(&participants_path(&self.base, activity, email))
            .send()
            .await?;
        read_reply(response).await
    }
}
