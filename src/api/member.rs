//! HTTP Member API
//!
//! `reqwest` client for the member search backend. On wasm32 it runs on the
//! browser `fetch` API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::MemberApi;
use crate::error::{AppError, AppResult};
use crate::models::{Member, SearchResponse};
use crate::search::{AiSearchRequest, SearchRequest};

#[derive(Clone, Debug)]
pub struct HttpMemberApi {
    client: Client,
    base_url: String,
}

impl HttpMemberApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and decode, mapping non-2xx responses onto `AppError`
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = AppError::from_response(status.as_u16(), status.canonical_reason().unwrap_or(""), &body);
            log::warn!("[API] request failed: {}", err);
            return Err(err);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl MemberApi for HttpMemberApi {
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchResponse> {
        log::debug!("[API] search page={} size={}", request.page, request.size);
        let builder = self.client.post(self.url("/api/members/search")).json(request);
        self.execute(builder).await
    }

    async fn ai_search(&self, request: &AiSearchRequest) -> AppResult<SearchResponse> {
        log::debug!("[API] ai search page={} size={}", request.page, request.size);
        let builder = self
            .client
            .post(self.url("/api/members/search/ai"))
            .query(&request.query_params())
            .header(CONTENT_TYPE, "text/plain")
            .body(request.query.clone());
        self.execute(builder).await
    }

    async fn update_member(&self, id: i64, member: &Member) -> AppResult<Member> {
        log::debug!("[API] update member {}", id);
        let builder = self.client.put(self.url(&format!("/api/members/{}", id))).json(member);
        self.execute(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let api = HttpMemberApi::new("https://localhost:8443/");
        assert_eq!(api.url("/api/members/search"), "https://localhost:8443/api/members/search");
    }
}
