//! Backend API
//!
//! The member search REST backend, seen through the `MemberApi` trait so the
//! orchestrator and edit flow can be driven by a fake in tests.

mod member;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Member, SearchResponse};
use crate::search::{AiSearchRequest, SearchCall, SearchRequest};

pub use member::HttpMemberApi;

/// Member search backend operations
#[async_trait(?Send)]
pub trait MemberApi {
    /// `POST /api/members/search`
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchResponse>;

    /// `POST /api/members/search/ai?page=&size=`
    async fn ai_search(&self, request: &AiSearchRequest) -> AppResult<SearchResponse>;

    /// `PUT /api/members/{id}`
    async fn update_member(&self, id: i64, member: &Member) -> AppResult<Member>;

    /// Send a search in whichever mode it was built for
    async fn run(&self, call: &SearchCall) -> AppResult<SearchResponse> {
        match call {
            SearchCall::Standard(request) => self.search(request).await,
            SearchCall::NaturalLanguage(request) => self.ai_search(request).await,
        }
    }
}
