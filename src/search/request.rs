//! Search Request Builder
//!
//! Maps form state and the page cursor to backend request payloads.

use serde::Serialize;

use super::filter::{PageCursor, SearchFilter, SearchMode};

/// Structured search body for `POST /api/members/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_units: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_member_id: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl SearchRequest {
    /// Build from an already validated filter
    pub fn from_filter(filter: &SearchFilter, cursor: PageCursor) -> Self {
        let units: Vec<String> = filter.business_units.iter().cloned().collect();
        Self {
            first_name: non_blank(&filter.first_name),
            middle_name: non_blank(&filter.middle_name),
            last_name: non_blank(&filter.last_name),
            business_units: (!units.is_empty()).then_some(units),
            country: non_blank(&filter.country),
            source_member_id: non_blank(&filter.source_member_id),
            page: cursor.page,
            size: cursor.size,
        }
    }
}

/// Natural-language search: raw query body plus page/size query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AiSearchRequest {
    pub query: String,
    pub page: u32,
    pub size: u32,
}

impl AiSearchRequest {
    /// `None` when the query is blank or whitespace-only
    pub fn new(query: &str, cursor: PageCursor) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query: query.to_string(),
            page: cursor.page,
            size: cursor.size,
        })
    }

    pub fn query_params(&self) -> [(&'static str, u32); 2] {
        [("page", self.page), ("size", self.size)]
    }
}

/// A request ready to send, in either mode
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCall {
    Standard(SearchRequest),
    NaturalLanguage(AiSearchRequest),
}

impl SearchCall {
    pub fn mode(&self) -> SearchMode {
        match self {
            SearchCall::Standard(_) => SearchMode::Standard,
            SearchCall::NaturalLanguage(_) => SearchMode::NaturalLanguage,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standard_request_omits_blank_fields() {
        let mut filter = SearchFilter {
            first_name: " John ".to_string(),
            country: "   ".to_string(),
            ..Default::default()
        };
        filter.toggle_business_unit("IT", true);

        let request = SearchRequest::from_filter(&filter, PageCursor::new(10));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, json!({"firstName": "John", "businessUnits": ["IT"], "page": 0, "size": 10}));
    }

    #[test]
    fn test_standard_request_carries_cursor() {
        let mut filter = SearchFilter {
            last_name: "Doe".to_string(),
            source_member_id: "M001".to_string(),
            ..Default::default()
        };
        filter.toggle_business_unit("Sales", true);
        filter.toggle_business_unit("HR", true);

        let request = SearchRequest::from_filter(&filter, PageCursor::new(25).at(3));

        assert_eq!(request.page, 3);
        assert_eq!(request.size, 25);
        assert_eq!(request.business_units, Some(vec!["HR".to_string(), "Sales".to_string()]));
        assert_eq!(request.source_member_id.as_deref(), Some("M001"));
    }

    #[test]
    fn test_ai_request_rejects_blank() {
        assert!(AiSearchRequest::new("", PageCursor::default()).is_none());
        assert!(AiSearchRequest::new(" \n\t ", PageCursor::default()).is_none());

        let request = AiSearchRequest::new("find engineers in USA", PageCursor::new(10)).unwrap();
        assert_eq!(request.query, "find engineers in USA");
        assert_eq!(request.query_params(), [("page", 0), ("size", 10)]);
    }
}
