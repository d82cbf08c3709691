//! Frontend Models
//!
//! Data structures matching the member search backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Member record (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub middle_name: String,
    pub last_name: String,
    pub business_unit: String,
    pub country: String,
    pub source_member_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitled: Option<bool>,
}

impl Member {
    /// Display name used in the grid and edit dialog title
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One page of search results as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub content: Vec<Member>,
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
