//! JSON representation of a url mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlMapping;

/// Record body returned by shorten, resolve, update and stats.
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com",
///   "shortCode": "Xy3_a9Qk",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "updatedAt": "2025-01-01T12:00:00Z",
///   "accessCount": 0
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMappingResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub access_count: i64,
}

impl From<UrlMapping> for UrlMappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id,
            url: mapping.original_url,
            short_code: mapping.short_code,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
            access_count: mapping.access_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_camel_case_fields() {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "abc123".to_string(),
            created,
            created,
            0,
        );

        let value = serde_json::to_value(UrlMappingResponse::from(mapping)).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["shortCode"], "abc123");
        assert_eq!(value["createdAt"], "2025-01-02T03:04:05Z");
        assert_eq!(value["updatedAt"], "2025-01-02T03:04:05Z");
        assert_eq!(value["accessCount"], 0);
    }
}
