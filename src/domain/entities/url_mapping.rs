//! Url mapping entity: one short code pointing at one long URL.

use chrono::{DateTime, Utc};

/// A stored short code → URL record with its hit counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub access_count: i64,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        access_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            updated_at,
            access_count,
        }
    }

    /// Builds the record for a freshly inserted row.
    ///
    /// Counters always start at zero.
    pub fn from_insert(id: i64, new_mapping: NewUrlMapping) -> Self {
        Self::new(
            id,
            new_mapping.original_url,
            new_mapping.short_code,
            new_mapping.created_at,
            new_mapping.updated_at,
            0,
        )
    }

    /// Returns true if the target URL was changed after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUrlMapping {
    /// Creates an insert payload where both timestamps equal `now`.
    pub fn new(original_url: String, short_code: String, now: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_code,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregate figures over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageSummary {
    pub total_urls: i64,
    pub total_clicks: i64,
}

impl UsageSummary {
    /// Average hits per stored URL, rounded to the nearest integer.
    pub fn average_clicks(&self) -> i64 {
        if self.total_urls == 0 {
            return 0;
        }
        (self.total_clicks as f64 / self.total_urls as f64).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_from_insert_starts_at_zero() {
        let now = Utc::now();
        let new_mapping = NewUrlMapping::new(
            "https://example.com".to_string(),
            "abc123".to_string(),
            now,
        );

        let mapping = UrlMapping::from_insert(7, new_mapping);

        assert_eq!(mapping.id, 7);
        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.short_code, "abc123");
        assert_eq!(mapping.created_at, now);
        assert_eq!(mapping.updated_at, now);
        assert_eq!(mapping.access_count, 0);
        assert!(!mapping.was_updated());
    }

    #[test]
    fn test_was_updated() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "code".to_string(),
            now,
            now + Duration::seconds(5),
            3,
        );
        assert!(mapping.was_updated());
    }

    #[test]
    fn test_average_clicks() {
        let summary = UsageSummary {
            total_urls: 3,
            total_clicks: 10,
        };
        assert_eq!(summary.average_clicks(), 3);

        let empty = UsageSummary {
            total_urls: 0,
            total_clicks: 0,
        };
        assert_eq!(empty.average_clicks(), 0);
    }
}
