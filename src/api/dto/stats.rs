//! DTOs for statistics endpoints.

use serde::Serialize;

use crate::domain::entities::UsageSummary;

/// Store-wide totals returned by `GET /stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub average_clicks: i64,
}

impl From<UsageSummary> for SummaryResponse {
    fn from(summary: UsageSummary) -> Self {
        Self {
            total_urls: summary.total_urls,
            total_clicks: summary.total_clicks,
            average_clicks: summary.average_clicks(),
        }
    }
}
