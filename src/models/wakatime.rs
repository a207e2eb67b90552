// WakaTime shapes: the /api/wakatime payload and upstream stats bodies.
// WakaTime's contract is snake_case, kept as-is.

use serde::{Deserialize, Serialize};

/// Share of tracked time for one language, in the order WakaTime reports
/// them. `percent` is passed through untrusted arithmetic-wise (no check
/// that the list sums to 100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageUsage {
    pub name: String,
    pub percent: f64,
    pub text: String,
}

/// Stats for one time window (the dashboard uses last 7 days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingStats {
    pub human_readable_total_including_other_language: String,
    pub human_readable_daily_average_including_other_language: String,
    #[serde(default)]
    pub languages: Vec<LanguageUsage>,
}

/// Cumulative tracked time since the account started using WakaTime.
/// `total_seconds` of zero signals "no data yet" (upstream reports
/// fractional seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTimeStats {
    pub text: String,
    pub total_seconds: f64,
}

/// Payload of GET /api/wakatime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub stats_7_days: CodingStats,
    pub stats_all_time: AllTimeStats,
}

/// WakaTime wraps every response body in a `data` envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
