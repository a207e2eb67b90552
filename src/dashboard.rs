// Dashboard view-model: the data contract the browser widgets implement.
// Rendering lives in the frontend; the state derivation and ordering rules
// are here so they stay testable.

use crate::models::{ActivitySummary, CodingStats, GithubSummary, LangStat, LanguageUsage};
use indexmap::IndexMap;

/// How many coding languages the activity widget shows.
pub const TOP_LANGUAGES: usize = 5;

/// Display state a widget derives from the shared fetch result. Widgets
/// sharing one endpoint derive their states independently from the same
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState<T> {
    /// No outcome observed yet.
    Loading,
    /// The endpoint rejected or returned a failure body.
    Error,
    /// The call succeeded but the relevant collection is empty.
    Empty,
    Ready(T),
}

impl<T> WidgetState<T> {
    /// `outcome` is `None` while the shared fetch is still in flight.
    pub fn derive<E>(
        outcome: Option<std::result::Result<T, E>>,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> Self {
        match outcome {
            None => WidgetState::Loading,
            Some(Err(_)) => WidgetState::Error,
            Some(Ok(v)) if is_empty(&v) => WidgetState::Empty,
            Some(Ok(v)) => WidgetState::Ready(v),
        }
    }
}

/// Empty predicate for the pinned-repositories widget.
pub fn no_pinned_repos(summary: &GithubSummary) -> bool {
    summary.pinned_repos.is_empty()
}

/// Empty predicate for the language-statistics widget.
pub fn no_lang_stats(summary: &GithubSummary) -> bool {
    summary.lang_stats.is_empty()
}

/// Empty predicate for the coding-activity widget: an all-time total of
/// zero seconds means the account has no tracked data yet.
pub fn no_tracked_time(summary: &ActivitySummary) -> bool {
    summary.stats_all_time.total_seconds == 0.0
}

/// Languages by repository count, descending. Ties keep the encounter order
/// of the aggregated mapping (stable sort).
pub fn sorted_lang_stats(stats: &IndexMap<String, LangStat>) -> Vec<(&str, &LangStat)> {
    let mut out: Vec<(&str, &LangStat)> = stats.iter().map(|(k, v)| (k.as_str(), v)).collect();
    out.sort_by(|a, b| b.1.count.cmp(&a.1.count));
    out
}

/// First `n` languages in the order WakaTime reported them; never re-sorted
/// by percent.
pub fn top_languages(stats: &CodingStats, n: usize) -> &[LanguageUsage] {
    &stats.languages[..stats.languages.len().min(n)]
}
