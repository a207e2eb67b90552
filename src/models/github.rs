// GitHub shapes: the /api/github payload plus the upstream GraphQL and REST
// bodies it is built from. The client contract is camelCase.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dominant language of a repository (`primaryLanguage` upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoLanguage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One of the up to six repositories featured on the profile. Passed through
/// from upstream verbatim, in upstream pinned order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedRepo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub primary_language: Option<RepoLanguage>,
}

/// Repository count for one language; color is best-effort (REST listings
/// rarely carry it, so it is backfilled from the pinned repositories).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangStat {
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload of GET /api/github. The language mapping keeps encounter order so
/// identical upstream data always serializes to identical bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSummary {
    pub avatar_url: String,
    pub name: String,
    pub pinned_repos: Vec<PinnedRepo>,
    pub lang_stats: IndexMap<String, LangStat>,
}

// --- upstream wire shapes ---

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<GraphqlData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlData {
    pub user: Option<GraphqlUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlUser {
    pub avatar_url: String,
    /// Display name; null when the account never set one.
    pub name: Option<String>,
    pub pinned_items: PinnedItems,
}

#[derive(Debug, Deserialize)]
pub struct PinnedItems {
    pub nodes: Vec<PinnedRepo>,
}

/// One entry of GET /users/{username}/repos. Only the fields the language
/// fold reads; everything else in the listing is ignored.
#[derive(Debug, Deserialize)]
pub struct RepoListing {
    pub language: Option<String>,
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<RepoLanguage>,
}
