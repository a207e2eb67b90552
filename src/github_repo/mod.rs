// GitHub profile aggregation: one GraphQL call for the profile header and
// pinned repositories, one REST listing call for account-wide language
// counts (the graph API only exposes primaryLanguage on pinned items).

use crate::config::GithubConfig;
use crate::error::{Error, Result};
use crate::models::{GithubSummary, GraphqlResponse, LangStat, PinnedRepo, RepoListing};
use indexmap::IndexMap;
use reqwest::Client;
use tracing::instrument;

const USER_AGENT: &str = concat!("devdash/", env!("CARGO_PKG_VERSION"));

/// Profile + pinned repositories in one query; `%USERNAME%` is substituted
/// at request time.
const PINNED_QUERY: &str = r#"
query {
  user(login: "%USERNAME%") {
    avatarUrl
    name
    pinnedItems(first: 6, types: REPOSITORY) {
      nodes {
        ... on Repository {
          id
          name
          description
          url
          stargazerCount
          forkCount
          primaryLanguage {
            name
            color
          }
        }
      }
    }
  }
}
"#;

pub struct GithubRepo {
    client: Client,
    config: GithubConfig,
}

impl GithubRepo {
    pub fn new(config: GithubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client, config })
    }

    fn token(&self) -> Result<&str> {
        self.config
            .token
            .as_deref()
            .ok_or_else(|| Error::Config("GITHUB_TOKEN not set".into()))
    }

    /// Builds the full /api/github payload. Both upstream calls complete
    /// before the response is composed; no partial data is ever returned.
    #[instrument(skip(self), fields(repo = "github", operation = "get_summary"))]
    pub async fn get_summary(&self) -> Result<GithubSummary> {
        let token = self.token()?;

        let query = PINNED_QUERY.replace("%USERNAME%", &self.config.username);
        let graph: GraphqlResponse = self
            .client
            .post(&self.config.graphql_url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?
            .json()
            .await?;

        // Application-level errors arrive with HTTP 200; surface the first
        // message and stop before the REST call.
        if let Some(err) = graph.errors.first() {
            return Err(Error::GithubGraph(err.message.clone()));
        }
        let user = graph.data.and_then(|d| d.user).ok_or_else(|| {
            Error::GithubGraph(format!("user {} not found", self.config.username))
        })?;

        let listing = self.fetch_repo_listing(token).await?;
        let mut lang_stats = fold_lang_stats(&listing);
        backfill_colors(&mut lang_stats, &user.pinned_items.nodes);

        tracing::debug!(
            pinned = user.pinned_items.nodes.len(),
            languages = lang_stats.len(),
            "GitHub summary composed"
        );

        Ok(GithubSummary {
            avatar_url: user.avatar_url,
            name: user.name.unwrap_or_else(|| self.config.username.clone()),
            pinned_repos: user.pinned_items.nodes,
            lang_stats,
        })
    }

    /// Up to 100 repositories, most-recently-pushed first; that order is
    /// what the language fold encounters.
    async fn fetch_repo_listing(&self, token: &str) -> Result<Vec<RepoListing>> {
        let url = format!(
            "{}/users/{}/repos?per_page=100&sort=pushed",
            self.config.api_url, self.config.username
        );
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GithubRest(format!("{status}: {body}")));
        }
        Ok(response.json().await?)
    }
}

/// Folds the repository listing into language -> {count, color}. Repos with
/// no detected language are skipped. Encounter order is preserved; the color
/// is taken from the first repo of that language that carries one.
pub fn fold_lang_stats(listing: &[RepoListing]) -> IndexMap<String, LangStat> {
    let mut stats: IndexMap<String, LangStat> = IndexMap::new();
    for repo in listing {
        let Some(lang) = repo.language.as_deref().filter(|l| !l.is_empty()) else {
            continue;
        };
        let entry = stats.entry(lang.to_string()).or_insert(LangStat {
            count: 0,
            color: None,
        });
        entry.count += 1;
        if entry.color.is_none() {
            entry.color = repo.primary_language.as_ref().and_then(|l| l.color.clone());
        }
    }
    stats
}

/// REST listings rarely include `primaryLanguage`, so colors still missing
/// after the fold are filled from the pinned repositories of the graph
/// response.
fn backfill_colors(stats: &mut IndexMap<String, LangStat>, pinned: &[PinnedRepo]) {
    for repo in pinned {
        if let Some(lang) = &repo.primary_language
            && let Some(stat) = stats.get_mut(&lang.name)
            && stat.color.is_none()
        {
            stat.color = lang.color.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoLanguage;

    fn listing(lang: Option<&str>) -> RepoListing {
        RepoListing {
            language: lang.map(str::to_string),
            primary_language: None,
        }
    }

    fn pinned(lang: &str, color: Option<&str>) -> PinnedRepo {
        PinnedRepo {
            id: "id".into(),
            name: "repo".into(),
            description: None,
            url: "https://example.com".into(),
            stargazer_count: 0,
            fork_count: 0,
            primary_language: Some(RepoLanguage {
                name: lang.into(),
                color: color.map(str::to_string),
            }),
        }
    }

    #[test]
    fn fold_counts_languages_and_skips_null() {
        let repos = vec![
            listing(Some("Go")),
            listing(Some("Go")),
            listing(Some("Rust")),
            listing(None),
        ];
        let stats = fold_lang_stats(&repos);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Go"].count, 2);
        assert_eq!(stats["Rust"].count, 1);
    }

    #[test]
    fn fold_skips_empty_language_string() {
        let repos = vec![listing(Some("")), listing(Some("Rust"))];
        let stats = fold_lang_stats(&repos);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats["Rust"].count, 1);
    }

    #[test]
    fn fold_preserves_encounter_order() {
        let repos = vec![
            listing(Some("TypeScript")),
            listing(Some("Rust")),
            listing(Some("TypeScript")),
            listing(Some("Go")),
        ];
        let stats = fold_lang_stats(&repos);
        let keys: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["TypeScript", "Rust", "Go"]);
    }

    #[test]
    fn fold_takes_color_from_first_repo_that_has_one() {
        let repos = vec![
            RepoListing {
                language: Some("Rust".into()),
                primary_language: None,
            },
            RepoListing {
                language: Some("Rust".into()),
                primary_language: Some(RepoLanguage {
                    name: "Rust".into(),
                    color: Some("#dea584".into()),
                }),
            },
        ];
        let stats = fold_lang_stats(&repos);
        assert_eq!(stats["Rust"].count, 2);
        assert_eq!(stats["Rust"].color.as_deref(), Some("#dea584"));
    }

    #[test]
    fn backfill_fills_missing_colors_only() {
        let mut stats = fold_lang_stats(&[listing(Some("Rust")), listing(Some("Go"))]);
        stats["Go"].color = Some("#00add8".into());

        backfill_colors(
            &mut stats,
            &[pinned("Rust", Some("#dea584")), pinned("Go", Some("#other"))],
        );
        assert_eq!(stats["Rust"].color.as_deref(), Some("#dea584"));
        // Already attributed; the pinned color does not overwrite it.
        assert_eq!(stats["Go"].color.as_deref(), Some("#00add8"));
    }

    #[test]
    fn backfill_ignores_languages_outside_the_fold() {
        let mut stats = fold_lang_stats(&[listing(Some("Rust"))]);
        backfill_colors(&mut stats, &[pinned("Haskell", Some("#5e5086"))]);
        assert_eq!(stats.len(), 1);
        assert!(!stats.contains_key("Haskell"));
    }
}
