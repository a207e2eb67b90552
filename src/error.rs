// Aggregator error taxonomy: configuration vs upstream failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required credential absent or invalid setup. Not retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub GraphQL responded with an application-level error array.
    #[error("GitHub GraphQL error: {0}")]
    GithubGraph(String),

    /// GitHub REST listing returned a non-2xx status.
    #[error("GitHub REST error: {0}")]
    GithubRest(String),

    /// Either WakaTime stats call returned a non-2xx status.
    #[error("WakaTime error: {0}")]
    Wakatime(String),

    /// Transport failure or undecodable upstream body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
