// Response and upstream wire shapes

mod github;
mod wakatime;

pub use github::{
    GithubSummary, GraphqlData, GraphqlError, GraphqlResponse, GraphqlUser, LangStat, PinnedItems,
    PinnedRepo, RepoLanguage, RepoListing,
};
pub use wakatime::{ActivitySummary, AllTimeStats, CodingStats, DataEnvelope, LanguageUsage};
