// Library for tests to access modules

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod github_repo;
pub mod models;
pub mod routes;
pub mod version;
pub mod wakatime_repo;
