// Shared test helpers

use devdash::config::AppConfig;

pub const TEST_CONFIG: &str = r#"
[server]
port = 8082
host = "0.0.0.0"

[github]
username = "octocat"

[wakatime]

[cache]
ttl_secs = 3600
"#;

pub fn test_config() -> AppConfig {
    AppConfig::load_from_str(TEST_CONFIG).unwrap()
}

/// Config pointing both upstreams at a mockito server, with secrets set.
pub fn test_config_with_upstream(upstream_url: &str) -> AppConfig {
    let mut config = test_config();
    config.github.api_url = upstream_url.to_string();
    config.github.graphql_url = format!("{upstream_url}/graphql");
    config.github.token = Some("test-token".into());
    config.wakatime.api_url = upstream_url.to_string();
    config.wakatime.api_key = Some("waka_test_key".into());
    config
}

pub fn graphql_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "user": {
                "avatarUrl": "https://avatars.example.com/u/1",
                "name": "The Octocat",
                "pinnedItems": {
                    "nodes": [
                        {
                            "id": "R_1",
                            "name": "hello-world",
                            "description": "My first repository",
                            "url": "https://github.com/octocat/hello-world",
                            "stargazerCount": 42,
                            "forkCount": 7,
                            "primaryLanguage": { "name": "Rust", "color": "#dea584" }
                        },
                        {
                            "id": "R_2",
                            "name": "spoon-knife",
                            "description": null,
                            "url": "https://github.com/octocat/spoon-knife",
                            "stargazerCount": 3,
                            "forkCount": 1,
                            "primaryLanguage": null
                        }
                    ]
                }
            }
        }
    })
}

pub fn repo_listing_body() -> serde_json::Value {
    serde_json::json!([
        { "name": "hello-world", "language": "Rust" },
        { "name": "dotfiles", "language": "Rust" },
        { "name": "scripts", "language": "TypeScript" },
        { "name": "notes", "language": null }
    ])
}

pub fn waka_7_days_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "human_readable_total_including_other_language": "20 hrs 30 mins",
            "human_readable_daily_average_including_other_language": "2 hrs 55 mins",
            "languages": [
                { "name": "Rust", "percent": 61.2, "text": "12 hrs 33 mins" },
                { "name": "TypeScript", "percent": 25.4, "text": "5 hrs 12 mins" },
                { "name": "TOML", "percent": 13.4, "text": "2 hrs 45 mins" }
            ]
        }
    })
}

pub fn waka_all_time_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "text": "1,024 hrs 11 mins",
            "total_seconds": 3687060.25
        }
    })
}
