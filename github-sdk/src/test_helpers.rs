// ABOUTME: Test helper utilities for mocking GitHub API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

use mockito::{Server, ServerGuard};
use serde_json::json;

pub async fn mock_github_server() -> ServerGuard {
    Server::new_async().await
}

pub fn mock_profile_response(login: &str) -> serde_json::Value {
    json!({
        "login": login,
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": format!("https://avatars.githubusercontent.com/u/583231?v=4&login={}", login),
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "bio": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 21000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

pub fn mock_starred_response(count: usize) -> serde_json::Value {
    let repos: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("repo-{}", i),
                "full_name": format!("someone/repo-{}", i),
            })
        })
        .collect();
    serde_json::Value::Array(repos)
}
