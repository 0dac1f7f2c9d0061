// ABOUTME: End-to-end tests running the githubfetch binary against a mocked GitHub API
// ABOUTME: Verifies exit codes, stdout layout, stderr diagnostics and config file handling

use mockito::{Server, ServerGuard};
use serde_json::json;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn mock_user(server: &mut ServerGuard, login: &str) -> Vec<mockito::Mock> {
    let profile = json!({
        "login": login,
        "avatar_url": format!("{}/avatars/{}.png", server.url(), login),
        "bio": null,
        "public_repos": 8,
        "followers": 21000,
        "following": 9,
        "location": null,
    });

    vec![
        server
            .mock("GET", format!("/users/{}", login).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(profile.to_string())
            .create(),
        server
            .mock("GET", format!("/users/{}/starred", login).as_str())
            .with_status(200)
            .with_body("[{}, {}]")
            .create(),
        server
            .mock("GET", format!("/avatars/{}.png", login).as_str())
            .with_status(404)
            .create(),
    ]
}

/// Run the binary in an isolated home and working directory
fn githubfetch(server: &ServerGuard, home: &Path, term: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_githubfetch"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GITHUBFETCH_API_URL", server.url())
        .env("TERM", term)
        .env("NO_COLOR", "1")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

#[test]
fn test_prints_profile_and_exits_zero() {
    let mut server = Server::new();
    let _mocks = mock_user(&mut server, "octocat");
    let home = TempDir::new().unwrap();

    let output = githubfetch(&server, home.path(), "dumb", &["octocat"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("octocat@github.com"));
    assert!(stdout.contains("------------------"));
    assert!(stdout.contains("N/A"));
    assert!(stdout.contains("Not Provided"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_unknown_user_exits_one_with_message() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/users/no-such-user-xyz")
        .with_status(404)
        .create();
    let home = TempDir::new().unwrap();

    let output = githubfetch(&server, home.path(), "dumb", &["no-such-user-xyz"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to get data for user 'no-such-user-xyz'."));
    assert!(stderr.contains("hint:"));
}

#[test]
fn test_kitty_terminal_with_missing_helper_still_succeeds() {
    let mut server = Server::new();
    let _mocks = mock_user(&mut server, "octocat");
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("githubfetch.toml"),
        "image_helper = \"/nonexistent/githubfetch-image-helper\"\n",
    )
    .unwrap();

    let output = githubfetch(&server, home.path(), "xterm-KITTY", &["octocat"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("octocat@github.com"));
}

#[test]
fn test_invalid_config_exits_one() {
    let server = Server::new();
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("githubfetch.toml"), "glyph_width = 99\n").unwrap();

    let output = githubfetch(&server, home.path(), "dumb", &["octocat"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("glyph_width"));
}

#[test]
fn test_explicit_config_path() {
    let mut server = Server::new();
    let _mocks = mock_user(&mut server, "octocat");
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "mode = \"glyph\"\ntimeout_secs = 5\n").unwrap();

    let output = githubfetch(
        &server,
        home.path(),
        "xterm-kitty",
        &["--config", config.to_str().unwrap(), "octocat"],
    );

    assert!(output.status.success());
}

#[test]
fn test_bad_arguments_exit_one() {
    let server = Server::new();
    let home = TempDir::new().unwrap();

    let output = githubfetch(&server, home.path(), "dumb", &["octocat", "--mode", "sixel"]);
    assert_eq!(output.status.code(), Some(1));

    let output = githubfetch(&server, home.path(), "dumb", &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_interrupt_during_image_helper_exits_130() {
    use std::os::unix::fs::PermissionsExt;
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let mut server = Server::new();
    let _profile = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(
            json!({
                "login": "octocat",
                "avatar_url": format!("{}/avatars/octocat.png", server.url()),
                "public_repos": 8,
                "followers": 21000,
                "following": 9,
            })
            .to_string(),
        )
        .create();
    let _starred = server
        .mock("GET", "/users/octocat/starred")
        .with_status(200)
        .with_body("[]")
        .create();
    let _avatar = server
        .mock("GET", "/avatars/octocat.png")
        .with_status(200)
        .with_body("image bytes")
        .create();

    let home = TempDir::new().unwrap();
    let marker = home.path().join("helper-started");
    let helper = home.path().join("helper.sh");
    std::fs::write(
        &helper,
        format!("#!/bin/sh\ntouch '{}'\nsleep 30\n", marker.display()),
    )
    .unwrap();
    std::fs::set_permissions(&helper, std::fs::Permissions::from_mode(0o755)).unwrap();
    std::fs::write(
        home.path().join("githubfetch.toml"),
        format!("image_helper = '{}'\n", helper.display()),
    )
    .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_githubfetch"))
        .arg("octocat")
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("GITHUBFETCH_API_URL", server.url())
        .env("TERM", "xterm-kitty")
        .env_remove("GITHUB_TOKEN")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary should start");

    let deadline = Instant::now() + Duration::from_secs(15);
    while !marker.exists() {
        assert!(Instant::now() < deadline, "image helper never started");
        std::thread::sleep(Duration::from_millis(50));
    }

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(130));
}
