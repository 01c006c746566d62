#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a config pointing the CLI at `base_url` and returns its directory.
fn config_dir(base_url: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{base_url}\"\n"),
    )
    .unwrap();
    dir
}

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("popular"))
        .stdout(predicate::str::contains("upcoming"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_detail_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.args(["detail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.args(["search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_detail_empty_id_is_invalid_endpoint() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["detail", "--id", ""])
        .env_remove("MOVIES_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("movie id must not be empty"));
}

#[test]
fn test_poster_with_path() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["poster", "--path", "/6FfCtAuVAW8XJjZ7eWeLibRLWTw.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://image.tmdb.org/t/p/w500/6FfCtAuVAW8XJjZ7eWeLibRLWTw.jpg",
        ));
}

#[test]
fn test_poster_without_path_is_not_found() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .arg("poster")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not Found"));
}

#[test]
fn test_init_writes_config_once() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir").arg(dir.path()).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("https://api.themoviedb.org/3/"));

    let mut again = cargo_bin_cmd!("movies");
    again
        .arg("--dir")
        .arg(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[tokio::test]
async fn test_popular_against_mock_server() {
    // Arrange
    let mock_server = MockServer::start().await;
    let json_body = include_str!("../../../fixtures/movies/popular.json");

    Mock::given(method("GET"))
        .and(path("/3/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = config_dir(&format!("{}/3/", mock_server.uri()));

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .arg("popular")
        .env_remove("MOVIES_API_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune: Part Two"))
        .stdout(predicate::str::contains("Total: 2 movies"));
}

#[tokio::test]
async fn test_search_sends_api_key_from_env() {
    // Arrange
    let mock_server = MockServer::start().await;
    let json_body = include_str!("../../../fixtures/movies/search_star_wars.json");

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "star wars"))
        .and(query_param("api_key", "env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = config_dir(&format!("{}/3/", mock_server.uri()));

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["search", "--query", "star wars"])
        .env("MOVIES_API_KEY", "env-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Star Wars"));
}

#[tokio::test]
async fn test_non_200_fails_with_status() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let dir = config_dir(&format!("{}/3/", mock_server.uri()));

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("movies");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["videos", "--id", "11"])
        .env("MOVIES_API_KEY", "env-secret-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected HTTP status 401"))
        .stderr(predicate::str::contains("env-secret-key").not());
}
