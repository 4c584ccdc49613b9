use anyhow::Result;
use httpmock::prelude::*;
use std::fs;
use std::path::Path;
use syoboi_sorting::core::ConfigProvider;
use syoboi_sorting::{
    user_agent, JsonConfig, LocalStorage, SortEngine, SortError, SortPipeline, SortReport,
    SyoboiClient,
};
use tempfile::TempDir;

fn mock_titles(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/json.php")
            .query_param("Req", "TitleMedium");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "Titles": {
                    "1234": {"TID": "1234", "Title": "TitleA"},
                    "5678": {"TID": "5678", "Title": "TitleB"}
                }
            }));
    })
}

async fn run_sort(server: &MockServer, root: &Path, dry_run: bool) -> syoboi_sorting::Result<SortReport> {
    let client = SyoboiClient::new(server.url("/json.php?Req=TitleMedium"), user_agent());
    let pipeline = SortPipeline::new(client, LocalStorage::new(root)).with_dry_run(dry_run);
    SortEngine::new(pipeline).run().await
}

fn touch(root: &Path, name: &str) {
    fs::write(root.join(name), name.as_bytes()).unwrap();
}

#[tokio::test]
async fn test_end_to_end_moves_matching_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "-[XY]TitleA #01.mkv");
    touch(root, "randomfile.txt");

    let server = MockServer::start();
    let api_mock = mock_titles(&server);

    let report = run_sort(&server, root, false).await.unwrap();

    api_mock.assert();
    assert_eq!(report.catalog_size, 2);
    assert_eq!(report.listed, 2);
    assert_eq!(report.moved(), 1);
    assert_eq!(report.failed(), 0);

    let moved = root.join("1234 TitleA").join("-[XY]TitleA #01.mkv");
    assert!(root.join("1234 TitleA").is_dir());
    assert_eq!(fs::read(&moved).unwrap(), b"-[XY]TitleA #01.mkv");
    assert!(!root.join("-[XY]TitleA #01.mkv").exists());
    assert!(root.join("randomfile.txt").exists());
    assert!(!root.join("5678 TitleB").exists());
}

#[tokio::test]
async fn test_end_to_end_unmatched_files_stay() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "randomfile.txt");
    touch(root, "TitleA 01.mkv");

    let server = MockServer::start();
    mock_titles(&server);

    let report = run_sort(&server, root, false).await.unwrap();

    assert!(report.outcomes.is_empty());
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["TitleA 01.mkv", "randomfile.txt"]);
}

#[tokio::test]
async fn test_end_to_end_reuses_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("5678 TitleB")).unwrap();
    touch(&root.join("5678 TitleB"), "-TitleB #01.mkv");
    touch(root, "-[新][字]TitleB #02.mkv");

    let server = MockServer::start();
    mock_titles(&server);

    let report = run_sort(&server, root, false).await.unwrap();

    assert_eq!(report.moved(), 1);
    assert!(report.directory_failures.is_empty());
    assert!(root.join("5678 TitleB/-TitleB #01.mkv").exists());
    assert!(root.join("5678 TitleB/-[新][字]TitleB #02.mkv").exists());
}

#[tokio::test]
async fn test_second_run_is_a_no_op() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, "-[XY]TitleA #01.mkv");
    touch(root, "-TitleB #03.mkv");

    let server = MockServer::start();
    let api_mock = mock_titles(&server);

    let first = run_sort(&server, root, false).await?;
    let second = run_sort(&server, root, false).await?;

    api_mock.assert_hits(2);
    assert_eq!(first.moved(), 2);
    // Only the two program directories remain at the root.
    assert_eq!(second.listed, 2);
    assert!(second.outcomes.is_empty());
    assert!(second.directory_failures.is_empty());
    assert!(root.join("1234 TitleA/-[XY]TitleA #01.mkv").exists());
    assert!(root.join("5678 TitleB/-TitleB #03.mkv").exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_leaves_tree_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "-[XY]TitleA #01.mkv");

    let server = MockServer::start();
    mock_titles(&server);

    let report = run_sort(&server, root, true).await.unwrap();

    assert_eq!(report.planned(), 1);
    assert_eq!(report.moved(), 0);
    assert!(root.join("-[XY]TitleA #01.mkv").exists());
    assert!(!root.join("1234 TitleA").exists());
}

#[tokio::test]
async fn test_fetch_failure_moves_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "-[XY]TitleA #01.mkv");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/json.php");
        then.status(503);
    });

    let err = run_sort(&server, root, false).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, SortError::UnexpectedStatus { code: 503 }));
    assert_eq!(err.exit_code(), 2);
    assert!(root.join("-[XY]TitleA #01.mkv").exists());
}

/// An unreadable root aborts the sort but the run still reports success;
/// only `listing_error` tells the two apart.
#[tokio::test]
async fn test_unreadable_root_aborts_silently() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("not-mounted");

    let server = MockServer::start();
    mock_titles(&server);

    let report = run_sort(&server, &root, false).await.unwrap();

    assert!(report.listing_error.is_some());
    assert_eq!(report.listed, 0);
    assert!(report.outcomes.is_empty());
    assert!(!root.exists());
}

#[tokio::test]
async fn test_root_dir_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let media = temp_dir.path().join("media");
    fs::create_dir(&media)?;
    touch(&media, "-[XY]TitleA #01.mkv");

    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({ "rootDir": media.display().to_string() }).to_string(),
    )?;

    let config = JsonConfig::from_file(&config_path)?;
    assert_eq!(config.root_dir(), media.display().to_string());

    let server = MockServer::start();
    mock_titles(&server);

    let report = run_sort(&server, Path::new(config.root_dir()), false).await?;

    assert_eq!(report.moved(), 1);
    assert!(media.join("1234 TitleA/-[XY]TitleA #01.mkv").exists());
    Ok(())
}
