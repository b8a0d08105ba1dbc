use hh_harvest::{
    export, FileProgressStore, FilterPolicy, Harvester, HhClient, ProgressStore, ResumeCursor,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn relevant_item(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "snippet": {"requirement": "Python, Flask", "responsibility": "Разработка сервисов"},
        "employer": {"name": "Acme"},
        "area": {"name": "Москва"},
        "experience": {"id": "between1And3"},
        "salary": {"from": 150000, "to": 180000, "currency": "RUR"},
        "alternate_url": "https://hh.ru/vacancy/100"
    })
}

fn irrelevant_item() -> serde_json::Value {
    serde_json::json!({
        "name": "Java Developer",
        "employer": {"name": "Acme"},
        "experience": {"id": "between1And3"},
        "salary": {"from": 150000, "currency": "RUR"},
        "alternate_url": "https://hh.ru/vacancy/101"
    })
}

fn harvester(
    server: &MockServer,
    progress_path: std::path::PathBuf,
) -> Harvester<HhClient, FileProgressStore> {
    Harvester::new(
        HhClient::new(server.base_url()),
        FileProgressStore::new(progress_path),
        FilterPolicy::default(),
        "python",
    )
    .with_per_page(100)
    .with_page_delay(Duration::ZERO)
}

#[tokio::test]
async fn single_region_end_to_end_with_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let page0 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [relevant_item("Python Developer"), irrelevant_item()]
            }));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": []}));
    });

    let harvester = harvester(&server, temp_dir.path().join("progress.json"));
    let rows = harvester.run_single("113").await.unwrap();

    page0.assert();
    page1.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Python Developer");
    assert_eq!(rows[0].salary_from, Some(150_000));

    let csv_path = temp_dir.path().join("vacancies.csv");
    export::save_to_csv(&rows, &csv_path).unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content
        .starts_with("name,employer,area,experience,salary_from,salary_to,salary_currency,url"));
    assert!(content.contains("Python Developer"));
}

#[tokio::test]
async fn transport_failure_leaves_resumable_cursor() {
    let temp_dir = TempDir::new().unwrap();
    let progress_path = temp_dir.path().join("progress.json");
    let server = MockServer::start();

    let page0 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": [relevant_item("Python Developer")]}));
    });
    let mut broken_page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(500);
    });

    let first_run = harvester(&server, progress_path.clone());
    assert!(first_run.run_single("113").await.is_err());

    page0.assert();
    broken_page1.assert();

    // The crash point is recorded: page 0 is done, page 1 is still owed.
    let store = FileProgressStore::new(progress_path.clone());
    assert_eq!(store.load().unwrap(), ResumeCursor { region: 0, page: 1 });

    // Next run resumes at page 1 and never refetches page 0.
    broken_page1.delete();
    let fixed_page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": []}));
    });

    let second_run = harvester(&server, progress_path);
    let rows = second_run.run_single("113").await.unwrap();

    fixed_page1.assert();
    page0.assert_hits(1);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn multi_region_run_skips_forbidden_region() {
    let temp_dir = TempDir::new().unwrap();
    let progress_path = temp_dir.path().join("progress.json");
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/areas/113");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "113",
                "name": "Россия",
                "areas": [
                    {"id": "1", "name": "Москва", "areas": []},
                    {"id": "2", "name": "Санкт-Петербург", "areas": []}
                ]
            }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("area", "1")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": [relevant_item("Python Developer")]}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("area", "1")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": []}));
    });
    let forbidden = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("area", "2");
        then.status(403);
    });

    let harvester = harvester(&server, progress_path.clone());
    let rows = harvester.run_tree("113").await.unwrap();

    forbidden.assert();
    assert_eq!(rows.len(), 1);

    // Both regions count as completed, forbidden one included.
    let store = FileProgressStore::new(progress_path);
    assert_eq!(store.load().unwrap(), ResumeCursor { region: 2, page: 0 });
}

#[tokio::test]
async fn page_limit_ends_region_without_error() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"items": [relevant_item("Python Developer")]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(400);
    });

    let harvester = harvester(&server, temp_dir.path().join("progress.json"));
    let rows = harvester.run_single("113").await.unwrap();

    assert_eq!(rows.len(), 1);
}
