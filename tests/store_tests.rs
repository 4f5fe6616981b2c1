use job_aggregator::{AggError, LocalStorage, Vacancy, VacancyStore};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> VacancyStore<LocalStorage> {
    VacancyStore::new(LocalStorage::new(
        dir.path().to_str().unwrap().to_string(),
    ))
}

fn vacancy(id: &str, salary_from: Option<u64>) -> Vacancy {
    Vacancy {
        id: id.to_string(),
        title: format!("Vacancy {id}"),
        url: format!("https://example.com/vacancy/{id}"),
        salary_from,
        salary_to: None,
        employer: "Acme".to_string(),
        source: "HeadHunter".to_string(),
    }
}

#[tokio::test]
async fn insert_then_select_round_trips_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![vacancy("1", None), vacancy("2", Some(100)), vacancy("3", Some(50))];
    store.insert("python", &records).await.unwrap();

    let loaded = store.select("python").await.unwrap();
    assert_eq!(loaded, records);
}

#[tokio::test]
async fn keyword_casings_share_one_stored_set() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.insert("Python", &[vacancy("1", None)]).await.unwrap();
    let loaded = store.select("PYTHON").await.unwrap();
    assert_eq!(loaded.len(), 1);

    // One file on disk, named by the folded key.
    assert!(dir.path().join("python.json").exists());
}

#[tokio::test]
async fn insert_replaces_the_previous_set_entirely() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .insert("rust", &[vacancy("1", None), vacancy("2", None)])
        .await
        .unwrap();
    store.insert("rust", &[vacancy("9", Some(70))]).await.unwrap();

    let loaded = store.select("rust").await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "9");
}

#[tokio::test]
async fn select_unknown_keyword_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let err = store.select("golang").await.unwrap_err();
    assert!(matches!(err, AggError::NotFound { .. }));
}

#[tokio::test]
async fn sorted_views_put_unknown_minimum_last_in_both_directions() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![vacancy("1", None), vacancy("2", Some(100)), vacancy("3", Some(50))];
    store.insert("python", &records).await.unwrap();

    let asc = store.sorted_by_salary_asc("python").await.unwrap();
    let asc_ids: Vec<&str> = asc.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(asc_ids, ["3", "2", "1"]);

    let desc = store.sorted_by_salary_desc("python").await.unwrap();
    let desc_ids: Vec<&str> = desc.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(desc_ids, ["2", "3", "1"]);
}

#[tokio::test]
async fn sorted_views_are_stable_for_equal_minimums() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![
        vacancy("a", Some(80)),
        vacancy("b", Some(80)),
        vacancy("c", None),
        vacancy("d", None),
    ];
    store.insert("java", &records).await.unwrap();

    let asc = store.sorted_by_salary_asc("java").await.unwrap();
    let ids: Vec<&str> = asc.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);

    let desc = store.sorted_by_salary_desc("java").await.unwrap();
    let ids: Vec<&str> = desc.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn delete_at_removes_exactly_one_position_in_disk_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = vec![vacancy("1", None), vacancy("2", Some(100)), vacancy("3", Some(50))];
    store.insert("python", &records).await.unwrap();

    store.delete_at("python", 0).await.unwrap();
    let loaded = store.select("python").await.unwrap();
    let ids: Vec<&str> = loaded.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["2", "3"]);
}

#[tokio::test]
async fn delete_at_rejects_out_of_range_positions() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.insert("python", &[vacancy("1", None)]).await.unwrap();
    let err = store.delete_at("python", 1).await.unwrap_err();
    assert!(matches!(err, AggError::IndexOutOfRange { index: 1, len: 1 }));

    // The stored set is untouched after a failed delete.
    assert_eq!(store.select("python").await.unwrap().len(), 1);
}

#[tokio::test]
async fn stored_file_is_readable_json_with_non_ascii_preserved() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut record = vacancy("1", Some(90_000));
    record.title = "Разработчик Rust".to_string();
    store.insert("rust", &[record]).await.unwrap();

    let text = std::fs::read_to_string(dir.path().join("rust.json")).unwrap();
    assert!(text.contains("Разработчик Rust"));
    assert!(text.contains("\"api\": \"HeadHunter\""));
    // Pretty-printed, one field per line.
    assert!(text.lines().count() > 5);
}
