use sampling_studio::sources::{ComposedSignalStore, SignalComponent};
use sampling_studio::storage::CompositionFile;
use tempfile::tempdir;

fn sample_store() -> ComposedSignalStore {
    let mut store = ComposedSignalStore::new();
    store.add(SignalComponent::new(1.0, 10.0, 0.0)).unwrap();
    store.add(SignalComponent::new(0.25, 3.5, 1.5)).unwrap();
    store
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let file = CompositionFile::new(dir.path().join("mix.json"));
    let store = sample_store();

    file.save(&store).await.unwrap();
    assert!(file.path().exists());
    assert!(!dir.path().join("mix.tmp").exists());

    let mut loaded = ComposedSignalStore::new();
    file.load_into(&mut loaded).await.unwrap();
    assert_eq!(loaded.snapshot(), store.snapshot());
}

#[tokio::test]
async fn test_load_accumulates() {
    let dir = tempdir().unwrap();
    let file = CompositionFile::new(dir.path().join("mix.json"));
    file.save(&sample_store()).await.unwrap();

    let mut store = ComposedSignalStore::new();
    store.add(SignalComponent::new(9.0, 9.0, 9.0)).unwrap();
    store.add(SignalComponent::new(8.0, 8.0, 8.0)).unwrap();
    store.add(SignalComponent::new(7.0, 7.0, 7.0)).unwrap();

    file.load_into(&mut store).await.unwrap();

    // Keys 0 and 1 come from the file, key 2 survives
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0), Some(&SignalComponent::new(1.0, 10.0, 0.0)));
    assert_eq!(store.get(2), Some(&SignalComponent::new(7.0, 7.0, 7.0)));
}

#[tokio::test]
async fn test_malformed_file_fails_whole_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(
        &path,
        r#"{"0": {"amplitude": 1.0, "frequency": 2.0, "phase": 0.0}, "1": {"amplitude": 1.0}}"#,
    )
    .await
    .unwrap();

    let mut store = ComposedSignalStore::new();
    let result = CompositionFile::new(&path).load_into(&mut store).await;
    assert!(result.is_err());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    let mut store = ComposedSignalStore::new();
    let result = CompositionFile::new(dir.path().join("absent.json"))
        .load_into(&mut store)
        .await;
    assert!(result.is_err());
}

#[test]
fn test_display_name() {
    let file = CompositionFile::new("/tmp/examples/chord.json");
    assert_eq!(file.display_name(), "chord.json");
}
