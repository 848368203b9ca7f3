use orgtable::model::Record;
use orgtable::source::memory::MemSource;
use orgtable::store::fs_backend::{FsSnapshot, SNAPSHOT_FILE};
use orgtable::store::{DataOrigin, RecordStore, SnapshotBackend};
use std::fs;
use tempfile::TempDir;

fn records() -> Vec<Record> {
    vec![
        Record::new("Acme")
            .with_industries("software;ai")
            .with_valuation("1000000-2000000")
            .with_launch_year(2015),
        Record::new("Beta").with_amount("undisclosed"),
    ]
}

#[test]
fn test_missing_snapshot_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let backend = FsSnapshot::new(dir.path());
    assert!(backend.load_snapshot().unwrap().is_none());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let backend = FsSnapshot::new(dir.path());
    backend.save_snapshot(&records()).unwrap();

    let snapshot = backend.load_snapshot().unwrap().unwrap();
    assert_eq!(snapshot.records, records());
    assert_eq!(backend.path(), dir.path().join(SNAPSHOT_FILE));
}

#[test]
fn test_save_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsSnapshot::new(&nested);
    backend.save_snapshot(&records()).unwrap();
    assert!(nested.join(SNAPSHOT_FILE).exists());
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let dir = TempDir::new().unwrap();
    let backend = FsSnapshot::new(dir.path());
    backend.save_snapshot(&records()).unwrap();
    backend.save_snapshot(&records()[..1]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(backend.load_snapshot().unwrap().unwrap().records.len(), 1);
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SNAPSHOT_FILE), "{ not json").unwrap();
    let backend = FsSnapshot::new(dir.path());
    assert!(backend.load_snapshot().is_err());
}

#[test]
fn test_store_restores_from_previous_run() {
    let dir = TempDir::new().unwrap();

    let mut first = RecordStore::new(MemSource::new(records()), FsSnapshot::new(dir.path()));
    assert!(first.load().is_replaced());

    let offline = MemSource::default();
    offline.set_simulate_failure(Some(503));
    let mut second = RecordStore::new(offline, FsSnapshot::new(dir.path()));
    assert!(second.restore_snapshot());
    assert!(!second.load().is_replaced());

    assert_eq!(second.records(), records().as_slice());
    assert!(matches!(second.origin(), DataOrigin::Snapshot { .. }));
}

#[test]
fn test_store_ignores_corrupt_snapshot() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SNAPSHOT_FILE), "garbage").unwrap();

    let mut store = RecordStore::new(MemSource::new(records()), FsSnapshot::new(dir.path()));
    assert!(!store.restore_snapshot());
    assert!(store.records().is_empty());

    assert!(store.load().is_replaced());
    assert!(FsSnapshot::new(dir.path()).load_snapshot().is_ok());
}
