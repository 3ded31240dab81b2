use mynotesapp::model::Note;
use mynotesapp::store::backend::StorageBackend;
use mynotesapp::store::fs_backend::FsBackend;
use mynotesapp::store::note_store::NoteStore;
use mynotesapp::NotesError;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_load_without_file_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.load().unwrap(), None);
}

#[test]
fn test_fs_backend_save_and_load() {
    let (_dir, backend) = setup();
    let notes = vec![Note::new("A", "a"), Note::new("B", "")];

    backend.save(&notes).unwrap();
    assert_eq!(backend.load().unwrap(), Some(notes));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.save(&[Note::new("Atomic", "")]).unwrap();

    let expected_path = dir.path().join("notes.json");
    assert!(expected_path.exists());
    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert!(on_disk.contains("\"Atomic\""));

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("er");
    let backend = FsBackend::new(nested.clone()).with_file_name("store.json");

    backend.save(&[]).unwrap();
    assert!(nested.join("store.json").exists());
}

#[test]
fn test_fs_backend_corrupt_file_is_format_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("notes.json"), "{{{").unwrap();
    assert!(matches!(backend.load(), Err(NotesError::Format(_))));
}

#[test]
fn test_store_survives_reopen() {
    let (dir, backend) = setup();
    let mut store = NoteStore::open(backend);
    store.update_title("Shopping").unwrap();
    store.create().unwrap();
    drop(store);

    let reopened = NoteStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(
        reopened.notes(),
        &[Note::default(), Note::new("Shopping", "")]
    );
}

#[test]
fn test_store_with_corrupt_file_starts_fresh() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("notes.json"), "garbage").unwrap();

    let store = NoteStore::open(backend);
    assert_eq!(store.notes(), &[Note::default()]);
}
