use lql::display::format_rating;
use lql::index::DisplayCategory;
use lql::model::{Entry, Note};
use lql::paths::{ensure_directory, StoragePaths};
use lql::store::fs::FileStore;
use lql::store::lister;
use lql::store::sequence::next_sequence;
use lql::store::NoteStore;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let home = TempDir::new().unwrap();
    let store = FileStore::new(StoragePaths::new(home.path()));
    (home, store)
}

fn entry(category: &str, age: u32, rating: f64) -> Entry {
    Entry {
        category: category.to_string(),
        name: Some(format!("{} {}", category, age)),
        bottler: "Cadenhead".to_string(),
        age,
        vintage: 1995,
        bottled: 1995 + age as i32,
        rating,
    }
}

fn summary(index: usize, name: &str, review_count: usize) -> DisplayCategory {
    DisplayCategory {
        index,
        name: name.to_string(),
        review_count,
    }
}

#[test]
fn sequential_writes_number_from_zero_and_read_back() {
    let (_home, mut store) = setup();
    let written: Vec<Entry> = (0..5)
        .map(|i| entry("Springbank", 10 + i, 7.0 + f64::from(i) / 4.0))
        .collect();

    for (i, e) in written.iter().enumerate() {
        let note = store.save_entry(e).unwrap();
        assert_eq!(note.sequence, i as u64);
    }

    let read = store.list_notes("Springbank").unwrap();
    let expected: Vec<Note> = written
        .iter()
        .enumerate()
        .map(|(i, e)| Note::from_entry(i as u64, e))
        .collect();
    assert_eq!(read, expected);
}

#[test]
fn writes_never_share_a_file_name() {
    let (home, mut store) = setup();
    store.save_entry(&entry("Ardbeg", 10, 8.0)).unwrap();
    store.save_entry(&entry("Ardbeg", 10, 8.0)).unwrap();

    let dir = home.path().join(".lql").join("Ardbeg");
    let names: HashSet<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, HashSet::from(["0".to_string(), "1".to_string()]));
}

#[test]
fn ensure_directory_twice_is_harmless() {
    let (home, _store) = setup();
    let root = StoragePaths::new(home.path()).root_path();

    ensure_directory(&root).unwrap();
    ensure_directory(&root).unwrap();
    assert!(root.is_dir());
}

#[test]
fn category_indexes_and_counts() {
    let (_home, mut store) = setup();
    let paths = store.paths().clone();
    paths.ensure_category("Ardbeg").unwrap();
    paths.ensure_category("Balvenie").unwrap();

    assert_eq!(
        store.list_categories().unwrap(),
        vec![summary(1, "Ardbeg", 0), summary(2, "Balvenie", 0)]
    );

    store.save_entry(&entry("Ardbeg", 10, 8.0)).unwrap();
    store.save_entry(&entry("Ardbeg", 17, 9.0)).unwrap();

    assert_eq!(
        store.list_categories().unwrap(),
        vec![summary(1, "Ardbeg", 2), summary(2, "Balvenie", 0)]
    );
}

#[test]
fn lookup_ignores_stray_files_at_root() {
    let (home, store) = setup();
    let paths = store.paths().clone();
    paths.ensure_category("Ardbeg").unwrap();
    paths.ensure_category("Balvenie").unwrap();
    fs::write(home.path().join(".lql").join("ARCHIVE.txt"), "").unwrap();
    fs::write(home.path().join(".lql").join("config.json"), "{}").unwrap();

    assert_eq!(store.category_by_index(1).unwrap().as_deref(), Some("Ardbeg"));
    assert_eq!(
        store.category_by_index(2).unwrap().as_deref(),
        Some("Balvenie")
    );

    let listed = store.list_categories().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Ardbeg");
}

#[test]
fn next_sequence_ignores_clutter() {
    let (_home, store) = setup();
    let dir = store.paths().ensure_category("Bowmore").unwrap();
    assert_eq!(next_sequence(&dir), 0);

    fs::write(dir.join("0"), "Bowmore\n12\n7.000000\n").unwrap();
    fs::write(dir.join("README"), "").unwrap();
    fs::create_dir(dir.join("drafts")).unwrap();
    assert_eq!(next_sequence(&dir), 1);
}

#[test]
fn legacy_files_still_list() {
    let (_home, mut store) = setup();
    let dir = store.paths().ensure_category("Talisker").unwrap();
    fs::write(dir.join("0"), "Talisker\n10\n8.000000\n").unwrap();

    let saved = store.save_entry(&entry("Talisker", 18, 9.0)).unwrap();
    assert_eq!(saved.sequence, 1);

    let notes = lister::list_notes(&dir).unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].bottler, None);
    assert_eq!(notes[0].rating, Some(8.0));
    assert_eq!(notes[1].bottler.as_deref(), Some("Cadenhead"));
}

#[test]
fn missing_store_lists_nothing() {
    let (_home, store) = setup();
    assert!(store.list_categories().unwrap().is_empty());
    assert!(store.list_notes("Nowhere").unwrap().is_empty());
    assert_eq!(store.category_by_index(1).unwrap(), None);
}

#[test]
fn rating_precision_follows_scale() {
    assert_eq!(format_rating(8.5, 10.0), "rated 8.5");
    assert_eq!(format_rating(85.0, 100.0), "rated 85");
}
