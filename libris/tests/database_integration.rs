//! Integration tests for the database layer.
//!
//! These tests exercise the durable store directly: auto-creation, the
//! borrow relation's integrity rules, and concurrent writers sharing a file.

use std::thread;
use std::time::Duration;

use rusqlite::Connection;
use tempfile::tempdir;

use libris::database::{Database, DatabaseConfig, StoreLocation};
use libris::{Book, Error};

fn book(title: &str) -> Book {
    Book::new(title, "Author", None).unwrap()
}

#[test]
fn test_database_auto_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("subdir").join("catalog.db");

    assert!(!db_path.parent().unwrap().exists());

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert!(db_path.exists());
    assert_eq!(db.location(), &StoreLocation::File(db_path.clone()));
}

#[test]
fn test_in_memory_stores_are_private() {
    let mut first = Database::open(DatabaseConfig::in_memory()).unwrap();
    let second = Database::open(DatabaseConfig::in_memory()).unwrap();

    first.insert_book(&book("Dune")).unwrap();
    assert_eq!(Database::list_books(first.connection()).unwrap().len(), 1);
    assert!(Database::list_books(second.connection()).unwrap().is_empty());
}

#[test]
fn test_borrow_rows_require_existing_book() {
    let db = Database::open(DatabaseConfig::in_memory()).unwrap();
    db.connection()
        .execute("INSERT INTO users (username) VALUES ('alice')", [])
        .unwrap();

    let result = db.connection().execute(
        "INSERT INTO borrowed (username, book_title) VALUES ('alice', 'Ghost')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn test_external_writes_visible_to_reads() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("catalog.db");
    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute(
            "INSERT INTO books (title, author, category) VALUES ('Dune', 'Frank Herbert', 'Sci-Fi')",
            [],
        )
        .unwrap();
    }

    let found = Database::get_book(db.connection(), "DUNE").unwrap().unwrap();
    assert_eq!(found.category(), Some("Sci-Fi"));
    assert!(found.is_available());
}

#[test]
fn test_concurrent_writers() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("concurrent.db");
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let path = db_path.clone();
            thread::spawn(move || {
                let config =
                    DatabaseConfig::new(&path).with_busy_timeout(Duration::from_secs(10));
                let mut db = Database::open(config).unwrap();
                for j in 0..10 {
                    db.insert_book(&book(&format!("Book {i}-{j}"))).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(Database::list_books(db.connection()).unwrap().len(), 40);
}

#[test]
fn test_concurrent_duplicate_inserts_keep_one_row() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("race.db");
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let path = db_path.clone();
            thread::spawn(move || {
                let config =
                    DatabaseConfig::new(&path).with_busy_timeout(Duration::from_secs(10));
                let mut db = Database::open(config).unwrap();
                let title = if i % 2 == 0 { "Same Title" } else { "SAME TITLE" };
                db.insert_book(&book(title))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, Error::DuplicateBook { .. })));

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(Database::list_books(db.connection()).unwrap().len(), 1);
}
