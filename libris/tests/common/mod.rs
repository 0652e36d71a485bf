//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! libris library.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;

use libris::events::{CatalogEvent, EventSink, NullSink, Operation, Outcome};
use libris::{Catalog, DatabaseConfig};

/// A sink that keeps every event it receives.
///
/// Clones share the same buffer, so one copy can be handed to a catalog
/// while the test inspects the other.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<CatalogEvent>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CatalogEvent> {
        self.events.borrow().clone()
    }

    /// Events for one operation, as outcomes in order.
    pub fn outcomes(&self, operation: Operation) -> Vec<Outcome> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.operation == operation)
            .map(|e| e.outcome)
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &CatalogEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// A catalog file in a temporary directory.
#[allow(dead_code)]
pub struct TempCatalog {
    pub dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TempCatalog {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        Self { dir, path }
    }

    pub fn open(&self) -> Catalog {
        Catalog::open(DatabaseConfig::new(&self.path), NullSink).unwrap()
    }

    pub fn open_with(&self, sink: impl EventSink + 'static) -> Catalog {
        Catalog::open(DatabaseConfig::new(&self.path), sink).unwrap()
    }
}

/// Opens an in-memory catalog with the given users registered.
#[allow(dead_code)]
pub fn catalog_with_users(users: &[&str]) -> Catalog {
    let mut catalog = Catalog::in_memory(NullSink).unwrap();
    for user in users {
        catalog.add_user(user).unwrap();
    }
    catalog
}
