//! Property-based tests for the catalog.
//!
//! These drive random operation sequences and check that the projection
//! never drifts from storage.

use proptest::prelude::*;

use super::Catalog;
use crate::book::Book;
use crate::events::NullSink;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Borrow(usize, usize),
    Return(usize, usize),
}

const TITLES: [&str; 4] = ["Dune", "Emma", "Ulysses", "Beloved"];
const USERS: [&str; 2] = ["u1", "u2"];

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..TITLES.len()).prop_map(Op::Add),
        (0..TITLES.len()).prop_map(Op::Remove),
        (0..USERS.len(), 0..TITLES.len()).prop_map(|(u, t)| Op::Borrow(u, t)),
        (0..USERS.len(), 0..TITLES.len()).prop_map(|(u, t)| Op::Return(u, t)),
    ]
}

// Title casing is randomized to exercise case-insensitive lookups
fn cased(title: &str, upper: bool) -> String {
    if upper {
        title.to_uppercase()
    } else {
        title.to_lowercase()
    }
}

fn apply(catalog: &mut Catalog, op: &Op, upper: bool) {
    // Failures are expected; only the resulting state matters
    let _ = match *op {
        Op::Add(t) => catalog.add_book(TITLES[t], "Author", None).map(|_| ()),
        // Removing a borrowed book leaves stale histories until a reload
        Op::Remove(t) => catalog
            .remove_book(&cased(TITLES[t], upper), true)
            .and_then(|_| catalog.reload()),
        Op::Borrow(u, t) => catalog
            .borrow_book(USERS[u], &cased(TITLES[t], upper))
            .map(|_| ()),
        Op::Return(u, t) => catalog
            .return_book(USERS[u], &cased(TITLES[t], upper))
            .map(|_| ()),
    };
}

fn snapshot(catalog: &Catalog) -> (Vec<Book>, Vec<(String, Vec<String>)>) {
    let users = catalog
        .users()
        .map(|u| (u.username().to_string(), u.borrowed_books().to_vec()))
        .collect();
    (catalog.books().to_vec(), users)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // A borrowed book is held by exactly one user, and an available book by none
    #[test]
    fn availability_matches_holders(
        ops in prop::collection::vec((op_strategy(), any::<bool>()), 0..40)
    ) {
        let mut catalog = Catalog::in_memory(NullSink).unwrap();
        for user in USERS {
            catalog.add_user(user).unwrap();
        }
        for (op, upper) in &ops {
            apply(&mut catalog, op, *upper);
        }
        catalog.reload().unwrap();

        for book in catalog.books() {
            let holders = catalog
                .users()
                .filter(|u| u.holds(book.title()))
                .count();
            prop_assert_eq!(holders, usize::from(!book.is_available()));
        }
    }

    // Reloading from storage never changes what the projection shows
    #[test]
    fn reload_matches_projection(
        ops in prop::collection::vec((op_strategy(), any::<bool>()), 0..40)
    ) {
        let mut catalog = Catalog::in_memory(NullSink).unwrap();
        for user in USERS {
            catalog.add_user(user).unwrap();
        }
        for (op, upper) in &ops {
            apply(&mut catalog, op, *upper);
        }

        let (books, users) = snapshot(&catalog);
        catalog.reload().unwrap();
        let (reloaded_books, reloaded_users) = snapshot(&catalog);
        prop_assert_eq!(books, reloaded_books);
        prop_assert_eq!(users, reloaded_users);
    }
}
