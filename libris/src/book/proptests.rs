//! Property-based tests for `Book` validation.

use super::{title_key, Book, MAX_FIELD_LEN};
use proptest::prelude::*;

// Non-blank text within the length limit
fn field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,!?'-]{0,60}"
}

fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn valid_fields_always_accepted(title in field_strategy(), author in field_strategy(), category in prop::option::of(field_strategy())) {
        let book = Book::new(title.clone(), author.clone(), category.as_deref()).unwrap();
        prop_assert_eq!(book.title(), title.as_str());
        prop_assert_eq!(book.author(), author.as_str());
        prop_assert_eq!(book.category(), category.as_deref());
        prop_assert!(book.is_available());
    }

    #[test]
    fn blank_title_always_rejected(title in blank_strategy(), author in field_strategy()) {
        let err = Book::new(title, author, None).unwrap_err();
        prop_assert_eq!(err.field, "title");
    }

    #[test]
    fn blank_category_always_rejected(title in field_strategy(), author in field_strategy(), category in blank_strategy()) {
        let err = Book::new(title, author, Some(category.as_str())).unwrap_err();
        prop_assert_eq!(err.field, "category");
    }

    #[test]
    fn oversized_author_always_rejected(title in field_strategy(), extra in 1usize..50) {
        let author = "x".repeat(MAX_FIELD_LEN + extra);
        let err = Book::new(title, author, None).unwrap_err();
        prop_assert_eq!(err.field, "author");
    }

    #[test]
    fn key_is_case_insensitive(title in field_strategy()) {
        prop_assert_eq!(title_key(&title.to_uppercase()), title_key(&title.to_lowercase()));
        let book = Book::new(title.clone(), "Author", None).unwrap();
        prop_assert!(book.has_title(&title.to_uppercase()));
    }
}
