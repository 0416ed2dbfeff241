#[cfg(test)]
pub mod tests {
    use crate::paginator::{
        Action, Book, BookOptions, BookStore, EnterIndexModal, Page, PaginatorError,
    };

    // Helper function to create a titled page in a given slot
    fn make_page(index: i64) -> Page {
        Page::indexed(index)
            .unwrap()
            .title(format!("page {index}"))
    }

    fn slots(book: &Book) -> Vec<usize> {
        book.pages().iter().filter_map(Page::index).collect()
    }

    // Group 1: Construction and normalization
    mod construction_tests {
        use super::*;

        #[test]
        fn test_unique_indexes_come_out_sorted() {
            let pages = [9, 2, 14, 0, 3, 7].into_iter().map(make_page).collect();
            let book = Book::new(pages, BookOptions::default()).unwrap();
            assert_eq!(slots(&book), vec![0, 2, 3, 7, 9, 14]);
        }

        #[test]
        fn test_duplicate_fails_regardless_of_size() {
            for extra in [0, 1, 10, 50] {
                let mut pages: Vec<Page> = (100..100 + extra).map(make_page).collect();
                pages.push(make_page(3));
                pages.push(Page::new());
                pages.push(make_page(3));
                let result = Book::new(pages, BookOptions::default());
                assert!(
                    matches!(result, Err(PaginatorError::DuplicateIndex(3))),
                    "expected duplicate error with {extra} extra pages"
                );
            }
        }

        #[test]
        fn test_one_indexed_page_and_many_unindexed() {
            let mut pages = vec![Page::new(), Page::new(), make_page(2), Page::new(), Page::new()];
            pages.push(Page::new());
            let book = Book::new(pages, BookOptions::default()).unwrap();

            let mut assigned = slots(&book);
            assert_eq!(assigned.len(), 6);
            assigned.dedup();
            assert_eq!(assigned.len(), 6);
            assert_eq!(slots(&book), vec![0, 1, 2, 3, 4, 5]);
            assert_eq!(book.pages()[2].title.as_deref(), Some("page 2"));
        }

        #[test]
        fn test_far_slot_stays_reachable() {
            let mut pages: Vec<Page> = (0..20).map(make_page).collect();
            pages.push(make_page(45));
            let mut book = Book::new(pages, BookOptions::default()).unwrap();

            assert_eq!(book.page_count(), 21);
            assert_eq!(book.pages()[20].index(), Some(45));

            book.apply(Action::Last).unwrap();
            assert_eq!(book.current_page().title.as_deref(), Some("page 45"));

            let mut modal_book = book.clone();
            EnterIndexModal::new(1).submit(&mut modal_book, "21").unwrap();
            assert_eq!(modal_book.current_page().index(), Some(45));
        }

        #[test]
        fn test_far_slot_with_contiguous_renumbering() {
            let mut pages: Vec<Page> = (0..20).map(make_page).collect();
            pages.push(make_page(45));
            let book = Book::new(pages, BookOptions::default().contiguous(true)).unwrap();
            assert_eq!(slots(&book), (0..21).collect::<Vec<_>>());
            assert_eq!(book.pages()[20].title.as_deref(), Some("page 45"));
        }
    }

    // Group 2: Navigation through a book
    mod navigation_tests {
        use super::*;

        fn five_pages() -> Book {
            Book::new((0..5).map(make_page).collect(), BookOptions::default()).unwrap()
        }

        #[test]
        fn test_first_from_anywhere() {
            for start in 0..5 {
                let mut book = five_pages();
                book.jump(start).unwrap();
                book.apply(Action::First).unwrap();
                let controls = book.controls().unwrap();
                assert_eq!(book.position(), 0);
                assert!(controls.first.disabled && controls.previous.disabled);
            }
        }

        #[test]
        fn test_last_from_anywhere() {
            for start in 0..5 {
                let mut book = five_pages();
                book.jump(start).unwrap();
                book.apply(Action::Last).unwrap();
                let controls = book.controls().unwrap();
                assert_eq!(book.position(), 4);
                assert!(controls.next.disabled && controls.last.disabled);
            }
        }

        #[test]
        fn test_walk_and_go_back() {
            let mut book = five_pages();
            book.apply(Action::Next).unwrap();
            book.apply(Action::Next).unwrap();
            book.apply(Action::Last).unwrap();
            assert_eq!(book.position(), 4);

            book.apply(Action::GoBack).unwrap();
            assert_eq!(book.position(), 2);
            assert!(book.controls().unwrap().go_back.disabled);
            assert_eq!(book.controls().unwrap().counter.label, "3/5");
        }

        #[test]
        fn test_counter_and_index_buttons_do_not_move() {
            let mut book = five_pages();
            book.jump(1).unwrap();
            book.apply(Action::Counter).unwrap();
            book.apply(Action::EnterIndex).unwrap();
            assert_eq!(book.position(), 1);
        }
    }

    // Group 3: Index dialog
    mod modal_tests {
        use super::*;

        #[test]
        fn test_modal_inputs() {
            let mut book =
                Book::new((0..3).map(make_page).collect(), BookOptions::default()).unwrap();
            let modal = EnterIndexModal::new(10);

            assert!(matches!(
                modal.submit(&mut book, "0"),
                Err(PaginatorError::OutOfRangeInput { .. })
            ));
            assert!(matches!(
                modal.submit(&mut book, "abc"),
                Err(PaginatorError::NonNumericInput(_))
            ));
            assert_eq!(book.position(), 0);

            modal.submit(&mut book, "3").unwrap();
            assert_eq!(book.position(), 2);
        }

        #[test]
        fn test_modal_error_messages() {
            assert_eq!(
                EnterIndexModal::parse("abc", 3).unwrap_err().to_string(),
                "The entered index is not a numeric value."
            );
            assert_eq!(
                EnterIndexModal::parse("9", 3).unwrap_err().to_string(),
                "The entered index is not a valid page."
            );
        }
    }

    // Group 4: Combining pages and books
    mod combination_tests {
        use super::*;

        #[test]
        fn test_page_plus_page() {
            assert!(matches!(
                make_page(1) + make_page(1),
                Err(PaginatorError::DuplicateIndex(1))
            ));

            let book = (make_page(8) + make_page(3)).unwrap();
            assert_eq!(slots(&book), vec![3, 8]);
        }

        #[test]
        fn test_unindexed_pages_combine_through_autoindex() {
            let book = (Page::new().title("a") + Page::new().title("b")).unwrap();
            assert_eq!(slots(&book), vec![0, 1]);
            assert_eq!(book.start().title.as_deref(), Some("a"));
        }

        #[test]
        fn test_book_plus_pages() {
            let book = (make_page(0) + make_page(1)).unwrap();
            let book = (book + vec![Page::new(), make_page(7)]).unwrap();
            assert_eq!(slots(&book), vec![0, 1, 2, 7]);

            let err = (book + make_page(7)).unwrap_err();
            assert!(matches!(err, PaginatorError::DuplicateIndex(7)));
        }

        #[test]
        fn test_not_a_page_from_json() {
            let err = Page::many_from_json(r#"[{"title": "fine"}, "nope"]"#).unwrap_err();
            assert!(matches!(err, PaginatorError::NotAPage(_)));
            assert!(err.to_string().contains("string"));
        }
    }

    // Group 5: Access control and session lifecycle
    mod session_tests {
        use super::*;

        fn owned_book(owner: u64) -> Book {
            Book::new(
                (0..3).map(make_page).collect(),
                BookOptions::default().owner(owner),
            )
            .unwrap()
        }

        #[test]
        fn test_not_owner_message() {
            let err = owned_book(55).authorize(66).unwrap_err();
            assert_eq!(
                err.to_string(),
                "You can't use this paginator, it belongs to <@55>."
            );
        }

        #[tokio::test]
        async fn test_store_runs_actions_against_live_books() {
            let store = BookStore::new();
            store.insert(1, owned_book(55)).await;

            let position = store
                .with_book(1, |book| {
                    book.apply(Action::Next).unwrap();
                    book.position()
                })
                .await;
            assert_eq!(position, Some(1));
            assert_eq!(store.with_book(2, |book| book.position()).await, None);
        }

        #[tokio::test]
        async fn test_denied_user_leaves_book_untouched() {
            let store = BookStore::new();
            store.insert(1, owned_book(55)).await;

            let outcome = store
                .with_book(1, |book| -> Result<(), PaginatorError> {
                    book.authorize(66)?;
                    book.apply(Action::Last)
                })
                .await;
            assert!(matches!(outcome, Some(Err(PaginatorError::NotOwner(55)))));
            assert_eq!(store.with_book(1, |book| book.position()).await, Some(0));
        }

        #[tokio::test]
        async fn test_stop_removes_session() {
            let store = BookStore::new();
            store.insert(7, owned_book(55)).await;
            store.insert(8, owned_book(55)).await;

            let stopped = store.with_book(7, |book| book.stop()).await;
            assert!(matches!(stopped, Some(Ok(()))));
            assert!(!store.contains(7).await);
            assert!(store.contains(8).await);
            assert_eq!(store.len().await, 1);
        }

        #[tokio::test]
        async fn test_remove_returns_book() {
            let store = BookStore::new();
            store.insert(3, owned_book(1)).await;
            let book = store.remove(3).await.unwrap();
            assert_eq!(book.owner(), Some(1));
            assert!(store.remove(3).await.is_none());
        }
    }
}
