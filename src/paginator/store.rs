use std::collections::HashMap;

use tokio::sync::Mutex;

use super::book::Book;

/// Live books, keyed by the id of the interaction that opened them.
///
/// Sessions never expire on their own. A book leaves the store when it is
/// stopped or explicitly removed.
#[derive(Debug, Default)]
pub struct BookStore {
    sessions: Mutex<HashMap<u64, Book>>,
}

#[allow(dead_code)]
impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: u64, book: Book) {
        self.sessions.lock().await.insert(session, book);
    }

    pub async fn remove(&self, session: u64) -> Option<Book> {
        self.sessions.lock().await.remove(&session)
    }

    pub async fn contains(&self, session: u64) -> bool {
        self.sessions.lock().await.contains_key(&session)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Runs `f` against a live book and returns its result, or `None` if the
    /// session does not exist. A book that ends up stopped is dropped from the store.
    ///
    /// The lock is held only for the duration of `f`, so `f` must not await.
    pub async fn with_book<T>(&self, session: u64, f: impl FnOnce(&mut Book) -> T) -> Option<T> {
        let mut sessions = self.sessions.lock().await;
        let book = sessions.get_mut(&session)?;
        let result = f(book);
        if book.is_stopped() {
            sessions.remove(&session);
            tracing::info!("[BOOK] Session {} stopped and removed", session);
        }
        Some(result)
    }
}
