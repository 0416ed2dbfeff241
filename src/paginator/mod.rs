//! Paged "books" of embed pages: slot bookkeeping, navigation and the index dialog.
//!
//! Nothing in here talks to Discord. `bot::helpers::pagination` turns books into
//! messages and buttons.

pub mod book;
pub mod error;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod store;

pub use book::{Book, BookOptions};
pub use error::PaginatorError;
pub use modal::EnterIndexModal;
pub use navigation::{Action, Controls};
pub use page::{Page, PageAuthor};
pub use store::BookStore;
