mod book_session;
mod command_registry;
mod component_router;
mod event_handler;
mod handler;

pub mod helpers;
pub mod init;

pub use book_session::open as open_book;
// Re-export Handler for convenience
pub use handler::Handler;
