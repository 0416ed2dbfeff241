use thiserror::Error;

/// Everything that can go wrong while building, editing or navigating a [`Book`](super::Book).
#[derive(Debug, Error)]
pub enum PaginatorError {
    /// A page slot was negative or otherwise not representable.
    #[error("Index can't be lower than 0 (got {0})")]
    InvalidIndex(i64),
    /// Two pages of the same book claim the same slot.
    #[error("You must provide a unique index for every page! (index {0} is used twice)")]
    DuplicateIndex(usize),
    /// A page without a slot was added to a book that does not auto-index.
    #[error("Every page needs an index when auto-indexing is disabled")]
    MissingIndex,
    #[error("A book needs at least one page")]
    EmptyBook,
    /// Raised when something that is not a page description is offered as one.
    #[error("Invalid operation with a value of type '{0}', only pages can be added to a book")]
    NotAPage(String),
    /// Discord refuses embeds with more than 25 fields.
    #[error("A page can't have more than {} fields", super::page::MAX_FIELDS)]
    TooManyFields,
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Position {position} is outside of a book with {total} pages")]
    PositionOutOfRange { position: usize, total: usize },
    /// Index dialog input that is not an integer.
    #[error("The entered index is not a numeric value.")]
    NonNumericInput(String),
    /// Index dialog input outside of `1..=total`.
    #[error("The entered index is not a valid page.")]
    OutOfRangeInput { value: i64, total: usize },
    #[error("You can't use this paginator, it belongs to <@{0}>.")]
    NotOwner(u64),
    #[error("This paginator has already been stopped.")]
    Stopped,
    #[error("Invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaginatorError>;
