use super::book::Book;
use super::error::{PaginatorError, Result};

pub const MODAL_TITLE: &str = "Go to by index";
pub const INPUT_ID: &str = "index";
pub const INPUT_LABEL: &str = "Enter a page index!";

/// The "go to page" dialog bound to one book session.
///
/// Users type 1-based page numbers; the book works with 0-based positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterIndexModal {
    session: u64,
}

impl EnterIndexModal {
    pub fn new(session: u64) -> Self {
        Self { session }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Turns the submitted text into a 0-based position within `total` pages.
    pub fn parse(input: &str, total: usize) -> Result<usize> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| PaginatorError::NonNumericInput(input.to_string()))?;

        if value < 1 || value > total as i64 {
            return Err(PaginatorError::OutOfRangeInput { value, total });
        }

        Ok((value - 1) as usize)
    }

    /// Validates the submission and moves `book` to the requested page.
    ///
    /// The book is left untouched when the input is rejected.
    pub fn submit(&self, book: &mut Book, input: &str) -> Result<()> {
        let position = Self::parse(input, book.page_count())?;
        book.jump(position)
    }
}
